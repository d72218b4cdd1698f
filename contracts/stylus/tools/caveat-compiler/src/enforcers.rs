//! One check per caveat kind, applied to a single proposed call.

use alloy_primitives::{Address, U256};
use caveat_types::{
    selectors::{APPROVE_SELECTOR, EXACT_INPUT_SINGLE_SELECTOR},
    ArgValue, Caveat, NonEmptySet, ProposedCall, Selector, SwapShape,
};

use crate::verdict::{SwapField, Violation};

/// Amount argument names tried, in order, for selectors without a fixed one.
pub const AMOUNT_ARGUMENTS: [&str; 2] = ["amount", "amountIn"];

pub fn enforce(caveat: &Caveat, call: &ProposedCall) -> Result<(), Violation> {
    match caveat {
        Caveat::AllowedTargets { addresses } => check_target(call.target, addresses),
        Caveat::AllowedMethods { selectors } => check_method(call.selector, selectors),
        Caveat::ValueLimit { cap } => check_value(call, *cap),
        Caveat::SwapShape(shape) => check_swap_shape(call, shape),
    }
}

pub fn check_target(target: Address, allowed: &NonEmptySet<Address>) -> Result<(), Violation> {
    if allowed.contains(&target) {
        return Ok(());
    }
    Err(Violation::TargetNotAllowed { target })
}

pub fn check_method(selector: Selector, allowed: &NonEmptySet<Selector>) -> Result<(), Violation> {
    if allowed.contains(&selector) {
        return Ok(());
    }
    Err(Violation::SelectorNotAllowed { selector })
}

pub fn check_value(call: &ProposedCall, cap: U256) -> Result<(), Violation> {
    match amount_argument(call)? {
        Some(amount) if amount > cap => Err(Violation::AmountExceedsCap { amount, cap }),
        _ => Ok(()),
    }
}

/// Only `exactInputSingle` is constrained; other selectors pass.
pub fn check_swap_shape(call: &ProposedCall, shape: &SwapShape) -> Result<(), Violation> {
    if call.selector != EXACT_INPUT_SINGLE_SELECTOR {
        return Ok(());
    }
    for field in SwapField::ALL {
        let expected = expected_value(shape, field);
        let name = field.arg_name();
        let actual = *call
            .arg(name)
            .ok_or_else(|| Violation::MissingArgument { name: name.to_string() })?;
        if !same_type(&actual, &expected) {
            return Err(Violation::MalformedArgument { name: name.to_string() });
        }
        if actual != expected {
            return Err(Violation::SwapFieldMismatch { field, expected, actual });
        }
    }
    Ok(())
}

/// The amount a call moves, if it carries one.
///
/// `approve` must carry `amount` and `exactInputSingle` must carry `amountIn`.
/// Any other selector uses the first of [`AMOUNT_ARGUMENTS`] present and moves
/// nothing when neither is.
pub fn amount_argument(call: &ProposedCall) -> Result<Option<U256>, Violation> {
    let required = if call.selector == APPROVE_SELECTOR {
        Some("amount")
    } else if call.selector == EXACT_INPUT_SINGLE_SELECTOR {
        Some("amountIn")
    } else {
        None
    };

    let (name, value) = match required {
        Some(name) => match call.arg(name) {
            Some(value) => (name, value),
            None => return Err(Violation::MissingArgument { name: name.to_string() }),
        },
        None => match AMOUNT_ARGUMENTS
            .iter()
            .find_map(|name| call.arg(name).map(|value| (*name, value)))
        {
            Some(found) => found,
            None => return Ok(None),
        },
    };

    value
        .as_uint()
        .map(Some)
        .ok_or_else(|| Violation::MalformedArgument { name: name.to_string() })
}

fn expected_value(shape: &SwapShape, field: SwapField) -> ArgValue {
    match field {
        SwapField::TokenIn => ArgValue::Address(shape.token_in),
        SwapField::TokenOut => ArgValue::Address(shape.token_out),
        SwapField::Fee => ArgValue::Uint(U256::from(shape.fee_tier)),
        SwapField::Recipient => ArgValue::Address(shape.recipient),
    }
}

fn same_type(a: &ArgValue, b: &ArgValue) -> bool {
    matches!(
        (a, b),
        (ArgValue::Address(_), ArgValue::Address(_)) | (ArgValue::Uint(_), ArgValue::Uint(_))
    )
}
