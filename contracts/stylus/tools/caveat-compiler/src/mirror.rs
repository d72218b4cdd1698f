//! Mapping between off-chain caveats and the on-chain `ICaveatEnforcers`
//! entry points, plus decoding of their revert data.

use alloy_sol_types::{SolCall, SolError};
use caveat_types::{
    interfaces::{AmountExceedsCap, ICaveatEnforcers, SelectorNotAllowed, TargetNotAllowed},
    Caveat, Delegation, ProposedCall,
};

use crate::{enforcers::amount_argument, verdict::Violation};

/// Enforcer calldata that checks `caveat` against `call` on-chain.
///
/// `None` when the caveat has no on-chain counterpart (`SwapShape`) or the
/// call carries no amount for a `ValueLimit`.
pub fn enforcer_call(caveat: &Caveat, call: &ProposedCall) -> Result<Option<Vec<u8>>, Violation> {
    let data = match caveat {
        Caveat::AllowedTargets { addresses } => ICaveatEnforcers::checkTargetCall {
            target: call.target,
            allowed: addresses.to_vec(),
        }
        .abi_encode(),
        Caveat::AllowedMethods { selectors } => ICaveatEnforcers::checkSelectorCall {
            selector: call.selector,
            allowed: selectors.to_vec(),
        }
        .abi_encode(),
        Caveat::ValueLimit { cap } => match amount_argument(call)? {
            Some(amount) => ICaveatEnforcers::checkAmountCall { amount, cap: *cap }.abi_encode(),
            None => return Ok(None),
        },
        Caveat::SwapShape(_) => return Ok(None),
    };
    Ok(Some(data))
}

/// Enforcer calldata for every caveat of `delegation` that maps on-chain.
pub fn enforcer_calls(
    delegation: &Delegation,
    call: &ProposedCall,
) -> Result<Vec<Vec<u8>>, Violation> {
    let mut out = Vec::new();
    for caveat in delegation.caveats() {
        if let Some(data) = enforcer_call(caveat, call)? {
            out.push(data);
        }
    }
    Ok(out)
}

/// Interpret enforcer revert data as a [`Violation`].
pub fn decode_revert(data: &[u8]) -> Option<Violation> {
    if let Ok(err) = TargetNotAllowed::abi_decode(data, true) {
        return Some(Violation::TargetNotAllowed { target: err.target });
    }
    if let Ok(err) = SelectorNotAllowed::abi_decode(data, true) {
        return Some(Violation::SelectorNotAllowed { selector: err.selector });
    }
    if let Ok(err) = AmountExceedsCap::abi_decode(data, true) {
        return Some(Violation::AmountExceedsCap {
            amount: err.amount,
            cap: err.cap,
        });
    }
    None
}
