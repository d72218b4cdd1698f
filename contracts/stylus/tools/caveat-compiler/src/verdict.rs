use std::fmt;

use alloy_primitives::{Address, U256};
use caveat_types::{ArgValue, CaveatKind, Selector};
use serde::Serialize;

/// `exactInputSingle` parameters pinned by a `SwapShape` caveat, in check order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SwapField {
    TokenIn,
    TokenOut,
    Fee,
    Recipient,
}

impl SwapField {
    pub const ALL: [SwapField; 4] = [
        SwapField::TokenIn,
        SwapField::TokenOut,
        SwapField::Fee,
        SwapField::Recipient,
    ];

    /// Name of the decoded argument carrying this field.
    pub fn arg_name(self) -> &'static str {
        match self {
            SwapField::TokenIn => "tokenIn",
            SwapField::TokenOut => "tokenOut",
            SwapField::Fee => "fee",
            SwapField::Recipient => "recipient",
        }
    }
}

/// Why a single caveat refused a call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Violation {
    TargetNotAllowed { target: Address },
    SelectorNotAllowed { selector: Selector },
    AmountExceedsCap { amount: U256, cap: U256 },
    SwapFieldMismatch {
        field: SwapField,
        expected: ArgValue,
        actual: ArgValue,
    },
    MissingArgument { name: String },
    MalformedArgument { name: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TargetNotAllowed { target } => write!(f, "target {target} not allowed"),
            Violation::SelectorNotAllowed { selector } => {
                write!(f, "selector {selector} not allowed")
            }
            Violation::AmountExceedsCap { amount, cap } => {
                write!(f, "amount {amount} exceeds cap {cap}")
            }
            Violation::SwapFieldMismatch { field, expected, actual } => write!(
                f,
                "{} is {actual}, expected {expected}",
                field.arg_name()
            ),
            Violation::MissingArgument { name } => write!(f, "argument `{name}` missing"),
            Violation::MalformedArgument { name } => write!(f, "argument `{name}` has the wrong type"),
        }
    }
}

/// The first caveat that refused a redemption.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rejection {
    /// Index of the offending call in the redemption.
    pub call_index: usize,
    pub violated_caveat: CaveatKind,
    pub violation: Violation,
}

/// Outcome of evaluating a redemption. Rejection is not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "camelCase")]
pub enum Verdict {
    Admit,
    Reject(Rejection),
}

impl Verdict {
    pub fn is_admit(&self) -> bool {
        matches!(self, Verdict::Admit)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Verdict::Admit => None,
            Verdict::Reject(rejection) => Some(rejection),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Admit => f.write_str("ADMIT"),
            Verdict::Reject(r) => write!(
                f,
                "REJECT call #{} by {}: {}",
                r.call_index, r.violated_caveat, r.violation
            ),
        }
    }
}
