use stylus_sdk::stylus_proc::SolidityError;

pub use caveat_types::interfaces::{AmountExceedsCap, SelectorNotAllowed, TargetNotAllowed};

/// Revert reasons of the enforcer entry points.
#[derive(SolidityError, Debug, PartialEq, Eq)]
pub enum EnforcerError {
    TargetNotAllowed(TargetNotAllowed),
    SelectorNotAllowed(SelectorNotAllowed),
    AmountExceedsCap(AmountExceedsCap),
}
