use stylus_sdk::alloy_primitives::{Address, FixedBytes, U256};

use crate::errors::{AmountExceedsCap, EnforcerError, SelectorNotAllowed, TargetNotAllowed};

/// Admit iff `target` is one of `allowed`. An empty list admits nothing.
pub fn check_target(target: Address, allowed: &[Address]) -> Result<(), EnforcerError> {
    for candidate in allowed {
        if *candidate == target {
            return Ok(());
        }
    }
    Err(EnforcerError::TargetNotAllowed(TargetNotAllowed { target }))
}

/// Admit iff `selector` is one of `allowed`.
pub fn check_selector(
    selector: FixedBytes<4>,
    allowed: &[FixedBytes<4>],
) -> Result<(), EnforcerError> {
    for candidate in allowed {
        if *candidate == selector {
            return Ok(());
        }
    }
    Err(EnforcerError::SelectorNotAllowed(SelectorNotAllowed { selector }))
}

/// Admit iff `amount <= cap`.
pub fn check_amount(amount: U256, cap: U256) -> Result<(), EnforcerError> {
    if amount > cap {
        return Err(EnforcerError::AmountExceedsCap(AmountExceedsCap { amount, cap }));
    }
    Ok(())
}
