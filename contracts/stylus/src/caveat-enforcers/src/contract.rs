//! Contract entrypoint. Holds no storage: every check takes the value and its
//! bound as explicit arguments.

use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{Address, FixedBytes, U256},
    prelude::*,
};

use crate::{enforcers, errors::EnforcerError};

sol_storage! {
    #[entrypoint]
    pub struct CaveatEnforcers {}
}

#[public]
impl CaveatEnforcers {
    /// `checkTarget(address,address[])`: reverts `TargetNotAllowed(target)`.
    pub fn check_target(&self, target: Address, allowed: Vec<Address>) -> Result<(), EnforcerError> {
        enforcers::check_target(target, &allowed)
    }

    /// `checkSelector(bytes4,bytes4[])`: reverts `SelectorNotAllowed(selector)`.
    pub fn check_selector(
        &self,
        selector: FixedBytes<4>,
        allowed: Vec<FixedBytes<4>>,
    ) -> Result<(), EnforcerError> {
        enforcers::check_selector(selector, &allowed)
    }

    /// `checkAmount(uint256,uint256)`: reverts `AmountExceedsCap(amount, cap)`.
    pub fn check_amount(&self, amount: U256, cap: U256) -> Result<(), EnforcerError> {
        enforcers::check_amount(amount, cap)
    }
}
