//! Solidity ABI of the caveat enforcer contract.
//!
//! The contract reverts with these errors; off-chain tooling builds enforcer
//! calldata from the same declarations and decodes the revert data back.

use alloy_sol_types::sol;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    error TargetNotAllowed(address target);

    #[derive(Debug, PartialEq, Eq)]
    error SelectorNotAllowed(bytes4 selector);

    #[derive(Debug, PartialEq, Eq)]
    error AmountExceedsCap(uint256 amount, uint256 cap);

    interface ICaveatEnforcers {
        function checkTarget(address target, address[] allowed) external view;
        function checkSelector(bytes4 selector, bytes4[] allowed) external view;
        function checkAmount(uint256 amount, uint256 cap) external view;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selectors::selector;
    use alloy_sol_types::{SolCall, SolError};

    #[test]
    fn entry_point_selectors_follow_signatures() {
        assert_eq!(
            ICaveatEnforcers::checkTargetCall::SELECTOR,
            selector("checkTarget(address,address[])").0
        );
        assert_eq!(
            ICaveatEnforcers::checkSelectorCall::SELECTOR,
            selector("checkSelector(bytes4,bytes4[])").0
        );
        assert_eq!(
            ICaveatEnforcers::checkAmountCall::SELECTOR,
            selector("checkAmount(uint256,uint256)").0
        );
    }

    #[test]
    fn error_selectors_follow_signatures() {
        assert_eq!(TargetNotAllowed::SELECTOR, selector("TargetNotAllowed(address)").0);
        assert_eq!(SelectorNotAllowed::SELECTOR, selector("SelectorNotAllowed(bytes4)").0);
        assert_eq!(
            AmountExceedsCap::SELECTOR,
            selector("AmountExceedsCap(uint256,uint256)").0
        );
    }
}
