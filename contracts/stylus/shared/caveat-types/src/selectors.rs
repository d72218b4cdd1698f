//! Canonical function signatures and selector derivation.
//!
//! A selector is the leading 4 bytes of `keccak256(signature)`. The signature
//! string must be byte-for-byte canonical: no spaces, no parameter names, tuple
//! components in declaration order. A typo still hashes to *a* selector, just
//! not the one the deployed router dispatches.

use alloy_primitives::{fixed_bytes, keccak256, FixedBytes};

/// 4-byte function selector.
pub type Selector = FixedBytes<4>;

/// ERC-20 `approve`.
pub const APPROVE_SIGNATURE: &str = "approve(address,uint256)";

/// Uniswap `SwapRouter02.exactInputSingle(ExactInputSingleParams)`.
///
/// Tuple layout: `(tokenIn, tokenOut, fee, recipient, amountIn, amountOutMinimum, sqrtPriceLimitX96)`.
pub const EXACT_INPUT_SINGLE_SIGNATURE: &str =
    "exactInputSingle((address,address,uint24,address,uint256,uint256,uint160))";

/// `selector(APPROVE_SIGNATURE)`.
pub const APPROVE_SELECTOR: Selector = fixed_bytes!("095ea7b3");

/// `selector(EXACT_INPUT_SINGLE_SIGNATURE)`.
pub const EXACT_INPUT_SINGLE_SELECTOR: Selector = fixed_bytes!("04e45aaf");

/// Derive the selector of a canonical function signature.
pub fn selector(signature: &str) -> Selector {
    let h = keccak256(signature.as_bytes());
    FixedBytes([h[0], h[1], h[2], h[3]])
}

/// Signatures the swap compiler authorises, with their stored selectors.
pub const SWAP_METHODS: [(&str, Selector); 2] = [
    (APPROVE_SIGNATURE, APPROVE_SELECTOR),
    (EXACT_INPUT_SINGLE_SIGNATURE, EXACT_INPUT_SINGLE_SELECTOR),
];

#[cfg(test)]
mod tests {
    use super::*;
    use sha3::{Digest, Keccak256};

    fn independent_selector(signature: &str) -> [u8; 4] {
        let mut h = Keccak256::new();
        h.update(signature.as_bytes());
        let out = h.finalize();
        [out[0], out[1], out[2], out[3]]
    }

    #[test]
    fn stored_selectors_match_their_signatures() {
        for (signature, stored) in SWAP_METHODS {
            assert_eq!(selector(signature), stored, "{signature}");
            assert_eq!(independent_selector(signature), stored.0, "{signature}");
        }
    }

    #[test]
    fn whitespace_changes_the_selector() {
        assert_ne!(selector("approve(address, uint256)"), APPROVE_SELECTOR);
        assert_ne!(selector("approve(address,uint)"), APPROVE_SELECTOR);
    }

    #[test]
    fn tuple_order_changes_the_selector() {
        let swapped = "exactInputSingle((address,address,address,uint24,uint256,uint256,uint160))";
        assert_ne!(selector(swapped), EXACT_INPUT_SINGLE_SELECTOR);
        // SwapRouter (v1) variant carries a deadline field.
        let v1 = "exactInputSingle((address,address,uint24,address,uint256,uint256,uint256,uint160))";
        assert_ne!(selector(v1), EXACT_INPUT_SINGLE_SELECTOR);
    }
}
