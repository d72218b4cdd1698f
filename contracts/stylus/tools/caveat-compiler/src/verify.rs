//! Checks compiled selectors against the bytecode deployed at their targets.
//!
//! Solidity and Vyper dispatchers compare the calldata selector against
//! `PUSH4 <selector>` constants (or a shorter push when the selector has
//! leading zero bytes), so a selector that never appears as push data is not
//! dispatched. Proxies must be verified against their implementation.

use alloy_primitives::Address;
use caveat_types::{
    selector,
    selectors::{APPROVE_SIGNATURE, EXACT_INPUT_SINGLE_SIGNATURE},
    ChainFacts, Selector,
};
use tracing::{debug, warn};

use crate::{errors::VerifyError, intent::SwapIntent};

const PUSH1: u8 = 0x60;
const PUSH32: u8 = 0x7f;

/// True if `code` pushes `selector` as an immediate.
pub fn dispatches_selector(code: &[u8], selector: Selector) -> bool {
    let mut i = 0usize;
    while i < code.len() {
        let op = code[i];
        if (PUSH1..=PUSH32).contains(&op) {
            let n = (op - PUSH1 + 1) as usize;
            if n <= 4 {
                if let Some(data) = code.get(i + 1..i + 1 + n) {
                    let mut word = [0u8; 4];
                    word[4 - n..].copy_from_slice(data);
                    if word == selector.0 {
                        return true;
                    }
                }
            }
            i += 1 + n;
        } else {
            i += 1;
        }
    }
    false
}

/// Derive the selector of `signature` and confirm `contract` dispatches it.
pub fn verify_selector<F: ChainFacts>(
    facts: &F,
    contract: Address,
    signature: &str,
) -> Result<Selector, VerifyError> {
    let code = facts.code_at(contract)?;
    if code.is_empty() {
        return Err(VerifyError::NoCode { contract });
    }
    let sel = selector(signature);
    if !dispatches_selector(&code, sel) {
        warn!(%contract, signature, selector = %sel, "selector not found in deployed code");
        return Err(VerifyError::SelectorMismatch {
            contract,
            signature: signature.to_string(),
            selector: sel,
        });
    }
    debug!(%contract, signature, selector = %sel, "selector verified");
    Ok(sel)
}

/// `approve` on the input token and `exactInputSingle` on the router.
pub fn verify_intent_selectors<F: ChainFacts>(
    facts: &F,
    intent: &SwapIntent,
) -> Result<(), VerifyError> {
    verify_selector(facts, intent.token_in, APPROVE_SIGNATURE)?;
    verify_selector(facts, intent.router, EXACT_INPUT_SINGLE_SIGNATURE)?;
    Ok(())
}
