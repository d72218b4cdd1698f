//! Shared types for delegations, caveats, proposed calls and the enforcer ABI.
//!
//! This crate is `no_std` so the Stylus enforcers and the off-chain tooling
//! derive selectors and speak the enforcer ABI from the same source.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod call;
pub mod caveat;
pub mod delegation;
pub mod facts;
pub mod interfaces;
pub mod selectors;

pub use call::{ArgValue, InnerCall, ProposedCall};
pub use caveat::{Caveat, CaveatError, CaveatKind, NonEmptySet, SwapShape};
pub use delegation::Delegation;
pub use facts::{ChainFacts, FactsError};
pub use selectors::{selector, Selector};
