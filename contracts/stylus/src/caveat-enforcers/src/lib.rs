//! On-chain caveat enforcers for Arbitrum Stylus.
//!
//! Three stateless, pure checks, one per caveat kind that can be judged from a
//! single value and its bound: call target, function selector and amount. Each
//! reverts with a typed Solidity error carrying the offending value.
//!
//! The checks live in [`enforcers`] as plain functions so they can be invoked
//! without going through the contract entrypoint.

#![cfg_attr(not(any(test, feature = "export-abi")), no_main)]

extern crate alloc;

pub mod enforcers;
pub mod errors;

mod contract;

pub use contract::CaveatEnforcers;
pub use errors::EnforcerError;
