//! Off-chain side of delegated swap caveats: compiles swap intents into
//! delegations, evaluates proposed calls against them, and checks the result
//! against the on-chain enforcers and deployed bytecode.

pub mod abi;
pub mod codec;
pub mod enforcers;
pub mod engine;
pub mod errors;
pub mod facts;
pub mod intent;
pub mod mirror;
pub mod registry;
pub mod verdict;
pub mod verify;


pub use abi::decode_call;
pub use codec::{decode_delegation, encode_delegation};
pub use engine::{authorize, evaluate};
pub use errors::{CalldataError, DecodeError, EncodeError, InvalidIntent, RedemptionError, VerifyError};
pub use intent::{compile, SwapIntent, SwapIntentSpec};
pub use verdict::{Rejection, SwapField, Verdict, Violation};
pub use verify::{verify_intent_selectors, verify_selector};
