use alloy_primitives::Address;
use caveat_types::{CaveatError, FactsError, Selector};

/// Compiler input is malformed. Not retryable: the caller must fix the intent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIntent {
    #[error("`{field}` is not a 20-byte hex address: {value:?}")]
    MalformedAddress { field: &'static str, value: String },
    #[error("`{field}` must not be the zero address")]
    ZeroAddress { field: &'static str },
    #[error("`amountCap` is not a decimal integer: {0:?}")]
    MalformedAmount(String),
    #[error("`amountCap` must be non-zero for a swap")]
    ZeroAmountCap,
    #[error("tokenIn and tokenOut are the same token {0}")]
    IdenticalTokens(Address),
    #[error("fee tier {0} does not fit in uint24")]
    FeeTierOutOfRange(u32),
    #[error("unknown pair {0:?}")]
    UnknownPair(String),
    #[error("intent names neither a pair nor both tokens")]
    MissingTokens,
    #[error("router {0} is also one of the swapped tokens")]
    RouterIsToken(Address),
    #[error("{0}")]
    Caveat(CaveatError),
}

impl From<CaveatError> for InvalidIntent {
    fn from(err: CaveatError) -> Self {
        InvalidIntent::Caveat(err)
    }
}

/// Calldata could not be turned into a [`caveat_types::ProposedCall`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalldataError {
    #[error("calldata too short ({0} bytes, need >= 4)")]
    TooShort(usize),
    #[error("no decoder for selector {0}")]
    UnknownSelector(Selector),
    #[error("ABI decoding failed: {0}")]
    Abi(String),
    #[error("`{0}` does not fit its ABI type")]
    OutOfRange(&'static str),
}

/// A delegation cannot be written in the canonical encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("{0} does not fit a u16 length prefix")]
    TooLong(&'static str),
    #[error("more than {0} caveats")]
    TooManyCaveats(usize),
}

/// The canonical delegation encoding is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported encoding version {0}")]
    UnsupportedVersion(u8),
    #[error("unknown caveat tag {0:#04x}")]
    UnknownTag(u8),
    #[error("input truncated")]
    Truncated,
    #[error("more than {0} caveats")]
    TooManyCaveats(usize),
    #[error("caveat allow-list is empty")]
    EmptySet,
    #[error("{0} is not strictly ascending")]
    NonCanonical(&'static str),
    #[error("scope label is not UTF-8")]
    InvalidLabel,
}

/// Verifying compiled selectors against deployed bytecode failed.
///
/// `SelectorMismatch` points at a compiler bug (wrong canonical signature),
/// not at a policy violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("{contract} does not dispatch {selector} ({signature})")]
    SelectorMismatch {
        contract: Address,
        signature: String,
        selector: Selector,
    },
    #[error("no code deployed at {contract}")]
    NoCode { contract: Address },
    #[error("reading ledger facts failed: {0}")]
    Facts(FactsError),
}

impl From<FactsError> for VerifyError {
    fn from(err: FactsError) -> Self {
        VerifyError::Facts(err)
    }
}

/// A redemption attempt was refused before any caveat ran.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RedemptionError {
    #[error("caller {caller} is not the delegatee {delegatee}")]
    NotDelegatee { caller: Address, delegatee: Address },
}
