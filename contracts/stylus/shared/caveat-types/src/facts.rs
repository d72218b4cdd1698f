use alloc::vec::Vec;

use alloy_primitives::Address;

/// Errors while reading ledger facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactsError {
    /// Used by partial providers that do not serve this fact.
    NotImplemented,
    /// The underlying RPC/host call failed.
    CallFailed,
}

impl core::fmt::Display for FactsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FactsError::NotImplemented => f.write_str("fact not implemented by provider"),
            FactsError::CallFailed => f.write_str("ledger call failed"),
        }
    }
}

/// Read-only view of the ledger, implemented by the execution collaborator
/// (RPC client, fork, in-memory fixture).
pub trait ChainFacts {
    /// Deployed runtime bytecode at `contract` (empty when no code is deployed).
    fn code_at(&self, _contract: Address) -> Result<Vec<u8>, FactsError> {
        Err(FactsError::NotImplemented)
    }
}
