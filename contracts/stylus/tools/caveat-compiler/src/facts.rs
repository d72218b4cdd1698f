//! In-memory ledger for off-chain verification and tests.

use std::collections::BTreeMap;

use alloy_primitives::Address;

pub use caveat_types::{ChainFacts, FactsError};

/// Fixed bytecode per address. Unknown addresses have no code.
#[derive(Clone, Debug, Default)]
pub struct StaticChain {
    code: BTreeMap<Address, Vec<u8>>,
}

impl StaticChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, contract: Address, code: impl Into<Vec<u8>>) -> Self {
        self.code.insert(contract, code.into());
        self
    }
}

impl ChainFacts for StaticChain {
    fn code_at(&self, contract: Address) -> Result<Vec<u8>, FactsError> {
        Ok(self.code.get(&contract).cloned().unwrap_or_default())
    }
}
