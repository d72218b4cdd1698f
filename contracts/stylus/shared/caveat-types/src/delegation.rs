use alloc::{string::String, vec::Vec};
use core::fmt;

use alloy_primitives::Address;

use crate::caveat::Caveat;

/// A grant from `delegator` to `delegatee`, bounded by conjunctive caveats.
///
/// Immutable once built: fields are only reachable through accessors. Caveat
/// order is evaluation order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Delegation {
    delegator: Address,
    delegatee: Address,
    caveats: Vec<Caveat>,
    scope_label: String,
}

impl Delegation {
    pub fn new(
        delegator: Address,
        delegatee: Address,
        caveats: Vec<Caveat>,
        scope_label: impl Into<String>,
    ) -> Self {
        Self {
            delegator,
            delegatee,
            caveats,
            scope_label: scope_label.into(),
        }
    }

    pub fn delegator(&self) -> Address {
        self.delegator
    }

    pub fn delegatee(&self) -> Address {
        self.delegatee
    }

    pub fn caveats(&self) -> &[Caveat] {
        &self.caveats
    }

    pub fn scope_label(&self) -> &str {
        &self.scope_label
    }
}

/// Prints the caveat map, one caveat per line.
impl fmt::Display for Delegation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "delegation `{}`", self.scope_label)?;
        writeln!(f, "  delegator: {}", self.delegator)?;
        writeln!(f, "  delegatee: {}", self.delegatee)?;
        for caveat in &self.caveats {
            writeln!(f, "  {caveat}")?;
        }
        Ok(())
    }
}
