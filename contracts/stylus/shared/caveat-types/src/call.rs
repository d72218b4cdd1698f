use alloc::{collections::BTreeMap, string::String, vec::Vec};

use alloy_primitives::{Address, U256};

use crate::selectors::Selector;

/// A decoded ABI argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArgValue {
    Address(Address),
    Uint(U256),
}

impl ArgValue {
    pub fn as_uint(&self) -> Option<U256> {
        match self {
            ArgValue::Uint(v) => Some(*v),
            ArgValue::Address(_) => None,
        }
    }

    pub fn as_address(&self) -> Option<Address> {
        match self {
            ArgValue::Address(a) => Some(*a),
            ArgValue::Uint(_) => None,
        }
    }
}

impl From<Address> for ArgValue {
    fn from(value: Address) -> Self {
        ArgValue::Address(value)
    }
}

impl From<U256> for ArgValue {
    fn from(value: U256) -> Self {
        ArgValue::Uint(value)
    }
}

impl core::fmt::Display for ArgValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ArgValue::Address(a) => write!(f, "{a}"),
            ArgValue::Uint(v) => write!(f, "{v}"),
        }
    }
}

/// Record of a call made *by* the callee (e.g. router -> pool).
///
/// Carried for traceability only; enforcement never looks at it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InnerCall {
    pub target: Address,
    pub selector: Selector,
}

/// A top-level call the delegatee wants to execute.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ProposedCall {
    pub target: Address,
    pub selector: Selector,
    pub decoded_args: BTreeMap<String, ArgValue>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inner_calls: Vec<InnerCall>,
}

impl ProposedCall {
    pub fn new(target: Address, selector: Selector) -> Self {
        Self {
            target,
            selector,
            decoded_args: BTreeMap::new(),
            inner_calls: Vec::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.decoded_args.insert(name.into(), value.into());
        self
    }

    pub fn with_inner_call(mut self, target: Address, selector: Selector) -> Self {
        self.inner_calls.push(InnerCall { target, selector });
        self
    }

    pub fn arg(&self, name: &str) -> Option<&ArgValue> {
        self.decoded_args.get(name)
    }
}
