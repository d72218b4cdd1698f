use alloc::{collections::BTreeSet, vec::Vec};
use core::fmt;

use alloy_primitives::{Address, U256};

use crate::selectors::Selector;

/// Errors raised while constructing a caveat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaveatError {
    /// Allow-lists must name at least one entry.
    EmptySet,
}

impl fmt::Display for CaveatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaveatError::EmptySet => f.write_str("caveat allow-list must not be empty"),
        }
    }
}

/// Ordered set that cannot be empty.
///
/// Ordering makes iteration (and so the canonical encoding) independent of
/// insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NonEmptySet<T: Ord>(BTreeSet<T>);

impl<T: Ord> NonEmptySet<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Result<Self, CaveatError> {
        let set: BTreeSet<T> = items.into_iter().collect();
        if set.is_empty() {
            return Err(CaveatError::EmptySet);
        }
        Ok(Self(set))
    }

    pub fn contains(&self, item: &T) -> bool {
        self.0.contains(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with std collections.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: Ord + Clone> NonEmptySet<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.0.iter().cloned().collect()
    }
}

#[cfg(feature = "serde")]
impl<T: Ord + serde::Serialize> serde::Serialize for NonEmptySet<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Ord + serde::Deserialize<'de>> serde::Deserialize<'de> for NonEmptySet<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        NonEmptySet::new(items).map_err(<D::Error as serde::de::Error>::custom)
    }
}

/// Swap-shape constraint for `exactInputSingle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SwapShape {
    pub token_in: Address,
    pub token_out: Address,
    pub fee_tier: u32,
    pub recipient: Address,
}

/// A single constraint on an attempted call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Caveat {
    AllowedTargets { addresses: NonEmptySet<Address> },
    AllowedMethods { selectors: NonEmptySet<Selector> },
    /// Cap in the token's smallest unit.
    ValueLimit { cap: U256 },
    SwapShape(SwapShape),
}

/// Tag identifying a caveat kind (used in verdicts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaveatKind {
    AllowedTargets,
    AllowedMethods,
    ValueLimit,
    SwapShape,
}

impl Caveat {
    pub fn allowed_targets(addresses: impl IntoIterator<Item = Address>) -> Result<Self, CaveatError> {
        Ok(Caveat::AllowedTargets {
            addresses: NonEmptySet::new(addresses)?,
        })
    }

    pub fn allowed_methods(selectors: impl IntoIterator<Item = Selector>) -> Result<Self, CaveatError> {
        Ok(Caveat::AllowedMethods {
            selectors: NonEmptySet::new(selectors)?,
        })
    }

    pub fn value_limit(cap: U256) -> Self {
        Caveat::ValueLimit { cap }
    }

    pub fn kind(&self) -> CaveatKind {
        match self {
            Caveat::AllowedTargets { .. } => CaveatKind::AllowedTargets,
            Caveat::AllowedMethods { .. } => CaveatKind::AllowedMethods,
            Caveat::ValueLimit { .. } => CaveatKind::ValueLimit,
            Caveat::SwapShape(_) => CaveatKind::SwapShape,
        }
    }
}

impl fmt::Display for CaveatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaveatKind::AllowedTargets => "AllowedTargets",
            CaveatKind::AllowedMethods => "AllowedMethods",
            CaveatKind::ValueLimit => "ValueLimit",
            CaveatKind::SwapShape => "SwapShape",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Caveat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.kind())?;
        match self {
            Caveat::AllowedTargets { addresses } => write_list(f, addresses.iter()),
            Caveat::AllowedMethods { selectors } => write_list(f, selectors.iter()),
            Caveat::ValueLimit { cap } => write!(f, "{cap}"),
            Caveat::SwapShape(shape) => write!(
                f,
                "tokenIn={} tokenOut={} fee={} recipient={}",
                shape.token_in, shape.token_out, shape.fee_tier, shape.recipient
            ),
        }
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn empty_allow_lists_are_rejected() {
        assert_eq!(Caveat::allowed_targets([]), Err(CaveatError::EmptySet));
        assert_eq!(Caveat::allowed_methods([]), Err(CaveatError::EmptySet));
    }

    #[test]
    fn set_order_is_canonical() {
        let a = address!("0000000000000000000000000000000000000001");
        let b = address!("0000000000000000000000000000000000000002");
        let one = NonEmptySet::new([b, a, b]).unwrap();
        let two = NonEmptySet::new([a, b]).unwrap();
        assert_eq!(one, two);
        assert_eq!(one.len(), 2);
        assert_eq!(one.to_vec(), vec![a, b]);
    }

    #[test]
    fn kind_tags_follow_variants() {
        assert_eq!(Caveat::value_limit(U256::ZERO).kind(), CaveatKind::ValueLimit);
        let shape = SwapShape {
            token_in: Address::ZERO,
            token_out: Address::ZERO,
            fee_tier: 500,
            recipient: Address::ZERO,
        };
        assert_eq!(Caveat::SwapShape(shape).kind(), CaveatKind::SwapShape);
        assert_eq!(CaveatKind::SwapShape.to_string(), "SwapShape");
    }
}
