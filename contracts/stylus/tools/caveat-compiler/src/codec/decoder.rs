use alloy_primitives::{Address, FixedBytes, U256};
use caveat_types::{Caveat, Delegation, NonEmptySet, Selector, SwapShape};

use super::{CaveatTag, ENCODING_VERSION};
use crate::errors::DecodeError;

pub const MAX_CAVEATS_DEFAULT: usize = 16;

/// Decode canonical bytes into a delegation.
pub fn decode_delegation(bytes: &[u8]) -> Result<Delegation, DecodeError> {
    decode_delegation_with_limit(bytes, MAX_CAVEATS_DEFAULT)
}

pub fn decode_delegation_with_limit(
    bytes: &[u8],
    max_caveats: usize,
) -> Result<Delegation, DecodeError> {
    let mut i = 0usize;

    let version = read_u8(bytes, &mut i)?;
    if version != ENCODING_VERSION {
        return Err(DecodeError::UnsupportedVersion(version));
    }
    let delegator = read_address(bytes, &mut i)?;
    let delegatee = read_address(bytes, &mut i)?;
    let label_len = read_u16(bytes, &mut i)? as usize;
    let label = String::from_utf8(read_vec(bytes, &mut i, label_len)?)
        .map_err(|_| DecodeError::InvalidLabel)?;

    let mut caveats = Vec::new();
    while i < bytes.len() {
        if caveats.len() >= max_caveats {
            return Err(DecodeError::TooManyCaveats(max_caveats));
        }
        let tag = CaveatTag::try_from(bytes[i]).map_err(|_| DecodeError::UnknownTag(bytes[i]))?;
        i += 1;

        let caveat = match tag {
            CaveatTag::AllowedTargets => {
                let n = read_u16(bytes, &mut i)? as usize;
                let mut addresses = Vec::with_capacity(n);
                for _ in 0..n {
                    addresses.push(read_address(bytes, &mut i)?);
                }
                ensure_ascending(&addresses, "target list")?;
                Caveat::AllowedTargets {
                    addresses: NonEmptySet::new(addresses).map_err(|_| DecodeError::EmptySet)?,
                }
            }
            CaveatTag::AllowedMethods => {
                let n = read_u16(bytes, &mut i)? as usize;
                let mut selectors = Vec::with_capacity(n);
                for _ in 0..n {
                    selectors.push(read_selector(bytes, &mut i)?);
                }
                ensure_ascending(&selectors, "selector list")?;
                Caveat::AllowedMethods {
                    selectors: NonEmptySet::new(selectors).map_err(|_| DecodeError::EmptySet)?,
                }
            }
            CaveatTag::ValueLimit => Caveat::ValueLimit {
                cap: read_u256(bytes, &mut i)?,
            },
            CaveatTag::SwapShape => Caveat::SwapShape(SwapShape {
                token_in: read_address(bytes, &mut i)?,
                token_out: read_address(bytes, &mut i)?,
                fee_tier: read_u32(bytes, &mut i)?,
                recipient: read_address(bytes, &mut i)?,
            }),
        };
        caveats.push(caveat);
    }

    Ok(Delegation::new(delegator, delegatee, caveats, label))
}

/// Unsorted or repeated entries would decode to a delegation that re-encodes
/// to different bytes.
fn ensure_ascending<T: Ord>(items: &[T], what: &'static str) -> Result<(), DecodeError> {
    if items.windows(2).all(|w| w[0] < w[1]) {
        Ok(())
    } else {
        Err(DecodeError::NonCanonical(what))
    }
}

fn read_vec(bytes: &[u8], i: &mut usize, len: usize) -> Result<Vec<u8>, DecodeError> {
    if bytes.len() < *i + len {
        return Err(DecodeError::Truncated);
    }
    let out = bytes[*i..*i + len].to_vec();
    *i += len;
    Ok(out)
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8, DecodeError> {
    let b = *bytes.get(*i).ok_or(DecodeError::Truncated)?;
    *i += 1;
    Ok(b)
}

fn read_u16(bytes: &[u8], i: &mut usize) -> Result<u16, DecodeError> {
    if bytes.len() < *i + 2 {
        return Err(DecodeError::Truncated);
    }
    let mut buf = [0u8; 2];
    buf.copy_from_slice(&bytes[*i..*i + 2]);
    *i += 2;
    Ok(u16::from_be_bytes(buf))
}

fn read_u32(bytes: &[u8], i: &mut usize) -> Result<u32, DecodeError> {
    if bytes.len() < *i + 4 {
        return Err(DecodeError::Truncated);
    }
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[*i..*i + 4]);
    *i += 4;
    Ok(u32::from_be_bytes(buf))
}

fn read_u256(bytes: &[u8], i: &mut usize) -> Result<U256, DecodeError> {
    if bytes.len() < *i + 32 {
        return Err(DecodeError::Truncated);
    }
    let word = &bytes[*i..*i + 32];
    *i += 32;
    Ok(U256::from_be_slice(word))
}

fn read_address(bytes: &[u8], i: &mut usize) -> Result<Address, DecodeError> {
    if bytes.len() < *i + 20 {
        return Err(DecodeError::Truncated);
    }
    let addr = Address::from_slice(&bytes[*i..*i + 20]);
    *i += 20;
    Ok(addr)
}

fn read_selector(bytes: &[u8], i: &mut usize) -> Result<Selector, DecodeError> {
    if bytes.len() < *i + 4 {
        return Err(DecodeError::Truncated);
    }
    let selector = FixedBytes::<4>::from_slice(&bytes[*i..*i + 4]);
    *i += 4;
    Ok(selector)
}
