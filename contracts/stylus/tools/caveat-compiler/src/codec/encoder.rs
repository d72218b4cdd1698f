use caveat_types::{Caveat, Delegation};

use super::{CaveatTag, ENCODING_VERSION, MAX_CAVEATS_DEFAULT};
use crate::errors::EncodeError;

/// Encode a delegation in the canonical layout.
///
/// Refuses delegations the default decoder would refuse, so every encoding
/// this produces decodes back to `delegation`.
pub fn encode_delegation(delegation: &Delegation) -> Result<Vec<u8>, EncodeError> {
    if delegation.caveats().len() > MAX_CAVEATS_DEFAULT {
        return Err(EncodeError::TooManyCaveats(MAX_CAVEATS_DEFAULT));
    }

    let mut buf = Vec::new();
    buf.push(ENCODING_VERSION);
    buf.extend_from_slice(delegation.delegator().as_slice());
    buf.extend_from_slice(delegation.delegatee().as_slice());

    let label = delegation.scope_label().as_bytes();
    buf.extend_from_slice(&len_u16(label.len(), "scope label")?.to_be_bytes());
    buf.extend_from_slice(label);

    for caveat in delegation.caveats() {
        match caveat {
            Caveat::AllowedTargets { addresses } => {
                buf.push(CaveatTag::AllowedTargets as u8);
                buf.extend_from_slice(&len_u16(addresses.len(), "target list")?.to_be_bytes());
                for address in addresses.iter() {
                    buf.extend_from_slice(address.as_slice());
                }
            }
            Caveat::AllowedMethods { selectors } => {
                buf.push(CaveatTag::AllowedMethods as u8);
                buf.extend_from_slice(&len_u16(selectors.len(), "selector list")?.to_be_bytes());
                for selector in selectors.iter() {
                    buf.extend_from_slice(selector.as_slice());
                }
            }
            Caveat::ValueLimit { cap } => {
                buf.push(CaveatTag::ValueLimit as u8);
                buf.extend_from_slice(&cap.to_be_bytes::<32>());
            }
            Caveat::SwapShape(shape) => {
                buf.push(CaveatTag::SwapShape as u8);
                buf.extend_from_slice(shape.token_in.as_slice());
                buf.extend_from_slice(shape.token_out.as_slice());
                buf.extend_from_slice(&shape.fee_tier.to_be_bytes());
                buf.extend_from_slice(shape.recipient.as_slice());
            }
        }
    }
    Ok(buf)
}

fn len_u16(len: usize, what: &'static str) -> Result<u16, EncodeError> {
    u16::try_from(len).map_err(|_| EncodeError::TooLong(what))
}
