//! Canonical byte encoding of a [`caveat_types::Delegation`].
//!
//! Layout (all integers big-endian):
//!
//! ```text
//! version:u8 | delegator:[20] | delegatee:[20] | label_len:u16 | label:utf8
//! caveat*   (until end of input)
//!
//! 0x01 AllowedTargets   n:u16 | n * [20]
//! 0x02 AllowedMethods   n:u16 | n * [4]
//! 0x03 ValueLimit       cap:[32]
//! 0x04 SwapShape        token_in:[20] | token_out:[20] | fee:u32 | recipient:[20]
//! ```
//!
//! Allow-lists are written in strictly ascending order, so equal delegations
//! always encode to equal bytes; the decoder rejects any other order. At most
//! [`MAX_CAVEATS_DEFAULT`] caveats are encoded.

pub mod decoder;
pub mod encoder;

pub use decoder::{decode_delegation, decode_delegation_with_limit, MAX_CAVEATS_DEFAULT};
pub use encoder::encode_delegation;

pub const ENCODING_VERSION: u8 = 1;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaveatTag {
    AllowedTargets = 0x01,
    AllowedMethods = 0x02,
    ValueLimit = 0x03,
    SwapShape = 0x04,
}

impl TryFrom<u8> for CaveatTag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(CaveatTag::AllowedTargets),
            0x02 => Ok(CaveatTag::AllowedMethods),
            0x03 => Ok(CaveatTag::ValueLimit),
            0x04 => Ok(CaveatTag::SwapShape),
            _ => Err(()),
        }
    }
}
