//! Byte‑Pack codec
//! ---------------
//! A `u32` is exactly [`PACK_WIDTH`] bytes, least‑significant byte first.
//! The order is hard‑coded so an integer literal spells the same characters
//! on every host.
//!
//! ```
//! use joytherun::pack::{decode, encode, JOY};
//!
//! assert_eq!(&encode(JOY), b"joy\0");
//! assert_eq!(decode(*b"joy\0"), JOY);
//! ```

use thiserror::Error;

/// Width in bytes of one packed fragment.
pub const PACK_WIDTH: usize = 4;

/// `'j' + 256·'o' + 256²·'y'`
pub const JOY: u32 = 7_958_378;
/// `'t' + 256·'h' + 256²·'e'`
pub const THE: u32 = 6_645_876;
/// `'r' + 256·'u' + 256²·'n'`
pub const RUN: u32 = 7_239_026;

/// Longest tag that still leaves a zero terminator in the top byte.
const MAX_TAG: usize = PACK_WIDTH - 1;

/// Error returned by [`pack_ascii`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("tag of {len} bytes leaves no room for the terminator")]
    TooLong { len: usize },
    #[error("tag contains a zero byte at index {index}")]
    InteriorNul { index: usize },
}

/// Little‑endian bytes of `value`.
#[inline(always)]
pub fn encode(value: u32) -> [u8; PACK_WIDTH] {
    value.to_le_bytes()
}

/// Inverse of [`encode`].
#[inline(always)]
pub fn decode(bytes: [u8; PACK_WIDTH]) -> u32 {
    u32::from_le_bytes(bytes)
}

/// Builds the integer whose packed form is `tag` followed by zero bytes.
///
/// At most three bytes are accepted so that the packed value always reads
/// back as a terminated string of exactly `tag.len()` characters. A zero
/// inside `tag` would end that string early and is rejected.
///
/// ```
/// use joytherun::pack::{pack_ascii, RUN};
///
/// assert_eq!(pack_ascii(b"run"), Ok(RUN));
/// ```
pub fn pack_ascii(tag: &[u8]) -> Result<u32, PackError> {
    if tag.len() > MAX_TAG {
        return Err(PackError::TooLong { len: tag.len() });
    }
    if let Some(index) = tag.iter().position(|&b| b == 0) {
        return Err(PackError::InteriorNul { index });
    }
    let mut bytes = [0u8; PACK_WIDTH];
    bytes[..tag.len()].copy_from_slice(tag);
    Ok(decode(bytes))
}

/// The characters `value` spells before its first zero byte.
pub fn unpack_ascii(value: u32) -> Vec<u8> {
    let bytes = encode(value);
    crate::cstr::c_str(&bytes).to_vec()
}
