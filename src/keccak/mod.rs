//! Keccak-256 as used by Ethereum.
//!
//! This is the original Keccak submission padding (`0x01 .. 0x80`), not NIST
//! SHA3-256 (`0x06 .. 0x80`). The two produce different digests for every
//! input.

mod permutation;
mod sponge;

pub use permutation::{keccak_f1600, State, ROUNDS};
pub use sponge::{Keccak256, DIGEST_LEN, RATE};

use crate::encoding::{self, HexError};

/// Keccak-256 of arbitrary bytes.
#[inline]
pub fn keccak256(input: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Keccak256::new();
    hasher.update(input);
    hasher.finalize()
}

/// Keccak-256 of hex-encoded input, returned as `0x` + 64 hex digits.
pub fn keccak256_hex(hex_input: &str) -> Result<String, HexError> {
    let bytes = encoding::decode(hex_input)?;
    Ok(encoding::encode_prefixed(keccak256(&bytes)))
}

/// Keccak-256 of the UTF-8 bytes of a text message, as `0x` + 64 hex digits.
pub fn hash_message(message: &str) -> String {
    encoding::encode_prefixed(keccak256(message.as_bytes()))
}
