//! Ethereum address derivation, formatting and parsing.

use std::fmt;
use std::str::FromStr;

use crate::encoding::{self, HexError};
use crate::keccak::keccak256;

/// Length of the X || Y coordinates of an uncompressed secp256k1 key.
pub const PUBLIC_KEY_LEN: usize = 64;

/// Marker byte of an uncompressed SEC1 public key.
const UNCOMPRESSED_MARKER: u8 = 0x04;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error(transparent)]
    MalformedHex(#[from] HexError),

    #[error("Invalid public key: expected 64 bytes (65 with 0x04 marker), got {0}")]
    InvalidPublicKey(usize),

    #[error("Invalid address: expected 20 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Invalid EIP-55 checksum: {0}")]
    InvalidChecksum(String),
}

/// An Ethereum address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Derives the address of the 64 coordinate bytes of a public key.
    ///
    /// Process:
    /// 1. Hash the 64 bytes with Keccak-256
    /// 2. Take the last 20 bytes of the hash
    pub fn from_raw_public_key(public_key: &[u8; PUBLIC_KEY_LEN]) -> Self {
        let hash = keccak256(public_key);

        let mut address_bytes = [0u8; 20];
        address_bytes.copy_from_slice(&hash[12..]);
        Self(address_bytes)
    }

    /// Derives an address from an uncompressed public key, with or without
    /// the leading 0x04 marker byte.
    pub fn from_public_key(public_key: &[u8]) -> Result<Self, AddressError> {
        let coordinates = match public_key {
            [UNCOMPRESSED_MARKER, rest @ ..] if rest.len() == PUBLIC_KEY_LEN => rest,
            key if key.len() == PUBLIC_KEY_LEN => key,
            key => return Err(AddressError::InvalidPublicKey(key.len())),
        };

        let mut raw = [0u8; PUBLIC_KEY_LEN];
        raw.copy_from_slice(coordinates);
        Ok(Self::from_raw_public_key(&raw))
    }

    /// Derives an address from a hex public key. Accepts `K`, `04K`, `0xK`,
    /// `0x04K` and `040xK` where `K` is the 128-digit coordinate pair.
    pub fn from_public_key_hex(public_key_hex: &str) -> Result<Self, AddressError> {
        // a textual 04 marker may precede the 0x prefix
        let public_key_hex = public_key_hex
            .strip_prefix("04")
            .filter(|rest| rest.starts_with("0x") || rest.starts_with("0X"))
            .unwrap_or(public_key_hex);

        let bytes = encoding::decode(public_key_hex)?;
        Self::from_public_key(&bytes)
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        encoding::encode(self.0)
    }

    /// Returns the address with 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        encoding::encode_prefixed(self.0)
    }

    /// Returns the address with checksum encoding (EIP-55).
    pub fn to_checksum(&self) -> String {
        let hex_addr = self.to_hex();
        let hash = keccak256(hex_addr.as_bytes());

        let mut checksum = String::with_capacity(42);
        checksum.push_str("0x");

        for (i, c) in hex_addr.chars().enumerate() {
            let hash_byte = hash[i / 2];
            let hash_nibble = if i % 2 == 0 {
                hash_byte >> 4
            } else {
                hash_byte & 0x0f
            };

            if c.is_ascii_alphabetic() && hash_nibble >= 8 {
                checksum.push(c.to_ascii_uppercase());
            } else {
                checksum.push(c);
            }
        }

        checksum
    }
}

impl FromStr for Address {
    type Err = AddressError;

    /// Parses `0x` + 40 hex digits. Mixed-case input must carry a valid
    /// EIP-55 checksum.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = encoding::decode_fixed::<20>(s).map_err(|e| match e {
            HexError::InvalidLength { actual, .. } => AddressError::InvalidLength(actual),
            other => AddressError::MalformedHex(other),
        })?;
        let address = Self(bytes);

        let digits = encoding::strip_prefix(s);
        let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper && address.to_checksum()[2..] != *digits {
            return Err(AddressError::InvalidChecksum(s.to_string()));
        }

        Ok(address)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_checksum())
    }
}

/// Derives the lowercase `0x`-prefixed address for a hex public key.
pub fn public_key_to_address(public_key_hex: &str) -> Result<String, AddressError> {
    Address::from_public_key_hex(public_key_hex).map(|address| address.to_hex_prefixed())
}

/// Returns true if `s` parses as an address (checksum enforced on mixed case).
pub fn is_valid_address(s: &str) -> bool {
    s.parse::<Address>().is_ok()
}
