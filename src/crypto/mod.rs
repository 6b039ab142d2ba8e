//! Ethereum key and address handling.
//!
//! This module provides:
//! - Address derivation from uncompressed public keys using Keccak-256
//! - EIP-55 checksum formatting and address validation
//! - secp256k1 keypair generation
//! - Message signing and signer recovery

mod address;
mod keypair;
mod signature;

pub use address::{is_valid_address, public_key_to_address, Address, AddressError, PUBLIC_KEY_LEN};
pub use keypair::{Keypair, KeypairError};
pub use signature::{recover_address, sign_message, verify, SignatureError, SIGNATURE_LEN};
