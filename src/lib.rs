//! # eth_keccak
//!
//! Keccak-256 hashing and Ethereum address derivation.
//!
//! ## Architecture
//!
//! - `keccak`: Keccak-f[1600] permutation and the Keccak-256 sponge
//! - `encoding`: Strict hex encoding and decoding
//! - `crypto`: Address derivation, EIP-55 checksums, secp256k1 keypairs and signatures
//! - `batch`: Parallel hashing of independent inputs
//! - `config`: Command-line configuration

pub mod batch;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod keccak;

pub use batch::{BatchError, BatchHasher};
pub use config::Config;
pub use crypto::{
    is_valid_address, public_key_to_address, recover_address, sign_message, verify, Address,
    AddressError, Keypair, KeypairError, SignatureError,
};
pub use encoding::HexError;
pub use keccak::{hash_message, keccak256, keccak256_hex, Keccak256};
