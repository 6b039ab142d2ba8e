//! Recoverable ECDSA signatures over the Keccak-256 digest of a message.
//!
//! Signatures are 65 bytes: `r || s || v`. Signing emits `v` as 0 or 1;
//! recovery also accepts the legacy 27 / 28 encoding.

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1};

use super::{Address, Keypair};
use crate::keccak::keccak256;

/// Length of an `r || s || v` signature.
pub const SIGNATURE_LEN: usize = 65;

#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("Invalid signature: expected 65 bytes, got {0}")]
    InvalidLength(usize),

    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    #[error("Failed to recover public key: {0}")]
    Recovery(#[from] secp256k1::Error),
}

/// Signs the Keccak-256 digest of `message`.
pub fn sign_message(keypair: &Keypair, message: &str) -> [u8; SIGNATURE_LEN] {
    let secp = Secp256k1::signing_only();
    let digest = Message::from_digest(keccak256(message.as_bytes()));
    let (recovery_id, compact) = secp
        .sign_ecdsa_recoverable(&digest, keypair.secret_key())
        .serialize_compact();

    let mut signature = [0u8; SIGNATURE_LEN];
    signature[..64].copy_from_slice(&compact);
    // recovery ids from signing are always 0..=3
    signature[64] = recovery_id.to_i32() as u8;
    signature
}

/// Recovers the address that signed `message`.
pub fn recover_address(message: &str, signature: &[u8]) -> Result<Address, SignatureError> {
    if signature.len() != SIGNATURE_LEN {
        return Err(SignatureError::InvalidLength(signature.len()));
    }

    let v = match signature[64] {
        v @ (0 | 1) => v,
        v @ (27 | 28) => v - 27,
        v => return Err(SignatureError::InvalidRecoveryId(v)),
    };
    let recovery_id = RecoveryId::from_i32(i32::from(v))?;
    let recoverable = RecoverableSignature::from_compact(&signature[..64], recovery_id)?;

    let secp = Secp256k1::verification_only();
    let digest = Message::from_digest(keccak256(message.as_bytes()));
    let public_key = secp.recover_ecdsa(&digest, &recoverable)?;

    let mut coordinates = [0u8; 64];
    coordinates.copy_from_slice(&public_key.serialize_uncompressed()[1..]);
    Ok(Address::from_raw_public_key(&coordinates))
}

/// Returns true if `signature` over `message` recovers to `address`.
pub fn verify(address: &Address, message: &str, signature: &[u8]) -> Result<bool, SignatureError> {
    Ok(recover_address(message, signature)? == *address)
}
