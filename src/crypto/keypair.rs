//! secp256k1 keypairs and their Ethereum addresses.

use secp256k1::{PublicKey, Secp256k1, SecretKey};

use super::Address;
use crate::encoding::{self, HexError};

#[derive(Debug, thiserror::Error)]
pub enum KeypairError {
    #[error(transparent)]
    MalformedHex(#[from] HexError),

    #[error("Invalid secret key: {0}")]
    InvalidSecretKey(#[from] secp256k1::Error),
}

/// Represents an Ethereum keypair (private key, public key and derived address).
#[derive(Debug, Clone)]
pub struct Keypair {
    /// The private key
    secret_key: SecretKey,
    /// Uncompressed public key (0x04 || X || Y)
    public_key: [u8; 65],
    /// The derived Ethereum address
    address: Address,
}

impl Keypair {
    /// Generates a new random keypair.
    ///
    /// Uses a cryptographically secure random number generator.
    pub fn generate() -> Self {
        let secp = Secp256k1::new();
        let (secret_key, public_key) = secp.generate_keypair(&mut rand::thread_rng());
        Self::from_parts(&secret_key, &public_key)
    }

    /// Builds a keypair from an existing secret key.
    ///
    /// Fails for zero or for values not below the curve order.
    pub fn from_secret_key(secret_bytes: [u8; 32]) -> Result<Self, KeypairError> {
        let secp = Secp256k1::new();
        let secret_key = SecretKey::from_slice(&secret_bytes)?;
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);
        Ok(Self::from_parts(&secret_key, &public_key))
    }

    /// Builds a keypair from a 32-byte hex secret key (0x optional).
    pub fn from_secret_key_hex(secret_hex: &str) -> Result<Self, KeypairError> {
        let secret_bytes: [u8; 32] = encoding::decode_fixed(secret_hex)?;
        Self::from_secret_key(secret_bytes)
    }

    fn from_parts(secret_key: &SecretKey, public_key: &PublicKey) -> Self {
        let public_key = public_key.serialize_uncompressed();

        // Skip the 0x04 marker and hash the remaining 64 bytes
        let mut coordinates = [0u8; 64];
        coordinates.copy_from_slice(&public_key[1..]);
        let address = Address::from_raw_public_key(&coordinates);

        Self {
            secret_key: *secret_key,
            public_key,
            address,
        }
    }

    /// Returns the private key as a hex string (without 0x prefix).
    pub fn private_key_hex(&self) -> String {
        encoding::encode(self.secret_key.secret_bytes())
    }

    /// Returns the private key bytes.
    pub fn private_key_bytes(&self) -> [u8; 32] {
        self.secret_key.secret_bytes()
    }

    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Returns the uncompressed public key as hex (`04` + 128 digits, no 0x).
    pub fn public_key_hex(&self) -> String {
        encoding::encode(self.public_key)
    }

    /// Returns the uncompressed public key bytes.
    pub fn public_key_bytes(&self) -> &[u8; 65] {
        &self.public_key
    }

    /// Returns a reference to the derived address.
    #[inline]
    pub fn address(&self) -> &Address {
        &self.address
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::public_key_to_address;

    fn one() -> [u8; 32] {
        let mut secret = [0u8; 32];
        secret[31] = 1;
        secret
    }

    #[test]
    fn test_keypair_generation() {
        let keypair = Keypair::generate();
        assert_eq!(keypair.private_key_bytes().len(), 32);
        assert_eq!(keypair.public_key_bytes()[0], 0x04);
        assert_eq!(
            public_key_to_address(&keypair.public_key_hex()).unwrap(),
            keypair.address().to_hex_prefixed()
        );
    }

    #[test]
    fn test_deterministic_address() {
        let keypair = Keypair::from_secret_key(one()).unwrap();

        // Address for private key = 1 is well-known
        assert_eq!(
            keypair.address().to_hex(),
            "7e5f4552091a69125d5dfcb7b8c2659029395bdf"
        );
        assert!(keypair
            .public_key_hex()
            .starts_with("0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"));
    }

    #[test]
    fn test_from_secret_key_hex() {
        let hex_key = format!("0x{}", "00".repeat(31) + "01");
        let keypair = Keypair::from_secret_key_hex(&hex_key).unwrap();
        assert_eq!(keypair.private_key_bytes(), one());
        assert_eq!(keypair.private_key_hex(), "00".repeat(31) + "01");
    }

    #[test]
    fn test_invalid_secret_keys() {
        assert!(matches!(
            Keypair::from_secret_key([0u8; 32]),
            Err(KeypairError::InvalidSecretKey(_))
        ));
        assert!(matches!(
            Keypair::from_secret_key([0xffu8; 32]),
            Err(KeypairError::InvalidSecretKey(_))
        ));
        assert!(matches!(
            Keypair::from_secret_key_hex("0x01"),
            Err(KeypairError::MalformedHex(HexError::InvalidLength { .. }))
        ));
    }
}
