use crate::domain::{DomainError, DomainResult, RawKeyMaterial};
use ed25519_dalek::{SigningKey, VerifyingKey, KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH};
use rand::rngs::OsRng;
use zeroize::Zeroizing;

/// Ed25519 (Solana-style) key operations
pub struct Ed25519;

impl Ed25519 {
    /// Generate a fresh keypair from the OS entropy source
    pub fn generate() -> SigningKey {
        SigningKey::generate(&mut OsRng)
    }

    /// Split a signing key into provider output: public key and 64-byte keypair
    pub fn to_raw_material(signing_key: &SigningKey) -> RawKeyMaterial {
        let keypair = Zeroizing::new(signing_key.to_keypair_bytes());
        RawKeyMaterial::Ed25519 {
            public_key: signing_key.verifying_key().to_bytes().to_vec(),
            secret_key: Zeroizing::new(keypair.to_vec()),
        }
    }

    /// Rebuild a signing key from the 64-byte `seed || public` layout.
    ///
    /// Fails if the public half does not match the seed.
    pub fn from_keypair_bytes(bytes: &[u8]) -> DomainResult<SigningKey> {
        if bytes.len() != KEYPAIR_LENGTH {
            return Err(DomainError::Encoding(format!(
                "Invalid Ed25519 secret key length: {} (expected {})",
                bytes.len(),
                KEYPAIR_LENGTH
            )));
        }

        let mut keypair = Zeroizing::new([0u8; KEYPAIR_LENGTH]);
        keypair.copy_from_slice(bytes);

        SigningKey::from_keypair_bytes(&keypair)
            .map_err(|e| DomainError::Encoding(format!("Inconsistent Ed25519 keypair: {}", e)))
    }

    /// Base58 address of a public key
    pub fn to_address(public_key: &[u8]) -> String {
        bs58::encode(public_key).into_string()
    }

    /// Decode and validate a base58 address back into a verifying key
    pub fn decode_address(address: &str) -> DomainResult<VerifyingKey> {
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| DomainError::Encoding(format!("Invalid base58 address: {}", e)))?;

        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|b: Vec<u8>| {
            DomainError::Encoding(format!(
                "Invalid Ed25519 address length: {} (expected {})",
                b.len(),
                PUBLIC_KEY_LENGTH
            ))
        })?;

        VerifyingKey::from_bytes(&bytes)
            .map_err(|e| DomainError::Encoding(format!("Invalid Ed25519 public key: {}", e)))
    }
}
