use crate::crypto::Secp256k1Evm;
use crate::domain::{
    AccountModel, CredentialRecord, DomainError, DomainResult, RawKeyMaterial, SecretMaterial,
};
use base64::Engine;
use chrono::{DateTime, Utc};
use secrecy::{Secret, SecretString};

const ED25519_PUBLIC_KEY_LEN: usize = 32;
const ED25519_SECRET_KEY_LEN: usize = 64;
const SECP256K1_PRIVATE_KEY_LEN: usize = 32;
const EVM_ADDRESS_LEN: usize = 20;

/// Maps raw provider output to a canonical [`CredentialRecord`]
pub struct RecordBuilder;

impl RecordBuilder {
    /// Build a record stamped with the current time
    pub fn build(model: AccountModel, raw: &RawKeyMaterial) -> DomainResult<CredentialRecord> {
        Self::build_at(model, raw, Utc::now())
    }

    /// Build a record with an explicit timestamp.
    ///
    /// Pairing `raw` with the wrong `model` is a caller bug and is reported as
    /// [`DomainError::ModelMismatch`]. Byte lengths that do not fit the model fail
    /// with [`DomainError::Encoding`].
    pub fn build_at(
        model: AccountModel,
        raw: &RawKeyMaterial,
        generated_at: DateTime<Utc>,
    ) -> DomainResult<CredentialRecord> {
        match (model, raw) {
            (AccountModel::Ed25519Account, RawKeyMaterial::Ed25519 { public_key, secret_key }) => {
                Self::build_ed25519(public_key, secret_key, generated_at)
            }
            (
                AccountModel::Secp256k1Account,
                RawKeyMaterial::Secp256k1 {
                    address,
                    private_key,
                    mnemonic,
                },
            ) => Self::build_secp256k1(address, private_key, mnemonic, generated_at),
            (expected, raw) => Err(DomainError::ModelMismatch {
                expected: expected.as_str(),
                actual: raw.account_model().as_str(),
            }),
        }
    }

    fn build_ed25519(
        public_key: &[u8],
        secret_key: &[u8],
        generated_at: DateTime<Utc>,
    ) -> DomainResult<CredentialRecord> {
        ensure_len("Ed25519 public key", public_key, ED25519_PUBLIC_KEY_LEN)?;
        ensure_len("Ed25519 secret key", secret_key, ED25519_SECRET_KEY_LEN)?;
        ensure_not_zero("Ed25519 secret key", &secret_key[..ED25519_PUBLIC_KEY_LEN])?;

        // Keypair layout is seed || public
        if &secret_key[ED25519_PUBLIC_KEY_LEN..] != public_key {
            return Err(DomainError::Encoding(
                "Ed25519 secret key does not embed its public key".to_string(),
            ));
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(secret_key);

        Ok(CredentialRecord::new(
            AccountModel::Ed25519Account,
            bs58::encode(public_key).into_string(),
            SecretMaterial::Ed25519 {
                encoded: SecretString::new(encoded),
                raw: Secret::new(secret_key.to_vec()),
            },
            generated_at,
        ))
    }

    fn build_secp256k1(
        address: &[u8],
        private_key: &[u8],
        mnemonic: &[String],
        generated_at: DateTime<Utc>,
    ) -> DomainResult<CredentialRecord> {
        ensure_len("EVM address", address, EVM_ADDRESS_LEN)?;
        ensure_len("secp256k1 private key", private_key, SECP256K1_PRIVATE_KEY_LEN)?;
        ensure_not_zero("secp256k1 private key", private_key)?;

        if mnemonic.len() != 12 && mnemonic.len() != 24 {
            return Err(DomainError::Encoding(format!(
                "Mnemonic has {} words (expected 12 or 24)",
                mnemonic.len()
            )));
        }

        Ok(CredentialRecord::new(
            AccountModel::Secp256k1Account,
            Secp256k1Evm::to_checksum_address(address)?,
            SecretMaterial::Secp256k1 {
                private_key_hex: SecretString::new(format!("0x{}", hex::encode(private_key))),
                mnemonic: SecretString::new(mnemonic.join(" ")),
            },
            generated_at,
        ))
    }
}

fn ensure_len(what: &str, bytes: &[u8], expected: usize) -> DomainResult<()> {
    if bytes.len() != expected {
        return Err(DomainError::Encoding(format!(
            "{} has {} bytes (expected {})",
            what,
            bytes.len(),
            expected
        )));
    }
    Ok(())
}

fn ensure_not_zero(what: &str, bytes: &[u8]) -> DomainResult<()> {
    if bytes.iter().all(|&b| b == 0) {
        return Err(DomainError::Encoding(format!("{} is all zeroes", what)));
    }
    Ok(())
}
