use super::account_model::AccountModel;
use chrono::{DateTime, SecondsFormat, Utc};
use secrecy::{ExposeSecret, SecretString, SecretVec};
use std::fmt;

/// Notice stored alongside every persisted credential
pub const WALLET_WARNING: &str = "NEVER commit this file or share the private key!";

/// Model-specific encoded secret of a credential
pub enum SecretMaterial {
    Ed25519 {
        /// base64 of the 64-byte keypair
        encoded: SecretString,
        /// The same 64 bytes, verbatim
        raw: SecretVec<u8>,
    },
    Secp256k1 {
        /// `0x`-prefixed lowercase hex of the 32-byte private key
        private_key_hex: SecretString,
        /// Space-separated BIP-39 phrase
        mnemonic: SecretString,
    },
}

impl fmt::Debug for SecretMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 { .. } => f.write_str("SecretMaterial::Ed25519([REDACTED])"),
            Self::Secp256k1 { .. } => f.write_str("SecretMaterial::Secp256k1([REDACTED])"),
        }
    }
}

/// Durable form of one generated credential.
///
/// Fields are private: a record cannot be changed after the builder hands it out.
#[derive(Debug)]
pub struct CredentialRecord {
    account_model: AccountModel,
    address: String,
    secret: SecretMaterial,
    generated_at: DateTime<Utc>,
}

impl CredentialRecord {
    pub(crate) fn new(
        account_model: AccountModel,
        address: String,
        secret: SecretMaterial,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            account_model,
            address,
            secret,
            generated_at,
        }
    }

    pub fn account_model(&self) -> AccountModel {
        self.account_model
    }

    /// Public identifier: base58 (Ed25519) or EIP-55 hex (secp256k1)
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn secret(&self) -> &SecretMaterial {
        &self.secret
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// ISO-8601 timestamp with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
    pub fn generated_at_iso(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn warning(&self) -> &'static str {
        WALLET_WARNING
    }

    /// Encoded private key as written to the slot file
    pub fn private_key(&self) -> &SecretString {
        match &self.secret {
            SecretMaterial::Ed25519 { encoded, .. } => encoded,
            SecretMaterial::Secp256k1 { private_key_hex, .. } => private_key_hex,
        }
    }

    /// Mnemonic words, only present for secp256k1 accounts
    pub fn mnemonic_words(&self) -> Option<Vec<&str>> {
        match &self.secret {
            SecretMaterial::Secp256k1 { mnemonic, .. } => {
                Some(mnemonic.expose_secret().split_whitespace().collect())
            }
            SecretMaterial::Ed25519 { .. } => None,
        }
    }

    /// Raw 64-byte keypair, only present for Ed25519 accounts
    pub fn secret_bytes(&self) -> Option<&[u8]> {
        match &self.secret {
            SecretMaterial::Ed25519 { raw, .. } => Some(raw.expose_secret().as_slice()),
            SecretMaterial::Secp256k1 { .. } => None,
        }
    }
}
