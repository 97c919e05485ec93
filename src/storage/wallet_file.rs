use crate::crypto::{validate_mnemonic_words, Ed25519, Secp256k1Evm};
use crate::domain::{AccountModel, CredentialRecord, DomainError, DomainResult};
use base64::Engine;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// On-disk JSON layout of a storage slot.
///
/// Field order here is the key order in the file. Agents load these files directly
/// (`require("./.wallet-solana.json")`), so the key names are part of the interface.
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct WalletFile {
    /// base58 (Solana) or EIP-55 hex (EVM) address
    pub address: String,

    /// base64 keypair (Solana) or `0x` hex private key (EVM)
    pub private_key: String,

    /// Raw 64-byte keypair, Solana only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<Vec<u8>>,

    /// BIP-39 words, EVM only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<Vec<String>>,

    /// ISO-8601 UTC creation time
    pub generated: String,

    pub warning: String,
}

impl WalletFile {
    /// Flatten a record into its file form
    pub fn from_record(record: &CredentialRecord) -> Self {
        Self {
            address: record.address().to_string(),
            private_key: record.private_key().expose_secret().clone(),
            secret_key: record.secret_bytes().map(<[u8]>::to_vec),
            mnemonic: record
                .mnemonic_words()
                .map(|words| words.into_iter().map(str::to_string).collect()),
            generated: record.generated_at_iso(),
            warning: record.warning().to_string(),
        }
    }

    /// Pretty-printed JSON (2-space indent), held in a buffer that is wiped on drop
    pub fn to_json(&self) -> serde_json::Result<Zeroizing<Vec<u8>>> {
        serde_json::to_vec_pretty(self).map(Zeroizing::new)
    }

    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    /// Account model implied by the fields present
    pub fn account_model(&self) -> AccountModel {
        if self.secret_key.is_some() {
            AccountModel::Ed25519Account
        } else {
            AccountModel::Secp256k1Account
        }
    }

    /// Check that `address` re-derives from the stored secret
    pub fn verify(&self) -> DomainResult<AccountModel> {
        let model = self.account_model();
        match model {
            AccountModel::Ed25519Account => self.verify_ed25519()?,
            AccountModel::Secp256k1Account => self.verify_secp256k1()?,
        }
        Ok(model)
    }

    fn verify_ed25519(&self) -> DomainResult<()> {
        let decoded = Zeroizing::new(
            base64::engine::general_purpose::STANDARD
                .decode(&self.private_key)
                .map_err(|e| DomainError::Encoding(format!("Invalid base64 private key: {}", e)))?,
        );

        if self.secret_key.as_deref() != Some(decoded.as_slice()) {
            return Err(DomainError::Encoding(
                "privateKey and secretKey disagree".to_string(),
            ));
        }

        let signing_key = Ed25519::from_keypair_bytes(&decoded)?;
        let expected = Ed25519::decode_address(&self.address)?;
        if signing_key.verifying_key() != expected {
            return Err(DomainError::Encoding(
                "address does not match the Ed25519 secret key".to_string(),
            ));
        }
        Ok(())
    }

    fn verify_secp256k1(&self) -> DomainResult<()> {
        let derived = Secp256k1Evm::address_from_private_key_hex(&self.private_key)?;
        if derived != self.address {
            return Err(DomainError::Encoding(
                "address does not match the secp256k1 private key".to_string(),
            ));
        }

        if let Some(words) = &self.mnemonic {
            let phrase = validate_mnemonic_words(words)?;
            let from_mnemonic = Secp256k1Evm::derive_private_key(&phrase)?;
            let stored = self.private_key.strip_prefix("0x").unwrap_or(&self.private_key);
            if hex::encode(&*from_mnemonic) != stored.to_lowercase() {
                return Err(DomainError::Encoding(
                    "mnemonic does not derive the stored private key".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for WalletFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletFile")
            .field("address", &self.address)
            .field("private_key", &"[REDACTED]")
            .field("generated", &self.generated)
            .finish_non_exhaustive()
    }
}
