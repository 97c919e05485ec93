//! Source of raw key material.
//!
//! The pipeline only sees the [`CredentialProvider`] trait. [`SystemProvider`] is
//! the production implementation. It is built once at startup and fails with
//! `ProviderUnavailable` if the OS entropy source cannot be used.

use super::ed25519::Ed25519;
use super::mnemonic::{generate_mnemonic, SUPPORTED_WORD_COUNTS};
use super::secp256k1_evm::Secp256k1Evm;
use crate::domain::{AccountModel, DomainError, DomainResult, RawKeyMaterial};
use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::ExposeSecret;
use zeroize::Zeroizing;

/// Supplies fresh key material for an account model
pub trait CredentialProvider {
    /// Generate a new keypair for `model`
    fn generate_keypair(&self, model: AccountModel) -> DomainResult<RawKeyMaterial>;

    /// Human-readable name for diagnostics
    fn name(&self) -> &'static str;
}

/// Provider backed by the operating system's CSPRNG
#[derive(Debug, Clone)]
pub struct SystemProvider {
    mnemonic_words: usize,
}

impl SystemProvider {
    /// Create a provider, checking that the entropy source actually works
    pub fn new(mnemonic_words: usize) -> DomainResult<Self> {
        if !SUPPORTED_WORD_COUNTS.contains(&mnemonic_words) {
            return Err(DomainError::Crypto(format!(
                "Unsupported mnemonic length: {} (expected 12 or 24)",
                mnemonic_words
            )));
        }

        let mut probe = Zeroizing::new([0u8; 32]);
        OsRng.try_fill_bytes(&mut probe[..]).map_err(|e| {
            DomainError::ProviderUnavailable(format!(
                "OS random number generator is not usable ({}). \
                 Run on a system with a working /dev/urandom or getrandom(2).",
                e
            ))
        })?;

        Ok(Self { mnemonic_words })
    }

    pub fn mnemonic_words(&self) -> usize {
        self.mnemonic_words
    }
}

impl CredentialProvider for SystemProvider {
    fn generate_keypair(&self, model: AccountModel) -> DomainResult<RawKeyMaterial> {
        match model {
            AccountModel::Ed25519Account => {
                let signing_key = Ed25519::generate();
                Ok(Ed25519::to_raw_material(&signing_key))
            }
            AccountModel::Secp256k1Account => {
                let mnemonic = generate_mnemonic(self.mnemonic_words)?;
                Secp256k1Evm::from_mnemonic(mnemonic.expose_secret())
            }
        }
    }

    fn name(&self) -> &'static str {
        "system entropy"
    }
}
