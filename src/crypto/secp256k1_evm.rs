//! secp256k1 operations for EVM accounts
//!
//! Private keys come from a BIP-39 mnemonic via BIP-32 at the standard Ethereum
//! path `m/44'/60'/0'/0/0`, so the phrase restores the same account in any EVM wallet.
//! Addresses are the last 20 bytes of keccak256 over the uncompressed public key,
//! rendered with the EIP-55 mixed-case checksum.

use crate::domain::{DomainError, DomainResult, RawKeyMaterial};
use alloy_primitives::Address;
use bip32::{DerivationPath, XPrv};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use tiny_keccak::{Hasher, Keccak};
use zeroize::Zeroizing;

/// BIP-44 path of the first Ethereum account
pub const EVM_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";

/// Length of an EVM address in bytes
pub const ADDRESS_LENGTH: usize = 20;

/// EVM key operations
pub struct Secp256k1Evm;

impl Secp256k1Evm {
    /// Derive provider output (address, private key, words) from a mnemonic phrase
    pub fn from_mnemonic(phrase: &str) -> DomainResult<RawKeyMaterial> {
        let private_key = Self::derive_private_key(phrase)?;
        let address = Self::address_bytes(&private_key)?;
        let words = phrase.split_whitespace().map(str::to_string).collect();

        Ok(RawKeyMaterial::Secp256k1 {
            address: address.to_vec(),
            private_key,
            mnemonic: Zeroizing::new(words),
        })
    }

    /// Derive the 32-byte private key at [`EVM_DERIVATION_PATH`]
    pub fn derive_private_key(phrase: &str) -> DomainResult<Zeroizing<Vec<u8>>> {
        // Convert mnemonic to seed (BIP-39)
        let mnemonic = bip39::Mnemonic::parse(phrase)
            .map_err(|e| DomainError::Crypto(format!("Invalid mnemonic: {}", e)))?;
        let seed = Zeroizing::new(mnemonic.to_seed(""));

        let path: DerivationPath = EVM_DERIVATION_PATH
            .parse()
            .map_err(|e| DomainError::Crypto(format!("Invalid derivation path: {:?}", e)))?;

        let child_xprv = XPrv::derive_from_path(&seed[..], &path)
            .map_err(|e| DomainError::Crypto(format!("Derivation failed: {}", e)))?;

        Ok(Zeroizing::new(child_xprv.private_key().to_bytes().to_vec()))
    }

    /// Address bytes of a private key
    ///
    /// # Algorithm
    /// 1. private key (32B) → uncompressed public key (65B)
    /// 2. drop the 0x04 prefix (64B)
    /// 3. keccak256 → 32B, keep the last 20B
    pub fn address_bytes(private_key: &[u8]) -> DomainResult<[u8; ADDRESS_LENGTH]> {
        let secret_key = SecretKey::from_slice(private_key).map_err(|e| {
            DomainError::Encoding(format!("Invalid secp256k1 private key: {}", e))
        })?;

        let secp = Secp256k1::signing_only();
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);
        let encoded = public_key.serialize_uncompressed();

        let mut hasher = Keccak::v256();
        let mut hash = [0u8; 32];
        hasher.update(&encoded[1..]);
        hasher.finalize(&mut hash);

        let mut address = [0u8; ADDRESS_LENGTH];
        address.copy_from_slice(&hash[12..]);
        Ok(address)
    }

    /// EIP-55 checksummed `0x` address for raw address bytes
    pub fn to_checksum_address(address: &[u8]) -> DomainResult<String> {
        if address.len() != ADDRESS_LENGTH {
            return Err(DomainError::Encoding(format!(
                "Invalid EVM address length: {} (expected {})",
                address.len(),
                ADDRESS_LENGTH
            )));
        }
        Ok(Address::from_slice(address).to_checksum(None))
    }

    /// Checksummed address straight from a `0x`-prefixed private key hex string
    pub fn address_from_private_key_hex(private_key_hex: &str) -> DomainResult<String> {
        let stripped = private_key_hex
            .strip_prefix("0x")
            .unwrap_or(private_key_hex);
        let bytes = Zeroizing::new(
            hex::decode(stripped)
                .map_err(|e| DomainError::Encoding(format!("Invalid private key hex: {}", e)))?,
        );
        let address = Self::address_bytes(&bytes)?;
        Self::to_checksum_address(&address)
    }

    /// Whether a string is a valid address whose mixed case matches its EIP-55 checksum
    pub fn is_valid_checksum_address(address: &str) -> bool {
        Address::parse_checksummed(address, None).is_ok()
    }
}
