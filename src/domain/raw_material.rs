use super::account_model::AccountModel;
use std::fmt;
use zeroize::Zeroizing;

/// Key material as handed out by a credential provider, before any encoding.
///
/// Byte buffers are plain `Vec`s rather than fixed arrays so that a malformed
/// provider can be caught by the record builder instead of at construction.
/// All secret buffers are wiped on drop.
pub enum RawKeyMaterial {
    Ed25519 {
        /// 32-byte compressed Edwards point
        public_key: Vec<u8>,
        /// 64-byte keypair: seed followed by public key
        secret_key: Zeroizing<Vec<u8>>,
    },
    Secp256k1 {
        /// 20-byte account address (last 20 bytes of keccak256(pubkey))
        address: Vec<u8>,
        /// 32-byte scalar
        private_key: Zeroizing<Vec<u8>>,
        /// BIP-39 words the private key was derived from
        mnemonic: Zeroizing<Vec<String>>,
    },
}

impl RawKeyMaterial {
    /// Account model this material belongs to
    pub fn account_model(&self) -> AccountModel {
        match self {
            Self::Ed25519 { .. } => AccountModel::Ed25519Account,
            Self::Secp256k1 { .. } => AccountModel::Secp256k1Account,
        }
    }
}

impl fmt::Debug for RawKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 { public_key, .. } => f
                .debug_struct("Ed25519")
                .field("public_key", &hex::encode(public_key))
                .field("secret_key", &"[REDACTED]")
                .finish(),
            Self::Secp256k1 { address, .. } => f
                .debug_struct("Secp256k1")
                .field("address", &hex::encode(address))
                .field("private_key", &"[REDACTED]")
                .field("mnemonic", &"[REDACTED]")
                .finish(),
        }
    }
}
