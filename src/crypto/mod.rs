pub mod ed25519;
pub mod mnemonic;
pub mod provider;
pub mod secp256k1_evm;

// Re-export commonly used items
pub use ed25519::Ed25519;
pub use mnemonic::{generate_mnemonic, normalize_mnemonic, validate_mnemonic_words};
pub use provider::{CredentialProvider, SystemProvider};
pub use secp256k1_evm::{Secp256k1Evm, EVM_DERIVATION_PATH};
