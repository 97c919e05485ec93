// Layout of the files a generation run touches

use crate::domain::AccountModel;
use crate::storage::{ExclusionList, StorageSlot, EXCLUSION_FILE_NAME};
use std::path::{Path, PathBuf};

/// Ignore patterns covering every slot file name
pub const DEFAULT_EXCLUSION_PATTERNS: [&str; 2] = [".wallet-*.json", ".wallet-*.txt"];

/// Default BIP-39 mnemonic length for EVM wallets
pub const DEFAULT_MNEMONIC_WORDS: usize = 12;

/// Where and how wallets are written
#[derive(Debug, Clone)]
pub struct WalletLayout {
    /// Directory holding the slot files and the exclusion list
    pub root: PathBuf,
    pub ed25519_slot: String,
    pub secp256k1_slot: String,
    pub exclusion_file: String,
    pub exclusion_patterns: Vec<String>,
    pub mnemonic_words: usize,
}

impl Default for WalletLayout {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            ed25519_slot: AccountModel::Ed25519Account.default_slot_name().to_string(),
            secp256k1_slot: AccountModel::Secp256k1Account.default_slot_name().to_string(),
            exclusion_file: EXCLUSION_FILE_NAME.to_string(),
            exclusion_patterns: DEFAULT_EXCLUSION_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            mnemonic_words: DEFAULT_MNEMONIC_WORDS,
        }
    }
}

impl WalletLayout {
    /// Default layout rooted at `root`
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_mnemonic_words(mut self, words: usize) -> Self {
        self.mnemonic_words = words;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Storage slot assigned to an account model
    pub fn slot_for(&self, model: AccountModel) -> StorageSlot {
        match model {
            AccountModel::Ed25519Account => StorageSlot::new(self.ed25519_slot.as_str()),
            AccountModel::Secp256k1Account => StorageSlot::new(self.secp256k1_slot.as_str()),
        }
    }

    pub fn exclusion_list(&self) -> ExclusionList {
        ExclusionList::new(self.root.join(&self.exclusion_file))
    }
}
