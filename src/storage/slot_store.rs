//! Storage slots: one JSON file per account model in the working directory

use super::atomic::write_atomic;
use super::wallet_file::WalletFile;
use crate::domain::{AccountModel, CredentialRecord, PersistError};
use std::fs;
use std::path::{Path, PathBuf};

/// Permissions for files holding private keys (rw-------)
const SLOT_FILE_MODE: u32 = 0o600;

/// A named location holding at most one credential record
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageSlot {
    name: String,
}

impl StorageSlot {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Default slot for an account model ("solana" / "evm")
    pub fn for_model(model: AccountModel) -> Self {
        Self::new(model.default_slot_name())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name of the slot, e.g. `.wallet-solana.json`
    pub fn file_name(&self) -> String {
        format!(".wallet-{}.json", self.name)
    }

    /// Slot names are plain identifiers so the file always lands directly in the root
    fn is_valid_name(&self) -> bool {
        !self.name.is_empty()
            && self
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}

/// Reads and writes storage slots under a root directory
#[derive(Debug, Clone)]
pub struct SlotStore {
    root: PathBuf,
}

impl SlotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the file path of a slot, rejecting names that would leave the root
    pub fn slot_path(&self, slot: &StorageSlot) -> Result<PathBuf, PersistError> {
        if !slot.is_valid_name() {
            return Err(PersistError::IoFailure(format!(
                "slot name {:?} would resolve outside {}",
                slot.name(),
                self.root.display()
            )));
        }
        Ok(self.root.join(slot.file_name()))
    }

    /// Serialize `record` and atomically replace the slot's file.
    ///
    /// An existing file is overwritten without backup.
    pub fn persist(
        &self,
        slot: &StorageSlot,
        record: &CredentialRecord,
    ) -> Result<PathBuf, PersistError> {
        let path = self.slot_path(slot)?;

        // Ensure output directory exists
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| PersistError::io(&self.root, e))?;
        }

        let contents = WalletFile::from_record(record)
            .to_json()
            .map_err(|e| PersistError::json(&path, e))?;

        write_atomic(&path, &contents, SLOT_FILE_MODE).map_err(|e| PersistError::io(&path, e))?;

        log::debug!(
            "Persisted {} record to {}",
            record.account_model(),
            path.display()
        );
        Ok(path)
    }

    /// Read a slot back
    pub fn load(&self, slot: &StorageSlot) -> Result<WalletFile, PersistError> {
        let path = self.slot_path(slot)?;
        let bytes = fs::read(&path).map_err(|e| PersistError::io(&path, e))?;
        WalletFile::from_json(&bytes).map_err(|e| PersistError::json(&path, e))
    }

    /// Whether the slot's file is present
    pub fn exists(&self, slot: &StorageSlot) -> bool {
        self.slot_path(slot).map(|p| p.is_file()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RecordBuilder;
    use crate::crypto::{Ed25519, Secp256k1Evm};
    use tempfile::TempDir;

    const TEST_MNEMONIC: &str =
        "test test test test test test test test test test test junk";

    fn solana_record() -> CredentialRecord {
        let raw = Ed25519::to_raw_material(&Ed25519::generate());
        RecordBuilder::build(AccountModel::Ed25519Account, &raw).unwrap()
    }

    fn evm_record() -> CredentialRecord {
        let raw = Secp256k1Evm::from_mnemonic(TEST_MNEMONIC).unwrap();
        RecordBuilder::build(AccountModel::Secp256k1Account, &raw).unwrap()
    }

    #[test]
    fn test_slot_file_names() {
        assert_eq!(
            StorageSlot::for_model(AccountModel::Ed25519Account).file_name(),
            ".wallet-solana.json"
        );
        assert_eq!(
            StorageSlot::for_model(AccountModel::Secp256k1Account).file_name(),
            ".wallet-evm.json"
        );
    }

    #[test]
    fn test_persist_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = SlotStore::new(temp_dir.path());
        let slot = StorageSlot::for_model(AccountModel::Ed25519Account);
        let record = solana_record();

        let path = store.persist(&slot, &record).unwrap();
        assert_eq!(path, temp_dir.path().join(".wallet-solana.json"));
        assert!(store.exists(&slot));

        let loaded = store.load(&slot).unwrap();
        assert_eq!(loaded.address, record.address());
        assert_eq!(loaded.secret_key.as_deref(), record.secret_bytes());
        assert_eq!(loaded.verify().unwrap(), AccountModel::Ed25519Account);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_persist_overwrites_existing_slot() {
        let temp_dir = TempDir::new().unwrap();
        let store = SlotStore::new(temp_dir.path());
        let slot = StorageSlot::for_model(AccountModel::Ed25519Account);

        let first = solana_record();
        let second = solana_record();
        store.persist(&slot, &first).unwrap();
        store.persist(&slot, &second).unwrap();

        let loaded = store.load(&slot).unwrap();
        assert_eq!(loaded.address, second.address());
        assert_ne!(loaded.address, first.address());
    }

    #[test]
    fn test_persist_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("agent");
        let store = SlotStore::new(&nested);
        let slot = StorageSlot::for_model(AccountModel::Secp256k1Account);

        let path = store.persist(&slot, &evm_record()).unwrap();
        assert!(nested.exists());
        assert!(path.exists());
    }

    #[test]
    fn test_rejects_escaping_slot_names() {
        let temp_dir = TempDir::new().unwrap();
        let store = SlotStore::new(temp_dir.path());

        for name in ["../evil", "a/b", "", ".."] {
            let slot = StorageSlot::new(name);
            let err = store.persist(&slot, &evm_record()).unwrap_err();
            assert!(matches!(err, PersistError::IoFailure(_)));
        }
        assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_load_missing_slot() {
        let temp_dir = TempDir::new().unwrap();
        let store = SlotStore::new(temp_dir.path());
        let slot = StorageSlot::for_model(AccountModel::Secp256k1Account);

        assert!(!store.exists(&slot));
        assert!(matches!(store.load(&slot), Err(PersistError::IoFailure(_))));
    }
}
