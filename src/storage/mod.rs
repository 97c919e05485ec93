pub mod atomic;
pub mod exclusion;
pub mod slot_store;
pub mod wallet_file;

// Re-export commonly used items
pub use exclusion::{ExclusionList, ExclusionOutcome, EXCLUSION_FILE_NAME, EXCLUSION_HEADER};
pub use slot_store::{SlotStore, StorageSlot};
pub use wallet_file::WalletFile;
