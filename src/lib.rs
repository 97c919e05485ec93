// Library exports for testing and external integration

pub mod application;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod domain;
pub mod storage;

// Re-export commonly used items
pub use application::{GenerationReport, RecordBuilder, RunAborted, RunStep, WalletGeneration};
pub use config::WalletLayout;
pub use crypto::{CredentialProvider, SystemProvider};
pub use domain::{
    AccountModel, CredentialRecord, DomainError, DomainResult, PersistError, RawKeyMaterial,
};
pub use storage::{ExclusionList, ExclusionOutcome, SlotStore, StorageSlot, WalletFile};
