pub mod account_model;
pub mod credential_record;
pub mod error;
pub mod raw_material;

// Re-export commonly used types
pub use account_model::AccountModel;
pub use credential_record::{CredentialRecord, SecretMaterial, WALLET_WARNING};
pub use error::{DomainError, DomainResult, PersistError};
pub use raw_material::RawKeyMaterial;
