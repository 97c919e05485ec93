use std::io;
use std::path::Path;
use thiserror::Error;

/// Domain-level errors for wallet generation
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Credential provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Account model mismatch: expected {expected} key material, got {actual}")]
    ModelMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Cryptographic operation failed: {0}")]
    Crypto(String),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures while writing or reading storage slots and the exclusion list
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O failure: {0}")]
    IoFailure(String),
}

impl PersistError {
    /// Attach the offending path to an I/O error
    pub fn io(path: &Path, err: io::Error) -> Self {
        Self::IoFailure(format!("{}: {}", path.display(), err))
    }

    pub fn json(path: &Path, err: serde_json::Error) -> Self {
        Self::IoFailure(format!("{}: {}", path.display(), err))
    }
}
