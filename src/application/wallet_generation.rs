use super::record_builder::RecordBuilder;
use crate::config::WalletLayout;
use crate::crypto::CredentialProvider;
use crate::domain::{AccountModel, CredentialRecord, DomainError};
use crate::storage::{ExclusionOutcome, SlotStore, StorageSlot};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Steps of a generation run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStep {
    GenerateEd25519,
    GenerateSecp256k1,
    BuildRecords,
    PersistEd25519,
    PersistSecp256k1,
    EnsureExcluded,
}

impl RunStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenerateEd25519 => "generate ed25519 keypair",
            Self::GenerateSecp256k1 => "generate secp256k1 keypair",
            Self::BuildRecords => "build credential records",
            Self::PersistEd25519 => "persist ed25519 wallet",
            Self::PersistSecp256k1 => "persist secp256k1 wallet",
            Self::EnsureExcluded => "update exclusion list",
        }
    }

    fn persist_step(model: AccountModel) -> Self {
        match model {
            AccountModel::Ed25519Account => Self::PersistEd25519,
            AccountModel::Secp256k1Account => Self::PersistSecp256k1,
        }
    }

    fn generate_step(model: AccountModel) -> Self {
        match model {
            AccountModel::Ed25519Account => Self::GenerateEd25519,
            AccountModel::Secp256k1Account => Self::GenerateSecp256k1,
        }
    }
}

impl fmt::Display for RunStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal failure of a run: the step that failed and why.
///
/// Steps completed before the failure keep their side effects.
#[derive(Debug, Error)]
#[error("{step} failed: {error}")]
pub struct RunAborted {
    pub step: RunStep,
    pub error: DomainError,
}

fn at(step: RunStep) -> impl Fn(DomainError) -> RunAborted {
    move |error| RunAborted { step, error }
}

/// A credential that was written to its slot
#[derive(Debug)]
pub struct GeneratedWallet {
    pub record: CredentialRecord,
    pub slot: StorageSlot,
    pub path: PathBuf,
}

/// Everything a successful run produced
#[derive(Debug)]
pub struct GenerationReport {
    pub wallets: Vec<GeneratedWallet>,
    pub exclusion_path: PathBuf,
    pub exclusion: ExclusionOutcome,
}

impl GenerationReport {
    pub fn wallet(&self, model: AccountModel) -> Option<&GeneratedWallet> {
        self.wallets
            .iter()
            .find(|w| w.record.account_model() == model)
    }
}

/// One-shot generation run: keys → records → slots → exclusion list
pub struct WalletGeneration<'a> {
    provider: &'a dyn CredentialProvider,
    layout: &'a WalletLayout,
}

impl<'a> WalletGeneration<'a> {
    pub fn new(provider: &'a dyn CredentialProvider, layout: &'a WalletLayout) -> Self {
        Self { provider, layout }
    }

    /// Execute every step in order, stopping at the first failure
    pub fn run(&self) -> Result<GenerationReport, RunAborted> {
        let mut raw_materials = Vec::with_capacity(AccountModel::ALL.len());
        for model in AccountModel::ALL {
            log::info!("Generating {} key material via {}", model, self.provider.name());
            let raw = self
                .provider
                .generate_keypair(model)
                .map_err(at(RunStep::generate_step(model)))?;
            raw_materials.push((model, raw));
        }

        let records = raw_materials
            .iter()
            .map(|(model, raw)| RecordBuilder::build(*model, raw))
            .collect::<Result<Vec<_>, _>>()
            .map_err(at(RunStep::BuildRecords))?;
        // Raw buffers are wiped here; only the records carry secrets from now on
        drop(raw_materials);

        let store = SlotStore::new(self.layout.root());
        let mut wallets = Vec::with_capacity(records.len());
        for record in records {
            let model = record.account_model();
            let slot = self.layout.slot_for(model);
            let path = store
                .persist(&slot, &record)
                .map_err(DomainError::from)
                .map_err(at(RunStep::persist_step(model)))?;
            log::info!("Saved {} wallet {} to {}", model, record.address(), path.display());
            wallets.push(GeneratedWallet { record, slot, path });
        }

        let exclusion_list = self.layout.exclusion_list();
        let exclusion = exclusion_list
            .ensure_excluded(&self.layout.exclusion_patterns)
            .map_err(DomainError::from)
            .map_err(at(RunStep::EnsureExcluded))?;

        Ok(GenerationReport {
            wallets,
            exclusion_path: exclusion_list.path().to_path_buf(),
            exclusion,
        })
    }
}
