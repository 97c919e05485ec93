pub mod record_builder;
pub mod wallet_generation;

// Re-export commonly used items
pub use record_builder::RecordBuilder;
pub use wallet_generation::{
    GeneratedWallet, GenerationReport, RunAborted, RunStep, WalletGeneration,
};
