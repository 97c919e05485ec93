use crate::application::WalletGeneration;
use crate::cli::output::print_report;
use crate::config::{WalletLayout, DEFAULT_MNEMONIC_WORDS};
use crate::crypto::SystemProvider;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Directory for the wallet files and .gitignore
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Number of words in the EVM mnemonic (12 or 24)
    #[arg(long, default_value_t = DEFAULT_MNEMONIC_WORDS, value_parser = parse_word_count)]
    pub words: usize,
}

fn parse_word_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n @ (12 | 24)) => Ok(n),
        _ => Err(format!("expected 12 or 24, got {}", s)),
    }
}

pub fn handle_generate(args: GenerateArgs) -> Result<()> {
    let layout = WalletLayout::in_dir(args.dir).with_mnemonic_words(args.words);

    println!("⚙️  Generating wallets...\n");

    let provider = SystemProvider::new(layout.mnemonic_words)
        .context("Cannot initialise the credential provider")?;
    let report = WalletGeneration::new(&provider, &layout).run()?;

    print_report(&report);
    Ok(())
}
