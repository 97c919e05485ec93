use agent_wallet_gen::cli::{handle_generate, print_error, GenerateArgs};
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "agent-wallet-gen")]
#[command(about = "Generate Solana and EVM wallets for an autonomous agent", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    generate: GenerateArgs,
}

fn main() -> ExitCode {
    // Stdout carries the report; use RUST_LOG=info to trace the individual steps
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match handle_generate(cli.generate) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(format!("Error generating wallets: {:#}", e));
            ExitCode::FAILURE
        }
    }
}
