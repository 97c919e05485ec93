use crate::application::GenerationReport;
use crate::domain::AccountModel;
use crate::storage::ExclusionOutcome;
use std::fmt::{Display, Write};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", RULE);
}

/// Human-readable summary of a run. Contains addresses and file names, never secrets.
pub fn render_report(report: &GenerationReport) -> String {
    let mut out = String::new();

    if let ExclusionOutcome::Appended(_) = report.exclusion {
        let _ = writeln!(
            out,
            "✅ Added wallet files to {}\n",
            report.exclusion_path.display()
        );
    }
    let _ = writeln!(out, "✅ Wallets generated successfully!\n");

    for wallet in &report.wallets {
        let icon = match wallet.record.account_model() {
            AccountModel::Ed25519Account => "🟣",
            AccountModel::Secp256k1Account => "🔷",
        };
        section(
            &mut out,
            &format!("{} {}", icon, wallet.record.account_model().display_name()),
        );
        let _ = writeln!(out, "Address: {}", wallet.record.address());
        let _ = writeln!(out, "Saved to: {}\n", wallet.path.display());
    }

    section(&mut out, "⚠️  NEXT STEPS");
    let _ = writeln!(out, "1. Fund these wallets from an exchange");
    let _ = writeln!(out, "   Solana: Need ~0.1+ SOL");
    let _ = writeln!(out, "   EVM: Need gas + swap amount (~$10+)");
    let _ = writeln!(out);
    let _ = writeln!(out, "2. Your AI agent can now load these wallets:");
    if let Some(wallet) = report.wallet(AccountModel::Ed25519Account) {
        let _ = writeln!(
            out,
            "   const wallet = require(\"./{}\");",
            wallet.slot.file_name()
        );
    }
    let _ = writeln!(out);

    section(&mut out, "🔐 SECURITY REMINDERS");
    let _ = writeln!(out, "❌ NEVER commit .wallet-*.json to git");
    let _ = writeln!(out, "❌ NEVER share private keys");
    let _ = writeln!(out, "✅ Keep backups in secure location");
    let _ = writeln!(out, "✅ Start with small test amounts");
    let _ = writeln!(out, "⚠️  Re-running overwrites these wallet files without backup");

    out
}

pub fn print_report(report: &GenerationReport) {
    print!("{}", render_report(report));
}

pub fn print_error(message: impl Display) {
    eprintln!("❌ {}", message);
}
