pub mod commands;
pub mod output;

pub use commands::{handle_generate, GenerateArgs};
pub use output::{print_error, print_report, render_report};
