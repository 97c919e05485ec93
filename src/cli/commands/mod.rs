pub mod generate;

pub use generate::{handle_generate, GenerateArgs};
