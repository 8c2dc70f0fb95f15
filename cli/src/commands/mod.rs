//! CLI commands for the secwe tool.

pub mod alphabet;
pub mod check;
pub mod normalize;
pub mod sort;
pub mod tokenize;

pub use alphabet::AlphabetCommand;
pub use check::CheckCommand;
pub use normalize::NormalizeCommand;
pub use sort::SortCommand;
pub use tokenize::TokenizeCommand;

use anyhow::Result as AnyhowResult;
use secwe_text::TextEngine;
use std::path::Path;

/// Build an engine from `--tables DIR`, or the bundled tables without it.
pub(crate) fn build_engine(tables: Option<&Path>) -> AnyhowResult<TextEngine> {
    let engine = match tables {
        Some(dir) => TextEngine::load(dir)?,
        None => TextEngine::bundled()?,
    };
    Ok(engine)
}

/// Read text from a file path, or from stdin if the path is "-".
pub(crate) fn read_text(input: &str) -> AnyhowResult<String> {
    if input == "-" {
        use std::io::Read;
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
