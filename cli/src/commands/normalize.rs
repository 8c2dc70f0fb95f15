//! Normalize command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Normalize command arguments.
#[derive(Parser)]
pub struct NormalizeCommand {
    /// Text to clean up (reads --input when absent)
    pub text: Option<String>,

    /// Input file ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory with alphabet.json and confusables.json (bundled tables if not specified)
    #[arg(long)]
    pub tables: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: NormalizeCommand) -> AnyhowResult<()> {
    let engine = super::build_engine(cmd.tables.as_deref())?;

    let text = match (cmd.text, &cmd.input) {
        (Some(text), _) => text,
        (None, Some(input)) => super::read_text(input)?,
        (None, None) => super::read_text("-")?,
    };

    let normalized = engine.normalize(&text);

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, &normalized)?;
            println!("Normalized {} bytes to {}", normalized.len(), path);
        }
        None => {
            print!("{}", normalized);
            if !normalized.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
