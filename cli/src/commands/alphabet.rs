//! Alphabet command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Alphabet command arguments.
#[derive(Parser)]
pub struct AlphabetCommand {
    /// Directory with alphabet.json and confusables.json (bundled tables if not specified)
    #[arg(long)]
    pub tables: Option<PathBuf>,

    /// One grapheme per line with its rank
    #[arg(short, long, default_value_t = false)]
    pub ranks: bool,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: AlphabetCommand) -> AnyhowResult<()> {
    let engine = super::build_engine(cmd.tables.as_deref())?;

    if cmd.ranks {
        for entry in engine.alphabet().entries() {
            println!("{:>4}  {}", entry.rank, entry.character);
        }
    } else {
        println!("{}", engine.canonical_alphabet().join(" "));
    }

    Ok(())
}
