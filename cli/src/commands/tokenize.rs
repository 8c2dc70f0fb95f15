//! Tokenize command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Tokenize command arguments.
#[derive(Parser)]
pub struct TokenizeCommand {
    /// Words to break into graphemes
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Directory with alphabet.json and confusables.json (bundled tables if not specified)
    #[arg(long)]
    pub tables: Option<PathBuf>,

    /// Show the rank of each grapheme
    #[arg(short, long, default_value_t = false)]
    pub ranks: bool,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: TokenizeCommand) -> AnyhowResult<()> {
    let engine = super::build_engine(cmd.tables.as_deref())?;

    for word in &cmd.words {
        let tokens = engine.tokenize(word);
        let shown: Vec<String> = if cmd.ranks {
            tokens
                .iter()
                .map(|token| format!("{}({})", token, engine.alphabet().rank_of(token)))
                .collect()
        } else {
            tokens
        };
        println!("{}\t{}", word, shown.join(" "));
    }

    Ok(())
}
