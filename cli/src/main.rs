//! Secwe CLI - Command-line interface for the Secwépemctsín text engine.
//!
//! This is the main entry point for the `secwe` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AlphabetCommand, CheckCommand, NormalizeCommand, SortCommand, TokenizeCommand};

#[derive(Parser)]
#[command(name = "secwe")]
#[command(about = "Sort, tokenize and clean up Secwépemctsín text", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sort words in alphabet order
    Sort(SortCommand),
    /// Show the grapheme breakdown of words
    Tokenize(TokenizeCommand),
    /// Replace confusable characters with their canonical forms
    Normalize(NormalizeCommand),
    /// Report confusables and unknown graphemes in text
    Check(CheckCommand),
    /// Print the canonical alphabet
    Alphabet(AlphabetCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sort(cmd) => commands::sort::run(cmd)?,
        Commands::Tokenize(cmd) => commands::tokenize::run(cmd)?,
        Commands::Normalize(cmd) => commands::normalize::run(cmd)?,
        Commands::Check(cmd) => commands::check::run(cmd)?,
        Commands::Alphabet(cmd) => commands::alphabet::run(cmd)?,
    }

    Ok(())
}
