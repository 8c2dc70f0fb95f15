//! Sort command implementation.

use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;

/// Sort command arguments.
#[derive(Parser)]
pub struct SortCommand {
    /// Words to sort (lines from --input are appended)
    pub words: Vec<String>,

    /// File with one word per line ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory with alphabet.json and confusables.json (bundled tables if not specified)
    #[arg(long)]
    pub tables: Option<PathBuf>,

    /// Sort in reverse order
    #[arg(short, long, default_value_t = false)]
    pub reverse: bool,

    /// Drop repeated identical words, keeping the first occurrence
    #[arg(short, long, default_value_t = false)]
    pub unique: bool,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: SortCommand) -> AnyhowResult<()> {
    let engine = super::build_engine(cmd.tables.as_deref())?;

    // Collect words from arguments and/or the input file
    let mut words = cmd.words;
    if let Some(input) = &cmd.input {
        let text = super::read_text(input)?;
        words.extend(
            text.lines()
                .map(|line| line.trim().to_string())
                .filter(|line| !line.is_empty()),
        );
    }

    let mut sorted = engine.sort_words(words);
    if cmd.unique {
        dedup_identical(&mut sorted);
    }
    if cmd.reverse {
        sorted.reverse();
    }

    for word in &sorted {
        println!("{}", word);
    }

    Ok(())
}

/// Drop every repeat of a word already kept, wherever it appears.
///
/// After a stable sort, identical words can be separated by case variants
/// that compare equal, so adjacent-only dedup is not enough.
fn dedup_identical(words: &mut Vec<String>) {
    let mut seen = HashSet::new();
    words.retain(|word| seen.insert(word.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_drops_nonadjacent_repeats() {
        let mut words: Vec<String> = ["kwa", "KWA", "kwa", "ab"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        dedup_identical(&mut words);
        assert_eq!(words, vec!["kwa", "KWA", "ab"]);
    }

    #[test]
    fn test_dedup_keeps_distinct_case_variants() {
        let mut words: Vec<String> = ["Kwa", "kwa"].iter().map(|w| w.to_string()).collect();
        dedup_identical(&mut words);
        assert_eq!(words, vec!["Kwa", "kwa"]);
    }
}
