//! Check command implementation.

use clap::Parser;
use std::path::PathBuf;

/// Check command arguments.
#[derive(Parser)]
pub struct CheckCommand {
    /// Text to check (reads --input when absent)
    pub text: Option<String>,

    /// Input file ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory with alphabet.json and confusables.json (bundled tables if not specified)
    #[arg(long)]
    pub tables: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use anyhow::Result as AnyhowResult;
use secwe_text::UnknownGrapheme;
use serde_json::json;
use unicode_normalization::is_nfc;

pub fn run(cmd: CheckCommand) -> AnyhowResult<()> {
    let engine = super::build_engine(cmd.tables.as_deref())?;

    let text = match (cmd.text, &cmd.input) {
        (Some(text), _) => text,
        (None, Some(input)) => super::read_text(input)?,
        (None, None) => super::read_text("-")?,
    };

    let confusables = engine.find_confusables(&text);
    // Whitespace and plain punctuation are layout, not orthography
    let unknown: Vec<UnknownGrapheme> = engine
        .find_unknown(&text)
        .into_iter()
        .filter(|u| {
            !u.grapheme
                .chars()
                .all(|c| c.is_whitespace() || c.is_ascii_punctuation())
        })
        .collect();
    let nfc = is_nfc(&text);

    if cmd.json {
        let report = json!({
            "confusables": confusables,
            "unknown": unknown,
            "nfc": nfc,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Confusables: {}", confusables.len());
    for m in &confusables {
        println!("  {:>6}  {:?} -> {:?}", m.position, m.found.as_str(), m.canonical.as_str());
    }

    println!("Unknown graphemes: {}", unknown.len());
    for u in &unknown {
        println!("  {:>6}  {:?}", u.position, u.grapheme.as_str());
    }

    if !nfc {
        println!("Note: text is not NFC-normalized; composition may differ from the tables");
    }

    if confusables.is_empty() && unknown.is_empty() && nfc {
        println!("Clean.");
    }

    Ok(())
}
