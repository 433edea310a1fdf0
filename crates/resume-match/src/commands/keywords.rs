//! Keywords command: most frequent content words.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use resume_match_core::text::{DEFAULT_KEYWORD_COUNT, extract_keywords};

use super::read_input_file;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    /// File to scan.
    pub file: Utf8PathBuf,

    /// Number of keywords to show.
    #[arg(long, short = 'n', default_value_t = DEFAULT_KEYWORD_COUNT)]
    pub top: usize,
}

/// Print the most frequent non-stop-word tokens.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(top = args.top, "executing keywords command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let keywords = extract_keywords(&content, args.top);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
        return Ok(());
    }

    if keywords.is_empty() {
        println!("{}", "No keywords found.".yellow());
        return Ok(());
    }

    let width = keywords
        .iter()
        .map(|k| k.term.chars().count())
        .max()
        .unwrap_or(0);
    for keyword in &keywords {
        let term = format!("{:<width$}", keyword.term);
        println!("  {}  {}", term.bold(), keyword.count);
    }

    Ok(())
}
