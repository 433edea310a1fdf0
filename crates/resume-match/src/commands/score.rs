//! Score command: match score only.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use resume_match_core::similarity::{calculate_match_score, score_result};

use super::{paint_score, read_input_file};

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Resume as plain text.
    pub resume: Utf8PathBuf,

    /// Job description as plain text.
    pub job: Utf8PathBuf,

    /// Fail if the match score is below this value (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Print the match score and its category.
#[instrument(name = "cmd_score", skip_all, fields(resume = %args.resume, job = %args.job))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, "executing score command");

    let resume = read_input_file(&args.resume, max_input_bytes)?;
    let job = read_input_file(&args.job, max_input_bytes)?;
    let min_score = args.min_score.or(config_min_score);

    let result = score_result(calculate_match_score(&resume, &job));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(min) = min_score {
        if result.match_score < min {
            bail!(
                "{} scores {} against {} (min: {min}).",
                args.resume,
                result.match_score,
                args.job,
            );
        }
        println!(
            "{} {} scores {} ({}, min: {min})",
            "PASS:".green(),
            args.resume,
            paint_score(result.match_score),
            result.category,
        );
    } else {
        println!("{} ({})", paint_score(result.match_score), result.category);
    }

    if global_json
        && let Some(min) = min_score
        && result.match_score < min
    {
        bail!("match score {} is below {min}", result.match_score);
    }

    Ok(())
}
