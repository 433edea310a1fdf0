//! ATS command: formatting and structure checks for a resume.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use resume_match_core::Vocabulary;
use resume_match_core::ats::{self, AtsChecks, AtsResult};

use super::{paint_score, read_input_file};

/// Arguments for the `ats` subcommand.
#[derive(Args, Debug)]
pub struct AtsArgs {
    /// Resume as plain text.
    pub resume: Utf8PathBuf,

    /// Fail if the ATS score is below this value (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,

    /// Also print general ATS tips.
    #[arg(long)]
    pub tips: bool,
}

#[derive(Serialize)]
struct AtsOutput<'a> {
    #[serde(flatten)]
    result: AtsResult,
    checks: AtsChecks,
    action_verbs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tips: Option<&'a [&'a str]>,
}

/// Score a resume for ATS compliance.
#[instrument(name = "cmd_ats", skip_all, fields(resume = %args.resume))]
pub fn cmd_ats(
    args: AtsArgs,
    global_json: bool,
    vocab: &Vocabulary,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, tips = args.tips, "executing ats command");

    let content = read_input_file(&args.resume, max_input_bytes)?;
    let min_score = args.min_score.or(config_min_score);

    let checks = ats::run_checks(vocab, &content);
    let result = ats::score_checks(vocab, &checks);
    let action_verbs = ats::extract_action_verbs(vocab, &content);
    let score = result.score;

    if global_json {
        let output = AtsOutput {
            result,
            checks,
            action_verbs,
            tips: args.tips.then(ats::ats_tips),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "ATS score:".bold(), paint_score(score));
        if result.issues.is_empty() {
            println!("{}", "No issues found.".green());
        }
        for issue in &result.issues {
            println!("  {} {issue}", "-".yellow());
        }

        println!();
        println!(
            "{}",
            format!(
                "{} words, keyword density {:.2}, {} action verbs",
                checks.word_count,
                checks.keyword_density,
                action_verbs.len(),
            )
            .dimmed()
        );

        if args.tips {
            println!();
            println!("{}", "Tips".bold().underline());
            for tip in ats::ats_tips() {
                println!("  {tip}");
            }
        }
    }

    if let Some(min) = min_score
        && score < min
    {
        bail!("{} has an ATS score of {score} (min: {min})", args.resume);
    }

    Ok(())
}
