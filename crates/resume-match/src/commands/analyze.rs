//! Analyze command: full resume/job comparison.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use resume_match_core::suggestions::Priority;
use resume_match_core::{FullAnalysisReport, InputPolicy, Vocabulary, run_full_analysis};

use super::{paint_score, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Resume as plain text.
    pub resume: Utf8PathBuf,

    /// Job description as plain text.
    pub job: Utf8PathBuf,

    /// Fail if the match score is below this value (0-100).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub min_score: Option<u8>,
}

/// Compare a resume with a job description.
#[instrument(name = "cmd_analyze", skip_all, fields(resume = %args.resume, job = %args.job))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    vocab: &Vocabulary,
    policy: &InputPolicy,
    config_min_score: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(min_score = ?args.min_score, "executing analyze command");

    let resume = read_input_file(&args.resume, max_input_bytes)?;
    let job = read_input_file(&args.job, max_input_bytes)?;
    let min_score = args.min_score.or(config_min_score);

    let report = run_full_analysis(&resume, &job, vocab, policy)
        .with_context(|| format!("failed to analyze {} against {}", args.resume, args.job))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(min) = min_score
        && report.match_score < min
    {
        bail!(
            "{} matches {} at {} (min: {min}). Add the missing skills and mirror the job's wording.",
            args.resume,
            args.job,
            report.match_score,
        );
    }

    Ok(())
}

fn join_or_none(skills: impl Iterator<Item = impl AsRef<str>>) -> String {
    let joined = skills
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

fn print_report(report: &FullAnalysisReport) {
    println!(
        "{} {} ({})",
        "Match score:".bold(),
        paint_score(report.match_score),
        report.match_category,
    );
    println!(
        "{} {}%",
        "Skill coverage:".bold(),
        report.skill_match
    );

    println!();
    println!("{}", "Skills".bold().underline());
    println!(
        "{}: {}",
        "Matching".dimmed(),
        join_or_none(report.matching_skills.iter()).green()
    );
    println!(
        "{}: {}",
        "Missing".dimmed(),
        join_or_none(report.missing_skills.iter()).red()
    );

    if !report.suggestions.is_empty() {
        println!();
        println!("{}", "Suggestions".bold().underline());
        for suggestion in &report.suggestions {
            let tag = match suggestion.priority {
                Priority::High => "high".red().to_string(),
                Priority::Medium => "medium".yellow().to_string(),
                Priority::Low => "low".dimmed().to_string(),
            };
            println!("  [{tag}] {}: {}", suggestion.kind, suggestion.message);
        }
    }

    println!();
    println!(
        "{} {}",
        "ATS score:".bold(),
        paint_score(report.ats.score)
    );
    for issue in &report.ats.issues {
        println!("  {} {issue}", "-".yellow());
    }

    println!();
    println!(
        "{}",
        format!(
            "{} resume words, {} job words, {} ms",
            report.metadata.resume_word_count,
            report.metadata.job_description_word_count,
            report.metadata.processing_time_ms,
        )
        .dimmed()
    );
}
