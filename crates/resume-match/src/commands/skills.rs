//! Skills command: skill extraction, categories and proficiency.

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use resume_match_core::Vocabulary;
use resume_match_core::skills::{
    self, Proficiency, SkillAnalysisReport, SkillCategory, SkillSet,
};

use super::read_input_file;

/// Arguments for the `skills` subcommand.
#[derive(Args, Debug)]
pub struct SkillsArgs {
    /// File to scan.
    pub file: Utf8PathBuf,

    /// Estimate proficiency for each skill.
    #[arg(long)]
    pub proficiency: bool,

    /// Compare against a job description and show gaps.
    #[arg(long, value_name = "JOB", conflicts_with = "category")]
    pub against: Option<Utf8PathBuf>,

    /// Only show skills in this category.
    #[arg(long, value_enum)]
    pub category: Option<SkillCategory>,
}

#[derive(Serialize)]
struct SkillsOutput {
    skills: SkillSet,
    by_category: BTreeMap<SkillCategory, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    proficiency: Option<BTreeMap<String, Proficiency>>,
}

/// List the skills in a file, or compare them with a job description.
#[instrument(name = "cmd_skills", skip_all, fields(file = %args.file))]
pub fn cmd_skills(
    args: SkillsArgs,
    global_json: bool,
    vocab: &Vocabulary,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        proficiency = args.proficiency,
        against = ?args.against,
        category = ?args.category,
        "executing skills command"
    );

    let content = read_input_file(&args.file, max_input_bytes)?;

    if let Some(ref job_path) = args.against {
        let job = read_input_file(job_path, max_input_bytes)?;
        let report = skills::detailed_skill_analysis(vocab, &content, &job);
        if global_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_comparison(&report, args.proficiency.then_some(content.as_str()));
        }
        return Ok(());
    }

    let mut found = skills::extract_skills(vocab, &content);
    let mut by_category = skills::group_skills_by_category(vocab, found.iter());
    if let Some(category) = args.category {
        by_category.retain(|c, _| *c == category);
        found = by_category.values().flatten().collect();
    }

    let proficiency = args.proficiency.then(|| {
        found
            .iter()
            .map(|s| (s.to_string(), skills::estimate_proficiency(&content, s)))
            .collect::<BTreeMap<_, _>>()
    });

    if global_json {
        let output = SkillsOutput {
            skills: found,
            by_category,
            proficiency,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if found.is_empty() {
        println!("{}", "No known skills found.".yellow());
        return Ok(());
    }

    for (category, names) in &by_category {
        println!("{}", category.to_string().bold().underline());
        for name in names {
            match proficiency.as_ref().and_then(|p| p.get(name)) {
                Some(level) => println!("  {name} {}", format!("({level})").dimmed()),
                None => println!("  {name}"),
            }
        }
    }

    Ok(())
}

fn print_comparison(report: &SkillAnalysisReport, proficiency_text: Option<&str>) {
    println!(
        "{} {}/{} ({}%)",
        "Matching:".bold(),
        report.matching.count,
        report.job_skills.count,
        report.matching.percentage,
    );
    for skill in report.matching.skills.iter() {
        match proficiency_text {
            Some(text) => println!(
                "  {} {skill} {}",
                "+".green(),
                format!("({})", skills::estimate_proficiency(text, skill)).dimmed()
            ),
            None => println!("  {} {skill}", "+".green()),
        }
    }

    if report.missing.count > 0 {
        println!();
        println!("{} {}", "Missing:".bold(), report.missing.count);
        for skill in report.missing.skills.iter() {
            println!("  {} {skill}", "-".red());
        }
    }

    if !report.missing.recommendations.is_empty() {
        println!();
        println!("{}", "Recommendations".bold().underline());
        for rec in &report.missing.recommendations {
            println!("  {} [{}]", rec.skill.bold(), rec.priority);
            for resource in &rec.learning_resources {
                println!("    {}", resource.dimmed());
            }
        }
    }

    let extra: Vec<&str> = report
        .resume_skills
        .all
        .iter()
        .filter(|s| !report.job_skills.all.contains(s))
        .collect();
    if !extra.is_empty() {
        println!();
        println!("{} {}", "Also on resume:".dimmed(), extra.join(", "));
    }
}
