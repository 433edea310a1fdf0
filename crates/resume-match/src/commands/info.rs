//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use resume_match_core::config::{Config, ConfigSources};
use resume_match_core::{AtsRules, Vocabulary};
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    homepage: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            homepage: env!("CARGO_PKG_HOMEPAGE"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    min_resume_chars: usize,
    min_job_description_chars: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    match_min_score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ats_min_score: Option<u8>,
    ats_rules: AtsRules,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources, vocab: &Vocabulary) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            min_resume_chars: config.min_resume_chars,
            min_job_description_chars: config.min_job_description_chars,
            match_min_score: config.match_min_score,
            ats_min_score: config.ats_min_score,
            ats_rules: *vocab.ats_rules(),
        }
    }
}

#[derive(Serialize)]
struct VocabularyInfo {
    technical_skills: usize,
    soft_skills: usize,
    action_verbs: usize,
    section_headers: usize,
    forbidden_chars: usize,
}

impl VocabularyInfo {
    fn from_vocabulary(vocab: &Vocabulary) -> Self {
        Self {
            technical_skills: vocab.technical_skills().len(),
            soft_skills: vocab.soft_skills().len(),
            action_verbs: vocab.action_verbs().len(),
            section_headers: vocab.section_headers().len(),
            forbidden_chars: vocab.forbidden_chars().len(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
    vocabulary: VocabularyInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
/// * `vocab` - Vocabulary built from the configuration
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
    vocab: &Vocabulary,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources, vocab),
        vocabulary: VocabularyInfo::from_vocabulary(vocab),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        full_info.package.name.bold(),
        full_info.package.version.green()
    );
    if !full_info.package.description.is_empty() {
        println!("{}", full_info.package.description);
    }
    if !full_info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), full_info.package.license);
    }
    if !full_info.package.repository.is_empty() {
        println!(
            "{}: {}",
            "Repository".dimmed(),
            full_info.package.repository.cyan()
        );
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    if let Some(ref path) = cfg.config_file {
        println!("{}: {}", "Config file".dimmed(), path.cyan());
    } else {
        println!("{}: {}", "Config file".dimmed(), "none loaded".yellow());
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    println!("{}: {}", "Min resume chars".dimmed(), cfg.min_resume_chars);
    println!(
        "{}: {}",
        "Min job description chars".dimmed(),
        cfg.min_job_description_chars
    );

    println!();
    println!("{}", "Quality Gates".bold().underline());
    print_opt("Match min score", &cfg.match_min_score);
    print_opt("ATS min score", &cfg.ats_min_score);
    println!(
        "{}: {:.1}",
        "ATS min keyword density".dimmed(),
        cfg.ats_rules.min_keyword_density
    );
    println!(
        "{}: {}-{}",
        "ATS word range".dimmed(),
        cfg.ats_rules.min_words,
        cfg.ats_rules.max_words
    );

    let v = &full_info.vocabulary;
    println!();
    println!("{}", "Vocabulary".bold().underline());
    println!("{}: {}", "Technical skills".dimmed(), v.technical_skills);
    println!("{}: {}", "Soft skills".dimmed(), v.soft_skills);
    println!("{}: {}", "Action verbs".dimmed(), v.action_verbs);

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: &Option<T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}
