//! Core library for resume-match.
//!
//! This crate provides the matching and scoring engine used by the
//! `resume-match` CLI and MCP server, plus configuration loading.
//!
//! # Modules
//!
//! - [`vocabulary`] - Immutable skill, header and verb lists with compiled matchers
//! - [`text`] - Normalization, tokenization and keyword ranking
//! - [`skills`] - Skill extraction, matching, proficiency and categories
//! - [`similarity`] - Jaccard + TF-IDF cosine match score
//! - [`ats`] - ATS compliance heuristics
//! - [`suggestions`] - Ordered improvement suggestions
//! - [`analysis`] - Full resume/job comparison with input validation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use resume_match_core::{InputPolicy, Vocabulary, run_full_analysis};
//!
//! let resume = std::fs::read_to_string("resume.txt").unwrap();
//! let job = std::fs::read_to_string("job.txt").unwrap();
//! let report = run_full_analysis(&resume, &job, Vocabulary::standard(), &InputPolicy::default())
//!     .expect("inputs long enough");
//!
//! println!("{} ({})", report.match_score, report.match_category);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod ats;
pub mod config;
pub mod error;
pub mod similarity;
pub mod skills;
pub mod suggestions;
pub mod text;
pub mod vocabulary;
pub mod word_lists;

pub use analysis::{FullAnalysisReport, InputPolicy, run_full_analysis};
pub use ats::{AtsResult, analyze_ats_compliance};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, VocabularyError, VocabularyResult,
};
pub use similarity::{MatchCategory, ScoreResult, calculate_match_score, score_result};
pub use skills::{SkillCategory, SkillSet, extract_skills};
pub use suggestions::{Priority, Suggestion, SuggestionKind, SuggestionParams, generate_suggestions};
pub use vocabulary::{AtsRules, Vocabulary};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
