//! Full resume analysis.
//!
//! [`run_full_analysis`] validates the inputs against an [`InputPolicy`],
//! then runs skill extraction, similarity scoring, suggestion generation and
//! the ATS checks, and assembles one [`FullAnalysisReport`].
//!
//! The engine functions never reject input; the length policy here is the
//! caller-side gate that decides whether a comparison is worth making.

pub mod reports;

use std::time::Instant;

pub use reports::{AnalysisMetadata, FullAnalysisReport};

use crate::ats;
use crate::config::{Config, DEFAULT_MIN_JOB_DESCRIPTION_CHARS, DEFAULT_MIN_RESUME_CHARS};
use crate::error::{AnalysisError, AnalysisResult};
use crate::similarity;
use crate::skills;
use crate::suggestions::{self, SuggestionParams};
use crate::text;
use crate::vocabulary::Vocabulary;

/// Minimum input lengths, in characters of trimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    /// Shortest acceptable resume.
    pub min_resume_chars: usize,
    /// Shortest acceptable job description.
    pub min_job_description_chars: usize,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            min_resume_chars: DEFAULT_MIN_RESUME_CHARS,
            min_job_description_chars: DEFAULT_MIN_JOB_DESCRIPTION_CHARS,
        }
    }
}

impl InputPolicy {
    /// Policy from the configured minimums.
    pub const fn from_config(config: &Config) -> Self {
        Self {
            min_resume_chars: config.min_resume_chars,
            min_job_description_chars: config.min_job_description_chars,
        }
    }

    /// Accepts any input.
    pub const fn permissive() -> Self {
        Self {
            min_resume_chars: 0,
            min_job_description_chars: 0,
        }
    }

    /// Check both inputs. The job description is checked first.
    pub fn validate(&self, resume: &str, job_description: &str) -> AnalysisResult<()> {
        let job_len = job_description.trim().chars().count();
        if job_len < self.min_job_description_chars {
            return Err(AnalysisError::JobDescriptionTooShort {
                len: job_len,
                min: self.min_job_description_chars,
            });
        }
        let resume_len = resume.trim().chars().count();
        if resume_len < self.min_resume_chars {
            return Err(AnalysisError::ResumeTooShort {
                len: resume_len,
                min: self.min_resume_chars,
            });
        }
        Ok(())
    }
}

/// Compare a resume with a job description.
///
/// # Errors
///
/// Returns [`AnalysisError::JobDescriptionTooShort`] or
/// [`AnalysisError::ResumeTooShort`] when an input fails the policy.
#[tracing::instrument(skip_all, fields(resume_len = resume.len(), job_len = job_description.len()))]
pub fn run_full_analysis(
    resume: &str,
    job_description: &str,
    vocab: &Vocabulary,
    policy: &InputPolicy,
) -> AnalysisResult<FullAnalysisReport> {
    let started = Instant::now();
    policy.validate(resume, job_description)?;

    let resume_skills = skills::extract_skills(vocab, resume);
    let job_skills = skills::extract_skills(vocab, job_description);
    let missing_skills = skills::find_missing_skills(&resume_skills, &job_skills);
    let matching_skills = skills::find_matching_skills(&resume_skills, &job_skills);
    let skill_match = skills::calculate_skill_match(&resume_skills, &job_skills);

    let score = similarity::score_result(similarity::calculate_match_score(resume, job_description));

    let suggestions = suggestions::generate_suggestions(
        vocab,
        &SuggestionParams {
            resume_text: resume,
            job_description,
            missing_skills: &missing_skills,
            resume_skills: &resume_skills,
            job_skills: &job_skills,
        },
    );

    let ats = ats::analyze_ats_compliance(vocab, resume);

    let processing_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    tracing::info!(
        match_score = score.match_score,
        ats_score = ats.score,
        missing = missing_skills.len(),
        processing_time_ms,
        "analysis complete"
    );

    Ok(FullAnalysisReport {
        match_score: score.match_score,
        match_category: score.category,
        resume_skills,
        job_skills,
        missing_skills,
        matching_skills,
        skill_match,
        suggestions,
        ats,
        metadata: AnalysisMetadata {
            resume_word_count: text::word_count(resume),
            job_description_word_count: text::word_count(job_description),
            processing_time_ms,
        },
    })
}
