//! Report structs for a full resume analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ats::AtsResult;
use crate::similarity::MatchCategory;
use crate::skills::SkillSet;
use crate::suggestions::Suggestion;

/// Everything produced by one resume/job comparison.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FullAnalysisReport {
    /// Similarity score, 0-100.
    pub match_score: u8,
    /// Band derived from `match_score`.
    pub match_category: MatchCategory,
    /// Skills found in the resume.
    pub resume_skills: SkillSet,
    /// Skills found in the job description.
    pub job_skills: SkillSet,
    /// Job skills absent from the resume.
    pub missing_skills: SkillSet,
    /// Job skills present in the resume.
    pub matching_skills: SkillSet,
    /// Skill coverage of the job description, 0-100.
    pub skill_match: u8,
    /// Ordered improvement suggestions.
    pub suggestions: Vec<Suggestion>,
    /// ATS compliance result.
    pub ats: AtsResult,
    /// Input sizes and timing.
    pub metadata: AnalysisMetadata,
}

/// Sizes and timing for a [`FullAnalysisReport`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisMetadata {
    /// Whitespace-delimited words in the resume.
    pub resume_word_count: usize,
    /// Whitespace-delimited words in the job description.
    pub job_description_word_count: usize,
    /// Wall-clock time spent in the engine.
    pub processing_time_ms: u64,
}
