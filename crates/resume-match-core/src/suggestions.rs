//! Improvement suggestions.
//!
//! Suggestions are emitted in a fixed order (skills, keywords, formatting,
//! experience, ATS) and are never re-sorted by priority.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ats;
use crate::skills::{MAX_RECOMMENDATIONS, SkillSet};
use crate::vocabulary::Vocabulary;

/// Action verbs listed in the keyword suggestion.
pub const MAX_KEYWORD_VERBS: usize = 5;

/// Skill coverage (percent) that earns the congratulatory suggestion.
pub const STRONG_MATCH_THRESHOLD: f64 = 70.0;

/// What a suggestion is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    /// Missing or matching skills.
    Skill,
    /// Action verbs from the job description.
    Keyword,
    /// Section structure.
    Formatting,
    /// Quantified achievements.
    Experience,
    /// ATS parsing concerns.
    Ats,
}

impl SuggestionKind {
    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skill => "skill",
            Self::Keyword => "keyword",
            Self::Formatting => "formatting",
            Self::Experience => "experience",
            Self::Ats => "ats",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How urgent a suggestion or recommendation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Address first.
    High,
    /// Worth doing.
    Medium,
    /// Nice to have.
    Low,
}

impl Priority {
    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single improvement suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// What the suggestion is about.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    /// Human-readable advice.
    pub message: String,
    /// Urgency.
    pub priority: Priority,
}

impl Suggestion {
    fn new(kind: SuggestionKind, priority: Priority, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            priority,
        }
    }
}

/// Inputs to [`generate_suggestions`].
#[derive(Debug, Clone, Copy)]
pub struct SuggestionParams<'a> {
    /// Raw resume text.
    pub resume_text: &'a str,
    /// Raw job description.
    pub job_description: &'a str,
    /// Job skills the resume lacks, sorted.
    pub missing_skills: &'a SkillSet,
    /// Skills found in the resume.
    pub resume_skills: &'a SkillSet,
    /// Skills found in the job description.
    pub job_skills: &'a SkillSet,
}

/// Build the ordered suggestion list.
#[tracing::instrument(skip_all, fields(
    missing = params.missing_skills.len(),
    job_skills = params.job_skills.len(),
))]
pub fn generate_suggestions(vocab: &Vocabulary, params: &SuggestionParams<'_>) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for skill in params.missing_skills.iter().take(MAX_RECOMMENDATIONS) {
        suggestions.push(Suggestion::new(
            SuggestionKind::Skill,
            Priority::High,
            format!("Add \"{skill}\" to your skills section or work experience"),
        ));
    }

    let resume_verbs = ats::extract_action_verbs(vocab, params.resume_text);
    let missing_verbs: Vec<String> = ats::extract_action_verbs(vocab, params.job_description)
        .into_iter()
        .filter(|v| !resume_verbs.contains(v))
        .take(MAX_KEYWORD_VERBS)
        .collect();
    if !missing_verbs.is_empty() {
        suggestions.push(Suggestion::new(
            SuggestionKind::Keyword,
            Priority::Medium,
            format!(
                "Use more action verbs from the job description: {}",
                missing_verbs.join(", ")
            ),
        ));
    }

    if !ats::has_standard_headers(vocab, params.resume_text) {
        suggestions.push(Suggestion::new(
            SuggestionKind::Formatting,
            Priority::High,
            "Use clear section headers: EXPERIENCE, EDUCATION, SKILLS, PROJECTS",
        ));
    }

    if !ats::has_metrics(params.resume_text) {
        suggestions.push(Suggestion::new(
            SuggestionKind::Experience,
            Priority::High,
            "Quantify your achievements with numbers (e.g., \"Improved performance by 30%\")",
        ));
    }

    if ats::has_special_characters(vocab, params.resume_text) {
        suggestions.push(Suggestion::new(
            SuggestionKind::Ats,
            Priority::Medium,
            "Replace fancy bullet points with simple hyphens (-) or asterisks (*)",
        ));
    }

    if crate::text::word_count(params.resume_text) < vocab.ats_rules().min_words {
        suggestions.push(Suggestion::new(
            SuggestionKind::Ats,
            Priority::Medium,
            "Expand your resume with more details about your experience and projects",
        ));
    }

    let job_count = params.job_skills.len();
    if job_count > 0 {
        let covered = job_count.saturating_sub(params.missing_skills.len());
        let coverage = covered as f64 / job_count as f64 * 100.0;
        if coverage >= STRONG_MATCH_THRESHOLD {
            suggestions.push(Suggestion::new(
                SuggestionKind::Skill,
                Priority::Low,
                "Great skill match! Emphasize these matching skills in your summary and experience sections",
            ));
        }
    }

    tracing::debug!(count = suggestions.len(), "suggestions generated");
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().collect()
    }

    fn vocab() -> &'static Vocabulary {
        Vocabulary::standard()
    }

    fn kinds(suggestions: &[Suggestion]) -> Vec<(SuggestionKind, Priority)> {
        suggestions.iter().map(|s| (s.kind, s.priority)).collect()
    }

    #[test]
    fn missing_skills_capped_at_five() {
        let missing = set(&["aws", "docker", "gcp", "kubernetes", "terraform", "vagrant"]);
        let job = missing.clone();
        let params = SuggestionParams {
            resume_text: "",
            job_description: "",
            missing_skills: &missing,
            resume_skills: &SkillSet::new(),
            job_skills: &job,
        };
        let out = generate_suggestions(vocab(), &params);
        let skill_high: Vec<&Suggestion> = out
            .iter()
            .filter(|s| s.kind == SuggestionKind::Skill && s.priority == Priority::High)
            .collect();
        assert_eq!(skill_high.len(), 5);
        assert_eq!(
            skill_high[0].message,
            "Add \"aws\" to your skills section or work experience"
        );
        assert!(out.iter().all(|s| !s.message.contains("vagrant")));
    }

    #[test]
    fn order_follows_generation_rules() {
        let missing = set(&["docker"]);
        let job = set(&["docker"]);
        let resume = "\u{2022} lorem ipsum";
        let params = SuggestionParams {
            resume_text: resume,
            job_description: "We designed and launched systems",
            missing_skills: &missing,
            resume_skills: &SkillSet::new(),
            job_skills: &job,
        };
        let out = generate_suggestions(vocab(), &params);
        assert_eq!(
            kinds(&out),
            vec![
                (SuggestionKind::Skill, Priority::High),
                (SuggestionKind::Keyword, Priority::Medium),
                (SuggestionKind::Formatting, Priority::High),
                (SuggestionKind::Experience, Priority::High),
                (SuggestionKind::Ats, Priority::Medium),
                (SuggestionKind::Ats, Priority::Medium),
            ]
        );
        assert_eq!(
            out[1].message,
            "Use more action verbs from the job description: designed, launched"
        );
    }

    #[test]
    fn keyword_suggestion_lists_at_most_five() {
        let job = "developed designed implemented created built led managed";
        let params = SuggestionParams {
            resume_text: "",
            job_description: job,
            missing_skills: &SkillSet::new(),
            resume_skills: &SkillSet::new(),
            job_skills: &SkillSet::new(),
        };
        let out = generate_suggestions(vocab(), &params);
        let keyword = out
            .iter()
            .find(|s| s.kind == SuggestionKind::Keyword)
            .unwrap();
        assert_eq!(
            keyword.message,
            "Use more action verbs from the job description: developed, designed, implemented, created, built"
        );
    }

    #[test]
    fn strong_match_congratulates() {
        let job = set(&["aws", "docker", "python", "react"]);
        let missing = set(&["react"]);
        let params = SuggestionParams {
            resume_text: "",
            job_description: "",
            missing_skills: &missing,
            resume_skills: &set(&["aws", "docker", "python"]),
            job_skills: &job,
        };
        let out = generate_suggestions(vocab(), &params);
        let last = out.last().unwrap();
        assert_eq!((last.kind, last.priority), (SuggestionKind::Skill, Priority::Low));
    }

    #[test]
    fn no_congratulation_without_job_skills() {
        let params = SuggestionParams {
            resume_text: "",
            job_description: "",
            missing_skills: &SkillSet::new(),
            resume_skills: &SkillSet::new(),
            job_skills: &SkillSet::new(),
        };
        let out = generate_suggestions(vocab(), &params);
        assert!(out.iter().all(|s| s.priority != Priority::Low));
    }

    #[test]
    fn weak_match_not_congratulated() {
        let job = set(&["aws", "docker", "python"]);
        let missing = set(&["aws"]);
        let params = SuggestionParams {
            resume_text: "",
            job_description: "",
            missing_skills: &missing,
            resume_skills: &set(&["docker", "python"]),
            job_skills: &job,
        };
        // 2 of 3 is 66.7%, below the threshold.
        let out = generate_suggestions(vocab(), &params);
        assert!(out.iter().all(|s| s.priority != Priority::Low));
    }

    #[test]
    fn suggestion_serializes_type_field() {
        let s = Suggestion::new(SuggestionKind::Ats, Priority::Medium, "msg");
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "ats");
        assert_eq!(json["priority"], "medium");
    }
}
