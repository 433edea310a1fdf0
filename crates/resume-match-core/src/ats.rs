//! ATS compliance heuristics.
//!
//! A resume starts at 100 and loses a fixed penalty for every failed check.
//! All checks run regardless of earlier failures, and the score never drops
//! below zero.

use std::sync::LazyLock;

use regex::{Regex, RegexSet};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::vocabulary::{Vocabulary, count_whole_word};
use crate::word_lists::ATS_TIPS;

/// Headers that must appear for the header check to pass.
pub const MIN_STANDARD_HEADERS: usize = 3;

/// Penalty for missing standard section headers.
pub const HEADERS_PENALTY: u32 = 15;
/// Penalty for decorative glyphs.
pub const SPECIAL_CHARS_PENALTY: u32 = 10;
/// Penalty for too few action verbs.
pub const KEYWORD_DENSITY_PENALTY: u32 = 10;
/// Penalty for missing email or phone.
pub const CONTACT_PENALTY: u32 = 15;
/// Penalty for no quantified achievements.
pub const METRICS_PENALTY: u32 = 10;
/// Penalty for a resume below the minimum word count.
pub const TOO_SHORT_PENALTY: u32 = 15;
/// Penalty for a resume above the maximum word count.
pub const TOO_LONG_PENALTY: u32 = 5;

/// Issue reported when the header check fails.
pub const ISSUE_HEADERS: &str = "Use standard section headers like EXPERIENCE, EDUCATION, SKILLS";
/// Issue reported when decorative glyphs are present.
pub const ISSUE_SPECIAL_CHARS: &str =
    "Avoid special bullet points (\u{2022}, \u{2192}, \u{2605}) - use standard hyphens or asterisks";
/// Issue reported when action verbs are too sparse.
pub const ISSUE_KEYWORD_DENSITY: &str =
    "Add more action verbs (developed, managed, implemented, designed)";
/// Issue reported when contact details are missing.
pub const ISSUE_CONTACT: &str = "Include clear contact information (email and phone number)";
/// Issue reported when no metrics are found.
pub const ISSUE_METRICS: &str =
    "Add quantifiable achievements (e.g., \"increased sales by 25%\", \"managed team of 10\")";
/// Issue reported for short resumes.
pub const ISSUE_TOO_SHORT: &str = "Resume is too short - aim for 400-800 words";
/// Issue reported for long resumes.
pub const ISSUE_TOO_LONG: &str = "Resume is too long - keep it concise (1-2 pages)";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("valid regex")
});

/// Percentages, large numbers, money, durations, team sizes, growth and reduction.
static METRIC_PATTERNS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"\d+%",
        r"(?i)\d+\s*(million|thousand|k)",
        r"\$\d+",
        r"(?i)\d+\s*years?",
        r"(?i)team of \d+",
        r"(?i)increased by \d+",
        r"(?i)reduced by \d+",
    ])
    .expect("valid regex")
});

/// ATS score and the issues that lowered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AtsResult {
    /// Compliance score, 0-100.
    pub score: u8,
    /// One message per failed check, in check order.
    pub issues: Vec<String>,
}

/// Raw outcome of every ATS check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AtsChecks {
    /// At least [`MIN_STANDARD_HEADERS`] standard headers present.
    pub has_standard_headers: bool,
    /// A decorative glyph is present.
    pub has_special_characters: bool,
    /// Mean action-verb occurrence count.
    pub keyword_density: f64,
    /// Both an email and a phone number are present.
    pub has_contact_info: bool,
    /// A quantified achievement is present.
    pub has_metrics: bool,
    /// Whitespace-delimited word count.
    pub word_count: usize,
}

/// Whether enough standard section headers appear (case-insensitive substrings).
pub fn has_standard_headers(vocab: &Vocabulary, text: &str) -> bool {
    vocab.count_section_headers(text) >= MIN_STANDARD_HEADERS
}

/// Whether any decorative glyph appears.
pub fn has_special_characters(vocab: &Vocabulary, text: &str) -> bool {
    vocab.contains_forbidden_char(text)
}

/// Total whole-word action-verb occurrences divided by the number of action verbs.
pub fn keyword_density(vocab: &Vocabulary, text: &str) -> f64 {
    let verbs = vocab.action_verbs();
    if verbs.is_empty() {
        return 0.0;
    }
    let lowered = text.to_lowercase();
    let total: usize = verbs.iter().map(|v| count_whole_word(&lowered, v)).sum();
    total as f64 / verbs.len() as f64
}

/// Whether both an email address and a phone number appear.
pub fn has_contact_info(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text) && PHONE_PATTERN.is_match(text)
}

/// Whether any quantified achievement appears.
pub fn has_metrics(text: &str) -> bool {
    METRIC_PATTERNS.is_match(text)
}

/// Action verbs used in `text`, in vocabulary order.
pub fn extract_action_verbs(vocab: &Vocabulary, text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    vocab
        .action_verbs()
        .iter()
        .filter(|v| count_whole_word(&lowered, v) > 0)
        .cloned()
        .collect()
}

/// General advice for getting through an ATS.
pub const fn ats_tips() -> &'static [&'static str] {
    ATS_TIPS
}

/// Run every check without scoring.
pub fn run_checks(vocab: &Vocabulary, text: &str) -> AtsChecks {
    AtsChecks {
        has_standard_headers: has_standard_headers(vocab, text),
        has_special_characters: has_special_characters(vocab, text),
        keyword_density: keyword_density(vocab, text),
        has_contact_info: has_contact_info(text),
        has_metrics: has_metrics(text),
        word_count: text::word_count(text),
    }
}

fn floor_score(deductions: u32) -> u8 {
    // 100 - deductions, never below zero.
    100u32.saturating_sub(deductions) as u8
}

/// Score a resume against the ATS checks.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_ats_compliance(vocab: &Vocabulary, text: &str) -> AtsResult {
    let checks = run_checks(vocab, text);
    score_checks(vocab, &checks)
}

/// Turn check outcomes into a score and issue list.
pub fn score_checks(vocab: &Vocabulary, checks: &AtsChecks) -> AtsResult {
    let rules = vocab.ats_rules();
    let mut issues = Vec::new();
    let mut deductions = 0;

    let mut fail = |issue: &str, penalty: u32| {
        issues.push(issue.to_string());
        deductions += penalty;
    };

    if !checks.has_standard_headers {
        fail(ISSUE_HEADERS, HEADERS_PENALTY);
    }
    if checks.has_special_characters {
        fail(ISSUE_SPECIAL_CHARS, SPECIAL_CHARS_PENALTY);
    }
    if checks.keyword_density < rules.min_keyword_density {
        fail(ISSUE_KEYWORD_DENSITY, KEYWORD_DENSITY_PENALTY);
    }
    if !checks.has_contact_info {
        fail(ISSUE_CONTACT, CONTACT_PENALTY);
    }
    if !checks.has_metrics {
        fail(ISSUE_METRICS, METRICS_PENALTY);
    }
    if checks.word_count < rules.min_words {
        fail(ISSUE_TOO_SHORT, TOO_SHORT_PENALTY);
    } else if checks.word_count > rules.max_words {
        fail(ISSUE_TOO_LONG, TOO_LONG_PENALTY);
    }

    let score = floor_score(deductions);
    tracing::debug!(score, deductions, failed = issues.len(), "ats checks scored");
    AtsResult { score, issues }
}
