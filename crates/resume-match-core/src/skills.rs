//! Skill extraction, matching and categorization.
//!
//! Skills are found by whole-word, case-insensitive matching of every
//! vocabulary entry against a lowercased copy of the raw text. The
//! normalizer is bypassed on purpose: it would strip the `+`, `#` and `.`
//! that entries like `c++` and `node.js` depend on.
//! Spelling variants listed in
//! [`SKILL_ALIASES`](crate::word_lists::SKILL_ALIASES) are reported under
//! their canonical name.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::suggestions::Priority;
use crate::vocabulary::{Vocabulary, count_whole_word};
use crate::word_lists::{
    ADVANCED_QUALIFIERS, CATEGORY_BACKEND, CATEGORY_CLOUD, CATEGORY_DATABASES, CATEGORY_FRONTEND,
    CATEGORY_LANGUAGES, CATEGORY_TOOLS, EXPERT_QUALIFIERS, HIGH_PRIORITY_SKILLS,
    INTERMEDIATE_QUALIFIERS, MEDIUM_PRIORITY_SKILLS,
};

/// Number of missing skills that get recommendations or suggestions.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// A set of skill names with case-insensitive membership.
///
/// Entries are stored lowercased and always iterate in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct SkillSet(BTreeSet<String>);

impl SkillSet {
    /// An empty set.
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Insert a skill, lowercasing it. Returns `false` if it was present.
    pub fn insert(&mut self, skill: impl AsRef<str>) -> bool {
        self.0.insert(skill.as_ref().to_lowercase())
    }

    /// Case-insensitive membership.
    pub fn contains(&self, skill: &str) -> bool {
        self.0.contains(&skill.to_lowercase())
    }

    /// Number of skills.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Skills in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Skills in `self` that `other` lacks, sorted.
    pub fn difference(&self, other: &Self) -> Self {
        self.0.difference(&other.0).cloned().collect()
    }

    /// Skills in both sets, sorted.
    pub fn intersection(&self, other: &Self) -> Self {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Sorted skill names.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(Self::from_iter)
    }
}

/// Coarse proficiency estimate for a single skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    /// Qualified as expert/lead/architect/senior, or mentioned 5+ times.
    Expert,
    /// Qualified as advanced/experienced/proficient/extensive, or mentioned 3+ times.
    Advanced,
    /// Qualified as intermediate/familiar, or mentioned twice.
    Intermediate,
    /// Anything else.
    Beginner,
}

impl Proficiency {
    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expert => "expert",
            Self::Advanced => "advanced",
            Self::Intermediate => "intermediate",
            Self::Beginner => "beginner",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets used to group skills for display.
///
/// Variant order is the assignment priority: a skill lands in the first
/// category whose list contains it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    /// Programming languages.
    Languages,
    /// Frontend frameworks and tooling.
    Frontend,
    /// Backend frameworks and API styles.
    Backend,
    /// Data stores.
    Databases,
    /// Cloud and infrastructure.
    Cloud,
    /// Developer tools.
    Tools,
    /// Soft skills.
    Soft,
    /// Everything else.
    Other,
}

impl SkillCategory {
    /// Categories in assignment order, `Other` last.
    pub const ALL: [Self; 8] = [
        Self::Languages,
        Self::Frontend,
        Self::Backend,
        Self::Databases,
        Self::Cloud,
        Self::Tools,
        Self::Soft,
        Self::Other,
    ];

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Languages => "languages",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Databases => "databases",
            Self::Cloud => "cloud",
            Self::Tools => "tools",
            Self::Soft => "soft",
            Self::Other => "other",
        }
    }

    fn contains(self, vocab: &Vocabulary, skill: &str) -> bool {
        let list: &[&str] = match self {
            Self::Languages => CATEGORY_LANGUAGES,
            Self::Frontend => CATEGORY_FRONTEND,
            Self::Backend => CATEGORY_BACKEND,
            Self::Databases => CATEGORY_DATABASES,
            Self::Cloud => CATEGORY_CLOUD,
            Self::Tools => CATEGORY_TOOLS,
            Self::Soft => return vocab.soft_skills().iter().any(|s| s == skill),
            Self::Other => return false,
        };
        list.contains(&skill)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A missing skill with a priority and places to learn it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkillRecommendation {
    /// The missing skill.
    pub skill: String,
    /// How much the skill is in demand.
    pub priority: Priority,
    /// Suggested learning resources.
    pub learning_resources: Vec<String>,
}

/// Skills found in one document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SkillProfile {
    /// Every skill found.
    pub all: SkillSet,
    /// Technical skills only.
    pub technical: SkillSet,
    /// Soft skills only.
    pub soft: SkillSet,
    /// Skills grouped by category; empty categories omitted.
    pub by_category: BTreeMap<SkillCategory, Vec<String>>,
    /// Size of `all`.
    pub count: usize,
}

/// Job skills the resume covers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MatchingSkills {
    /// Skills present in both documents.
    pub skills: SkillSet,
    /// Number of matching skills.
    pub count: usize,
    /// Share of job skills covered, 0-100.
    pub percentage: u8,
}

/// Job skills the resume lacks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MissingSkills {
    /// Skills required by the job but absent from the resume.
    pub skills: SkillSet,
    /// Number of missing skills.
    pub count: usize,
    /// Recommendations for the first few missing skills.
    pub recommendations: Vec<SkillRecommendation>,
}

/// Side-by-side skill breakdown of a resume and a job description.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SkillAnalysisReport {
    /// Skills found in the resume.
    pub resume_skills: SkillProfile,
    /// Skills found in the job description.
    pub job_skills: SkillProfile,
    /// Overlap.
    pub matching: MatchingSkills,
    /// Gaps.
    pub missing: MissingSkills,
}

fn extract_where(vocab: &Vocabulary, text: &str, keep: impl Fn(usize) -> bool) -> SkillSet {
    let lowered = text.to_lowercase();
    vocab
        .scan_skills(&lowered)
        .into_iter()
        .filter(|&i| keep(i))
        .map(|i| vocab.skill_at(i))
        .collect()
}

/// All technical and soft skills mentioned in `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_skills(vocab: &Vocabulary, text: &str) -> SkillSet {
    let skills = extract_where(vocab, text, |_| true);
    tracing::debug!(found = skills.len(), "skills extracted");
    skills
}

/// Technical skills mentioned in `text`.
pub fn extract_technical_skills(vocab: &Vocabulary, text: &str) -> SkillSet {
    extract_where(vocab, text, |i| vocab.is_technical_index(i))
}

/// Soft skills mentioned in `text`.
pub fn extract_soft_skills(vocab: &Vocabulary, text: &str) -> SkillSet {
    extract_where(vocab, text, |i| vocab.is_soft_index(i))
}

/// Percentage of job skills present in the resume, rounded.
///
/// A job with no skills is a vacuous 100; a resume with none scores 0.
pub fn calculate_skill_match(resume_skills: &SkillSet, job_skills: &SkillSet) -> u8 {
    if job_skills.is_empty() {
        return 100;
    }
    if resume_skills.is_empty() {
        return 0;
    }
    let matched = job_skills.iter().filter(|s| resume_skills.contains(s)).count();
    percentage(matched, job_skills.len())
}

/// Job skills absent from the resume, sorted.
pub fn find_missing_skills(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillSet {
    job_skills.difference(resume_skills)
}

/// Job skills present in the resume, sorted.
pub fn find_matching_skills(resume_skills: &SkillSet, job_skills: &SkillSet) -> SkillSet {
    job_skills.intersection(resume_skills)
}

fn percentage(part: usize, whole: usize) -> u8 {
    // part <= whole, so the result fits in 0..=100.
    ((part as f64 / whole as f64) * 100.0).round() as u8
}

fn has_qualifier(lowered: &str, skill: &str, qualifiers: &[&str]) -> bool {
    qualifiers.iter().any(|q| {
        lowered.contains(&format!("{q} {skill}")) || lowered.contains(&format!("{skill} {q}"))
    })
}

/// Estimate proficiency from mention count and adjacent qualifier words.
///
/// Qualifiers are checked before counts at each level, so "senior react"
/// mentioned once still rates as expert.
pub fn estimate_proficiency(text: &str, skill: &str) -> Proficiency {
    let lowered = text.to_lowercase();
    let skill = skill.to_lowercase();
    let mentions = count_whole_word(&lowered, &skill);

    if has_qualifier(&lowered, &skill, EXPERT_QUALIFIERS) || mentions >= 5 {
        Proficiency::Expert
    } else if has_qualifier(&lowered, &skill, ADVANCED_QUALIFIERS) || mentions >= 3 {
        Proficiency::Advanced
    } else if has_qualifier(&lowered, &skill, INTERMEDIATE_QUALIFIERS) || mentions >= 2 {
        Proficiency::Intermediate
    } else {
        Proficiency::Beginner
    }
}

/// Group skills into categories. Empty categories are left out.
pub fn group_skills_by_category<'a>(
    vocab: &Vocabulary,
    skills: impl IntoIterator<Item = &'a str>,
) -> BTreeMap<SkillCategory, Vec<String>> {
    let mut groups: BTreeMap<SkillCategory, Vec<String>> = BTreeMap::new();
    for skill in skills {
        let lowered = skill.to_lowercase();
        let category = SkillCategory::ALL
            .into_iter()
            .find(|c| c.contains(vocab, &lowered))
            .unwrap_or(SkillCategory::Other);
        groups.entry(category).or_default().push(skill.to_string());
    }
    groups
}

fn skill_priority(skill: &str) -> Priority {
    let lowered = skill.to_lowercase();
    if HIGH_PRIORITY_SKILLS.contains(lowered.as_str()) {
        Priority::High
    } else if MEDIUM_PRIORITY_SKILLS.contains(lowered.as_str()) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn learning_resources(skill: &str) -> Vec<String> {
    let name = capitalize(skill);
    vec![
        format!("{name} courses on Coursera"),
        format!("{name} tutorials on YouTube"),
        format!("{name} documentation and guides"),
        format!("Practice {name} on freeCodeCamp"),
        format!("{name} projects on GitHub"),
    ]
}

/// Recommendations for the first [`MAX_RECOMMENDATIONS`] missing skills.
pub fn skill_recommendations<'a>(
    missing: impl IntoIterator<Item = &'a str>,
) -> Vec<SkillRecommendation> {
    missing
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|skill| SkillRecommendation {
            skill: skill.to_string(),
            priority: skill_priority(skill),
            learning_resources: learning_resources(skill),
        })
        .collect()
}

fn profile(vocab: &Vocabulary, text: &str) -> SkillProfile {
    let all = extract_skills(vocab, text);
    SkillProfile {
        technical: extract_technical_skills(vocab, text),
        soft: extract_soft_skills(vocab, text),
        by_category: group_skills_by_category(vocab, all.iter()),
        count: all.len(),
        all,
    }
}

/// Full skill breakdown of a resume against a job description.
#[tracing::instrument(skip_all, fields(resume_len = resume_text.len(), job_len = job_text.len()))]
pub fn detailed_skill_analysis(
    vocab: &Vocabulary,
    resume_text: &str,
    job_text: &str,
) -> SkillAnalysisReport {
    let resume = profile(vocab, resume_text);
    let job = profile(vocab, job_text);

    let matching = find_matching_skills(&resume.all, &job.all);
    let missing = find_missing_skills(&resume.all, &job.all);
    let percentage = calculate_skill_match(&resume.all, &job.all);
    let recommendations = skill_recommendations(missing.iter());

    SkillAnalysisReport {
        matching: MatchingSkills {
            count: matching.len(),
            skills: matching,
            percentage,
        },
        missing: MissingSkills {
            count: missing.len(),
            skills: missing,
            recommendations,
        },
        resume_skills: resume,
        job_skills: job,
    }
}
