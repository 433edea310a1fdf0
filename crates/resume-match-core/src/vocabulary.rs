//! The immutable vocabulary shared by every engine call.
//!
//! A [`Vocabulary`] is built once (from the built-in [`word_lists`] plus any
//! configured extras) and then passed by reference into the extraction and
//! scoring functions. Matchers are compiled at build time so individual
//! calls only scan text.
//!
//! [`word_lists`]: crate::word_lists

use std::collections::{HashMap, HashSet};
use std::ops::Range;
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{VocabularyError, VocabularyResult};
use crate::text::is_word_char;
use crate::word_lists::{
    ACTION_VERBS, ATS_SECTION_HEADERS, FORBIDDEN_SPECIAL_CHARS, HEADER_CHECK_WINDOW,
    SKILL_ALIASES, SOFT_SKILLS, TECHNICAL_SKILLS,
};

/// Default minimum mean action-verb count.
pub const DEFAULT_MIN_KEYWORD_DENSITY: f64 = 2.0;

/// Default word count below which a resume is considered too short.
pub const DEFAULT_MIN_WORDS: usize = 300;

/// Default word count above which a resume is considered too long.
pub const DEFAULT_MAX_WORDS: usize = 1000;

static STANDARD: LazyLock<Vocabulary> = LazyLock::new(|| {
    Vocabulary::builder()
        .build()
        .expect("built-in vocabulary compiles")
});

/// Thresholds used by the ATS compliance checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtsRules {
    /// Minimum mean occurrence count across all action verbs.
    pub min_keyword_density: f64,
    /// Resumes with fewer words than this are too short.
    pub min_words: usize,
    /// Resumes with more words than this are too long.
    pub max_words: usize,
}

impl Default for AtsRules {
    fn default() -> Self {
        Self {
            min_keyword_density: DEFAULT_MIN_KEYWORD_DENSITY,
            min_words: DEFAULT_MIN_WORDS,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

/// Reference data and compiled matchers for resume analysis.
///
/// All lists are lowercase and free of duplicates. Cheap to share behind a
/// reference or an `Arc`; nothing in it changes after [`VocabularyBuilder::build`].
#[derive(Debug, Clone)]
pub struct Vocabulary {
    skills: Vec<String>,
    technical: Range<usize>,
    soft: Range<usize>,
    canonical: Vec<usize>,
    section_headers: Vec<String>,
    action_verbs: Vec<String>,
    forbidden_chars: Vec<String>,
    skill_scanner: AhoCorasick,
    header_scanner: AhoCorasick,
    glyph_scanner: AhoCorasick,
    ats_rules: AtsRules,
}

impl Vocabulary {
    /// Start building a vocabulary from the built-in lists.
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// The built-in vocabulary with default ATS thresholds.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Build a vocabulary from the `vocabulary` and `ats` config sections.
    pub fn from_config(config: &Config) -> VocabularyResult<Self> {
        let defaults = AtsRules::default();
        let rules = AtsRules {
            min_keyword_density: config
                .ats
                .min_keyword_density
                .unwrap_or(defaults.min_keyword_density),
            min_words: config.ats.min_words.unwrap_or(defaults.min_words),
            max_words: config.ats.max_words.unwrap_or(defaults.max_words),
        };

        Self::builder()
            .extra_technical_skills(config.vocabulary.extra_technical_skills.iter())
            .extra_soft_skills(config.vocabulary.extra_soft_skills.iter())
            .extra_action_verbs(config.vocabulary.extra_action_verbs.iter())
            .ats_rules(rules)
            .build()
    }

    /// Technical skills, in vocabulary order.
    pub fn technical_skills(&self) -> &[String] {
        &self.skills[self.technical.clone()]
    }

    /// Soft skills, in vocabulary order.
    pub fn soft_skills(&self) -> &[String] {
        &self.skills[self.soft.clone()]
    }

    /// Section headers ATS parsers recognize.
    pub fn section_headers(&self) -> &[String] {
        &self.section_headers
    }

    /// Action verbs counted by the keyword-density check.
    pub fn action_verbs(&self) -> &[String] {
        &self.action_verbs
    }

    /// Glyphs that confuse ATS parsers.
    pub fn forbidden_chars(&self) -> &[String] {
        &self.forbidden_chars
    }

    /// ATS thresholds.
    pub const fn ats_rules(&self) -> &AtsRules {
        &self.ats_rules
    }

    /// Indices into the combined skill list of every entry found as a whole
    /// word in `lowered`. The caller lowercases the text.
    pub(crate) fn scan_skills(&self, lowered: &str) -> HashSet<usize> {
        self.skill_scanner
            .find_overlapping_iter(lowered)
            .filter(|m| is_whole_word(lowered, m.start(), m.end()))
            .map(|m| m.pattern().as_usize())
            .collect()
    }

    /// Canonical name of the skill at `index`, with aliases folded.
    pub(crate) fn skill_at(&self, index: usize) -> &str {
        &self.skills[self.canonical[index]]
    }

    pub(crate) fn is_technical_index(&self, index: usize) -> bool {
        self.technical.contains(&index)
    }

    pub(crate) fn is_soft_index(&self, index: usize) -> bool {
        self.soft.contains(&index)
    }

    /// Number of distinct headers (within the check window) appearing
    /// anywhere in `text`, case-insensitively.
    pub(crate) fn count_section_headers(&self, text: &str) -> usize {
        self.header_scanner
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect::<HashSet<_>>()
            .len()
    }

    pub(crate) fn contains_forbidden_char(&self, text: &str) -> bool {
        self.glyph_scanner.is_match(text)
    }
}

/// Builder for [`Vocabulary`].
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    extra_technical: Vec<String>,
    extra_soft: Vec<String>,
    extra_verbs: Vec<String>,
    ats_rules: AtsRules,
}

impl VocabularyBuilder {
    /// Append technical skills after the built-in ones.
    pub fn extra_technical_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_technical
            .extend(skills.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Append soft skills after the built-in ones.
    pub fn extra_soft_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_soft
            .extend(skills.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Append action verbs after the built-in ones.
    pub fn extra_action_verbs<I, S>(mut self, verbs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_verbs
            .extend(verbs.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Override the ATS thresholds.
    pub const fn ats_rules(mut self, rules: AtsRules) -> Self {
        self.ats_rules = rules;
        self
    }

    /// Normalize the lists and compile the scanners.
    #[tracing::instrument(skip_all, fields(
        extra_technical = self.extra_technical.len(),
        extra_soft = self.extra_soft.len(),
        extra_verbs = self.extra_verbs.len(),
    ))]
    pub fn build(self) -> VocabularyResult<Vocabulary> {
        let technical = merge_list("technical_skills", TECHNICAL_SKILLS, &self.extra_technical)?;
        let soft = merge_list("soft_skills", SOFT_SKILLS, &self.extra_soft)?;
        let action_verbs = merge_list("action_verbs", ACTION_VERBS, &self.extra_verbs)?;
        let section_headers = merge_list("section_headers", ATS_SECTION_HEADERS, &[])?;
        let forbidden_chars: Vec<String> =
            FORBIDDEN_SPECIAL_CHARS.iter().map(|c| (*c).to_string()).collect();

        let technical_range = 0..technical.len();
        let soft_range = technical.len()..technical.len() + soft.len();
        let mut skills = technical;
        skills.extend(soft);
        let canonical = canonical_indices(&skills);

        let skill_scanner = AhoCorasickBuilder::new()
            .match_kind(MatchKind::Standard)
            .build(&skills)?;
        let header_window = HEADER_CHECK_WINDOW.min(section_headers.len());
        let header_scanner = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(&section_headers[..header_window])?;
        let glyph_scanner = AhoCorasick::new(&forbidden_chars)?;

        tracing::debug!(
            skills = skills.len(),
            action_verbs = action_verbs.len(),
            "vocabulary built"
        );

        Ok(Vocabulary {
            skills,
            technical: technical_range,
            soft: soft_range,
            canonical,
            section_headers,
            action_verbs,
            forbidden_chars,
            skill_scanner,
            header_scanner,
            glyph_scanner,
            ats_rules: self.ats_rules,
        })
    }
}

/// Lowercase, trim and de-duplicate `base` followed by `extra`, keeping the
/// first occurrence of each entry.
fn merge_list(
    list: &'static str,
    base: &[&str],
    extra: &[String],
) -> VocabularyResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(base.len() + extra.len());

    for entry in base.iter().copied().chain(extra.iter().map(String::as_str)) {
        let entry = entry.trim().to_lowercase();
        if entry.is_empty() {
            return Err(VocabularyError::EmptyEntry { list });
        }
        if seen.insert(entry.clone()) {
            out.push(entry);
        }
    }

    Ok(out)
}

/// For each skill, the index of the skill it is reported as. An alias
/// whose canonical name is absent from the list stays as itself.
fn canonical_indices(skills: &[String]) -> Vec<usize> {
    let positions: HashMap<&str, usize> = skills
        .iter()
        .enumerate()
        .map(|(i, s)| (s.as_str(), i))
        .collect();
    let aliases: HashMap<&str, &str> = SKILL_ALIASES.iter().copied().collect();

    skills
        .iter()
        .enumerate()
        .map(|(i, s)| {
            aliases
                .get(s.as_str())
                .and_then(|canonical| positions.get(canonical).copied())
                .unwrap_or(i)
        })
        .collect()
}

/// True when `haystack[start..end]` is neither preceded nor followed by a
/// word character.
pub(crate) fn is_whole_word(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Count non-overlapping whole-word occurrences of `needle` in `haystack`.
/// Both are expected to be lowercase already.
pub(crate) fn count_whole_word(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .match_indices(needle)
        .filter(|(start, m)| is_whole_word(haystack, *start, start + m.len()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AtsConfig, VocabularyConfig};

    #[test]
    fn standard_lists_are_deduplicated() {
        let vocab = Vocabulary::standard();
        let github = vocab
            .technical_skills()
            .iter()
            .filter(|s| s.as_str() == "github")
            .count();
        assert_eq!(github, 1);
        assert_eq!(vocab.soft_skills().len(), SOFT_SKILLS.len());
        assert_eq!(vocab.action_verbs().len(), ACTION_VERBS.len());
    }

    #[test]
    fn technical_keeps_first_position() {
        let vocab = Vocabulary::standard();
        let pos = |s: &str| vocab.technical_skills().iter().position(|e| e == s);
        // github first appears in the cloud group, before the version-control group.
        assert!(pos("github") < pos("bitbucket"));
        assert!(pos("github") < pos("linux"));
    }

    #[test]
    fn extras_are_normalized_and_appended() {
        let vocab = Vocabulary::builder()
            .extra_technical_skills(["  Bevy ", "python"])
            .extra_action_verbs(["Shipped"])
            .build()
            .unwrap();
        assert_eq!(vocab.technical_skills().last().map(String::as_str), Some("bevy"));
        assert_eq!(
            vocab.technical_skills().iter().filter(|s| *s == "python").count(),
            1
        );
        assert_eq!(vocab.action_verbs().last().map(String::as_str), Some("shipped"));
    }

    #[test]
    fn empty_extra_entry_is_rejected() {
        let err = Vocabulary::builder()
            .extra_soft_skills(["   "])
            .build()
            .unwrap_err();
        assert!(matches!(err, VocabularyError::EmptyEntry { list: "soft_skills" }));
    }

    #[test]
    fn from_config_applies_overrides() {
        let config = Config {
            vocabulary: VocabularyConfig {
                extra_technical_skills: vec!["tokio".to_string()],
                ..VocabularyConfig::default()
            },
            ats: AtsConfig {
                min_words: Some(150),
                ..AtsConfig::default()
            },
            ..Config::default()
        };
        let vocab = Vocabulary::from_config(&config).unwrap();
        assert!(vocab.technical_skills().iter().any(|s| s == "tokio"));
        assert_eq!(vocab.ats_rules().min_words, 150);
        assert_eq!(vocab.ats_rules().max_words, DEFAULT_MAX_WORDS);
    }

    #[test]
    fn scan_respects_word_boundaries() {
        let vocab = Vocabulary::standard();
        let found: Vec<&str> = vocab
            .scan_skills("javascripting all day")
            .into_iter()
            .map(|i| vocab.skill_at(i))
            .collect();
        assert!(!found.contains(&"javascript"));

        let found: Vec<&str> = vocab
            .scan_skills("i write c++, node.js and c# daily")
            .into_iter()
            .map(|i| vocab.skill_at(i))
            .collect();
        for skill in ["c++", "nodejs", "c#"] {
            assert!(found.contains(&skill), "missing {skill}");
        }
    }

    #[test]
    fn aliases_fold_to_canonical_names() {
        let vocab = Vocabulary::standard();
        let found: HashSet<&str> = vocab
            .scan_skills("node.js, reactjs, asp.net, k8s and postgres")
            .into_iter()
            .map(|i| vocab.skill_at(i))
            .collect();
        let expected: HashSet<&str> =
            ["nodejs", "react", "aspnet", "kubernetes", "postgresql"].into();
        assert_eq!(found, expected);
    }

    #[test]
    fn boundary_uses_ascii_word_characters() {
        let vocab = Vocabulary::standard();
        let found = |text: &str| -> Vec<&str> {
            vocab
                .scan_skills(text)
                .into_iter()
                .map(|i| vocab.skill_at(i))
                .collect()
        };
        assert!(found("pythoné").contains(&"python"));
        assert!(found("éreact").contains(&"react"));
        // A trailing digit continues the word, so versioned names do not match.
        assert!(!found("c++11").contains(&"c++"));
        assert!(found("c++ 11").contains(&"c++"));
    }

    #[test]
    fn header_count_is_distinct_and_case_insensitive() {
        let vocab = Vocabulary::standard();
        // "work experience" also contains "experience".
        assert_eq!(vocab.count_section_headers("WORK EXPERIENCE\nExperience again"), 2);
        // "summary" sits outside the header window.
        assert_eq!(vocab.count_section_headers("Summary"), 0);
    }

    #[test]
    fn forbidden_glyphs_detected() {
        let vocab = Vocabulary::standard();
        assert!(vocab.contains_forbidden_char("\u{2022} bullet"));
        assert!(!vocab.contains_forbidden_char("- plain bullet"));
    }

    #[test]
    fn whole_word_counting() {
        assert_eq!(count_whole_word("react, react and reactjs", "react"), 2);
        assert_eq!(count_whole_word("c++ c++", "c++"), 2);
        assert_eq!(count_whole_word("abc++", "c++"), 0);
        assert_eq!(count_whole_word("anything", ""), 0);
    }
}
