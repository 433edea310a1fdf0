//! Resume/job similarity scoring.
//!
//! The match score blends Jaccard overlap of the two token sets with TF-IDF
//! cosine similarity computed over a two-document corpus (the resume and the
//! job description). With only two documents, a term present in both gets
//! an IDF of `ln(2/2) = 0`, so the cosine part measures how the distinctive
//! terms line up rather than shared boilerplate.

use std::collections::{HashMap, HashSet};
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Weight of the Jaccard component.
pub const JACCARD_WEIGHT: f64 = 0.6;

/// Weight of the TF-IDF cosine component.
pub const COSINE_WEIGHT: f64 = 0.4;

/// Token → weight. Absent tokens have weight zero.
pub type TermVector = HashMap<String, f64>;

/// Human-readable band for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum MatchCategory {
    /// 80 and above.
    Excellent,
    /// 60 to 79.
    Good,
    /// 40 to 59.
    Fair,
    /// Below 40.
    Poor,
}

impl MatchCategory {
    /// Band containing `score`.
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Display name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A match score with its derived category.
///
/// Build it with [`score_result`] so the category always agrees with the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreResult {
    /// Match score, 0-100.
    pub match_score: u8,
    /// Band derived from `match_score`.
    pub category: MatchCategory,
}

/// Wrap a score with its category.
pub const fn score_result(match_score: u8) -> ScoreResult {
    ScoreResult {
        match_score,
        category: MatchCategory::from_score(match_score),
    }
}

/// Term frequency: occurrences divided by document length.
pub fn term_frequency(tokens: &[String]) -> TermVector {
    let mut tf = TermVector::new();
    if tokens.is_empty() {
        return tf;
    }
    for token in tokens {
        *tf.entry(token.clone()).or_insert(0.0) += 1.0;
    }
    let len = tokens.len() as f64;
    for weight in tf.values_mut() {
        *weight /= len;
    }
    tf
}

/// Inverse document frequency, `ln(N / df)`, over every term in the corpus.
pub fn inverse_document_frequency(documents: &[&[String]]) -> TermVector {
    let n = documents.len() as f64;
    let mut df: HashMap<&str, usize> = HashMap::new();
    for doc in documents {
        let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }
    df.into_iter()
        .map(|(term, count)| (term.to_string(), (n / count as f64).ln()))
        .collect()
}

/// Multiply each term frequency by its IDF.
pub fn tf_idf(tf: &TermVector, idf: &TermVector) -> TermVector {
    tf.iter()
        .map(|(term, weight)| {
            let idf = idf.get(term).copied().unwrap_or(0.0);
            (term.clone(), weight * idf)
        })
        .collect()
}

fn magnitude(v: &TermVector) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity of two term vectors, in `[0, 1]`.
///
/// Two zero vectors are identical (1.0); a zero vector against a non-zero
/// one shares nothing (0.0).
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    match (mag_a == 0.0, mag_b == 0.0) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.0,
        (false, false) => {
            let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
            let dot: f64 = small
                .iter()
                .filter_map(|(term, w)| large.get(term).map(|v| w * v))
                .sum();
            (dot / (mag_a * mag_b)).clamp(0.0, 1.0)
        }
    }
}

/// Jaccard similarity of two token sets, in `[0, 1]`.
pub fn jaccard_similarity(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

/// Match score of a resume against a job description, 0-100.
///
/// Either side without content tokens scores 0. The score is symmetric.
#[tracing::instrument(skip_all, fields(resume_len = resume_text.len(), job_len = job_text.len()))]
pub fn calculate_match_score(resume_text: &str, job_text: &str) -> u8 {
    let resume = text::content_tokens(resume_text);
    let job = text::content_tokens(job_text);
    if resume.is_empty() || job.is_empty() {
        tracing::debug!("no content tokens, score 0");
        return 0;
    }

    let jaccard = jaccard_similarity(&resume, &job);

    let idf = inverse_document_frequency(&[resume.as_slice(), job.as_slice()]);
    let resume_vec = tf_idf(&term_frequency(&resume), &idf);
    let job_vec = tf_idf(&term_frequency(&job), &idf);
    let cosine = cosine_similarity(&resume_vec, &job_vec);

    let blended = (jaccard * 100.0).mul_add(JACCARD_WEIGHT, cosine * 100.0 * COSINE_WEIGHT);
    let score = blended.clamp(0.0, 100.0).round() as u8;
    tracing::debug!(jaccard, cosine, score, "match score computed");
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn categories_follow_thresholds() {
        assert_eq!(MatchCategory::from_score(100), MatchCategory::Excellent);
        assert_eq!(MatchCategory::from_score(80), MatchCategory::Excellent);
        assert_eq!(MatchCategory::from_score(79), MatchCategory::Good);
        assert_eq!(MatchCategory::from_score(60), MatchCategory::Good);
        assert_eq!(MatchCategory::from_score(59), MatchCategory::Fair);
        assert_eq!(MatchCategory::from_score(40), MatchCategory::Fair);
        assert_eq!(MatchCategory::from_score(39), MatchCategory::Poor);
        assert_eq!(MatchCategory::from_score(0), MatchCategory::Poor);
        assert_eq!(score_result(72).category, MatchCategory::Good);
    }

    #[test]
    fn term_frequency_normalizes_by_length() {
        let tf = term_frequency(&tokens(&["rust", "cargo", "rust", "crate"]));
        assert!((tf["rust"] - 0.5).abs() < f64::EPSILON);
        assert!((tf["cargo"] - 0.25).abs() < f64::EPSILON);
        assert!(term_frequency(&[]).is_empty());
    }

    #[test]
    fn shared_terms_get_zero_idf() {
        let a = tokens(&["kernel", "drivers"]);
        let b = tokens(&["kernel", "firmware"]);
        let idf = inverse_document_frequency(&[a.as_slice(), b.as_slice()]);
        assert!(idf["kernel"].abs() < f64::EPSILON);
        assert!((idf["drivers"] - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn cosine_edge_cases() {
        let empty = TermVector::new();
        let mut v = TermVector::new();
        v.insert("kernel".into(), 0.3);
        assert!((cosine_similarity(&empty, &empty) - 1.0).abs() < f64::EPSILON);
        assert!(cosine_similarity(&empty, &v).abs() < f64::EPSILON);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn jaccard_on_sets() {
        let a = tokens(&["alpha", "beta", "beta"]);
        let b = tokens(&["beta", "gamma"]);
        assert!((jaccard_similarity(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
        assert!(jaccard_similarity(&[], &[]).abs() < f64::EPSILON);
    }

    #[test]
    fn identical_documents_score_100() {
        let texts = [
            "Senior backend engineer building payment systems",
            "alpha beta gamma",
            "kernel kernel drivers",
        ];
        for t in texts {
            assert_eq!(calculate_match_score(t, t), 100, "{t}");
        }
    }

    #[test]
    fn same_token_set_different_counts_scores_100() {
        assert_eq!(calculate_match_score("kernel kernel drivers", "kernel drivers drivers"), 100);
    }

    #[test]
    fn disjoint_documents_score_0() {
        assert_eq!(calculate_match_score("alpha beta gamma", "delta epsilon zeta"), 0);
    }

    #[test]
    fn empty_or_stopword_only_scores_0() {
        assert_eq!(calculate_match_score("", "alpha beta"), 0);
        assert_eq!(calculate_match_score("alpha beta", "   "), 0);
        assert_eq!(calculate_match_score("the and but", "the and but"), 0);
    }

    #[test]
    fn partial_overlap_is_between_bounds_and_symmetric() {
        let resume = "embedded firmware engineer writing kernel drivers";
        let job = "kernel engineer wanted for firmware and bootloader work";
        let forward = calculate_match_score(resume, job);
        let backward = calculate_match_score(job, resume);
        assert_eq!(forward, backward);
        assert!(forward > 0 && forward < 100, "{forward}");
    }

    #[test]
    fn partial_overlap_matches_hand_computation() {
        // Tokens: {alpha, beta} vs {beta, gamma}. Jaccard 1/3.
        // TF-IDF: alpha 0.5 ln2 vs gamma 0.5 ln2, no shared weighted terms, cosine 0.
        // 33.33 * 0.6 = 20.
        assert_eq!(calculate_match_score("alpha beta", "beta gamma"), 20);
    }

    #[test]
    fn score_is_deterministic() {
        let resume = "distributed systems engineer, consensus, replication, storage";
        let job = "storage engineer for replication and consensus work";
        let first = calculate_match_score(resume, job);
        for _ in 0..10 {
            assert_eq!(calculate_match_score(resume, job), first);
        }
    }
}
