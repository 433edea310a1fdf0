//! Error types for resume-match-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while building a [`Vocabulary`](crate::vocabulary::Vocabulary).
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// A vocabulary entry was empty after trimming.
    #[error("empty entry in {list} list")]
    EmptyEntry {
        /// Name of the list that held the entry.
        list: &'static str,
    },

    /// The literal scanners could not be built.
    #[error("failed to build vocabulary scanner: {0}")]
    Scanner(#[from] aho_corasick::BuildError),
}

/// Result type alias using [`VocabularyError`].
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Errors that can occur during a full resume analysis.
///
/// The scoring functions themselves never fail; these come from the
/// input policy applied before scoring.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The resume text is shorter than the configured minimum.
    #[error("resume text is too short ({len} characters, need at least {min})")]
    ResumeTooShort {
        /// Character count of the resume text.
        len: usize,
        /// Required minimum.
        min: usize,
    },

    /// The job description is shorter than the configured minimum.
    #[error("job description must be at least {min} characters (got {len})")]
    JobDescriptionTooShort {
        /// Character count of the trimmed job description.
        len: usize,
        /// Required minimum.
        min: usize,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
