//! Error types for lexometria-core.

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

/// Errors raised while obtaining or reading a dependency-parse annotation.
#[derive(Error, Debug)]
pub enum AnnotationError {
    /// The parsing service could not be reached (timeout or transport failure)
    /// after every allowed attempt.
    #[error("parsing service unreachable after {attempts} attempt(s): {message}")]
    Network {
        /// How many requests were made before giving up.
        attempts: u32,
        /// The last transport error.
        message: String,
    },

    /// The parsing service answered, but not with a usable result.
    #[error("unexpected response from parsing service: {0}")]
    Protocol(String),

    /// The annotation text is not valid CoNLL-U.
    #[error("malformed annotation at line {line}: {message}")]
    Format {
        /// 1-based line number in the annotation text.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
}

/// Result type alias using [`AnnotationError`].
pub type AnnotationResult<T> = Result<T, AnnotationError>;

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The NLP pipeline failed on the given text.
    #[error("nlp pipeline failed: {0}")]
    Pipeline(String),

    /// The dependency-parse annotation could not be obtained or read.
    #[error(transparent)]
    Annotation(#[from] AnnotationError),
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
