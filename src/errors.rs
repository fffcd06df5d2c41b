/*!
 * Error types for the biaslens engine.
 *
 * This module contains custom error types for different parts of the engine,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when building a phrase lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// A phrase was registered under both leans
    #[error("Phrase '{0}' is tagged both left and right")]
    ConflictingPhrase(String),

    /// A phrase was registered twice under the same lean
    #[error("Phrase '{0}' is registered more than once")]
    DuplicatePhrase(String),

    /// A phrase with no tokens was supplied
    #[error("Empty phrase in lexicon input")]
    EmptyPhrase,

    /// The lexicon contains no phrases at all
    #[error("Lexicon has no entries")]
    EmptyLexicon,
}

/// Errors raised by an individual methodology scorer
#[derive(Error, Debug)]
pub enum ScorerError {
    /// A weight table contains a non-positive or non-finite weight
    #[error("Invalid weight in {table} table: {value}")]
    InvalidWeight {
        /// Name of the offending weight table
        table: &'static str,
        /// The rejected value
        value: f64,
    },

    /// An internal weight table does not sum to 1.0
    #[error("Weights in {table} table sum to {sum}, expected 1.0")]
    UnnormalizedWeights {
        /// Name of the offending weight table
        table: &'static str,
        /// Actual sum of the weights
        sum: f64,
    },

    /// A methodology score was supplied in the wrong combiner slot
    #[error("Expected a {expected} score, got {actual}")]
    MethodologyMismatch {
        /// Methodology the slot requires
        expected: &'static str,
        /// Methodology actually supplied
        actual: &'static str,
    },
}

/// Top-level analysis error surfaced by the engine
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Error building the phrase lexicon
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    /// Error from one of the methodology scorers
    #[error("Scorer error: {0}")]
    Scorer(#[from] ScorerError),

    /// The band table does not cover the full score range
    #[error("Band table error: {0}")]
    BandTable(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the analysis engine
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
