//! Error types for formula loading and lookup.
//!
//! Covers both loading definitions from disk (I/O, JSON, YAML) and resolving
//! a name or reference to a single formula.

use brew_argv_core::Spec;
use thiserror::Error;

/// Errors that can occur while loading or resolving formulae.
#[derive(Debug, Error)]
pub enum FormularyError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// No formula with this name or reference is known.
    #[error("no available formula with the name \"{0}\"")]
    FormulaUnavailable(String),

    /// The bare name exists in several non-core taps.
    #[error("formula \"{name}\" exists in multiple taps: {}", .candidates.join(", "))]
    AmbiguousFormula {
        name: String,
        candidates: Vec<String>,
    },

    /// The formula does not define the requested spec.
    #[error("formula \"{name}\" has no {spec} version")]
    SpecUnavailable { name: String, spec: Spec },

    /// The reference is neither an existing file nor `user/repo/name`.
    #[error("invalid formula reference: {0}")]
    InvalidReference(String),

    /// All configured loader sources failed.
    #[error("no formula sources available")]
    NoSourcesAvailable,
}

/// Convenience alias for results with [`FormularyError`].
pub type Result<T> = std::result::Result<T, FormularyError>;
