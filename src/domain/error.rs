//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator. The `Display` strings here are the
//! exact messages the workflow sees in the failure report, so change them
//! only together with the tests and `action.yml` docs.

use thiserror::Error;

// ── Input errors ──────────────────────────────────────────────────────────────

/// Errors resolving action inputs from the runner environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Wording fixed by the runner toolkit; workflows grep for it.
    #[error("Input required and not supplied: {0}")]
    Missing(String),

    #[error("milliseconds is not a number")]
    DelayNotANumber,

    #[error("No Docker image tags provided")]
    EmptyTagList,
}

// ── Spec file errors ──────────────────────────────────────────────────────────

/// Errors loading the app-spec document from disk.
///
/// `Unreadable` and `InvalidJson` are transparent so the underlying message
/// propagates verbatim to the failure report.
#[derive(Debug, Error)]
pub enum SpecFileError {
    #[error("File {0} does not exist")]
    NotFound(String),

    #[error(transparent)]
    Unreadable(#[from] std::io::Error),

    #[error(transparent)]
    InvalidJson(#[from] serde_json::Error),
}

// ── Validation rejection ──────────────────────────────────────────────────────

/// Reason an app-spec document was rejected.
///
/// The orchestrator reports rejections with a single fixed message; this
/// type exists so the specific reason stays observable in debug logs and
/// assertable in tests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecRejection {
    #[error("document is not a JSON object")]
    NotAnObject,

    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("required field '{0}' is empty")]
    EmptyField(&'static str),
}
