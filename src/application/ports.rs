//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`
//! or `crate::output`.

use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::domain::AppSpec;
use crate::domain::error::InputError;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Tapis API base URL used when the `TAPIS_BASE_PATH` input is not supplied.
pub const DEFAULT_BASE_PATH: &str = "https://portals.tapis.io/v3";

// ── Input Port ────────────────────────────────────────────────────────────────

/// Reads named action inputs from the host environment.
pub trait ActionInputs {
    /// The raw input value, or `None` when unset or blank.
    fn get(&self, name: &str) -> Option<String>;

    /// A required input. Absence fails with the runner toolkit's wording,
    /// carrying the input name as originally spelled.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Missing`] when the input is unset or blank.
    fn required(&self, name: &str) -> Result<String, InputError> {
        self.get(name)
            .ok_or_else(|| InputError::Missing(name.to_owned()))
    }
}

// ── Spec Reader Port ──────────────────────────────────────────────────────────

/// Loads the app-spec document from local storage.
pub trait SpecReader {
    /// Read and JSON-parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file does not exist, cannot be read, or is
    /// not valid JSON. The error's message is surfaced to the workflow
    /// verbatim.
    fn read_json_file(&self, path: &Path) -> Result<AppSpec>;
}

// ── Remote Submission Port ────────────────────────────────────────────────────

/// Submits a spec to the remote Apps API.
///
/// Implementations own the base path and credential: the capability is
/// constructed once per run and passed in explicitly, never read from
/// ambient state.
#[allow(async_fn_in_trait)]
pub trait AppCreator {
    /// Create (or register a new version of) the application described by
    /// `spec`, returning the decoded response body unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures (carrying the underlying
    /// message) and for non-success API responses (carrying the decoded
    /// server message when present).
    async fn create_app_version(&self, spec: &AppSpec) -> Result<Value>;
}

// ── Output and Logging Ports ──────────────────────────────────────────────────

/// Publishes named step outputs for downstream workflow steps.
pub trait OutputSink {
    /// Publish one named output.
    ///
    /// # Errors
    ///
    /// Returns an error when the output cannot be written to the host
    /// environment.
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
}

/// Workflow log stream for debug diagnostics and info lines. Sync trait.
pub trait WorkflowLog {
    /// Emit a debug diagnostic (hidden unless the workflow enables it).
    fn debug(&self, message: &str);
    /// Emit a plain informational line.
    fn info(&self, message: &str);
}
