//! `WorkflowReporter` — Presentation-layer implementation of `WorkflowLog`.
//!
//! Implements the `application::ports::WorkflowLog` trait so the service can
//! emit log lines without depending on the runner command format directly.

use crate::application::ports::WorkflowLog;
use crate::output::commands;

/// Workflow log reporter.
///
/// - `debug()` emits a `::debug::` command (hidden unless debug logging is on)
/// - `info()` prints a plain log line
pub struct WorkflowReporter;

impl WorkflowLog for WorkflowReporter {
    fn debug(&self, message: &str) {
        commands::debug(message);
    }

    fn info(&self, message: &str) {
        println!("{message}");
    }
}
