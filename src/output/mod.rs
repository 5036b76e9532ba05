//! Runner-facing output — workflow commands, step outputs, and log lines.
//!
//! Everything the enclosing workflow observes goes through this module: the
//! `::debug::` / `::error::` command stream on stdout and the named step
//! outputs appended to the file the runner designates.

pub mod commands;
pub mod reporter;
pub mod step_outputs;

pub use reporter::WorkflowReporter;
pub use step_outputs::GithubOutputFile;
