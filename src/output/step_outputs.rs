//! `GithubOutputFile` — implementation of the `OutputSink` port.
//!
//! Step outputs are appended to the file named by `$GITHUB_OUTPUT` as
//! `name=value` lines, with heredoc framing for multi-line values. When the
//! variable is unset (local runs), the legacy stdout command is emitted
//! instead so the output is still visible.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};

use crate::application::ports::OutputSink;
use crate::output::commands::{escape_data, escape_property};

/// Marker framing multi-line output values. The runner only requires that
/// the value contains no line equal to the marker; `set_output` enforces
/// that before writing.
const HEREDOC_MARKER: &str = "ghadelimiter";

/// Publishes step outputs to the runner's output file.
pub struct GithubOutputFile {
    path: Option<PathBuf>,
}

impl GithubOutputFile {
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Resolve the output file from the `GITHUB_OUTPUT` environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from))
    }
}

impl OutputSink for GithubOutputFile {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        let Some(path) = &self.path else {
            println!(
                "::set-output name={}::{}",
                escape_property(name),
                escape_data(value)
            );
            return Ok(());
        };

        ensure!(
            !name.contains(HEREDOC_MARKER) && !value.contains(HEREDOC_MARKER),
            "output {name} contains the reserved delimiter {HEREDOC_MARKER}"
        );

        let line = if value.contains('\n') || value.contains('\r') {
            format!("{name}<<{HEREDOC_MARKER}\n{value}\n{HEREDOC_MARKER}\n")
        } else {
            format!("{name}={value}\n")
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open output file {}", path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("cannot write output file {}", path.display()))?;
        Ok(())
    }
}
