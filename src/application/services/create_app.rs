//! Application service — create-app use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use std::path::Path;
use std::time::Duration;

use anyhow::{Result, bail};
use chrono::Utc;

use crate::application::ports::{
    ActionInputs, AppCreator, DEFAULT_BASE_PATH, OutputSink, SpecReader, WorkflowLog,
};
use crate::domain::error::InputError;
use crate::domain::first_image_tag;

// ── Input names ───────────────────────────────────────────────────────────────

// Names as declared in action.yml; `resolve_inputs` failure messages carry
// them in this exact spelling.
pub const INPUT_APP_SPEC: &str = "tapis_app_spec";
pub const INPUT_TOKEN: &str = "TAPIS_TOKEN";
pub const INPUT_BASE_PATH: &str = "TAPIS_BASE_PATH";
pub const INPUT_IMAGE_TAGS: &str = "docker_image_tags";
pub const INPUT_DELAY_MS: &str = "milliseconds";

// ── Resolved inputs ───────────────────────────────────────────────────────────

/// Action inputs after required/default resolution: everything the pipeline
/// needs for one run.
#[derive(Debug)]
pub struct ResolvedInputs {
    /// Path to the app-spec JSON document.
    pub spec_path: String,
    /// Bearer credential for the Apps API.
    pub token: String,
    /// API base URL; defaults to [`DEFAULT_BASE_PATH`].
    pub base_path: String,
    /// Comma-separated image tag list; the first usable entry becomes the
    /// published `containerImage`.
    pub image_tags: String,
    /// Optional artificial delay before submission.
    pub delay: Option<Duration>,
}

/// Resolve all action inputs up front, before any other step runs.
///
/// A missing required input fails here, so the spec file is never touched
/// when the credential is absent.
///
/// # Errors
///
/// Returns [`InputError::Missing`] for an absent required input and
/// [`InputError::DelayNotANumber`] when `milliseconds` is supplied but does
/// not parse as an integer.
pub fn resolve_inputs(inputs: &impl ActionInputs) -> Result<ResolvedInputs> {
    let spec_path = inputs.get(INPUT_APP_SPEC).unwrap_or_default();
    let token = inputs.required(INPUT_TOKEN)?;
    let base_path = inputs
        .get(INPUT_BASE_PATH)
        .unwrap_or_else(|| DEFAULT_BASE_PATH.to_owned());
    let image_tags = inputs.required(INPUT_IMAGE_TAGS)?;

    let delay = match inputs.get(INPUT_DELAY_MS) {
        None => None,
        Some(raw) => {
            let ms: u64 = raw.parse().map_err(|_| InputError::DelayNotANumber)?;
            Some(Duration::from_millis(ms))
        }
    };

    Ok(ResolvedInputs {
        spec_path,
        token,
        base_path,
        image_tags,
        delay,
    })
}

// ── Use-case ──────────────────────────────────────────────────────────────────

/// Run the pipeline (read, validate, derive, submit) and publish the
/// success outputs.
///
/// Accepts port trait bounds so the caller can inject real or mock
/// implementations. Side effects are strictly ordered: each log line is
/// emitted only after its step succeeded, and outputs are published only on
/// the overall-success path. Failure reporting is the caller's job; this
/// function reports nothing, it returns the first failure.
///
/// # Errors
///
/// Returns an error if any step of the pipeline fails; the error's message
/// is the exact text the workflow should see.
pub async fn create_app(
    opts: &ResolvedInputs,
    reader: &impl SpecReader,
    tapis: &impl AppCreator,
    outputs: &impl OutputSink,
    log: &impl WorkflowLog,
) -> Result<()> {
    if let Some(delay) = opts.delay {
        log.debug(&format!("Waiting {} milliseconds ...", delay.as_millis()));
        tokio::time::sleep(delay).await;
    }

    let spec = reader.read_json_file(Path::new(&opts.spec_path))?;

    if let Err(rejection) = spec.validate() {
        log.debug(&format!("Spec rejected: {rejection}"));
        bail!("File is not a valid Tapis app spec");
    }

    let Some(tag) = first_image_tag(&opts.image_tags) else {
        return Err(InputError::EmptyTagList.into());
    };
    let submission = spec.with_container_image(tag);

    log.debug(&format!("Creating app version at {}", opts.base_path));
    let result = tapis.create_app_version(&submission).await?;

    let serialized = result.to_string();
    log.debug(&format!("Tapis app creation result: {serialized}"));
    outputs.set_output("time", &Utc::now().format("%H:%M:%S").to_string())?;
    outputs.set_output("app_result", &serialized)?;
    log.info(&format!("Successfully created Tapis app with image: {tag}"));

    Ok(())
}
