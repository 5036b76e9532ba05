//! tapis-app-action — publish a Tapis app specification from a workflow step.
//!
//! Reads the action inputs, loads and validates the spec document, submits
//! it to the Tapis Apps API, and publishes the result as step outputs. Any
//! failure is reported exactly once as an `::error::` command plus a nonzero
//! exit code; the run never panics across this boundary.

use std::process::ExitCode;

use anyhow::Result;

use tapis_app_action::application::services::create_app::{create_app, resolve_inputs};
use tapis_app_action::infra::inputs::EnvInputs;
use tapis_app_action::infra::reader::JsonSpecReader;
use tapis_app_action::infra::tapis::TapisClient;
use tapis_app_action::output::{GithubOutputFile, WorkflowReporter, commands};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            commands::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let opts = resolve_inputs(&EnvInputs)?;
    let client = TapisClient::new(&opts.base_path, &opts.token)?;
    create_app(
        &opts,
        &JsonSpecReader,
        &client,
        &GithubOutputFile::from_env(),
        &WorkflowReporter,
    )
    .await
}
