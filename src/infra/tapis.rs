//! Tapis Apps API client — implements the `AppCreator` port.

use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::application::ports::AppCreator;
use crate::domain::AppSpec;

/// Error submitting an app spec to the Tapis API.
///
/// Transport failures surface the underlying message verbatim; API-level
/// failures carry the HTTP status and the server-provided message when the
/// error body has one.
#[derive(Debug, Error)]
pub enum TapisError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: StatusCode, message: String },
}

/// HTTP client bound to a Tapis base URL and bearer credential.
///
/// Constructed once per run and passed into the service as an `AppCreator`,
/// never read from ambient state.
pub struct TapisClient {
    client: Client,
    base_path: String,
    token: String,
}

impl TapisClient {
    /// Bind a client to `base_path`, authenticating every call with `token`.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(base_path: &str, token: &str) -> Result<Self, TapisError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_path: base_path.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
        })
    }

    /// POST the spec to the app-creation endpoint and decode the response.
    async fn post_app(&self, spec: &AppSpec) -> Result<Value, TapisError> {
        let url = format!("{}/apps", self.base_path);
        let response = self
            .client
            .post(&url)
            .header("X-Tapis-Token", &self.token)
            .json(spec)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TapisError::Api {
                status,
                message: decode_error_message(response).await,
            });
        }
        Ok(response.json().await?)
    }
}

/// Pull the server's `message` out of an error body, falling back to the
/// generic wording when the body is not a JSON object carrying one.
async fn decode_error_message(response: Response) -> String {
    response
        .json::<Value>()
        .await
        .ok()
        .as_ref()
        .and_then(|body| body.get("message"))
        .and_then(Value::as_str)
        .map_or_else(|| "request failed".to_owned(), str::to_owned)
}

impl AppCreator for TapisClient {
    async fn create_app_version(&self, spec: &AppSpec) -> anyhow::Result<Value> {
        Ok(self.post_app(spec).await?)
    }
}
