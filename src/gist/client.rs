//! Blocking HTTP client for the gist creation endpoint.
//!
//! One POST per invocation, never retried. The response is classified by
//! status: `201 Created` carries the gist URL, `401 Unauthorized` is a bad
//! token, anything else is surfaced with its raw body.

use crate::error::{GistError, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com/gists";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("gist/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct CreatedGist {
    html_url: String,
}

#[derive(Debug, Clone)]
pub struct GistClient {
    http: Client,
    endpoint: String,
}

impl GistClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(GistError::Network)?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts an encoded payload and returns the created gist's URL.
    pub fn upload(&self, body: Vec<u8>, token: &str) -> Result<String> {
        if token.is_empty() {
            return Err(GistError::MissingToken);
        }

        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "sending gist");
        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("token {}", token))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/vnd.github+json")
            .body(body)
            .send()
            .map_err(GistError::Network)?;

        let status = response.status();
        tracing::debug!(%status, "gist endpoint replied");

        match status {
            StatusCode::CREATED => {
                let text = response.text().map_err(|_| GistError::BadResponseBody)?;
                let created: CreatedGist =
                    serde_json::from_str(&text).map_err(|_| GistError::BadResponseBody)?;
                Ok(created.html_url)
            }
            StatusCode::UNAUTHORIZED => Err(GistError::InvalidAuth),
            _ => {
                let text = response.text().map_err(|_| GistError::BadResponseBody)?;
                Err(GistError::Upstream(text))
            }
        }
    }
}
