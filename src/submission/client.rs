//! Sending the request to the endpoint

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use super::request::SubmissionRequest;
use crate::config::Settings;
use crate::error::{EnrollError, EnrollResult};

/// Why a submission did not succeed
///
/// All variants produce the same notification; they only differ in the log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The request never got a response
    #[error("request could not be sent: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status
    #[error("endpoint answered with HTTP {0}")]
    Status(u16),

    /// The body of a 2xx response was not JSON
    #[error("response body was not valid JSON: {0}")]
    Decode(String),
}

impl SubmissionError {
    /// Short name used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status(_) => "status",
            Self::Decode(_) => "decode",
        }
    }
}

/// Delivers a registration to the endpoint
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Send `request` once; no retries
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError>;
}

/// [`Submitter`] issuing a plain HTTP GET
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
}

impl HttpSubmitter {
    /// Create a submitter; `timeout` of `None` keeps the client default
    pub fn new(timeout: Option<Duration>) -> EnrollResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| EnrollError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Create a submitter using the configured timeout
    pub fn from_settings(settings: &Settings) -> EnrollResult<Self> {
        Self::new(settings.request_timeout_secs.map(Duration::from_secs))
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
        let response = self
            .client
            .get(request.url().clone())
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status.as_u16()));
        }

        // The body is only checked for being JSON; its contents are unused.
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SubmissionError::Decode(e.without_url().to_string()))?;

        Ok(())
    }
}
