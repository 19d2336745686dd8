//! HTTP client for the contact endpoint
//!
//! Posts the completed form as JSON to the host page's REST route and reads
//! back the `{ok, received}` acknowledgement.

use super::traits::ContactEndpoint;
use crate::state::{FormData, RequestType};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Header carrying the host page nonce
const NONCE_HEADER: &str = "X-WP-Nonce";

/// Request timeout for a single submission
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Why the endpoint did not accept a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not reach the contact endpoint: {0}")]
    Transport(String),
    #[error("contact endpoint returned HTTP {0}")]
    Status(u16),
    #[error("contact endpoint rejected the request")]
    Rejected,
    #[error("unexpected response from the contact endpoint: {0}")]
    Decode(String),
}

/// JSON body sent to the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub company: String,
    pub name: String,
    pub email: String,
    pub request_type: RequestType,
    pub message: String,
    pub consent: bool,
}

impl From<&FormData> for ContactPayload {
    fn from(data: &FormData) -> Self {
        Self {
            company: data.company.trim().to_string(),
            name: data.name.trim().to_string(),
            email: data.email.trim().to_string(),
            request_type: data.request_type,
            message: data.message.clone(),
            consent: data.consent,
        }
    }
}

/// Echo of the identifying fields
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Received {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Endpoint acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContactReceipt {
    pub ok: bool,
    #[serde(default)]
    pub received: Received,
}

/// Decode a response body, treating `ok: false` as a rejection
pub fn parse_receipt(body: &str) -> Result<ContactReceipt, SubmitError> {
    let receipt: ContactReceipt =
        serde_json::from_str(body).map_err(|e| SubmitError::Decode(e.to_string()))?;
    if !receipt.ok {
        return Err(SubmitError::Rejected);
    }
    Ok(receipt)
}

/// Client for the host page's contact route
pub struct HttpContactClient {
    http: reqwest::Client,
    rest_url: String,
    nonce: Option<String>,
}

impl HttpContactClient {
    /// Create a client for `rest_url`
    pub fn new(rest_url: impl Into<String>, nonce: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            rest_url: rest_url.into(),
            nonce,
        })
    }

    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }
}

#[async_trait]
impl ContactEndpoint for HttpContactClient {
    async fn submit(&self, payload: &ContactPayload) -> Result<ContactReceipt, SubmitError> {
        let mut request = self.http.post(&self.rest_url).json(payload);
        if let Some(nonce) = &self.nonce {
            request = request.header(NONCE_HEADER, nonce);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "contact endpoint refused submission");
            return Err(SubmitError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let receipt = parse_receipt(&body)?;
        tracing::debug!(
            echoed_name = !receipt.received.name.is_empty(),
            echoed_email = !receipt.received.email.is_empty(),
            "contact endpoint acknowledged submission"
        );
        Ok(receipt)
    }
}
