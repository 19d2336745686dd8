//! Configuration handling for the booking form host

use crate::state::RequestType;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the contact endpoint URL
pub const REST_URL_ENV: &str = "CTA_FLOW_REST_URL";
/// Environment override for the endpoint nonce
pub const NONCE_ENV: &str = "CTA_FLOW_NONCE";

const DEFAULT_SUCCESS_BANNER_MS: u64 = 7000;

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FlowConfig {
    /// Contact endpoint; submissions are only simulated without it
    pub rest_url: Option<String>,
    /// Nonce sent with each submission
    pub nonce: Option<String>,
    /// Request type preselected on a fresh form
    pub default_request_type: Option<RequestType>,
    /// How long the success banner stays up, in milliseconds
    pub success_banner_ms: Option<u64>,
}

impl FlowConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "cta-flow", "cta-flow")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FlowConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Apply `CTA_FLOW_*` environment variables on top of the file values
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(REST_URL_ENV).ok(),
            std::env::var(NONCE_ENV).ok(),
        )
    }

    fn with_overrides(mut self, rest_url: Option<String>, nonce: Option<String>) -> Self {
        if let Some(url) = rest_url.filter(|u| !u.trim().is_empty()) {
            self.rest_url = Some(url);
        }
        if let Some(nonce) = nonce.filter(|n| !n.is_empty()) {
            self.nonce = Some(nonce);
        }
        self
    }

    /// Endpoint URL, ignoring blank values
    pub fn rest_url(&self) -> Option<&str> {
        self.rest_url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn success_banner_duration(&self) -> Duration {
        Duration::from_millis(self.success_banner_ms.unwrap_or(DEFAULT_SUCCESS_BANNER_MS))
    }

    pub fn default_request_type(&self) -> RequestType {
        self.default_request_type.unwrap_or_default()
    }
}
