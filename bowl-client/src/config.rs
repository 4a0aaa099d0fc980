//! Client configuration
//!
//! The backend base URL comes from the environment (a `.env` file is
//! honoured), never from a compiled-in default.

use crate::error::{ClientError, ClientResult};
use std::time::Duration;

/// Environment variable naming the backend base URL.
pub const API_BASE_URL_VAR: &str = "CAFE_API_BASE_URL";
/// Optional request timeout override, in seconds.
pub const API_TIMEOUT_VAR: &str = "CAFE_API_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from the environment.
    pub fn from_env() -> ClientResult<Self> {
        dotenv::dotenv().ok();

        let base_url = std::env::var(API_BASE_URL_VAR)
            .map_err(|_| ClientError::MissingConfig(API_BASE_URL_VAR))?;
        let timeout = std::env::var(API_TIMEOUT_VAR)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Self { base_url, timeout })
    }
}
