// Suite configuration
//
// Everything comes from the environment so the same binary can target a
// local dev server, a staging deployment, or CI without recompiling.

use std::time::Duration;

/// Environment variable naming the deployment under test.
pub const BASE_URL_ENV: &str = "REALTY_BASE_URL";

/// Environment variable overriding the per-assertion timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "REALTY_E2E_TIMEOUT_MS";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Suite-wide configuration shared by every page object.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    timeout: Duration,
}

impl Config {
    /// Reads configuration from the environment, falling back to a local
    /// dev server and a 10 second assertion timeout.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|ms| ms.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);
        Self::new(base_url, timeout)
    }

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url, timeout }
    }

    /// The deployment root, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to suite-level assertions and waits.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Joins an absolute route path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
