// Error types for the realty-e2e suite

use std::time::Duration;

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the application under test
#[derive(Debug, Error)]
pub enum Error {
    /// Failure reported by the playwright-rs bindings (locator not
    /// actionable, assertion timeout, navigation failure, ...)
    #[error(transparent)]
    Playwright(#[from] playwright_rs::Error),

    /// The page URL never matched the expected pattern within the timeout
    #[error("Expected page URL to match '{pattern}', but it was '{url}' after {timeout:?}")]
    UrlTimeout {
        pattern: String,
        url: String,
        timeout: Duration,
    },

    /// A locator never reached the expected match count within the timeout
    #[error(
        "Expected selector '{selector}' to match {expected} element(s), \
         but it matched {actual} after {timeout:?}"
    )]
    CountTimeout {
        selector: String,
        expected: usize,
        actual: usize,
        timeout: Duration,
    },

    /// A malformed regex was handed to an assertion helper
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The embedded fixture file could not be decoded
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
