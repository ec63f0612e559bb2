// Suite-level auto-retry assertions
//
// playwright-rs ships locator expectations (`expect(locator).to_be_visible()`
// and friends) but nothing for the page URL or for element counts. These
// helpers follow the same poll-until-deadline shape so a failing wait reads
// the same way as a failing locator expectation.

use std::time::{Duration, Instant};

use playwright_rs::{Locator, Page};
use regex::Regex;

use crate::error::{Error, Result};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Asserts that the page URL matches `pattern` (a regex) within `timeout`.
///
/// Client-side routing updates the URL after the response settles, so a
/// single synchronous `page.url()` read right after a click races the
/// router. Retries until the deadline instead.
pub async fn expect_url(page: &Page, pattern: &str, timeout: Duration) -> Result<()> {
    let re = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let start = Instant::now();
    loop {
        let url = page.url();
        if re.is_match(&url) {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(Error::UrlTimeout {
                pattern: pattern.to_string(),
                url,
                timeout,
            });
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Asserts that `locator` matches exactly `expected` elements within `timeout`.
pub async fn expect_count(locator: &Locator, expected: usize, timeout: Duration) -> Result<()> {
    let start = Instant::now();
    loop {
        let actual = locator.count().await?;
        if actual == expected {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(Error::CountTimeout {
                selector: locator.selector().to_string(),
                expected,
                actual,
                timeout,
            });
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

/// Asserts that the match count of `locator` differs from `previous` within
/// `timeout`. Used where a filter or deletion must change how many rows are
/// on screen without pinning the exact resulting count.
pub async fn expect_count_changed(
    locator: &Locator,
    previous: usize,
    timeout: Duration,
) -> Result<()> {
    let start = Instant::now();
    loop {
        let actual = locator.count().await?;
        if actual != previous {
            return Ok(());
        }
        if start.elapsed() >= timeout {
            return Err(Error::CountTimeout {
                selector: locator.selector().to_string(),
                expected: previous,
                actual,
                timeout,
            });
        }
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}
