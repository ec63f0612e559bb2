#![allow(dead_code)]

// Shared harness for the integration tests: tracing init plus one
// Playwright driver, browser, and page per test.

use std::sync::Once;

use playwright_rs::{Browser, Page, Playwright};
use realty_e2e::Config;
use realty_e2e::fixtures::Fixtures;

static TRACING: Once = Once::new();

/// Initializes tracing once per test binary. Controlled by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Everything one test needs: the live page, the suite config, and the
/// decoded fixtures. The driver handle is kept alive for the duration.
pub struct TestApp {
    _playwright: Playwright,
    pub browser: Browser,
    pub page: Page,
    pub config: Config,
    pub fixtures: Fixtures,
}

/// Launches Playwright, a chromium browser, and a fresh page.
pub async fn launch() -> TestApp {
    init_tracing();
    let config = Config::from_env();
    let fixtures = Fixtures::load().expect("fixture file should decode");

    let playwright = Playwright::launch()
        .await
        .expect("Failed to launch Playwright");
    let browser = playwright
        .chromium()
        .launch()
        .await
        .expect("Failed to launch browser");
    let page = browser.new_page().await.expect("Failed to create page");

    TestApp {
        _playwright: playwright,
        browser,
        page,
        config,
        fixtures,
    }
}

impl TestApp {
    /// Closes the browser; call at the end of every test.
    pub async fn close(self) {
        self.browser.close().await.expect("Failed to close browser");
    }
}
