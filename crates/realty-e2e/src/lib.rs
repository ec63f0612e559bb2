//! realty-e2e: End-to-end UI test suite for the realty listing application
//!
//! The crate has two layers:
//!
//! - **Page objects** ([`pages`]): one struct per application page/role that
//!   binds stable selectors to semantic actions (fill, click, select, assert)
//!   on a live [`playwright_rs::Page`].
//! - **Test specs** (`tests/`): one integration-test file per flow that
//!   sequences page-object calls and asserts observable outcomes.
//!
//! The suite runs against a deployed instance of the application; point
//! `REALTY_BASE_URL` at it (defaults to `http://localhost:3000`).
//!
//! # Example
//!
//! ```ignore
//! use playwright_rs::Playwright;
//! use realty_e2e::{Config, pages::LoginPage, fixtures::Fixtures};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let fixtures = Fixtures::load()?;
//!
//!     let playwright = Playwright::launch().await?;
//!     let browser = playwright.chromium().launch().await?;
//!     let page = browser.new_page().await?;
//!
//!     let login = LoginPage::new(page, config);
//!     login.visit().await?;
//!     login.login_with(&fixtures.accounts.admin).await?;
//!     login.verify_logged_in(&fixtures.accounts.admin.email).await?;
//!
//!     browser.close().await?;
//!     Ok(())
//! }
//! ```

pub mod assertions;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod pages;

pub use config::Config;
pub use error::{Error, Result};
