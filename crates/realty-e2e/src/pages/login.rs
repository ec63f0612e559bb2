// Login page (`/login`)

use playwright_rs::{Locator, Page, expect};
use tracing::info;

use crate::Config;
use crate::assertions::expect_url;
use crate::error::Result;
use crate::fixtures::Credentials;

mod selectors {
    pub const EMAIL_INPUT: &str = r#"[data-test-id="email-input"]"#;
    pub const PASSWORD_INPUT: &str = r#"[data-test-id="password-input"]"#;
    pub const SIGN_IN_BUTTON: &str = r#"[data-test-id="sign-in-button"]"#;
    pub const SIGN_UP_LINK: &str = r#"[data-test-id="sign-up-link"]"#;
    pub const USER_MENU_BUTTON: &str = r#"[data-test-id="user-menu-button"]"#;
    pub const LOGOUT_BUTTON: &str = r#"[data-test-id="logout-button"]"#;
    pub const VALIDATION_ERROR: &str = r#"[data-test-id="user-validation-error"]"#;
    /// Toast container; the app renders transient errors here.
    pub const TOAST: &str = ".p-3";
}

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub struct LoginPage {
    page: Page,
    config: Config,
}

impl LoginPage {
    pub fn new(page: Page, config: Config) -> Self {
        Self { page, config }
    }

    pub async fn visit(&self) -> Result<()> {
        self.page.goto(&self.config.url("/login"), None).await?;
        Ok(())
    }

    pub async fn click_sign_up(&self) -> Result<()> {
        self.page
            .locator(selectors::SIGN_UP_LINK)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    /// Fills the form and submits. Makes no assertion about the outcome.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        info!(email, "logging in");
        self.page
            .locator(selectors::EMAIL_INPUT)
            .await
            .fill(email, None)
            .await?;
        self.page
            .locator(selectors::PASSWORD_INPUT)
            .await
            .fill(password, None)
            .await?;
        self.page
            .locator(selectors::SIGN_IN_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    pub async fn login_with(&self, credentials: &Credentials) -> Result<()> {
        self.login(&credentials.email, &credentials.password).await
    }

    /// Submits bad credentials and asserts the toast error.
    pub async fn login_expecting_rejection(&self, credentials: &Credentials) -> Result<()> {
        self.login_with(credentials).await?;
        expect(self.toast().await)
            .to_contain_text(INVALID_CREDENTIALS_MESSAGE)
            .await?;
        Ok(())
    }

    /// Submits the form untouched; at least one inline validation error must
    /// appear.
    pub async fn submit_empty_form(&self) -> Result<()> {
        self.page
            .locator(selectors::SIGN_IN_BUTTON)
            .await
            .click(None)
            .await?;
        expect(self.validation_errors().await.first())
            .to_be_visible()
            .await?;
        Ok(())
    }

    pub async fn login_with_empty_password(&self, email: &str) -> Result<()> {
        self.page
            .locator(selectors::EMAIL_INPUT)
            .await
            .fill(email, None)
            .await?;
        self.page
            .locator(selectors::SIGN_IN_BUTTON)
            .await
            .click(None)
            .await?;
        expect(self.validation_errors().await.first())
            .to_be_visible()
            .await?;
        Ok(())
    }

    pub async fn login_with_empty_email(&self, password: &str) -> Result<()> {
        self.page
            .locator(selectors::PASSWORD_INPUT)
            .await
            .fill(password, None)
            .await?;
        self.page
            .locator(selectors::SIGN_IN_BUTTON)
            .await
            .click(None)
            .await?;
        expect(self.validation_errors().await.first())
            .to_be_visible()
            .await?;
        Ok(())
    }

    /// A successful login redirects to `/dashboard` and the profile menu
    /// shows the account email.
    pub async fn verify_logged_in(&self, email: &str) -> Result<()> {
        expect_url(&self.page, r".*/dashboard", self.config.timeout()).await?;
        self.page
            .locator(selectors::USER_MENU_BUTTON)
            .await
            .click(None)
            .await?;
        expect(self.page.locator(&format!("text={email}")).await)
            .to_be_visible()
            .await?;
        Ok(())
    }

    pub async fn logout(&self) -> Result<()> {
        self.page
            .locator(selectors::USER_MENU_BUTTON)
            .await
            .click(None)
            .await?;
        self.page
            .locator(selectors::LOGOUT_BUTTON)
            .await
            .click(None)
            .await?;
        expect_url(&self.page, r".*/login", self.config.timeout()).await?;
        Ok(())
    }

    async fn toast(&self) -> Locator {
        self.page.locator(selectors::TOAST).await
    }

    async fn validation_errors(&self) -> Locator {
        self.page.locator(selectors::VALIDATION_ERROR).await
    }
}
