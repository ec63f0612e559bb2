// Registration page (`/register`)

use playwright_rs::{Locator, Page, expect};
use tracing::info;

use crate::Config;
use crate::assertions::expect_url;
use crate::error::Result;
use crate::fixtures::RegistrationData;

mod selectors {
    pub const FULL_NAME_INPUT: &str = r#"[data-test-id="full-name-input"]"#;
    pub const EMAIL_INPUT: &str = r#"[data-test-id="email-input"]"#;
    pub const PHONE_INPUT: &str = r#"[data-test-id="phone-input"]"#;
    pub const ACCOUNT_TYPE_DROPDOWN: &str = r#"[data-test-id="account-type-dropdown"]"#;
    pub const PASSWORD_INPUT: &str = r#"[data-test-id="password-input"]"#;
    pub const CONFIRM_PASSWORD_INPUT: &str = r#"[data-test-id="confirm-password-input"]"#;
    pub const CREATE_ACCOUNT_BUTTON: &str = r#"[data-test-id="create-account-button"]"#;
    pub const USER_MENU_BUTTON: &str = r#"[data-test-id="user-menu-button"]"#;
    pub const VALIDATION_ERROR: &str = r#"[data-test-id="user-validation-error"]"#;
    pub const TOAST: &str = ".p-3";
}

pub struct RegistrationPage {
    page: Page,
    config: Config,
}

impl RegistrationPage {
    pub fn new(page: Page, config: Config) -> Self {
        Self { page, config }
    }

    pub async fn visit(&self) -> Result<()> {
        self.page.goto(&self.config.url("/register"), None).await?;
        Ok(())
    }

    /// Fills the whole form (confirmation mirrors the password) and submits.
    pub async fn create_account(&self, data: &RegistrationData) -> Result<()> {
        info!(email = %data.email, "creating account");
        self.fill_basic_info(data).await?;
        self.fill_input(selectors::PASSWORD_INPUT, &data.password)
            .await?;
        self.fill_input(selectors::CONFIRM_PASSWORD_INPUT, &data.password)
            .await?;
        self.submit().await
    }

    /// Submits the untouched form; at least one inline error must appear.
    pub async fn submit_empty_form(&self) -> Result<()> {
        self.submit().await?;
        expect(self.validation_errors().await.first())
            .to_be_visible()
            .await?;
        Ok(())
    }

    /// Password and confirmation differ; the form must surface exactly the
    /// expected mismatch message.
    pub async fn verify_password_mismatch(
        &self,
        data: &RegistrationData,
        confirm_password: &str,
        expected_message: &str,
    ) -> Result<()> {
        self.fill_basic_info(data).await?;
        self.fill_input(selectors::PASSWORD_INPUT, &data.password)
            .await?;
        self.fill_input(selectors::CONFIRM_PASSWORD_INPUT, confirm_password)
            .await?;
        self.submit().await?;
        expect(self.validation_errors().await)
            .to_have_text(expected_message)
            .await?;
        Ok(())
    }

    /// Submits a weak password (used for the length/uppercase/number/special
    /// character ladder) and asserts the exact message the form renders.
    pub async fn verify_password_rejected(
        &self,
        data: &RegistrationData,
        password: &str,
        expected_message: &str,
    ) -> Result<()> {
        self.fill_basic_info(data).await?;
        self.fill_input(selectors::PASSWORD_INPUT, password).await?;
        self.fill_input(selectors::CONFIRM_PASSWORD_INPUT, password)
            .await?;
        self.submit().await?;
        expect(self.validation_errors().await)
            .to_have_text(expected_message)
            .await?;
        Ok(())
    }

    /// Registering an email that already exists must be rejected with a
    /// toast. The application currently accepts it; the covering test is
    /// ignored until that is fixed.
    pub async fn verify_existing_email_rejected(&self, data: &RegistrationData) -> Result<()> {
        self.create_account(data).await?;
        expect(self.page.locator(selectors::TOAST).await)
            .to_contain_text("Email already exists")
            .await?;
        Ok(())
    }

    /// Registration logs the new account straight in: `/dashboard` plus the
    /// fresh email behind the profile menu.
    pub async fn verify_logged_in_after_registration(&self, email: &str) -> Result<()> {
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

    async fn fill_basic_info(&self, data: &RegistrationData) -> Result<()> {
        self.fill_input(selectors::FULL_NAME_INPUT, &data.full_name)
            .await?;
        self.fill_input(selectors::EMAIL_INPUT, &data.email).await?;
        self.fill_input(selectors::PHONE_INPUT, &data.phone).await?;
        self.page
            .locator(selectors::ACCOUNT_TYPE_DROPDOWN)
            .await
            .select_option(data.account_type.as_str(), None)
            .await?;
        Ok(())
    }

    async fn fill_input(&self, selector: &str, value: &str) -> Result<()> {
        self.page.locator(selector).await.fill(value, None).await?;
        Ok(())
    }

    async fn submit(&self) -> Result<()> {
        self.page
            .locator(selectors::CREATE_ACCOUNT_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    async fn validation_errors(&self) -> Locator {
        self.page.locator(selectors::VALIDATION_ERROR).await
    }
}
