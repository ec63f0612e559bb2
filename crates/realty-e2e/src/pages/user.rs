// Registered-user dashboard (`/dashboard`) and profile settings
// (`/settings`).

use playwright_rs::{Page, expect};
use tracing::info;

use crate::Config;
use crate::assertions::expect_url;
use crate::error::Result;
use crate::fixtures::{PasswordChange, ProfileUpdate};

mod selectors {
    pub const STAT_CARDS: [&str; 3] = [
        r".md\:grid-cols-3 > :nth-child(1)",
        r".md\:grid-cols-3 > :nth-child(2)",
        r".md\:grid-cols-3 > :nth-child(3)",
    ];
    pub const CARD_VALUE: &str = ".text-3xl";
    pub const CONTENT_GRID: &str = r".md\:grid-cols-2";

    pub const MENU_BUTTON: &str = r#"[data-test-id="menu-button"]"#;
    pub const FEATURED_CARD: &str = r#"[data-test-id="featured-card"]"#;
    pub const USER_MENU_BUTTON: &str = r#"[data-test-id="user-menu-button"]"#;
    pub const DASHBOARD_LINK: &str = r#"[href="/dashboard"]"#;
    pub const SETTINGS_LINK: &str = r#"[href="/settings"]"#;
    pub const LOGOUT_BUTTON: &str = r#"[data-test-id="logout-button"]"#;

    pub const PROFILE_NAME_INPUT: &str = r#"[data-test-id="profile-name-input"]"#;
    pub const PROFILE_EMAIL_INPUT: &str = r#"[data-test-id="profile-email-input"]"#;
    pub const PROFILE_PHONE_INPUT: &str = r#"[data-test-id="profile-phone-input"]"#;
    pub const CURRENT_PASSWORD_INPUT: &str = r#"[data-test-id="current-password-input"]"#;
    pub const NEW_PASSWORD_INPUT: &str = r#"[data-test-id="new-password-input"]"#;
    pub const SAVE_PROFILE_BUTTON: &str = r#"[data-test-id="save-profile-button"]"#;
    pub const SUCCESS_MESSAGE: &str = r#"[data-test-id="success-message"]"#;

    pub const EMAIL_INPUT: &str = r#"[data-test-id="email-input"]"#;
    pub const PASSWORD_INPUT: &str = r#"[data-test-id="password-input"]"#;
}

pub struct UserDashboardPage {
    page: Page,
    config: Config,
}

impl UserDashboardPage {
    pub fn new(page: Page, config: Config) -> Self {
        Self { page, config }
    }

    /// All three stat cards are visible with non-empty values.
    pub async fn verify_dashboard(&self) -> Result<()> {
        for card in selectors::STAT_CARDS {
            let card = self.page.locator(card).await;
            expect(card.clone()).to_be_visible().await?;
            let value = card.locator(selectors::CARD_VALUE);
            expect(value.clone()).to_be_visible().await?;
            expect(value).to_have_text_regex(r"\S").await?;
        }
        Ok(())
    }

    /// Opens the menu, visits a featured card, then returns to the
    /// dashboard through the user menu and verifies the content grid.
    pub async fn navigate_and_verify_menu(&self) -> Result<()> {
        self.page
            .locator(selectors::MENU_BUTTON)
            .await
            .click(None)
            .await?;
        self.page
            .locator(selectors::FEATURED_CARD)
            .await
            .first()
            .click(None)
            .await?;
        self.page
            .locator(selectors::USER_MENU_BUTTON)
            .await
            .click(None)
            .await?;
        self.page
            .locator(selectors::DASHBOARD_LINK)
            .await
            .click(None)
            .await?;
        expect_url(&self.page, r".*/dashboard", self.config.timeout()).await?;
        self.verify_content_grid().await
    }

    pub async fn verify_content_grid(&self) -> Result<()> {
        let grid = self.page.locator(selectors::CONTENT_GRID).await;
        expect(grid.clone()).to_be_visible().await?;
        expect(grid).to_have_text_regex(r"\S").await?;
        Ok(())
    }

    pub async fn navigate_to_settings(&self) -> Result<()> {
        self.page
            .locator(selectors::SETTINGS_LINK)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        info!(email = %update.email, "updating profile");
        for (selector, value) in [
            (selectors::PROFILE_NAME_INPUT, update.name.as_str()),
            (selectors::PROFILE_EMAIL_INPUT, update.email.as_str()),
            (selectors::PROFILE_PHONE_INPUT, update.phone.as_str()),
        ] {
            let input = self.page.locator(selector).await;
            input.clear(None).await?;
            input.fill(value, None).await?;
        }
        self.page
            .locator(selectors::SAVE_PROFILE_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    /// Profile save must confirm and echo the submitted values back.
    pub async fn verify_profile_saved(&self, update: &ProfileUpdate) -> Result<()> {
        let success = self.page.locator(selectors::SUCCESS_MESSAGE).await;
        expect(success.clone()).to_be_visible().await?;
        expect(success)
            .to_contain_text("Settings updated successfully")
            .await?;
        expect(self.page.locator(selectors::PROFILE_NAME_INPUT).await)
            .to_have_value(&update.name)
            .await?;
        expect(self.page.locator(selectors::PROFILE_EMAIL_INPUT).await)
            .to_have_value(&update.email)
            .await?;
        expect(self.page.locator(selectors::PROFILE_PHONE_INPUT).await)
            .to_have_value(&update.phone)
            .await?;
        Ok(())
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<()> {
        self.page
            .locator(selectors::CURRENT_PASSWORD_INPUT)
            .await
            .fill(&change.current, None)
            .await?;
        self.page
            .locator(selectors::NEW_PASSWORD_INPUT)
            .await
            .fill(&change.new, None)
            .await?;
        self.page
            .locator(selectors::SAVE_PROFILE_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    /// Password save must confirm and clear both fields.
    pub async fn verify_password_changed(&self) -> Result<()> {
        let success = self.page.locator(selectors::SUCCESS_MESSAGE).await;
        expect(success.clone()).to_be_visible().await?;
        expect(success)
            .to_contain_text("Password changed successfully")
            .await?;
        expect(self.page.locator(selectors::CURRENT_PASSWORD_INPUT).await)
            .to_have_value("")
            .await?;
        expect(self.page.locator(selectors::NEW_PASSWORD_INPUT).await)
            .to_have_value("")
            .await?;
        Ok(())
    }

    /// Logs out through the user menu and verifies the login form is back.
    pub async fn logout_and_verify(&self) -> Result<()> {
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
        expect(self.page.locator(selectors::EMAIL_INPUT).await)
            .to_be_visible()
            .await?;
        expect(self.page.locator(selectors::PASSWORD_INPUT).await)
            .to_be_visible()
            .await?;
        Ok(())
    }
}
