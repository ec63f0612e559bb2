// Admin dashboard (`/dashboard` for the admin role)
//
// The dashboard has three managed sections (properties, users, agents) that
// share the same table/search/filter layout, so most actions are
// parameterized by `AdminSection`.

use std::time::Duration;

use playwright_rs::{Locator, Page, expect};
use tracing::info;

use crate::Config;
use crate::assertions::{expect_count_changed, expect_url};
use crate::error::Result;
use crate::fixtures::ProfileUpdate;

mod selectors {
    pub const STAT_CARDS: [&str; 4] = [
        ".grid > :nth-child(1)",
        ".grid > :nth-child(2)",
        ".grid > :nth-child(3)",
        ".grid > :nth-child(4)",
    ];
    pub const TOTAL_USERS_CARD: &str = ".grid > :nth-child(1)";
    pub const CARD_VALUE: &str = ".text-3xl";

    pub const PROPERTIES_TAB: &str = r#"[data-test-id="properties-tab"]"#;
    pub const USERS_TAB: &str = r#"[data-test-id="users-tab"]"#;
    pub const AGENTS_TAB: &str = r#"[data-test-id="agents-tab"]"#;

    pub const PROPERTY_SEARCH_INPUT: &str = r#"[data-test-id="property-search-input"]"#;
    pub const STATUS_FILTER_DROPDOWN: &str = r#"[data-test-id="status-filter-dropdown"]"#;
    pub const USER_SEARCH_INPUT: &str = r#"[data-test-id="user-search-input"]"#;
    pub const ROLE_FILTER_DROPDOWN: &str = r#"[data-test-id="role-filter-dropdown"]"#;
    pub const AGENT_SEARCH_INPUT: &str = r#"[data-test-id="agent-search-input"]"#;
    pub const SPECIALIZATION_FILTER_DROPDOWN: &str =
        r#"[data-test-id="specialization-filter-dropdown"]"#;
    pub const RESET_FILTERS_BUTTON: &str = r#"[data-test-id="reset-filters-button"]"#;

    pub const TABLE_ROWS: &str = "table tbody tr";

    pub const DELETE_PROPERTY_BUTTON: &str = r#"[data-test-id="delete-property-button"]"#;
    pub const EDIT_USER_BUTTON: &str = r#"[data-test-id="edit-user-button"]"#;
    pub const DELETE_USER_BUTTON: &str = r#"[data-test-id="delete-user-button"]"#;
    pub const EDIT_AGENT_BUTTON: &str = r#"[data-test-id="edit-agent-button"]"#;
    pub const DELETE_AGENT_BUTTON: &str = r#"[data-test-id="delete-agent-button"]"#;
    pub const CONFIRM_DELETE_BUTTON: &str = r#"[data-test-id="confirm-delete-button"]"#;

    pub const USER_NAME_INPUT: &str = r#"[data-test-id="user-name-input"]"#;
    pub const USER_EMAIL_INPUT: &str = r#"[data-test-id="user-email-input"]"#;
    pub const USER_PHONE_INPUT: &str = r#"[data-test-id="user-phone-input"]"#;
    pub const USER_ROLE_DROPDOWN: &str = r#"[data-test-id="user-role-dropdown"]"#;
    pub const SAVE_CHANGES_BUTTON: &str = r#"[data-test-id="save-changes-button"]"#;

    pub const AGENT_NAME_INPUT: &str = r#"[data-test-id="agent-name-input"]"#;
    pub const AGENT_EMAIL_INPUT: &str = r#"[data-test-id="agent-email-input"]"#;
    pub const AGENT_PHONE_INPUT: &str = r#"[data-test-id="agent-phone-input"]"#;
    pub const AGENT_SPECIALIZATION_DROPDOWN: &str =
        r#"[data-test-id="agent-specialization-dropdown"]"#;
    pub const SAVE_AGENT_BUTTON: &str = r#"[data-test-id="save-agent-button"]"#;

    pub const USER_MENU_BUTTON: &str = r#"[data-test-id="user-menu-button"]"#;
    pub const SETTINGS_LINK: &str = r#"[href="/settings"]"#;
    pub const LOGOUT_BUTTON: &str = r#"[data-test-id="logout-button"]"#;
    pub const PROFILE_NAME_INPUT: &str = r#"[data-test-id="profile-name-input"]"#;
    pub const PROFILE_EMAIL_INPUT: &str = r#"[data-test-id="profile-email-input"]"#;
    pub const PROFILE_PHONE_INPUT: &str = r#"[data-test-id="profile-phone-input"]"#;
    pub const SAVE_PROFILE_BUTTON: &str = r#"[data-test-id="save-profile-button"]"#;
    pub const SUCCESS_MESSAGE: &str = r#"[data-test-id="success-message"]"#;
}

/// The three managed sections of the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Properties,
    Users,
    Agents,
}

impl AdminSection {
    fn search_selector(self) -> &'static str {
        match self {
            AdminSection::Properties => selectors::PROPERTY_SEARCH_INPUT,
            AdminSection::Users => selectors::USER_SEARCH_INPUT,
            AdminSection::Agents => selectors::AGENT_SEARCH_INPUT,
        }
    }

    fn filter_selector(self) -> &'static str {
        match self {
            AdminSection::Properties => selectors::STATUS_FILTER_DROPDOWN,
            AdminSection::Users => selectors::ROLE_FILTER_DROPDOWN,
            AdminSection::Agents => selectors::SPECIALIZATION_FILTER_DROPDOWN,
        }
    }

    /// Label of the dropdown's placeholder option after a reset.
    fn default_filter_label(self) -> &'static str {
        match self {
            AdminSection::Properties => "All Statuses",
            AdminSection::Users => "All Roles",
            AdminSection::Agents => "All Specializations",
        }
    }
}

pub struct AdminPage {
    page: Page,
    config: Config,
}

impl AdminPage {
    pub fn new(page: Page, config: Config) -> Self {
        Self { page, config }
    }

    /// All four stat cards render a numeric value.
    pub async fn verify_dashboard_cards(&self) -> Result<()> {
        for card in selectors::STAT_CARDS {
            let value = self
                .page
                .locator(card)
                .await
                .locator(selectors::CARD_VALUE);
            expect(value).to_have_text_regex(r"\d+").await?;
        }
        Ok(())
    }

    pub async fn open_section(&self, section: AdminSection) -> Result<()> {
        let tab = match section {
            AdminSection::Properties => selectors::PROPERTIES_TAB,
            AdminSection::Users => selectors::USERS_TAB,
            AdminSection::Agents => selectors::AGENTS_TAB,
        };
        self.page.locator(tab).await.click(None).await?;
        Ok(())
    }

    pub async fn search(&self, section: AdminSection, text: &str) -> Result<()> {
        self.page
            .locator(section.search_selector())
            .await
            .fill(text, None)
            .await?;
        Ok(())
    }

    /// The status dropdown mounts after the property table loads, which can
    /// be slow on a cold backend; give it a generous budget.
    pub async fn filter_properties_by_status(&self, status: &str) -> Result<()> {
        let dropdown = self.page.locator(selectors::STATUS_FILTER_DROPDOWN).await;
        expect(dropdown.clone())
            .with_timeout(Duration::from_secs(60))
            .to_be_visible()
            .await?;
        dropdown.select_option(status, None).await?;
        Ok(())
    }

    pub async fn filter_users_by_role(&self, role: &str) -> Result<()> {
        self.page
            .locator(selectors::ROLE_FILTER_DROPDOWN)
            .await
            .select_option(role, None)
            .await?;
        Ok(())
    }

    pub async fn filter_agents_by_specialization(&self, specialization: &str) -> Result<()> {
        self.page
            .locator(selectors::SPECIALIZATION_FILTER_DROPDOWN)
            .await
            .select_option(specialization, None)
            .await?;
        Ok(())
    }

    /// Resets the section's filters and verifies the contract from the
    /// suite's testable properties: search input empty, dropdown back on its
    /// placeholder option, visible row count no longer the filtered one.
    pub async fn reset_filters(&self, section: AdminSection) -> Result<()> {
        info!(?section, "resetting filters");
        let rows = self.table_rows().await;
        let filtered_count = rows.count().await?;

        self.page
            .locator(selectors::RESET_FILTERS_BUTTON)
            .await
            .click(None)
            .await?;

        expect(self.page.locator(section.search_selector()).await)
            .to_have_value("")
            .await?;
        let first_option = self
            .page
            .locator(section.filter_selector())
            .await
            .locator("option")
            .first();
        expect(first_option)
            .to_contain_text(section.default_filter_label())
            .await?;
        expect_count_changed(&rows, filtered_count, self.config.timeout()).await?;
        Ok(())
    }

    /// Deletes the first listed property. The application has a known bug
    /// here: the row stays visible afterwards, and the covering test
    /// asserts exactly that.
    pub async fn delete_first_property(&self) -> Result<()> {
        self.page
            .locator(selectors::DELETE_PROPERTY_BUTTON)
            .await
            .first()
            .click(None)
            .await?;
        self.page
            .locator(selectors::CONFIRM_DELETE_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    pub async fn edit_first_user(&self, update: &ProfileUpdate, role: &str) -> Result<()> {
        self.page
            .locator(selectors::EDIT_USER_BUTTON)
            .await
            .first()
            .click(None)
            .await?;
        self.page
            .locator(selectors::USER_NAME_INPUT)
            .await
            .fill(&update.name, None)
            .await?;
        self.page
            .locator(selectors::USER_EMAIL_INPUT)
            .await
            .fill(&update.email, None)
            .await?;
        self.page
            .locator(selectors::USER_PHONE_INPUT)
            .await
            .fill(&update.phone, None)
            .await?;
        self.page
            .locator(selectors::USER_ROLE_DROPDOWN)
            .await
            .select_option(role, None)
            .await?;
        self.page
            .locator(selectors::SAVE_CHANGES_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    /// Deletes the first listed user and verifies the Total Users card
    /// drops from its previous value.
    pub async fn delete_first_user(&self) -> Result<()> {
        let counter = self
            .page
            .locator(selectors::TOTAL_USERS_CARD)
            .await
            .locator(selectors::CARD_VALUE);
        let initial = counter.text_content().await?.unwrap_or_default();

        self.page
            .locator(selectors::DELETE_USER_BUTTON)
            .await
            .first()
            .click(None)
            .await?;
        self.page
            .locator(selectors::CONFIRM_DELETE_BUTTON)
            .await
            .click(None)
            .await?;

        expect(counter).not().to_have_text(&initial).await?;
        Ok(())
    }

    pub async fn edit_first_agent(
        &self,
        update: &ProfileUpdate,
        specialization: &str,
    ) -> Result<()> {
        self.page
            .locator(selectors::EDIT_AGENT_BUTTON)
            .await
            .first()
            .click(None)
            .await?;
        self.page
            .locator(selectors::AGENT_NAME_INPUT)
            .await
            .fill(&update.name, None)
            .await?;
        self.page
            .locator(selectors::AGENT_EMAIL_INPUT)
            .await
            .fill(&update.email, None)
            .await?;
        self.page
            .locator(selectors::AGENT_PHONE_INPUT)
            .await
            .fill(&update.phone, None)
            .await?;
        self.page
            .locator(selectors::AGENT_SPECIALIZATION_DROPDOWN)
            .await
            .select_option(specialization, None)
            .await?;
        self.page
            .locator(selectors::SAVE_AGENT_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    pub async fn delete_first_agent(&self) -> Result<()> {
        self.page
            .locator(selectors::DELETE_AGENT_BUTTON)
            .await
            .first()
            .click(None)
            .await?;
        self.page
            .locator(selectors::CONFIRM_DELETE_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    pub async fn table_rows(&self) -> Locator {
        self.page.locator(selectors::TABLE_ROWS).await
    }

    pub async fn navigate_to_settings(&self) -> Result<()> {
        self.page
            .locator(selectors::USER_MENU_BUTTON)
            .await
            .click(None)
            .await?;
        self.page
            .locator(selectors::SETTINGS_LINK)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        self.page
            .locator(selectors::PROFILE_NAME_INPUT)
            .await
            .fill(&update.name, None)
            .await?;
        self.page
            .locator(selectors::PROFILE_EMAIL_INPUT)
            .await
            .fill(&update.email, None)
            .await?;
        self.page
            .locator(selectors::PROFILE_PHONE_INPUT)
            .await
            .fill(&update.phone, None)
            .await?;
        self.page
            .locator(selectors::SAVE_PROFILE_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    pub async fn verify_success_message(&self) -> Result<()> {
        expect(self.page.locator(selectors::SUCCESS_MESSAGE).await)
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
}
