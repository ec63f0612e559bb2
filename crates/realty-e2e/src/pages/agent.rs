// Agent dashboard (`/dashboard` for the agent role): property management
// and the public contact-agent flow.

use playwright_rs::{Page, expect};
use tracing::info;

use crate::Config;
use crate::assertions::expect_url;
use crate::error::Result;
use crate::fixtures::{MessageData, ProfileUpdate, PropertyData};

mod selectors {
    pub const STAT_CARDS: [&str; 3] = [
        r".md\:grid-cols-3 > :nth-child(1)",
        r".md\:grid-cols-3 > :nth-child(2)",
        r".md\:grid-cols-3 > :nth-child(3)",
    ];
    pub const CARD_VALUE: &str = ".text-3xl";

    pub const ADD_PROPERTY_BUTTON: &str = r#"[data-test-id="add-property-button"]"#;
    pub const PROPERTY_TITLE_INPUT: &str = r#"[data-test-id="property-title-input"]"#;
    pub const PROPERTY_PRICE_INPUT: &str = r#"[data-test-id="property-price-input"]"#;
    pub const PROPERTY_BEDROOMS_INPUT: &str = r#"[data-test-id="property-bedrooms-input"]"#;
    pub const PROPERTY_BATHROOMS_INPUT: &str = r#"[data-test-id="property-bathrooms-input"]"#;
    pub const PROPERTY_AREA_INPUT: &str = r#"[data-test-id="property-area-input"]"#;
    pub const PROPERTY_YEAR_BUILT_INPUT: &str = r#"[data-test-id="property-year-built-input"]"#;
    pub const PROPERTY_ADDRESS_INPUT: &str = r#"[data-test-id="property-address-input"]"#;
    pub const PROPERTY_CITY_INPUT: &str = r#"[data-test-id="property-city-input"]"#;
    pub const PROPERTY_STATE_INPUT: &str = r#"[data-test-id="property-state-input"]"#;
    pub const PROPERTY_ZIP_INPUT: &str = r#"[data-test-id="property-zip-input"]"#;
    pub const PROPERTY_DESCRIPTION_INPUT: &str = r#"[data-test-id="property-description-input"]"#;
    pub const SUBMIT_PROPERTY_BUTTON: &str = r#"[data-test-id="submit-property-button"]"#;

    pub const VIEW_DETAILS_BUTTON: &str = r#"[data-test-id="view-details-button"]"#;
    pub const MESSAGE_AGENT_BUTTON: &str = r#"[data-test-id="message-agent-button"]"#;
    pub const MESSAGE_NAME_INPUT: &str = r#"[data-test-id="message-name-input"]"#;
    pub const MESSAGE_EMAIL_INPUT: &str = r#"[data-test-id="message-email-input"]"#;
    pub const MESSAGE_PHONE_INPUT: &str = r#"[data-test-id="message-phone-input"]"#;
    pub const MESSAGE_TEXT_INPUT: &str = r#"[data-test-id="message-text-input"]"#;
    pub const SEND_MESSAGE_BUTTON: &str = r#"[data-test-id="send-message-button"]"#;

    pub const USER_MENU_BUTTON: &str = r#"[data-test-id="user-menu-button"]"#;
    pub const PROFILE_NAME_INPUT: &str = r#"[data-test-id="profile-name-input"]"#;
    pub const PROFILE_EMAIL_INPUT: &str = r#"[data-test-id="profile-email-input"]"#;
    pub const PROFILE_PHONE_INPUT: &str = r#"[data-test-id="profile-phone-input"]"#;
    pub const SAVE_PROFILE_BUTTON: &str = r#"[data-test-id="save-profile-button"]"#;
}

const MESSAGE_SENT_TEXT: &str = "Message Sent!";
const MESSAGE_FOLLOW_UP_TEXT: &str = "will get back to you soon";

pub struct AgentPage {
    page: Page,
    config: Config,
}

impl AgentPage {
    pub fn new(page: Page, config: Config) -> Self {
        Self { page, config }
    }

    /// All three stat cards are visible with a non-empty value.
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

    pub async fn navigate_to_settings(&self) -> Result<()> {
        self.page
            .locator(selectors::USER_MENU_BUTTON)
            .await
            .click(None)
            .await?;
        self.page
            .locator("text=Settings")
            .await
            .click(None)
            .await?;
        expect_url(&self.page, r".*/settings", self.config.timeout()).await?;
        Ok(())
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
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

    /// Fills every property field, submits, and verifies the new title and
    /// address show up in the listing. Also the vehicle for the
    /// negative-values defect test: the form accepts them unchanged.
    pub async fn create_property(&self, property: &PropertyData) -> Result<()> {
        info!(title = %property.title, "creating property");
        self.page
            .locator(selectors::ADD_PROPERTY_BUTTON)
            .await
            .click(None)
            .await?;
        for (selector, value) in [
            (selectors::PROPERTY_TITLE_INPUT, property.title.as_str()),
            (selectors::PROPERTY_PRICE_INPUT, property.price.as_str()),
            (selectors::PROPERTY_BEDROOMS_INPUT, property.bedrooms.as_str()),
            (
                selectors::PROPERTY_BATHROOMS_INPUT,
                property.bathrooms.as_str(),
            ),
            (selectors::PROPERTY_AREA_INPUT, property.area.as_str()),
            (
                selectors::PROPERTY_YEAR_BUILT_INPUT,
                property.year_built.as_str(),
            ),
            (selectors::PROPERTY_ADDRESS_INPUT, property.address.as_str()),
            (selectors::PROPERTY_CITY_INPUT, property.city.as_str()),
            (selectors::PROPERTY_STATE_INPUT, property.state.as_str()),
            (selectors::PROPERTY_ZIP_INPUT, property.zip_code.as_str()),
            (
                selectors::PROPERTY_DESCRIPTION_INPUT,
                property.description.as_str(),
            ),
        ] {
            self.page.locator(selector).await.fill(value, None).await?;
        }
        self.page
            .locator(selectors::SUBMIT_PROPERTY_BUTTON)
            .await
            .click(None)
            .await?;

        expect(self.page.locator(&format!("text={}", property.title)).await)
            .to_be_visible()
            .await?;
        expect(
            self.page
                .locator(&format!("text={}", property.address))
                .await,
        )
        .to_be_visible()
        .await?;
        Ok(())
    }

    /// Submits the empty property form; every field's validation message
    /// must be on screen.
    pub async fn verify_empty_property_validation(&self, messages: &[String]) -> Result<()> {
        self.page
            .locator(selectors::ADD_PROPERTY_BUTTON)
            .await
            .click(None)
            .await?;
        self.page
            .locator(selectors::SUBMIT_PROPERTY_BUTTON)
            .await
            .click(None)
            .await?;
        for message in messages {
            expect(self.page.locator(&format!("text={message}")).await)
                .to_be_visible()
                .await?;
        }
        Ok(())
    }

    /// Opens the first property's detail page and its contact form.
    pub async fn open_contact_form(&self) -> Result<()> {
        self.page
            .locator(selectors::VIEW_DETAILS_BUTTON)
            .await
            .first()
            .click(None)
            .await?;
        self.page
            .locator(selectors::MESSAGE_AGENT_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    /// Sends a message through the contact form and waits for the
    /// confirmation copy.
    pub async fn send_message_to_agent(&self, message: &MessageData) -> Result<()> {
        self.open_contact_form().await?;
        for (selector, value) in [
            (selectors::MESSAGE_NAME_INPUT, message.name.as_str()),
            (selectors::MESSAGE_EMAIL_INPUT, message.email.as_str()),
            (selectors::MESSAGE_PHONE_INPUT, message.phone.as_str()),
            (selectors::MESSAGE_TEXT_INPUT, message.message.as_str()),
        ] {
            self.page.locator(selector).await.fill(value, None).await?;
        }
        self.page
            .locator(selectors::SEND_MESSAGE_BUTTON)
            .await
            .click(None)
            .await?;

        expect(self.page.locator(&format!("text={MESSAGE_SENT_TEXT}")).await)
            .to_be_visible()
            .await?;
        expect(
            self.page
                .locator(&format!("text={MESSAGE_FOLLOW_UP_TEXT}"))
                .await,
        )
        .to_be_visible()
        .await?;
        Ok(())
    }

    /// Clears the prefilled contact form and submits it empty; all four
    /// validation messages must appear.
    pub async fn verify_empty_message_validation(
        &self,
        expected_messages: &[&str],
    ) -> Result<()> {
        self.open_contact_form().await?;
        for selector in [
            selectors::MESSAGE_NAME_INPUT,
            selectors::MESSAGE_EMAIL_INPUT,
            selectors::MESSAGE_PHONE_INPUT,
            selectors::MESSAGE_TEXT_INPUT,
        ] {
            self.page.locator(selector).await.clear(None).await?;
        }
        self.page
            .locator(selectors::SEND_MESSAGE_BUTTON)
            .await
            .click(None)
            .await?;
        for message in expected_messages {
            expect(self.page.locator(&format!("text={message}")).await)
                .to_be_visible()
                .await?;
        }
        Ok(())
    }
}
