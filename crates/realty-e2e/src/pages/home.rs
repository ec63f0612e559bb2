// Home page (`/`) plus the public `/properties` and `/agents` search pages.
//
// The property search form is one shared component, so the same
// `data-test-id` selectors resolve on the home hero and on `/properties`.

use playwright_rs::{Locator, Page, expect};
use tracing::{debug, info};

use crate::Config;
use crate::assertions::expect_url;
use crate::error::Result;
use crate::fixtures::{AgentSearch, PropertySearch};

mod selectors {
    pub const PROPERTIES_LINK: &str = r#"[href="/properties"]"#;
    pub const AGENTS_LINK: &str = r#"[href="/agents"]"#;
    pub const ABOUT_LINK: &str = r#"[href="/about"]"#;
    pub const LOGIN_LINK: &str = r#"[href="/login"]"#;

    pub const MAIN_HEADING: &str = ".text-4xl";
    pub const SUB_HEADING: &str = ".text-center > .text-xl";

    // Property search form (shared between the hero and /properties)
    pub const LOCATION_INPUT: &str = r#"[data-test-id="location-input"]"#;
    pub const MIN_PRICE_INPUT: &str = r#"[data-test-id="min-price-input"]"#;
    pub const MAX_PRICE_INPUT: &str = r#"[data-test-id="max-price-input"]"#;
    pub const PROPERTY_TYPE_DROPDOWN: &str = r#"[data-test-id="property-type-dropdown"]"#;
    pub const BEDS_DROPDOWN: &str = r#"[data-test-id="beds-dropdown"]"#;
    pub const SEARCH_BUTTON: &str = r#"[data-test-id="search-properties-button"]"#;
    pub const RESET_BUTTON: &str = r#"[data-test-id="reset-search-button"]"#;

    pub const PROPERTY_CARD: &str = r#"[data-test-id="property-card"]"#;
    pub const PROPERTY_PRICE: &str = ".property-price";
    pub const VIEW_DETAILS_BUTTON: &str = r#"[data-test-id="view-details-button"]"#;

    // Agents search form
    pub const AGENT_NAME_INPUT: &str = r#"[data-test-id="agent-name-input"]"#;
    pub const SPECIALIZATION_DROPDOWN: &str = r#"[data-test-id="specialization-dropdown"]"#;
    pub const AGENT_LOCATION_INPUT: &str = r#"[data-test-id="agent-location-input"]"#;
    pub const SEARCH_AGENTS_BUTTON: &str = r#"[data-test-id="search-agents-button"]"#;
    pub const RESET_AGENTS_BUTTON: &str = r#"[data-test-id="reset-agents-button"]"#;
    pub const AGENTS_RESULT_GRID: &str = ".mt-8 > .grid";
}

const MAIN_HEADING_TEXT: &str = "Find Your Dream Property";
const SUB_HEADING_TEXT: &str =
    "Discover the perfect home from our extensive collection of properties";
const NO_PROPERTIES_TEXT: &str = "No properties match your search criteria.";
const ADJUST_FILTERS_TEXT: &str = "Try adjusting your filters or search terms.";
const NO_AGENTS_TEXT: &str = "No agents match your search criteria.";

pub struct HomePage {
    page: Page,
    config: Config,
}

impl HomePage {
    pub fn new(page: Page, config: Config) -> Self {
        Self { page, config }
    }

    pub async fn visit(&self) -> Result<()> {
        self.page.goto(&self.config.url("/"), None).await?;
        Ok(())
    }

    pub async fn verify_main_heading(&self) -> Result<()> {
        expect(self.page.locator(selectors::MAIN_HEADING).await)
            .to_have_text(MAIN_HEADING_TEXT)
            .await?;
        Ok(())
    }

    pub async fn verify_sub_heading(&self) -> Result<()> {
        expect(self.page.locator(selectors::SUB_HEADING).await)
            .to_have_text(SUB_HEADING_TEXT)
            .await?;
        Ok(())
    }

    /// Fills the hero search form and submits.
    pub async fn search_property(&self, search: &PropertySearch) -> Result<()> {
        info!(location = %search.location, "searching properties from hero");
        self.fill_search_form(search).await?;
        self.page
            .locator(selectors::SEARCH_BUTTON)
            .await
            .click(None)
            .await?;
        Ok(())
    }

    /// Locator over the visible result cards.
    pub async fn property_cards(&self) -> Locator {
        self.page.locator(selectors::PROPERTY_CARD).await
    }

    /// Every result card must mention the searched location and type.
    pub async fn verify_cards_match_search(&self, search: &PropertySearch) -> Result<()> {
        let cards = self.property_cards().await;
        let count = cards.count().await?;
        for i in 0..count {
            let card = cards.nth(i as i32);
            expect(card.clone()).to_contain_text(&search.location).await?;
            expect(card).to_contain_text(&search.property_type).await?;
        }
        Ok(())
    }

    /// Numeric price of each visible result card, in on-screen order.
    pub async fn property_card_prices(&self) -> Result<Vec<i64>> {
        let cards = self.property_cards().await;
        let count = cards.count().await?;
        let mut prices = Vec::with_capacity(count);
        for i in 0..count {
            let text = cards
                .nth(i as i32)
                .locator(selectors::PROPERTY_PRICE)
                .text_content()
                .await?
                .unwrap_or_default();
            let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
            prices.push(digits.parse::<i64>().unwrap_or(0));
        }
        Ok(prices)
    }

    /// Resets the search form and verifies every field is back at its
    /// default: inputs empty, dropdowns on their placeholder option.
    pub async fn reset_search(&self) -> Result<()> {
        self.page
            .locator(selectors::RESET_BUTTON)
            .await
            .click(None)
            .await?;
        for input in [
            selectors::LOCATION_INPUT,
            selectors::MIN_PRICE_INPUT,
            selectors::MAX_PRICE_INPUT,
        ] {
            expect(self.page.locator(input).await)
                .to_have_value("")
                .await?;
        }
        Ok(())
    }

    pub async fn verify_property_type_default(&self, value: &str) -> Result<()> {
        expect(self.page.locator(selectors::PROPERTY_TYPE_DROPDOWN).await)
            .to_have_value(value)
            .await?;
        Ok(())
    }

    pub async fn verify_beds_default(&self, value: &str) -> Result<()> {
        expect(self.page.locator(selectors::BEDS_DROPDOWN).await)
            .to_have_value(value)
            .await?;
        Ok(())
    }

    /// Navigates to `/properties` and runs a full-criteria search. When
    /// nothing matches, verifies the empty state, then resets and retries
    /// with the location alone.
    pub async fn search_properties_from_home(&self, search: &PropertySearch) -> Result<()> {
        self.page
            .locator(selectors::PROPERTIES_LINK)
            .await
            .click(None)
            .await?;
        self.fill_search_form(search).await?;
        self.page
            .locator(selectors::SEARCH_BUTTON)
            .await
            .click(None)
            .await?;

        let has_results = self.property_cards().await.first().is_visible().await?;
        if !has_results {
            debug!("no results for full criteria, retrying with location only");
            expect(self.page.locator(&format!("text={NO_PROPERTIES_TEXT}")).await)
                .to_be_visible()
                .await?;
            expect(self.page.locator(&format!("text={ADJUST_FILTERS_TEXT}")).await)
                .to_be_visible()
                .await?;

            self.page
                .locator(selectors::RESET_BUTTON)
                .await
                .click(None)
                .await?;
            self.page
                .locator(selectors::LOCATION_INPUT)
                .await
                .fill(&search.location, None)
                .await?;
            self.page
                .locator(selectors::SEARCH_BUTTON)
                .await
                .click(None)
                .await?;
        }
        Ok(())
    }

    /// `/properties` search with only the location filled in.
    pub async fn search_properties_with_location_only(&self, location: &str) -> Result<()> {
        self.page
            .locator(selectors::PROPERTIES_LINK)
            .await
            .click(None)
            .await?;
        self.page
            .locator(selectors::RESET_BUTTON)
            .await
            .click(None)
            .await?;
        self.page
            .locator(selectors::LOCATION_INPUT)
            .await
            .fill(location, None)
            .await?;
        self.page
            .locator(selectors::SEARCH_BUTTON)
            .await
            .click(None)
            .await?;

        if !self.property_cards().await.first().is_visible().await? {
            expect(self.page.locator(&format!("text={NO_PROPERTIES_TEXT}")).await)
                .to_be_visible()
                .await?;
        }
        Ok(())
    }

    pub async fn verify_properties_search_form(&self) -> Result<()> {
        for selector in [
            selectors::LOCATION_INPUT,
            selectors::MIN_PRICE_INPUT,
            selectors::MAX_PRICE_INPUT,
            selectors::PROPERTY_TYPE_DROPDOWN,
            selectors::BEDS_DROPDOWN,
            selectors::SEARCH_BUTTON,
            selectors::RESET_BUTTON,
        ] {
            expect(self.page.locator(selector).await)
                .to_be_visible()
                .await?;
        }
        Ok(())
    }

    /// Navigates to `/agents` and searches by specialization and location,
    /// with the same empty-state fallback as the property search.
    pub async fn search_agents_from_home(&self, search: &AgentSearch) -> Result<()> {
        self.page
            .locator(selectors::AGENTS_LINK)
            .await
            .click(None)
            .await?;
        self.page
            .locator(selectors::SPECIALIZATION_DROPDOWN)
            .await
            .select_option(search.specialization.as_str(), None)
            .await?;
        self.page
            .locator(selectors::AGENT_LOCATION_INPUT)
            .await
            .fill(&search.location, None)
            .await?;
        self.page
            .locator(selectors::SEARCH_AGENTS_BUTTON)
            .await
            .click(None)
            .await?;

        let grid = self.page.locator(selectors::AGENTS_RESULT_GRID).await;
        if grid.is_visible().await? {
            expect(grid).to_have_text_regex(r"\S").await?;
            expect(
                self.page
                    .locator(&format!("text={}", search.specialization))
                    .await,
            )
            .to_be_visible()
            .await?;
        } else {
            expect(self.page.locator(&format!("text={NO_AGENTS_TEXT}")).await)
                .to_be_visible()
                .await?;

            self.page
                .locator(selectors::RESET_AGENTS_BUTTON)
                .await
                .click(None)
                .await?;
            self.page
                .locator(selectors::AGENT_LOCATION_INPUT)
                .await
                .fill(&search.location, None)
                .await?;
            self.page
                .locator(selectors::SEARCH_AGENTS_BUTTON)
                .await
                .click(None)
                .await?;
        }
        Ok(())
    }

    pub async fn verify_agent_search_form(&self) -> Result<()> {
        self.page
            .locator(selectors::AGENTS_LINK)
            .await
            .click(None)
            .await?;
        for selector in [
            selectors::AGENT_NAME_INPUT,
            selectors::SPECIALIZATION_DROPDOWN,
            selectors::AGENT_LOCATION_INPUT,
            selectors::SEARCH_AGENTS_BUTTON,
        ] {
            expect(self.page.locator(selector).await)
                .to_be_visible()
                .await?;
        }
        Ok(())
    }

    pub async fn click_view_details(&self) -> Result<()> {
        self.page
            .locator(selectors::VIEW_DETAILS_BUTTON)
            .await
            .first()
            .click(None)
            .await?;
        Ok(())
    }

    /// Each top-navigation link must route to its page.
    pub async fn click_links(&self) -> Result<()> {
        let routes = [
            (selectors::PROPERTIES_LINK, r".*/properties"),
            (selectors::AGENTS_LINK, r".*/agents"),
            (selectors::ABOUT_LINK, r".*/about"),
            (selectors::LOGIN_LINK, r".*/login"),
        ];
        for (link, pattern) in routes {
            self.page.locator(link).await.click(None).await?;
            expect_url(&self.page, pattern, self.config.timeout()).await?;
        }
        Ok(())
    }

    async fn fill_search_form(&self, search: &PropertySearch) -> Result<()> {
        self.page
            .locator(selectors::LOCATION_INPUT)
            .await
            .fill(&search.location, None)
            .await?;
        self.page
            .locator(selectors::MIN_PRICE_INPUT)
            .await
            .fill(&search.min_price, None)
            .await?;
        self.page
            .locator(selectors::MAX_PRICE_INPUT)
            .await
            .fill(&search.max_price, None)
            .await?;
        self.page
            .locator(selectors::PROPERTY_TYPE_DROPDOWN)
            .await
            .select_option(search.property_type.as_str(), None)
            .await?;
        self.page
            .locator(selectors::BEDS_DROPDOWN)
            .await
            .select_option(search.beds.as_str(), None)
            .await?;
        Ok(())
    }
}
