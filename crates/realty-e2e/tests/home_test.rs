// Home page flows: headings, hero search, filter reset, navigation, and
// the public property/agent searches.

mod common;

use playwright_rs::expect;
use realty_e2e::assertions::{expect_count, expect_url};
use realty_e2e::pages::HomePage;

#[tokio::test]
async fn headings_are_rendered() {
    let app = common::launch().await;
    let home = HomePage::new(app.page.clone(), app.config.clone());

    home.visit().await.expect("Failed to open home page");
    home.verify_main_heading()
        .await
        .expect("Main heading should match");
    home.verify_sub_heading()
        .await
        .expect("Sub heading should match");

    app.close().await;
}

#[tokio::test]
async fn hero_search_returns_matching_results() {
    let app = common::launch().await;
    let home = HomePage::new(app.page.clone(), app.config.clone());
    let search = &app.fixtures.property_search;

    home.visit().await.expect("Failed to open home page");
    home.search_property(search)
        .await
        .expect("Failed to submit hero search");

    // The seeded dataset has exactly one property matching these criteria.
    let cards = home.property_cards().await;
    expect_count(&cards, 1, app.config.timeout())
        .await
        .expect("Search should return exactly one card");
    home.verify_cards_match_search(search)
        .await
        .expect("Each card should mention the location and type");

    let min: i64 = search.min_price.parse().unwrap();
    let max: i64 = search.max_price.parse().unwrap();
    for price in home
        .property_card_prices()
        .await
        .expect("Failed to read card prices")
    {
        assert!(
            price > min && price < max,
            "price {price} should be within ({min}, {max})"
        );
    }

    app.close().await;
}

#[tokio::test]
async fn reset_restores_the_search_form_defaults() {
    let app = common::launch().await;
    let home = HomePage::new(app.page.clone(), app.config.clone());

    home.visit().await.expect("Failed to open home page");
    home.search_property(&app.fixtures.property_search)
        .await
        .expect("Failed to submit hero search");
    home.reset_search()
        .await
        .expect("Reset should empty every input");
    home.verify_property_type_default("All Types")
        .await
        .expect("Type dropdown should be back on its default");
    home.verify_beds_default("Any Beds")
        .await
        .expect("Beds dropdown should be back on its default");

    app.close().await;
}

#[tokio::test]
async fn navigation_links_route_to_their_pages() {
    let app = common::launch().await;
    let home = HomePage::new(app.page.clone(), app.config.clone());

    home.visit().await.expect("Failed to open home page");
    home.click_links()
        .await
        .expect("Each nav link should route to its page");

    app.close().await;
}

#[tokio::test]
async fn view_details_opens_the_property_page() {
    let app = common::launch().await;
    let home = HomePage::new(app.page.clone(), app.config.clone());

    home.visit().await.expect("Failed to open home page");
    home.search_property(&app.fixtures.property_search)
        .await
        .expect("Failed to submit hero search");
    home.click_view_details()
        .await
        .expect("Failed to open the first result");
    expect_url(&app.page, r".*/properties/p1", app.config.timeout())
        .await
        .expect("Details should route to /properties/p1");

    app.close().await;
}

#[tokio::test]
async fn property_details_expose_the_contact_form() {
    let app = common::launch().await;
    let home = HomePage::new(app.page.clone(), app.config.clone());

    home.visit().await.expect("Failed to open home page");
    home.click_view_details()
        .await
        .expect("Failed to open the first property");
    let contact = app
        .page
        .locator(r#"[data-test-id="message-agent-button"]"#)
        .await;
    expect(contact.clone())
        .to_be_visible()
        .await
        .expect("Contact button should be visible");
    contact
        .click(None)
        .await
        .expect("Contact button should be clickable");

    app.close().await;
}

#[tokio::test]
async fn properties_page_search_covers_the_fallback_path() {
    let app = common::launch().await;
    let home = HomePage::new(app.page.clone(), app.config.clone());

    home.visit().await.expect("Failed to open home page");
    home.search_properties_from_home(&app.fixtures.property_search)
        .await
        .expect("Full-criteria search (or its fallback) should succeed");
    home.search_properties_with_location_only(&app.fixtures.property_search.location)
        .await
        .expect("Location-only search should succeed");
    home.reset_search()
        .await
        .expect("Reset should empty every input");
    home.verify_properties_search_form()
        .await
        .expect("Search form should be fully visible");

    app.close().await;
}

#[tokio::test]
async fn agents_page_search_and_form_are_functional() {
    let app = common::launch().await;
    let home = HomePage::new(app.page.clone(), app.config.clone());

    home.visit().await.expect("Failed to open home page");
    home.search_agents_from_home(&app.fixtures.agent_search)
        .await
        .expect("Agent search (or its fallback) should succeed");
    home.verify_agent_search_form()
        .await
        .expect("Agent search form should be fully visible");

    app.close().await;
}
