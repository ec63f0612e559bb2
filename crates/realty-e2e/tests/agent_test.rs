// Agent dashboard flows: property creation and validation, the contact-agent
// form, and profile settings.

mod common;

use playwright_rs::expect;
use realty_e2e::assertions::expect_url;
use realty_e2e::pages::{AgentPage, LoginPage};

/// Logs in as the seeded agent and waits for the dashboard.
async fn login_as_agent(app: &common::TestApp) -> AgentPage {
    let login = LoginPage::new(app.page.clone(), app.config.clone());
    login.visit().await.expect("Failed to open login page");
    login
        .login_with(&app.fixtures.accounts.agent)
        .await
        .expect("Failed to log in as agent");
    expect_url(&app.page, r".*/dashboard", app.config.timeout())
        .await
        .expect("Agent login should land on the dashboard");
    AgentPage::new(app.page.clone(), app.config.clone())
}

#[tokio::test]
async fn dashboard_renders_for_the_agent_role() {
    let app = common::launch().await;
    let agent = login_as_agent(&app).await;

    agent
        .verify_dashboard()
        .await
        .expect("All three stat cards should render");

    app.close().await;
}

#[tokio::test]
async fn property_creation_lists_the_new_property() {
    let app = common::launch().await;
    let agent = login_as_agent(&app).await;

    // create_property itself verifies the title and address show up.
    agent
        .create_property(&app.fixtures.properties.valid)
        .await
        .expect("Property creation should list the new title and address");

    app.close().await;
}

#[tokio::test]
async fn empty_property_form_surfaces_every_message() {
    let app = common::launch().await;
    let agent = login_as_agent(&app).await;

    agent
        .verify_empty_property_validation(&app.fixtures.property_messages)
        .await
        .expect("All eleven validation messages should be visible");

    app.close().await;
}

// Negative numeric fields are accepted end-to-end.
#[tokio::test]
async fn negative_values_are_accepted() {
    let app = common::launch().await;
    let agent = login_as_agent(&app).await;

    agent
        .create_property(&app.fixtures.properties.negative)
        .await
        .expect("Known bug: negative values should be accepted as-is");

    app.close().await;
}

#[tokio::test]
async fn contact_form_sends_a_message() {
    let app = common::launch().await;
    let agent = login_as_agent(&app).await;

    agent
        .create_property(&app.fixtures.properties.valid)
        .await
        .expect("Failed to create the property to message about");
    agent
        .send_message_to_agent(&app.fixtures.message)
        .await
        .expect("Message should send with a confirmation");

    app.close().await;
}

#[tokio::test]
async fn empty_contact_form_surfaces_validation() {
    let app = common::launch().await;
    let agent = login_as_agent(&app).await;

    agent
        .create_property(&app.fixtures.properties.valid)
        .await
        .expect("Failed to create the property to message about");

    let messages = &app.fixtures.message_form_messages;
    agent
        .verify_empty_message_validation(&[
            messages.name_required.as_str(),
            messages.invalid_email.as_str(),
            messages.phone_required.as_str(),
            messages.message_length.as_str(),
        ])
        .await
        .expect("All four message-form validation errors should be visible");

    app.close().await;
}

// Saving reports success but the new credentials are not persisted; only
// the success copy is asserted here.
#[tokio::test]
async fn profile_update_reports_success() {
    let app = common::launch().await;
    let agent = login_as_agent(&app).await;

    agent
        .navigate_to_settings()
        .await
        .expect("Failed to open settings");
    agent
        .update_profile(&app.fixtures.profiles.agent)
        .await
        .expect("Failed to submit the profile form");

    expect(
        app.page
            .locator("text=Settings updated successfully")
            .await,
    )
    .to_be_visible()
    .await
    .expect("Profile save should confirm");

    app.close().await;
}
