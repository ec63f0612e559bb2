// Valid login flows: each seeded role lands on /dashboard with its own
// account email behind the profile menu.

mod common;

use realty_e2e::pages::LoginPage;

#[tokio::test]
async fn user_logs_in_and_reaches_dashboard() {
    let app = common::launch().await;
    let login = LoginPage::new(app.page.clone(), app.config.clone());

    login.visit().await.expect("Failed to open login page");
    login
        .login_with(&app.fixtures.accounts.user)
        .await
        .expect("Failed to submit login form");
    login
        .verify_logged_in(&app.fixtures.accounts.user.email)
        .await
        .expect("User should be logged in");

    app.close().await;
}

#[tokio::test]
async fn agent_logs_in_and_reaches_dashboard() {
    let app = common::launch().await;
    let login = LoginPage::new(app.page.clone(), app.config.clone());

    login.visit().await.expect("Failed to open login page");
    login
        .login_with(&app.fixtures.accounts.agent)
        .await
        .expect("Failed to submit login form");
    login
        .verify_logged_in(&app.fixtures.accounts.agent.email)
        .await
        .expect("Agent should be logged in");

    app.close().await;
}

#[tokio::test]
async fn admin_logs_in_and_reaches_dashboard() {
    let app = common::launch().await;
    let login = LoginPage::new(app.page.clone(), app.config.clone());

    login.visit().await.expect("Failed to open login page");
    login
        .login_with(&app.fixtures.accounts.admin)
        .await
        .expect("Failed to submit login form");
    login
        .verify_logged_in(&app.fixtures.accounts.admin.email)
        .await
        .expect("Admin should be logged in");

    app.close().await;
}
