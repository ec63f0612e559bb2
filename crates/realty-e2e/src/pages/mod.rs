//! Page objects: one struct per application page/role.
//!
//! Each struct wraps a live [`playwright_rs::Page`] (lifetime managed by the
//! test) plus the suite [`crate::Config`], and translates semantic user
//! intentions into locator interactions. Selectors prefer the application's
//! `data-test-id` attributes; the positional `:nth-child` chains of early
//! suite revisions are gone.

pub mod admin;
pub mod agent;
pub mod home;
pub mod login;
pub mod registration;
pub mod user;

pub use admin::{AdminPage, AdminSection};
pub use agent::AgentPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use registration::RegistrationPage;
pub use user::UserDashboardPage;
