// Typed test fixtures
//
// The backend is pre-seeded with the accounts below; everything else is
// plain literal data passed to page-object methods. The JSON file is the
// single place a credential or expected message is spelled out.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;

use crate::error::{Error, Result};

const TEST_DATA: &str = include_str!("../fixtures/test_data.json");

/// One seeded login.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The named credential sets the suite assumes exist in the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Accounts {
    pub user: Credentials,
    pub agent: Credentials,
    pub admin: Credentials,
    /// Wrong password for a seeded account.
    pub invalid: Credentials,
    /// An email no seeded account uses.
    pub unknown: Credentials,
}

/// Data for one registration-form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationData {
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: String,
    pub account_type: String,
    pub password: String,
}

/// Deliberately bad inputs for the validation tests.
#[derive(Debug, Clone, Deserialize)]
pub struct InvalidInputs {
    pub short_password: String,
    pub no_uppercase_password: String,
    pub no_number_password: String,
    pub no_special_password: String,
    pub mismatched_confirm_password: String,
}

/// Exact validation copy the registration form renders.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationMessages {
    pub name_required: String,
    pub invalid_email: String,
    pub invalid_phone: String,
    pub password_length: String,
    pub passwords_do_not_match: String,
    pub password_uppercase: String,
    pub password_number: String,
    pub password_special: String,
}

/// Exact validation copy the contact-agent form renders.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageFormMessages {
    pub name_required: String,
    pub invalid_email: String,
    pub phone_required: String,
    pub message_length: String,
}

/// A full property-creation form submission.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyData {
    pub title: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub year_built: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub description: String,
}

/// Property fixtures: one well-formed record and one with negative numeric
/// fields (the application accepts the latter; known bug).
#[derive(Debug, Clone, Deserialize)]
pub struct Properties {
    pub valid: PropertyData,
    pub negative: PropertyData,
}

/// Hero/properties-page search parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertySearch {
    pub location: String,
    pub min_price: String,
    pub max_price: String,
    pub property_type: String,
    pub beds: String,
}

/// Agents-page search parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentSearch {
    pub specialization: String,
    pub location: String,
}

/// Contact-agent message payload.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Replacement profile data for the settings flows.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Password change for the user settings flow.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profiles {
    pub user: ProfileUpdate,
    pub agent: ProfileUpdate,
    pub admin: ProfileUpdate,
    pub password_change: PasswordChange,
}

/// Everything `fixtures/test_data.json` supplies, decoded once per call.
#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    pub accounts: Accounts,
    pub registration: RegistrationData,
    pub invalid_inputs: InvalidInputs,
    pub registration_messages: RegistrationMessages,
    /// The eleven messages an empty property submission must surface.
    pub property_messages: Vec<String>,
    pub message_form_messages: MessageFormMessages,
    pub properties: Properties,
    pub property_search: PropertySearch,
    pub agent_search: AgentSearch,
    pub message: MessageData,
    pub profiles: Profiles,
}

impl Fixtures {
    /// Decodes the embedded fixture file.
    pub fn load() -> Result<Self> {
        serde_json::from_str(TEST_DATA)
            .map_err(|e| Error::Fixture(format!("test_data.json: {e}")))
    }
}

/// Builds a registration email that cannot collide with seeded backend
/// state: re-registering an email is rejected, so each run appends the
/// current millisecond timestamp.
pub fn unique_email(prefix: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{prefix}{millis}@example.com")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fixture_file_decodes() {
        let fixtures = Fixtures::load().expect("fixture file should decode");
        assert_eq!(fixtures.accounts.user.email, "test@example.com");
        assert_eq!(fixtures.accounts.admin.email, "admin@example.com");
        assert_eq!(
            fixtures.registration_messages.passwords_do_not_match,
            "Passwords don't match"
        );
        assert_eq!(fixtures.property_messages.len(), 11);
    }

    #[test]
    fn unique_email_embeds_prefix_and_domain() {
        let email = unique_email("test");
        assert!(email.starts_with("test"));
        assert!(email.ends_with("@example.com"));
        assert!(email.len() > "test@example.com".len());
    }

    #[test]
    fn negative_property_fixture_keeps_negative_values() {
        let fixtures = Fixtures::load().expect("fixture file should decode");
        assert!(fixtures.properties.negative.price.starts_with('-'));
        assert!(fixtures.properties.negative.bedrooms.starts_with('-'));
    }
}
