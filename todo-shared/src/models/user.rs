use serde::{Deserialize, Serialize};

/// Identifier assigned to the locally built profile after login.
///
/// The user service only answers a login with an access token, so the
/// profile kept in the session is assembled on the client.
pub const PLACEHOLDER_USER_ID: i64 = 1;

/// Domain used to synthesize an email for the placeholder profile.
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "example.com";

/// Represents the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Identifier of the user.
    pub id: i64,

    /// The user's username.
    pub username: String,

    /// The user's email address.
    pub email: String,
}

impl User {
    /// Build the client-side profile for a freshly authenticated username.
    #[must_use]
    pub fn placeholder(username: &str) -> Self {
        Self {
            id: PLACEHOLDER_USER_ID,
            username: username.to_string(),
            email: format!("{username}@{PLACEHOLDER_EMAIL_DOMAIN}"),
        }
    }
}
