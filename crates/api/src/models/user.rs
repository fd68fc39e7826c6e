//! Staff user domain types.
//!
//! Users are created once at start-up from the seed list and never change.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use record_shop_core::{Email, Role, UserId};

/// A staff member who can sign in (domain type).
///
/// The password is a [`SecretString`], so it never shows up in `Debug`
/// output and has no `Serialize` impl.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address; doubles as the identity token.
    pub email: Email,
    /// Permission level.
    pub role: Role,
    /// Plaintext password (the shop has no hashing).
    pub password: SecretString,
}

impl User {
    /// Check a candidate password against the stored one.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.expose_secret() == candidate
    }

    /// The public identity of this user.
    #[must_use]
    pub fn to_current(&self) -> CurrentUser {
        CurrentUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// The authenticated caller of a request.
///
/// This is also the body returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    /// User's ID.
    pub id: UserId,
    /// User's display name.
    pub name: String,
    /// User's email address.
    pub email: Email,
    /// User's role.
    pub role: Role,
}
