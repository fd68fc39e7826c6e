//! Staff authentication service.
//!
//! There are no sessions or tokens: a successful login just tells the client
//! which email to send in the `x-user-email` header from then on.

mod error;

pub use error::AuthError;

use crate::models::CurrentUser;
use crate::store::UserDirectory;

/// Authentication service over the staff directory.
pub struct AuthService<'a> {
    users: &'a UserDirectory,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a UserDirectory) -> Self {
        Self { users }
    }

    /// Check an email/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if no user has this email or
    /// the password does not match. The two cases are indistinguishable.
    pub fn login(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .filter(|user| user.password_matches(password))
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(user_id = %user.id, role = %user.role, "User logged in");
        Ok(user.to_current())
    }

    /// Resolve the identity header value to a user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingIdentity`] when there is no header (or it
    /// is empty) and [`AuthError::UnknownIdentity`] when it names nobody.
    pub fn resolve(&self, identity: Option<&str>) -> Result<CurrentUser, AuthError> {
        let email = identity
            .filter(|email| !email.is_empty())
            .ok_or(AuthError::MissingIdentity)?;

        self.users
            .find_by_email(email)
            .map(crate::models::User::to_current)
            .ok_or(AuthError::UnknownIdentity)
    }
}
