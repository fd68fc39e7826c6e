//! The fixed staff directory.

use record_shop_core::EmailError;

use super::seed;
use crate::models::User;

/// Read-only lookup over the staff accounts.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The directory holding the seed staff accounts.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] if a seed email is malformed.
    pub fn seeded() -> Result<Self, EmailError> {
        seed::users().map(Self::new)
    }

    /// Find a user by exact (case-sensitive) email.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|user| user.email.as_str() == email)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
