//! Staff roles and the permission table.
//!
//! Every authorization decision in the service goes through [`Role::can`].
//! Call sites ask for a [`Permission`]; they never compare role strings.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a string does not name a known role.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role: {0}")]
pub struct RoleParseError(String);

/// Staff role with different permission levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Sales clerk: can browse and add records.
    Clerk,
    /// Store manager: clerk rights plus editing records.
    Manager,
    /// System administrator: full CRUD.
    Admin,
}

/// An operation on the inventory that requires authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// List records or view a single record.
    View,
    /// Create a new record.
    Add,
    /// Replace an existing record.
    Update,
    /// Remove a record.
    Delete,
}

impl Role {
    /// All roles, lowest privilege first.
    pub const ALL: [Self; 3] = [Self::Clerk, Self::Manager, Self::Admin];

    /// The permission table.
    #[must_use]
    pub const fn can(self, permission: Permission) -> bool {
        match permission {
            Permission::View | Permission::Add => true,
            Permission::Update => matches!(self, Self::Manager | Self::Admin),
            Permission::Delete => matches!(self, Self::Admin),
        }
    }

    #[must_use]
    pub const fn can_view(self) -> bool {
        self.can(Permission::View)
    }

    #[must_use]
    pub const fn can_add(self) -> bool {
        self.can(Permission::Add)
    }

    #[must_use]
    pub const fn can_update(self) -> bool {
        self.can(Permission::Update)
    }

    #[must_use]
    pub const fn can_delete(self) -> bool {
        self.can(Permission::Delete)
    }

    /// The lowercase wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clerk => "clerk",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clerk" => Ok(Self::Clerk),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::View => "view",
            Self::Add => "add",
            Self::Update => "update",
            Self::Delete => "delete",
        };
        f.write_str(verb)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_is_admin_only() {
        for role in Role::ALL {
            assert_eq!(role.can_delete(), role == Role::Admin, "{role}");
        }
    }

    #[test]
    fn test_update_requires_manager_or_admin() {
        for role in Role::ALL {
            assert_eq!(
                role.can_update(),
                matches!(role, Role::Manager | Role::Admin),
                "{role}"
            );
        }
    }

    #[test]
    fn test_everyone_can_view_and_add() {
        for role in Role::ALL {
            assert!(role.can_view(), "{role}");
            assert!(role.can_add(), "{role}");
        }
    }

    #[test]
    fn test_parse_and_display_agree() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("Admin".parse::<Role>().is_err());
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        let role: Role = serde_json::from_str("\"clerk\"").unwrap();
        assert_eq!(role, Role::Clerk);
    }
}
