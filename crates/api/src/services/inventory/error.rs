//! Inventory service error types.

use thiserror::Error;
use validator::ValidationErrors;

use record_shop_core::{Permission, Role};

use crate::store::StoreError;

/// Errors that can occur during inventory operations.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The caller's role lacks the permission for this operation.
    #[error("You do not have permission to {permission} records.")]
    Forbidden {
        /// Role of the caller.
        role: Role,
        /// Permission that was required.
        permission: Permission,
    },

    /// The request body broke one or more field rules.
    #[error("invalid record: {0}")]
    Validation(#[from] ValidationErrors),

    /// Store error (missing record).
    #[error(transparent)]
    Store(#[from] StoreError),
}
