//! Business logic services.
//!
//! # Services
//!
//! - `auth` - Login and identity-header resolution against the staff directory
//! - `inventory` - Permission-checked record operations

pub mod auth;
pub mod inventory;

pub use auth::{AuthError, AuthService};
pub use inventory::{InventoryError, InventoryService};
