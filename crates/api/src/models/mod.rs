//! Domain models for the inventory service.

pub mod record;
pub mod user;

pub use record::{Record, RecordFields, RecordPayload};
pub use user::{CurrentUser, User};
