//! Record storage.
//!
//! The API talks to storage only through the [`RecordStore`] trait, so the
//! in-memory store can be swapped without touching handlers or services.

pub mod catalog;
pub mod memory;
pub mod seed;
pub mod users;

use thiserror::Error;

use record_shop_core::RecordId;

use crate::models::{Record, RecordFields};

pub use memory::MemoryRecordStore;
pub use users::UserDirectory;

/// Errors that can occur during store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record has this ID (never existed or already deleted).
    #[error("record {0} not found")]
    NotFound(RecordId),

    /// The ID counter has passed `i32::MAX`; no more records can be added.
    #[error("record ids exhausted")]
    IdsExhausted,
}

/// Storage for inventory records.
///
/// Implementations assign IDs on create. IDs are strictly increasing and
/// never reused, even after the record holding one is deleted. Each call is
/// atomic with respect to the others.
pub trait RecordStore: Send + Sync {
    /// All records in insertion order.
    fn list(&self) -> Vec<Record>;

    /// A single record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this ID.
    fn get(&self, id: RecordId) -> Result<Record, StoreError>;

    /// Append a record under the next free ID and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdsExhausted`] once the highest ID is taken.
    fn create(&self, fields: RecordFields) -> Result<Record, StoreError>;

    /// Replace every field of a record except its ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this ID.
    fn update(&self, id: RecordId, fields: RecordFields) -> Result<Record, StoreError>;

    /// Remove a record and return it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has this ID.
    fn delete(&self, id: RecordId) -> Result<Record, StoreError>;
}
