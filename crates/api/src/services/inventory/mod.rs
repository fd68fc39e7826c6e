//! Inventory service.
//!
//! Every record operation goes through here, and every one of them checks the
//! caller's permission before touching the store. Clients may hide buttons
//! based on role, but this is where access is actually enforced.

mod error;

pub use error::InventoryError;

use record_shop_core::{Permission, RecordId};

use crate::models::{CurrentUser, Record, RecordPayload};
use crate::store::RecordStore;

/// Permission-checked access to a [`RecordStore`].
pub struct InventoryService<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> InventoryService<'a> {
    /// Create a new inventory service.
    #[must_use]
    pub const fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Check that `actor` holds `permission` without touching the store.
    ///
    /// Handlers call this before parsing the record ID from the path.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Forbidden`] if the caller's role lacks it.
    pub fn authorize(actor: &CurrentUser, permission: Permission) -> Result<(), InventoryError> {
        if actor.role.can(permission) {
            return Ok(());
        }

        tracing::warn!(
            user_id = %actor.id,
            role = %actor.role,
            %permission,
            "Permission denied"
        );
        Err(InventoryError::Forbidden {
            role: actor.role,
            permission,
        })
    }

    /// All records.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Forbidden`] if the caller cannot view records.
    pub fn list(&self, actor: &CurrentUser) -> Result<Vec<Record>, InventoryError> {
        Self::authorize(actor, Permission::View)?;
        Ok(self.store.list())
    }

    /// A single record.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Forbidden`] if the caller cannot view records,
    /// or [`InventoryError::Store`] if the record does not exist.
    pub fn get(&self, actor: &CurrentUser, id: RecordId) -> Result<Record, InventoryError> {
        Self::authorize(actor, Permission::View)?;
        Ok(self.store.get(id)?)
    }

    /// Validate `payload` and add it as a new record.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Forbidden`] if the caller cannot add records,
    /// [`InventoryError::Validation`] if the payload is invalid, or
    /// [`InventoryError::Store`] if the store has run out of IDs.
    pub fn create(
        &self,
        actor: &CurrentUser,
        payload: RecordPayload,
    ) -> Result<Record, InventoryError> {
        Self::authorize(actor, Permission::Add)?;
        let fields = payload.into_fields()?;

        let record = self.store.create(fields)?;
        tracing::info!(
            record_id = %record.id,
            user_id = %actor.id,
            title = %record.fields.title,
            "Record created"
        );
        Ok(record)
    }

    /// Validate `payload` and replace every field of record `id` with it.
    ///
    /// Customer fields missing from the payload are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Forbidden`] if the caller cannot update
    /// records, [`InventoryError::Validation`] if the payload is invalid, or
    /// [`InventoryError::Store`] if the record does not exist.
    pub fn update(
        &self,
        actor: &CurrentUser,
        id: RecordId,
        payload: RecordPayload,
    ) -> Result<Record, InventoryError> {
        Self::authorize(actor, Permission::Update)?;
        let fields = payload.into_fields()?;

        let record = self.store.update(id, fields)?;
        tracing::info!(record_id = %id, user_id = %actor.id, "Record updated");
        Ok(record)
    }

    /// Remove record `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Forbidden`] if the caller cannot delete
    /// records, or [`InventoryError::Store`] if the record does not exist.
    pub fn delete(&self, actor: &CurrentUser, id: RecordId) -> Result<Record, InventoryError> {
        Self::authorize(actor, Permission::Delete)?;

        let record = self.store.delete(id)?;
        tracing::info!(record_id = %id, user_id = %actor.id, "Record deleted");
        Ok(record)
    }
}
