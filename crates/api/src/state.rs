//! Application state shared across handlers.

use std::sync::Arc;

use record_shop_core::EmailError;

use crate::config::ApiConfig;
use crate::store::{MemoryRecordStore, RecordStore, UserDirectory};

/// Application state shared across all handlers.
///
/// Cheap to clone: everything lives behind one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    users: UserDirectory,
    records: Arc<dyn RecordStore>,
}

impl AppState {
    /// Build state with the seed staff and an in-memory store.
    ///
    /// The store starts with the seed inventory unless
    /// `config.seed_inventory` is off.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError`] if the seed staff list is malformed.
    pub fn new(config: ApiConfig) -> Result<Self, EmailError> {
        let users = UserDirectory::seeded()?;
        let records: Arc<dyn RecordStore> = if config.seed_inventory {
            Arc::new(MemoryRecordStore::seeded())
        } else {
            Arc::new(MemoryRecordStore::new())
        };

        tracing::info!(
            users = users.len(),
            records = records.list().len(),
            "Application state initialized"
        );
        Ok(Self::with_store(config, users, records))
    }

    /// Build state around an existing store.
    #[must_use]
    pub fn with_store(
        config: ApiConfig,
        users: UserDirectory,
        records: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                users,
                records,
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn users(&self) -> &UserDirectory {
        &self.inner.users
    }

    #[must_use]
    pub fn records(&self) -> &dyn RecordStore {
        self.inner.records.as_ref()
    }
}
