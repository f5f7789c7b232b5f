//! Database Module
//!
//! Owns the shared [`DocumentStore`] handle and picks the backend at boot.

pub mod memory;
pub mod mongo;
pub mod repository;
pub mod store;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DbError, DbResult, DocumentStore, id_filter};

use std::sync::Arc;

use crate::core::{DatabaseConfig, DbBackend};
use crate::db::repository::user;
use crate::utils::AppError;

/// Database service: one store handle shared by every request
#[derive(Clone, Debug)]
pub struct DbService {
    store: Arc<dyn DocumentStore>,
}

impl DbService {
    /// Connect the configured backend and verify it with a ping
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let store: Arc<dyn DocumentStore> = match config.backend {
            DbBackend::Mongo => {
                let store = MongoStore::connect(&config.uri, &config.name)
                    .await
                    .map_err(|e| AppError::database(format!("Failed to connect to MongoDB: {e}")))?;
                Arc::new(store)
            }
            DbBackend::Memory => {
                let store = match &config.seed_file {
                    Some(path) => MemoryStore::from_seed_file(path)?,
                    None => MemoryStore::new(),
                };
                tracing::warn!(
                    database = %config.name,
                    "Using in-memory document store, data is lost on restart"
                );
                Arc::new(store)
            }
        };

        Self::from_store(store).await
    }

    /// Wrap a store: ping it and create the indexes the repositories rely on
    pub async fn from_store(store: Arc<dyn DocumentStore>) -> Result<Self, AppError> {
        store
            .ping()
            .await
            .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
        tracing::info!(
            backend = store.backend_name(),
            "Pinged your deployment. Document store connection established"
        );

        store
            .ensure_unique_index(user::COLLECTION, "email")
            .await
            .map_err(|e| AppError::database(format!("Failed to create users.email index: {e}")))?;

        Ok(Self { store })
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
