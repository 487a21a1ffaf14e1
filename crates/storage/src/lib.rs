pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

use std::path::PathBuf;
use std::sync::Arc;

use error::Result;
use repository::{JsonFileStore, MemoryStore, YearStore};

/// Which backend holds the year records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// One pretty-printed JSON document per year in `dir`
    JsonFile { dir: PathBuf },
    Memory,
}

/// Shared handle to the configured year store.
///
/// Cheap to clone. It holds no cached year data: every repository call reads
/// the current record from the backend.
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn YearStore>,
}

impl Database {
    pub async fn new(backend: &StorageBackend) -> Result<Self> {
        let store: Arc<dyn YearStore> = match backend {
            StorageBackend::JsonFile { dir } => Arc::new(JsonFileStore::open(dir.clone()).await?),
            StorageBackend::Memory => Arc::new(MemoryStore::default()),
        };

        Ok(Self { store })
    }

    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryStore::default()),
        }
    }

    pub fn store(&self) -> &dyn YearStore {
        self.store.as_ref()
    }
}
