use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::YearStore;
use crate::error::Result;
use crate::models::{CompetitionYear, YearIndex};

/// Non-persistent backend, used for tests and throwaway instances
#[derive(Default)]
pub struct MemoryStore {
    index: RwLock<YearIndex>,
    years: RwLock<HashMap<i32, CompetitionYear>>,
}

#[async_trait]
impl YearStore for MemoryStore {
    async fn read_index(&self) -> Result<YearIndex> {
        Ok(self.index.read().await.clone())
    }

    async fn write_index(&self, index: &YearIndex) -> Result<()> {
        *self.index.write().await = index.clone();
        Ok(())
    }

    async fn read_year(&self, year: i32) -> Result<Option<CompetitionYear>> {
        Ok(self.years.read().await.get(&year).cloned())
    }

    async fn write_year(&self, data: &CompetitionYear) -> Result<()> {
        self.years.write().await.insert(data.year, data.clone());
        Ok(())
    }

    async fn remove_year(&self, year: i32) -> Result<bool> {
        Ok(self.years.write().await.remove(&year).is_some())
    }
}
