//! Persistence for competition years.
//!
//! [`YearStore`] is the backend seam: it only knows how to read and write
//! whole year records and the year index. The entity repositories on top of
//! it do read-modify-write of a full year per operation, with no locking or
//! version check, so two concurrent writers on one year are last-write-wins.

use async_trait::async_trait;

use crate::error::{Result, StorageError};
use crate::models::{CompetitionYear, YearIndex};

pub mod announcement;
pub mod contact;
pub mod event;
pub mod gallery;
pub mod hostel;
pub mod json_file;
pub mod leg;
pub mod memory;
pub mod year;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait YearStore: Send + Sync {
    /// The index of known years; empty when nothing was stored yet
    async fn read_index(&self) -> Result<YearIndex>;

    async fn write_index(&self, index: &YearIndex) -> Result<()>;

    async fn read_year(&self, year: i32) -> Result<Option<CompetitionYear>>;

    async fn write_year(&self, data: &CompetitionYear) -> Result<()>;

    /// Returns false when there was no such year
    async fn remove_year(&self, year: i32) -> Result<bool>;
}

pub(crate) async fn load_year(store: &dyn YearStore, year: i32) -> Result<CompetitionYear> {
    store
        .read_year(year)
        .await?
        .ok_or_else(|| StorageError::not_found("GC year", year))
}

/// Writes the whole year back and makes sure the index lists it
pub(crate) async fn save_year(store: &dyn YearStore, data: &CompetitionYear) -> Result<()> {
    store.write_year(data).await?;

    let mut index = store.read_index().await?;
    if !index.contains(data.year) || index.current_year.is_none() {
        index.insert(data.year);
        store.write_index(&index).await?;
    }

    Ok(())
}

pub(crate) fn new_id(prefix: char) -> String {
    format!("{}{}", prefix, uuid::Uuid::new_v4().simple())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::dto::hostel::CreateHostelRequest;
    use crate::dto::year::CreateYearRequest;
    use crate::repository::year::YearRepository;

    pub fn hostel_request(name: &str) -> CreateHostelRequest {
        CreateHostelRequest {
            name: name.to_string(),
            abbreviation: name.chars().take(3).collect::<String>().to_uppercase(),
            color: "#f97316".to_string(),
            logo: None,
        }
    }

    pub fn year_request(year: i32, hostels: &[&str]) -> CreateYearRequest {
        CreateYearRequest {
            year,
            tagline: "Unity in rivalry".to_string(),
            hostels: hostels.iter().map(|h| hostel_request(h)).collect(),
        }
    }

    /// An in-memory store holding one year with the given hostels
    pub async fn store_with_year(year: i32, hostels: &[&str]) -> MemoryStore {
        let store = MemoryStore::default();
        YearRepository::new(&store)
            .create(&year_request(year, hostels))
            .await
            .expect("year should be created");
        store
    }
}
