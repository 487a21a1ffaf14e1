use std::collections::HashSet;

use super::{YearStore, load_year, save_year};
use crate::dto::year::{CreateYearRequest, UpdateYearRequest};
use crate::error::{Result, StorageError};
use crate::models::{CompetitionYear, Hostel, Status, YearIndex, slugify};

/// Minimum number of hostels a new year starts with
pub const MIN_HOSTELS: usize = 2;

/// Repository for competition year records and the year index
pub struct YearRepository<'a> {
    store: &'a dyn YearStore,
}

impl<'a> YearRepository<'a> {
    pub fn new(store: &'a dyn YearStore) -> Self {
        Self { store }
    }

    pub async fn index(&self) -> Result<YearIndex> {
        self.store.read_index().await
    }

    /// Get a year by its number
    pub async fn find(&self, year: i32) -> Result<CompetitionYear> {
        load_year(self.store, year).await
    }

    /// Get the year currently featured on the site
    pub async fn current(&self) -> Result<CompetitionYear> {
        let index = self.store.read_index().await?;
        let year = index
            .current_year
            .ok_or_else(|| StorageError::not_found("Current GC year", "none"))?;
        load_year(self.store, year).await
    }

    /// Open a new year with the given hostels and the three default legs
    pub async fn create(&self, req: &CreateYearRequest) -> Result<CompetitionYear> {
        let index = self.store.read_index().await?;
        if index.contains(req.year) || self.store.read_year(req.year).await?.is_some() {
            return Err(StorageError::ConstraintViolation(format!(
                "GC year {} already exists",
                req.year
            )));
        }

        if req.hostels.len() < MIN_HOSTELS {
            return Err(StorageError::InvalidInput(format!(
                "At least {} hostels are required",
                MIN_HOSTELS
            )));
        }

        let mut seen = HashSet::new();
        let mut hostels = Vec::with_capacity(req.hostels.len());
        for h in &req.hostels {
            let id = slugify(&h.name);
            if id.is_empty() {
                return Err(StorageError::InvalidInput(
                    "Hostel name cannot be blank".to_string(),
                ));
            }
            if !seen.insert(id.clone()) {
                return Err(StorageError::ConstraintViolation(format!(
                    "Duplicate hostel '{}'",
                    id
                )));
            }
            hostels.push(Hostel {
                id,
                name: h.name.trim().to_string(),
                abbreviation: h.abbreviation.clone(),
                color: h.color.clone(),
                logo: h.logo.clone(),
            });
        }

        let data = CompetitionYear::new(req.year, req.tagline.clone(), hostels);
        save_year(self.store, &data).await?;

        tracing::info!(
            "Created GC year {} with {} hostels",
            data.year,
            data.hostels.len()
        );

        Ok(data)
    }

    /// Update tagline and/or status of a year
    pub async fn update(&self, year: i32, req: &UpdateYearRequest) -> Result<CompetitionYear> {
        let mut data = load_year(self.store, year).await?;

        if let Some(tagline) = &req.tagline {
            data.tagline = tagline.clone();
        }
        if let Some(status) = &req.status {
            data.status = status.parse::<Status>().map_err(StorageError::InvalidInput)?;
        }

        save_year(self.store, &data).await?;
        Ok(data)
    }

    /// Delete a year and everything it contains
    pub async fn delete(&self, year: i32) -> Result<()> {
        if !self.store.remove_year(year).await? {
            return Err(StorageError::not_found("GC year", year));
        }

        let mut index = self.store.read_index().await?;
        index.remove(year);
        self.store.write_index(&index).await?;

        tracing::info!("Deleted GC year {}", year);
        Ok(())
    }

    /// Make an existing year the one featured on the site
    pub async fn set_current(&self, year: i32) -> Result<YearIndex> {
        let mut index = self.store.read_index().await?;
        if !index.contains(year) {
            return Err(StorageError::not_found("GC year", year));
        }

        index.current_year = Some(year);
        self.store.write_index(&index).await?;

        tracing::info!("Current GC year set to {}", year);
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use crate::repository::test_support::{hostel_request, year_request};

    #[tokio::test]
    async fn test_create_year_with_two_hostels() {
        let store = MemoryStore::default();
        let repo = YearRepository::new(&store);

        let data = repo.create(&year_request(2026, &["Satluj", "Beas"])).await.unwrap();

        assert_eq!(data.status, Status::Upcoming);
        assert_eq!(data.legs.len(), 3);
        assert!(data.legs.iter().all(|l| l.events.is_empty()));
        let ids: Vec<&str> = data.hostels.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["satluj", "beas"]);

        assert_eq!(repo.find(2026).await.unwrap(), data);
        let index = repo.index().await.unwrap();
        assert_eq!(index.years, vec![2026]);
        assert_eq!(index.current_year, Some(2026));
    }

    #[tokio::test]
    async fn test_create_existing_year_fails() {
        let store = MemoryStore::default();
        let repo = YearRepository::new(&store);
        repo.create(&year_request(2026, &["Satluj", "Beas"])).await.unwrap();

        let err = repo
            .create(&year_request(2026, &["Ravi", "Chenab"]))
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert_eq!(repo.find(2026).await.unwrap().hostels[0].id, "satluj");
    }

    #[tokio::test]
    async fn test_create_with_one_hostel_fails() {
        let store = MemoryStore::default();
        let repo = YearRepository::new(&store);

        let err = repo.create(&year_request(2026, &["Satluj"])).await.unwrap_err();

        assert!(matches!(err, StorageError::InvalidInput(_)));
        assert!(repo.find(2026).await.unwrap_err().is_not_found());
        assert!(repo.index().await.unwrap().years.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_and_blank_hostels() {
        let store = MemoryStore::default();
        let repo = YearRepository::new(&store);

        let err = repo
            .create(&year_request(2026, &["Beas", "beas"]))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        let mut req = year_request(2026, &["Beas", "Ravi"]);
        req.hostels.push(hostel_request("   "));
        let err = repo.create(&req).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_update_year() {
        let store = MemoryStore::default();
        let repo = YearRepository::new(&store);
        repo.create(&year_request(2026, &["Satluj", "Beas"])).await.unwrap();

        let req = UpdateYearRequest {
            tagline: Some("Final stretch".to_string()),
            status: Some("ongoing".to_string()),
        };
        let data = repo.update(2026, &req).await.unwrap();

        assert_eq!(data.tagline, "Final stretch");
        assert_eq!(data.status, Status::Ongoing);

        let bad = UpdateYearRequest {
            status: Some("paused".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            repo.update(2026, &bad).await.unwrap_err(),
            StorageError::InvalidInput(_)
        ));
        assert!(repo.update(2030, &req).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_and_current_year() {
        let store = MemoryStore::default();
        let repo = YearRepository::new(&store);
        repo.create(&year_request(2025, &["Satluj", "Beas"])).await.unwrap();
        repo.create(&year_request(2026, &["Satluj", "Beas"])).await.unwrap();

        assert_eq!(repo.current().await.unwrap().year, 2025);

        let index = repo.set_current(2026).await.unwrap();
        assert_eq!(index.years, vec![2026, 2025]);
        assert_eq!(repo.current().await.unwrap().year, 2026);
        assert!(repo.set_current(2031).await.unwrap_err().is_not_found());

        repo.delete(2026).await.unwrap();
        assert!(repo.find(2026).await.unwrap_err().is_not_found());
        assert_eq!(repo.current().await.unwrap().year, 2025);
        assert!(repo.delete(2026).await.unwrap_err().is_not_found());

        repo.delete(2025).await.unwrap();
        assert!(repo.current().await.unwrap_err().is_not_found());
    }
}
