use super::{YearStore, load_year, save_year};
use crate::dto::hostel::{CreateHostelRequest, UpdateHostelRequest};
use crate::error::{Result, StorageError};
use crate::models::{Hostel, slugify};

/// Repository for the hostels of a year
pub struct HostelRepository<'a> {
    store: &'a dyn YearStore,
}

impl<'a> HostelRepository<'a> {
    pub fn new(store: &'a dyn YearStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, year: i32) -> Result<Vec<Hostel>> {
        Ok(load_year(self.store, year).await?.hostels)
    }

    /// Add a hostel; its id is the slug of its name and must be unused
    pub async fn create(&self, year: i32, req: &CreateHostelRequest) -> Result<Hostel> {
        let mut data = load_year(self.store, year).await?;

        let id = slugify(&req.name);
        if id.is_empty() {
            return Err(StorageError::InvalidInput(
                "Hostel name cannot be blank".to_string(),
            ));
        }
        if data.find_hostel(&id).is_some() {
            return Err(StorageError::ConstraintViolation(format!(
                "Hostel '{}' already exists",
                id
            )));
        }

        let hostel = Hostel {
            id,
            name: req.name.trim().to_string(),
            abbreviation: req.abbreviation.clone(),
            color: req.color.clone(),
            logo: req.logo.clone(),
        };
        data.hostels.push(hostel.clone());
        save_year(self.store, &data).await?;

        tracing::info!("Added hostel '{}' to GC {}", hostel.id, year);
        Ok(hostel)
    }

    pub async fn update(
        &self,
        year: i32,
        hostel_id: &str,
        req: &UpdateHostelRequest,
    ) -> Result<Hostel> {
        let mut data = load_year(self.store, year).await?;
        let hostel = data
            .hostels
            .iter_mut()
            .find(|h| h.id == hostel_id)
            .ok_or_else(|| StorageError::not_found("Hostel", hostel_id))?;

        if let Some(name) = &req.name {
            hostel.name = name.trim().to_string();
        }
        if let Some(abbreviation) = &req.abbreviation {
            hostel.abbreviation = abbreviation.clone();
        }
        if let Some(color) = &req.color {
            hostel.color = color.clone();
        }
        if let Some(logo) = &req.logo {
            hostel.logo = Some(logo.clone());
        }

        let updated = hostel.clone();
        save_year(self.store, &data).await?;
        Ok(updated)
    }

    /// Remove a hostel together with every score it holds, so a later
    /// hostel of the same name starts from zero.
    pub async fn delete(&self, year: i32, hostel_id: &str) -> Result<()> {
        let mut data = load_year(self.store, year).await?;

        let before = data.hostels.len();
        data.hostels.retain(|h| h.id != hostel_id);
        if data.hostels.len() == before {
            return Err(StorageError::not_found("Hostel", hostel_id));
        }

        for leg in &mut data.legs {
            for event in &mut leg.events {
                event.scores.retain(|s| s.hostel_id != hostel_id);
            }
        }

        save_year(self.store, &data).await?;

        tracing::info!("Removed hostel '{}' from GC {}", hostel_id, year);
        Ok(())
    }
}
