use super::{YearStore, load_year, save_year};
use crate::dto::leg::UpdateLegRequest;
use crate::error::{Result, StorageError};
use crate::models::Leg;

/// Repository for legs. Legs are fixed per year: they can be renamed and
/// re-themed but never added or removed.
pub struct LegRepository<'a> {
    store: &'a dyn YearStore,
}

impl<'a> LegRepository<'a> {
    pub fn new(store: &'a dyn YearStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, year: i32) -> Result<Vec<Leg>> {
        Ok(load_year(self.store, year).await?.legs)
    }

    /// Get a leg by id or by URL slug
    pub async fn find(&self, year: i32, key: &str) -> Result<Leg> {
        load_year(self.store, year)
            .await?
            .find_leg_by_id_or_slug(key)
            .cloned()
            .ok_or_else(|| StorageError::not_found("Leg", key))
    }

    pub async fn update(&self, year: i32, leg_id: &str, req: &UpdateLegRequest) -> Result<Leg> {
        let mut data = load_year(self.store, year).await?;
        let leg = data
            .find_leg_mut(leg_id)
            .ok_or_else(|| StorageError::not_found("Leg", leg_id))?;

        if let Some(name) = &req.name {
            leg.name = name.clone();
        }
        if let Some(theme) = &req.theme {
            if let Some(primary) = &theme.primary {
                leg.theme.primary = primary.clone();
            }
            if let Some(secondary) = &theme.secondary {
                leg.theme.secondary = secondary.clone();
            }
            if let Some(gradient) = &theme.gradient {
                leg.theme.gradient = gradient.clone();
            }
            if let Some(glow_color) = &theme.glow_color {
                leg.theme.glow_color = glow_color.clone();
            }
        }

        let updated = leg.clone();
        save_year(self.store, &data).await?;

        tracing::info!("Updated leg '{}' of GC {}", leg_id, year);
        Ok(updated)
    }
}
