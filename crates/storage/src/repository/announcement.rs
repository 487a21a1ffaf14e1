use chrono::Utc;

use super::{YearStore, load_year, new_id, save_year};
use crate::dto::announcement::{CreateAnnouncementRequest, UpdateAnnouncementRequest};
use crate::error::{Result, StorageError};
use crate::models::Announcement;

/// Repository for announcements, kept newest first
pub struct AnnouncementRepository<'a> {
    store: &'a dyn YearStore,
}

impl<'a> AnnouncementRepository<'a> {
    pub fn new(store: &'a dyn YearStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, year: i32) -> Result<Vec<Announcement>> {
        Ok(load_year(self.store, year).await?.announcements)
    }

    /// Publish an announcement dated today at the top of the list
    pub async fn create(
        &self,
        year: i32,
        req: &CreateAnnouncementRequest,
    ) -> Result<Announcement> {
        let mut data = load_year(self.store, year).await?;

        let announcement = Announcement {
            id: new_id('a'),
            title: req.title.clone(),
            content: req.content.clone(),
            date: Utc::now().date_naive(),
            link: req.link.clone(),
            kind: req.kind.unwrap_or_default(),
        };
        data.announcements.insert(0, announcement.clone());
        save_year(self.store, &data).await?;

        tracing::info!("Published announcement '{}' in GC {}", announcement.id, year);
        Ok(announcement)
    }

    pub async fn update(
        &self,
        year: i32,
        announcement_id: &str,
        req: &UpdateAnnouncementRequest,
    ) -> Result<Announcement> {
        let mut data = load_year(self.store, year).await?;
        let announcement = data
            .announcements
            .iter_mut()
            .find(|a| a.id == announcement_id)
            .ok_or_else(|| StorageError::not_found("Announcement", announcement_id))?;

        if let Some(title) = &req.title {
            announcement.title = title.clone();
        }
        if let Some(content) = &req.content {
            announcement.content = content.clone();
        }
        if let Some(link) = &req.link {
            announcement.link = Some(link.clone());
        }
        if let Some(kind) = req.kind {
            announcement.kind = kind;
        }

        let updated = announcement.clone();
        save_year(self.store, &data).await?;
        Ok(updated)
    }

    pub async fn delete(&self, year: i32, announcement_id: &str) -> Result<()> {
        let mut data = load_year(self.store, year).await?;

        let index = data
            .announcements
            .iter()
            .position(|a| a.id == announcement_id)
            .ok_or_else(|| StorageError::not_found("Announcement", announcement_id))?;
        data.announcements.remove(index);

        save_year(self.store, &data).await
    }
}
