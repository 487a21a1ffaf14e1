use super::{YearStore, load_year, new_id, save_year};
use crate::dto::gallery::CreateGalleryItemRequest;
use crate::error::{Result, StorageError};
use crate::models::GalleryItem;

const DEFAULT_ALT: &str = "GC Photo";

pub struct GalleryRepository<'a> {
    store: &'a dyn YearStore,
}

impl<'a> GalleryRepository<'a> {
    pub fn new(store: &'a dyn YearStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, year: i32) -> Result<Vec<GalleryItem>> {
        Ok(load_year(self.store, year).await?.gallery)
    }

    pub async fn create(&self, year: i32, req: &CreateGalleryItemRequest) -> Result<GalleryItem> {
        let mut data = load_year(self.store, year).await?;

        let item = GalleryItem {
            id: new_id('g'),
            src: req.src.clone(),
            alt: req.alt.clone().unwrap_or_else(|| DEFAULT_ALT.to_string()),
            year,
            leg_id: req.leg_id.clone(),
            event_id: req.event_id.clone(),
            caption: req.caption.clone(),
        };
        data.gallery.push(item.clone());
        save_year(self.store, &data).await?;

        tracing::info!("Added gallery item '{}' to GC {}", item.id, year);
        Ok(item)
    }

    pub async fn delete(&self, year: i32, item_id: &str) -> Result<()> {
        let mut data = load_year(self.store, year).await?;

        let index = data
            .gallery
            .iter()
            .position(|g| g.id == item_id)
            .ok_or_else(|| StorageError::not_found("Gallery item", item_id))?;
        data.gallery.remove(index);

        save_year(self.store, &data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::store_with_year;

    #[tokio::test]
    async fn test_gallery_item_lifecycle() {
        let store = store_with_year(2026, &["Satluj", "Beas"]).await;
        let repo = GalleryRepository::new(&store);

        // Soft references are stored as given, even when nothing matches
        let req = CreateGalleryItemRequest {
            src: "/gallery/relay-finish.jpg".to_string(),
            alt: None,
            leg_id: Some("sports".to_string()),
            event_id: Some("no-such-event".to_string()),
            caption: Some("Photo finish".to_string()),
        };
        let item = repo.create(2026, &req).await.unwrap();

        assert!(item.id.starts_with('g'));
        assert_eq!(item.alt, "GC Photo");
        assert_eq!(item.year, 2026);
        assert_eq!(item.event_id.as_deref(), Some("no-such-event"));
        assert_eq!(repo.list(2026).await.unwrap(), vec![item.clone()]);

        repo.delete(2026, &item.id).await.unwrap();
        assert!(repo.list(2026).await.unwrap().is_empty());
        assert!(repo.delete(2026, &item.id).await.unwrap_err().is_not_found());
    }
}
