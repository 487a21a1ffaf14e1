use storage::{
    dto::gallery::{CreateGalleryItemRequest},
    error::Result,
    models::GalleryItem,
    repository::{YearStore, gallery::GalleryRepository},
};

pub async fn list_gallery_items(store: &dyn YearStore, year: i32) -> Result<Vec<GalleryItem>> {
    GalleryRepository::new(store).list(year).await
}

pub async fn create_gallery_item(
    store: &dyn YearStore,
    year: i32,
    req: &CreateGalleryItemRequest,
) -> Result<GalleryItem> {
    GalleryRepository::new(store).create(year, req).await
}

pub async fn delete_gallery_item(store: &dyn YearStore, year: i32, item_id: &str) -> Result<()> {
    GalleryRepository::new(store).delete(year, item_id).await
}
