use storage::{
    dto::announcement::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
    error::Result,
    models::Announcement,
    repository::{YearStore, announcement::AnnouncementRepository},
};

pub async fn list_announcements(store: &dyn YearStore, year: i32) -> Result<Vec<Announcement>> {
    AnnouncementRepository::new(store).list(year).await
}

pub async fn create_announcement(
    store: &dyn YearStore,
    year: i32,
    req: &CreateAnnouncementRequest,
) -> Result<Announcement> {
    AnnouncementRepository::new(store).create(year, req).await
}

pub async fn update_announcement(
    store: &dyn YearStore,
    year: i32,
    announcement_id: &str,
    req: &UpdateAnnouncementRequest,
) -> Result<Announcement> {
    AnnouncementRepository::new(store).update(year, announcement_id, req).await
}

pub async fn delete_announcement(store: &dyn YearStore, year: i32, announcement_id: &str) -> Result<()> {
    AnnouncementRepository::new(store).delete(year, announcement_id).await
}
