use storage::{
    dto::hostel::{CreateHostelRequest, UpdateHostelRequest},
    error::Result,
    models::Hostel,
    repository::{YearStore, hostel::HostelRepository},
};

pub async fn list_hostels(store: &dyn YearStore, year: i32) -> Result<Vec<Hostel>> {
    HostelRepository::new(store).list(year).await
}

pub async fn create_hostel(
    store: &dyn YearStore,
    year: i32,
    req: &CreateHostelRequest,
) -> Result<Hostel> {
    HostelRepository::new(store).create(year, req).await
}

pub async fn update_hostel(
    store: &dyn YearStore,
    year: i32,
    hostel_id: &str,
    req: &UpdateHostelRequest,
) -> Result<Hostel> {
    HostelRepository::new(store).update(year, hostel_id, req).await
}

/// Remove a hostel along with every score it holds
pub async fn delete_hostel(store: &dyn YearStore, year: i32, hostel_id: &str) -> Result<()> {
    HostelRepository::new(store).delete(year, hostel_id).await
}
