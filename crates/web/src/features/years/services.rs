use storage::{
    dto::year::{CreateYearRequest, UpdateYearRequest},
    error::Result,
    models::{CompetitionYear, YearIndex},
    repository::{YearStore, year::YearRepository},
};

/// Known years, newest first, with the current one
pub async fn list_years(store: &dyn YearStore) -> Result<YearIndex> {
    YearRepository::new(store).index().await
}

pub async fn get_year(store: &dyn YearStore, year: i32) -> Result<CompetitionYear> {
    YearRepository::new(store).find(year).await
}

pub async fn get_current_year(store: &dyn YearStore) -> Result<CompetitionYear> {
    YearRepository::new(store).current().await
}

/// Create a year with its hostels and the three default legs
pub async fn create_year(store: &dyn YearStore, req: &CreateYearRequest) -> Result<CompetitionYear> {
    YearRepository::new(store).create(req).await
}

pub async fn update_year(
    store: &dyn YearStore,
    year: i32,
    req: &UpdateYearRequest,
) -> Result<CompetitionYear> {
    YearRepository::new(store).update(year, req).await
}

pub async fn delete_year(store: &dyn YearStore, year: i32) -> Result<()> {
    YearRepository::new(store).delete(year).await
}

pub async fn set_current_year(store: &dyn YearStore, year: i32) -> Result<YearIndex> {
    YearRepository::new(store).set_current(year).await
}
