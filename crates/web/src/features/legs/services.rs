use storage::{
    dto::leg::UpdateLegRequest,
    error::Result,
    models::Leg,
    repository::{YearStore, leg::LegRepository},
};

pub async fn list_legs(store: &dyn YearStore, year: i32) -> Result<Vec<Leg>> {
    LegRepository::new(store).list(year).await
}

/// Look a leg up by id or slug
pub async fn get_leg(store: &dyn YearStore, year: i32, key: &str) -> Result<Leg> {
    LegRepository::new(store).find(year, key).await
}

pub async fn update_leg(
    store: &dyn YearStore,
    year: i32,
    leg_id: &str,
    req: &UpdateLegRequest,
) -> Result<Leg> {
    LegRepository::new(store).update(year, leg_id, req).await
}
