use storage::{
    dto::standings::{HostelScore, Leaderboard},
    error::{Result, StorageError},
    repository::{YearStore, year::YearRepository},
    services::standings,
};

/// Leaderboard computed from the year's current scores
pub async fn get_leaderboard(store: &dyn YearStore, year: i32) -> Result<Leaderboard> {
    let data = YearRepository::new(store).find(year).await?;
    Ok(standings::leaderboard_snapshot(&data))
}

pub async fn get_hostel_standing(
    store: &dyn YearStore,
    year: i32,
    hostel_id: &str,
) -> Result<HostelScore> {
    let data = YearRepository::new(store).find(year).await?;

    standings::hostel_standing(&data, hostel_id)
        .ok_or_else(|| StorageError::not_found("Hostel", hostel_id))
}

/// Leader of one leg; `None` only when the year has no hostels
pub async fn get_leg_leader(
    store: &dyn YearStore,
    year: i32,
    leg_id: &str,
) -> Result<Option<HostelScore>> {
    let data = YearRepository::new(store).find(year).await?;
    let leg = data
        .find_leg_by_id_or_slug(leg_id)
        .ok_or_else(|| StorageError::not_found("Leg", leg_id))?;

    Ok(standings::leg_leader(&data, &leg.id))
}
