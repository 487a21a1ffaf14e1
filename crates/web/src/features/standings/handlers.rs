use axum::{
    Json,
    extract::{Path, State},
};
use storage::{
    Database,
    dto::standings::{HostelScore, Leaderboard},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/years/{year}/standings",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    responses(
        (status = 200, description = "Hostels ranked by total points", body = Leaderboard),
        (status = 404, description = "Year not found")
    ),
    tag = "standings"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Json<Leaderboard>, WebError> {
    let leaderboard = services::get_leaderboard(db.store(), year).await?;

    Ok(Json(leaderboard))
}

#[utoipa::path(
    get,
    path = "/api/years/{year}/standings/hostels/{hostel_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("hostel_id" = String, Path, description = "Hostel id")
    ),
    responses(
        (status = 200, description = "The hostel's leaderboard row", body = HostelScore),
        (status = 404, description = "Year or hostel not found")
    ),
    tag = "standings"
)]
pub async fn get_hostel_standing(
    State(db): State<Database>,
    Path((year, hostel_id)): Path<(i32, String)>,
) -> Result<Json<HostelScore>, WebError> {
    let standing = services::get_hostel_standing(db.store(), year, &hostel_id).await?;

    Ok(Json(standing))
}

#[utoipa::path(
    get,
    path = "/api/years/{year}/standings/legs/{leg_id}/leader",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id or slug")
    ),
    responses(
        (status = 200, description = "Top hostel of the leg with its overall rank", body = Option<HostelScore>),
        (status = 404, description = "Year or leg not found")
    ),
    tag = "standings"
)]
pub async fn get_leg_leader(
    State(db): State<Database>,
    Path((year, leg_id)): Path<(i32, String)>,
) -> Result<Json<Option<HostelScore>>, WebError> {
    let leader = services::get_leg_leader(db.store(), year, &leg_id).await?;

    Ok(Json(leader))
}
