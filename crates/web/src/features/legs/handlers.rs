use axum::{
    Json,
    extract::{Path, State},
};
use storage::{Database, dto::leg::UpdateLegRequest, models::Leg};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/years/{year}/legs",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    responses(
        (status = 200, description = "Legs with their events", body = Vec<Leg>),
        (status = 404, description = "Year not found")
    ),
    tag = "legs"
)]
pub async fn list_legs(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<Leg>>, WebError> {
    let legs = services::list_legs(db.store(), year).await?;

    Ok(Json(legs))
}

#[utoipa::path(
    get,
    path = "/api/years/{year}/legs/{leg_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id or slug")
    ),
    responses(
        (status = 200, description = "Leg found", body = Leg),
        (status = 404, description = "Year or leg not found")
    ),
    tag = "legs"
)]
pub async fn get_leg(
    State(db): State<Database>,
    Path((year, leg_id)): Path<(i32, String)>,
) -> Result<Json<Leg>, WebError> {
    let leg = services::get_leg(db.store(), year, &leg_id).await?;

    Ok(Json(leg))
}

#[utoipa::path(
    put,
    path = "/api/years/{year}/legs/{leg_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id")
    ),
    request_body = UpdateLegRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Leg updated", body = Leg),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year or leg not found")
    ),
    tag = "legs"
)]
pub async fn update_leg(
    State(db): State<Database>,
    Path((year, leg_id)): Path<(i32, String)>,
    Json(req): Json<UpdateLegRequest>,
) -> Result<Json<Leg>, WebError> {
    req.validate()?;

    let leg = services::update_leg(db.store(), year, &leg_id, &req).await?;

    Ok(Json(leg))
}
