use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::year::{CreateYearRequest, UpdateYearRequest},
    models::{CompetitionYear, YearIndex},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/years",
    responses(
        (status = 200, description = "Known years and the current one", body = YearIndex)
    ),
    tag = "years"
)]
pub async fn list_years(State(db): State<Database>) -> Result<Json<YearIndex>, WebError> {
    let index = services::list_years(db.store()).await?;

    Ok(Json(index))
}

#[utoipa::path(
    get,
    path = "/api/years/current",
    responses(
        (status = 200, description = "The current year's full record", body = CompetitionYear),
        (status = 404, description = "No year exists yet")
    ),
    tag = "years"
)]
pub async fn get_current_year(State(db): State<Database>) -> Result<Json<CompetitionYear>, WebError> {
    let data = services::get_current_year(db.store()).await?;

    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/api/years/{year}",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    responses(
        (status = 200, description = "Year found", body = CompetitionYear),
        (status = 404, description = "Year not found")
    ),
    tag = "years"
)]
pub async fn get_year(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Json<CompetitionYear>, WebError> {
    let data = services::get_year(db.store(), year).await?;

    Ok(Json(data))
}

#[utoipa::path(
    post,
    path = "/api/years",
    request_body = CreateYearRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Year created with the default legs", body = CompetitionYear),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Year already exists")
    ),
    tag = "years"
)]
pub async fn create_year(
    State(db): State<Database>,
    Json(req): Json<CreateYearRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let data = services::create_year(db.store(), &req).await?;

    Ok((StatusCode::CREATED, Json(data)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/years/{year}",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    request_body = UpdateYearRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Year updated", body = CompetitionYear),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year not found")
    ),
    tag = "years"
)]
pub async fn update_year(
    State(db): State<Database>,
    Path(year): Path<i32>,
    Json(req): Json<UpdateYearRequest>,
) -> Result<Json<CompetitionYear>, WebError> {
    req.validate()?;

    let data = services::update_year(db.store(), year, &req).await?;

    Ok(Json(data))
}

#[utoipa::path(
    delete,
    path = "/api/years/{year}",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Year deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year not found")
    ),
    tag = "years"
)]
pub async fn delete_year(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Response, WebError> {
    services::delete_year(db.store(), year).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    put,
    path = "/api/years/{year}/current",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current year switched", body = YearIndex),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year not found")
    ),
    tag = "years"
)]
pub async fn set_current_year(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Json<YearIndex>, WebError> {
    let index = services::set_current_year(db.store(), year).await?;

    Ok(Json(index))
}
