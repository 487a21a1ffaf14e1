use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::hostel::{CreateHostelRequest, UpdateHostelRequest},
    models::Hostel,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/years/{year}/hostels",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    responses(
        (status = 200, description = "Hostels competing this year", body = Vec<Hostel>),
        (status = 404, description = "Year not found")
    ),
    tag = "hostels"
)]
pub async fn list_hostels(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<Hostel>>, WebError> {
    let hostels = services::list_hostels(db.store(), year).await?;

    Ok(Json(hostels))
}

#[utoipa::path(
    post,
    path = "/api/years/{year}/hostels",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    request_body = CreateHostelRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Hostel added", body = Hostel),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year not found"),
        (status = 409, description = "Hostel already exists")
    ),
    tag = "hostels"
)]
pub async fn create_hostel(
    State(db): State<Database>,
    Path(year): Path<i32>,
    Json(req): Json<CreateHostelRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let hostel = services::create_hostel(db.store(), year, &req).await?;

    Ok((StatusCode::CREATED, Json(hostel)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/years/{year}/hostels/{hostel_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("hostel_id" = String, Path, description = "Hostel id")
    ),
    request_body = UpdateHostelRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Hostel updated", body = Hostel),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year or hostel not found")
    ),
    tag = "hostels"
)]
pub async fn update_hostel(
    State(db): State<Database>,
    Path((year, hostel_id)): Path<(i32, String)>,
    Json(req): Json<UpdateHostelRequest>,
) -> Result<Json<Hostel>, WebError> {
    req.validate()?;

    let hostel = services::update_hostel(db.store(), year, &hostel_id, &req).await?;

    Ok(Json(hostel))
}

#[utoipa::path(
    delete,
    path = "/api/years/{year}/hostels/{hostel_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("hostel_id" = String, Path, description = "Hostel id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Hostel and its scores removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year or hostel not found")
    ),
    tag = "hostels"
)]
pub async fn delete_hostel(
    State(db): State<Database>,
    Path((year, hostel_id)): Path<(i32, String)>,
) -> Result<Response, WebError> {
    services::delete_hostel(db.store(), year, &hostel_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
