use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::announcement::{CreateAnnouncementRequest, UpdateAnnouncementRequest},
    models::Announcement,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/years/{year}/announcements",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    responses(
        (status = 200, description = "Announcements, newest first", body = Vec<Announcement>),
        (status = 404, description = "Year not found")
    ),
    tag = "announcements"
)]
pub async fn list_announcements(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<Announcement>>, WebError> {
    let items = services::list_announcements(db.store(), year).await?;

    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/years/{year}/announcements",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    request_body = CreateAnnouncementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Announcement published, dated today", body = Announcement),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year not found")
    ),
    tag = "announcements"
)]
pub async fn create_announcement(
    State(db): State<Database>,
    Path(year): Path<i32>,
    Json(req): Json<CreateAnnouncementRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let item = services::create_announcement(db.store(), year, &req).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/years/{year}/announcements/{announcement_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("announcement_id" = String, Path, description = "Announcement id")
    ),
    request_body = UpdateAnnouncementRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Announcement updated", body = Announcement),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year or announcement not found")
    ),
    tag = "announcements"
)]
pub async fn update_announcement(
    State(db): State<Database>,
    Path((year, announcement_id)): Path<(i32, String)>,
    Json(req): Json<UpdateAnnouncementRequest>,
) -> Result<Json<Announcement>, WebError> {
    req.validate()?;

    let item = services::update_announcement(db.store(), year, &announcement_id, &req).await?;

    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/years/{year}/announcements/{announcement_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("announcement_id" = String, Path, description = "Announcement id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Announcement removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year or announcement not found")
    ),
    tag = "announcements"
)]
pub async fn delete_announcement(
    State(db): State<Database>,
    Path((year, announcement_id)): Path<(i32, String)>,
) -> Result<Response, WebError> {
    services::delete_announcement(db.store(), year, &announcement_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
