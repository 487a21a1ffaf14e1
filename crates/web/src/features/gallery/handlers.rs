use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::gallery::{CreateGalleryItemRequest},
    models::GalleryItem,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/years/{year}/gallery",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    responses(
        (status = 200, description = "Gallery items of the year", body = Vec<GalleryItem>),
        (status = 404, description = "Year not found")
    ),
    tag = "gallery"
)]
pub async fn list_gallery_items(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<GalleryItem>>, WebError> {
    let items = services::list_gallery_items(db.store(), year).await?;

    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/years/{year}/gallery",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    request_body = CreateGalleryItemRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Gallery item added", body = GalleryItem),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year not found")
    ),
    tag = "gallery"
)]
pub async fn create_gallery_item(
    State(db): State<Database>,
    Path(year): Path<i32>,
    Json(req): Json<CreateGalleryItemRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let item = services::create_gallery_item(db.store(), year, &req).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/years/{year}/gallery/{item_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("item_id" = String, Path, description = "Gallery item id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Gallery item removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year or gallery item not found")
    ),
    tag = "gallery"
)]
pub async fn delete_gallery_item(
    State(db): State<Database>,
    Path((year, item_id)): Path<(i32, String)>,
) -> Result<Response, WebError> {
    services::delete_gallery_item(db.store(), year, &item_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
