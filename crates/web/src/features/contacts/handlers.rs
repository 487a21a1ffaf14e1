use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::contact::{CreateContactRequest, UpdateContactRequest},
    models::ContactPerson,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/years/{year}/contacts",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    responses(
        (status = 200, description = "Organiser contacts", body = Vec<ContactPerson>),
        (status = 404, description = "Year not found")
    ),
    tag = "contacts"
)]
pub async fn list_contacts(
    State(db): State<Database>,
    Path(year): Path<i32>,
) -> Result<Json<Vec<ContactPerson>>, WebError> {
    let items = services::list_contacts(db.store(), year).await?;

    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/api/years/{year}/contacts",
    params(
        ("year" = i32, Path, description = "Competition year")
    ),
    request_body = CreateContactRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Contact added", body = ContactPerson),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year not found")
    ),
    tag = "contacts"
)]
pub async fn create_contact(
    State(db): State<Database>,
    Path(year): Path<i32>,
    Json(req): Json<CreateContactRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let item = services::create_contact(db.store(), year, &req).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/years/{year}/contacts/{contact_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("contact_id" = String, Path, description = "Contact id")
    ),
    request_body = UpdateContactRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Contact updated", body = ContactPerson),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year or contact not found")
    ),
    tag = "contacts"
)]
pub async fn update_contact(
    State(db): State<Database>,
    Path((year, contact_id)): Path<(i32, String)>,
    Json(req): Json<UpdateContactRequest>,
) -> Result<Json<ContactPerson>, WebError> {
    req.validate()?;

    let item = services::update_contact(db.store(), year, &contact_id, &req).await?;

    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/years/{year}/contacts/{contact_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("contact_id" = String, Path, description = "Contact id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Contact removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year or contact not found")
    ),
    tag = "contacts"
)]
pub async fn delete_contact(
    State(db): State<Database>,
    Path((year, contact_id)): Path<(i32, String)>,
) -> Result<Response, WebError> {
    services::delete_contact(db.store(), year, &contact_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
