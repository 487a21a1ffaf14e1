use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        event::{CreateEventRequest, UpdateEventRequest, UpdateScoresRequest},
        standings::{EventFilter, EventWinnerResponse, LegEvents},
    },
    models::{Event, Status},
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/years/{year}/events",
    params(
        ("year" = i32, Path, description = "Competition year"),
        EventFilter
    ),
    responses(
        (status = 200, description = "Events grouped by leg. With `status`, a flat list of `LegEvent` instead.", body = Vec<LegEvents>),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Year not found")
    ),
    tag = "events"
)]
pub async fn list_year_events(
    State(db): State<Database>,
    Path(year): Path<i32>,
    Query(filter): Query<EventFilter>,
) -> Result<Response, WebError> {
    match filter.status.as_deref() {
        Some(raw) => {
            let status: Status = raw.parse().map_err(WebError::BadRequest)?;
            let events = services::list_events_by_status(db.store(), year, status).await?;
            Ok(Json(events).into_response())
        }
        None => {
            let grouped = services::list_year_events(db.store(), year).await?;
            Ok(Json(grouped).into_response())
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/years/{year}/legs/{leg_id}/events",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id")
    ),
    responses(
        (status = 200, description = "Events of the leg in order", body = Vec<Event>),
        (status = 404, description = "Year or leg not found")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    Path((year, leg_id)): Path<(i32, String)>,
) -> Result<Json<Vec<Event>>, WebError> {
    let events = services::list_events(db.store(), year, &leg_id).await?;

    Ok(Json(events))
}

#[utoipa::path(
    get,
    path = "/api/years/{year}/legs/{leg_id}/events/{event_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id"),
        ("event_id" = String, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = Event),
        (status = 404, description = "Year, leg or event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    Path((year, leg_id, event_id)): Path<(i32, String, String)>,
) -> Result<Json<Event>, WebError> {
    let event = services::get_event(db.store(), year, &leg_id, &event_id).await?;

    Ok(Json(event))
}

#[utoipa::path(
    post,
    path = "/api/years/{year}/legs/{leg_id}/events",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id")
    ),
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event added to the leg", body = Event),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year or leg not found"),
        (status = 409, description = "Event already exists in this leg")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(db): State<Database>,
    Path((year, leg_id)): Path<(i32, String)>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(db.store(), year, &leg_id, &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/years/{year}/legs/{leg_id}/events/{event_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id"),
        ("event_id" = String, Path, description = "Event id")
    ),
    request_body = UpdateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 400, description = "Validation error or max points below an existing score"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year, leg or event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(db): State<Database>,
    Path((year, leg_id, event_id)): Path<(i32, String, String)>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<Event>, WebError> {
    req.validate()?;

    let event = services::update_event(db.store(), year, &leg_id, &event_id, &req).await?;

    Ok(Json(event))
}

#[utoipa::path(
    delete,
    path = "/api/years/{year}/legs/{leg_id}/events/{event_id}",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id"),
        ("event_id" = String, Path, description = "Event id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Event removed"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year, leg or event not found")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(db): State<Database>,
    Path((year, leg_id, event_id)): Path<(i32, String, String)>,
) -> Result<Response, WebError> {
    services::delete_event(db.store(), year, &leg_id, &event_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    put,
    path = "/api/years/{year}/legs/{leg_id}/events/{event_id}/scores",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id"),
        ("event_id" = String, Path, description = "Event id")
    ),
    request_body = UpdateScoresRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Scores replaced", body = Event),
        (status = 400, description = "Negative score, score above max points or unknown status"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Year, leg, event or hostel not found")
    ),
    tag = "events"
)]
pub async fn update_scores(
    State(db): State<Database>,
    Path((year, leg_id, event_id)): Path<(i32, String, String)>,
    Json(req): Json<UpdateScoresRequest>,
) -> Result<Json<Event>, WebError> {
    let event = services::update_scores(db.store(), year, &leg_id, &event_id, &req).await?;

    Ok(Json(event))
}

#[utoipa::path(
    get,
    path = "/api/years/{year}/legs/{leg_id}/events/{event_id}/winner",
    params(
        ("year" = i32, Path, description = "Competition year"),
        ("leg_id" = String, Path, description = "Leg id"),
        ("event_id" = String, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Winning hostel, null while the event has no scores", body = EventWinnerResponse),
        (status = 404, description = "Year, leg or event not found")
    ),
    tag = "events"
)]
pub async fn get_event_winner(
    State(db): State<Database>,
    Path((year, leg_id, event_id)): Path<(i32, String, String)>,
) -> Result<Json<EventWinnerResponse>, WebError> {
    let winner = services::event_winner(db.store(), year, &leg_id, &event_id).await?;

    Ok(Json(EventWinnerResponse { event_id, winner }))
}
