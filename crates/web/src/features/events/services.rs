use storage::{
    dto::{
        event::{CreateEventRequest, UpdateEventRequest, UpdateScoresRequest},
        standings::{LegEvent, LegEvents},
    },
    error::{Result, StorageError},
    models::{Event, Hostel, Status},
    repository::{YearStore, event::EventRepository, year::YearRepository},
    services::standings,
};

/// Every event of the year, grouped by leg
pub async fn list_year_events(store: &dyn YearStore, year: i32) -> Result<Vec<LegEvents>> {
    EventRepository::new(store).list_grouped(year).await
}

pub async fn list_events_by_status(
    store: &dyn YearStore,
    year: i32,
    status: Status,
) -> Result<Vec<LegEvent>> {
    EventRepository::new(store).list_by_status(year, status).await
}

pub async fn list_events(store: &dyn YearStore, year: i32, leg_id: &str) -> Result<Vec<Event>> {
    EventRepository::new(store).list(year, leg_id).await
}

pub async fn get_event(
    store: &dyn YearStore,
    year: i32,
    leg_id: &str,
    event_id: &str,
) -> Result<Event> {
    EventRepository::new(store).find(year, leg_id, event_id).await
}

pub async fn create_event(
    store: &dyn YearStore,
    year: i32,
    leg_id: &str,
    req: &CreateEventRequest,
) -> Result<Event> {
    EventRepository::new(store).create(year, leg_id, req).await
}

pub async fn update_event(
    store: &dyn YearStore,
    year: i32,
    leg_id: &str,
    event_id: &str,
    req: &UpdateEventRequest,
) -> Result<Event> {
    EventRepository::new(store)
        .update(year, leg_id, event_id, req)
        .await
}

pub async fn delete_event(
    store: &dyn YearStore,
    year: i32,
    leg_id: &str,
    event_id: &str,
) -> Result<()> {
    EventRepository::new(store).delete(year, leg_id, event_id).await
}

/// Validate and replace an event's scores
pub async fn update_scores(
    store: &dyn YearStore,
    year: i32,
    leg_id: &str,
    event_id: &str,
    req: &UpdateScoresRequest,
) -> Result<Event> {
    EventRepository::new(store)
        .update_scores(year, leg_id, event_id, req)
        .await
}

/// The event's highest scorer, if it has any scores
pub async fn event_winner(
    store: &dyn YearStore,
    year: i32,
    leg_id: &str,
    event_id: &str,
) -> Result<Option<Hostel>> {
    let data = YearRepository::new(store).find(year).await?;
    let leg = data
        .find_leg(leg_id)
        .ok_or_else(|| StorageError::not_found("Leg", leg_id))?;
    let event = leg
        .find_event(event_id)
        .ok_or_else(|| StorageError::not_found("Event", event_id))?;

    Ok(standings::event_winner(event, &data.hostels).cloned())
}
