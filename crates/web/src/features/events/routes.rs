use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    create_event, delete_event, get_event, get_event_winner, list_events, list_year_events,
    update_event, update_scores,
};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Mounted under `/years/:year/legs/:leg_id/events`
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route("/:event_id", put(update_event).delete(delete_event))
        .route("/:event_id/scores", put(update_scores))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_events))
        .route("/:event_id", get(get_event))
        .route("/:event_id/winner", get(get_event_winner))
        .merge(protected)
}

/// Mounted under `/years/:year/events`
pub fn year_routes() -> Router<Database> {
    Router::new().route("/", get(list_year_events))
}
