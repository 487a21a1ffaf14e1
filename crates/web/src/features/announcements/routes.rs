use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{create_announcement, delete_announcement, list_announcements, update_announcement};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Mounted under `/years/:year/announcements`
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_announcement))
        .route("/:announcement_id", put(update_announcement).delete(delete_announcement))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_announcements)).merge(protected)
}
