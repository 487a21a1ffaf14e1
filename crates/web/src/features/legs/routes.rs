use axum::{
    Router, middleware,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{get_leg, list_legs, update_leg};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Mounted under `/years/:year/legs`
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/:leg_id", put(update_leg))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_legs))
        .route("/:leg_id", get(get_leg))
        .merge(protected)
}
