use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{create_hostel, delete_hostel, list_hostels, update_hostel};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Mounted under `/years/:year/hostels`
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_hostel))
        .route("/:hostel_id", put(update_hostel).delete(delete_hostel))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_hostels)).merge(protected)
}
