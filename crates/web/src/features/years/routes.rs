use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{
    create_year, delete_year, get_current_year, get_year, list_years, set_current_year,
    update_year,
};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_year))
        .route("/:year", put(update_year).delete(delete_year))
        .route("/:year/current", put(set_current_year))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_years))
        .route("/current", get(get_current_year))
        .route("/:year", get(get_year))
        .merge(protected)
}
