use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_gallery_item, delete_gallery_item, list_gallery_items};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Mounted under `/years/:year/gallery`
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_gallery_item))
        .route("/:item_id", delete(delete_gallery_item))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_gallery_items)).merge(protected)
}
