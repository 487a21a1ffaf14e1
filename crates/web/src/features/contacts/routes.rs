use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use storage::Database;

use super::handlers::{create_contact, delete_contact, list_contacts, update_contact};
use crate::middleware::auth::{ApiKeys, require_auth};

/// Mounted under `/years/:year/contacts`
pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_contact))
        .route("/:contact_id", put(update_contact).delete(delete_contact))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new().route("/", get(list_contacts)).merge(protected)
}
