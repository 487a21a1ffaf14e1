use axum::{Router, routing::post};
use storage::Database;

use super::handlers::login;
use super::services::{AdminCredentials, AuthState};
use crate::middleware::auth::ApiKeys;

pub fn routes(api_keys: ApiKeys, admin: AdminCredentials) -> Router<Database> {
    Router::new()
        .route("/login", post(login))
        .with_state(AuthState { api_keys, admin })
}
