use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_hostel_standing, get_leaderboard, get_leg_leader};

/// Mounted under `/years/:year/standings`; read-only
pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(get_leaderboard))
        .route("/hostels/:hostel_id", get(get_hostel_standing))
        .route("/legs/:leg_id/leader", get(get_leg_leader))
}
