use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Score, Status};

pub const DEFAULT_EVENT_IMAGE: &str = "/events/default.jpg";
pub const DEFAULT_MAX_POINTS: i64 = 100;
/// Upper bound on an event's `maxPoints`
pub const MAX_EVENT_POINTS: i64 = 1_000_000;

/// A scored competition inside a leg
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rules: Vec<String>,
    pub max_points: i64,
    #[serde(default)]
    pub scores: Vec<Score>,
    #[serde(default)]
    pub status: Status,
}

fn default_image() -> String {
    DEFAULT_EVENT_IMAGE.to_string()
}

impl Event {
    /// Points recorded for a hostel, zero when it has no entry
    pub fn points_for(&self, hostel_id: &str) -> i64 {
        self.scores
            .iter()
            .find(|s| s.hostel_id == hostel_id)
            .map_or(0, |s| s.points)
    }

    pub fn total_points(&self) -> i64 {
        self.scores
            .iter()
            .fold(0i64, |acc, s| acc.saturating_add(s.points))
    }
}
