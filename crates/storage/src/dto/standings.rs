use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Event, Hostel};

/// A hostel's points within one leg
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegScore {
    pub leg_id: String,
    pub leg_name: String,
    pub score: i64,
}

/// One row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HostelScore {
    pub hostel: Hostel,
    pub total_score: i64,
    pub leg_scores: Vec<LegScore>,
    pub rank: u32,
}

impl HostelScore {
    pub fn leg_score(&self, leg_id: &str) -> i64 {
        self.leg_scores
            .iter()
            .find(|l| l.leg_id == leg_id)
            .map_or(0, |l| l.score)
    }
}

/// Leaderboard envelope served to the frontend
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub year: i32,
    pub standings: Vec<HostelScore>,
    pub last_updated: DateTime<Utc>,
}

/// An event together with the leg it belongs to
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegEvent {
    pub leg_id: String,
    pub leg_name: String,
    pub event: Event,
}

/// All events of a leg
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegEvents {
    pub leg_id: String,
    pub leg_name: String,
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventWinnerResponse {
    pub event_id: String,
    pub winner: Option<Hostel>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct EventFilter {
    /// upcoming, ongoing or completed
    pub status: Option<String>,
}
