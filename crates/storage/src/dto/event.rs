use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate_status;
use crate::models::Score;

/// Request payload for adding an event to a leg
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    pub image: Option<String>,

    pub description: Option<String>,

    pub rules: Option<Vec<String>>,

    /// Defaults to 100
    #[validate(range(
        min = 1,
        max = 1_000_000,
        message = "Max points must be between 1 and 1000000"
    ))]
    pub max_points: Option<i64>,
}

/// Request payload for editing an event. Scores go through the score endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub image: Option<String>,

    pub description: Option<String>,

    pub rules: Option<Vec<String>>,

    #[validate(range(
        min = 1,
        max = 1_000_000,
        message = "Max points must be between 1 and 1000000"
    ))]
    pub max_points: Option<i64>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

/// Full replacement of an event's score list, optionally with a new status
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScoresRequest {
    pub scores: Vec<Score>,
    pub status: Option<String>,
}
