use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Points awarded to one hostel in one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub hostel_id: String,
    pub points: i64,
}

impl Score {
    pub fn new(hostel_id: impl Into<String>, points: i64) -> Self {
        Self {
            hostel_id: hostel_id.into(),
            points,
        }
    }
}
