use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::hostel::CreateHostelRequest;
use super::validate_status;

/// Request payload for opening a new competition year
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateYearRequest {
    #[validate(range(min = 1900, max = 2999, message = "Year must be a four digit year"))]
    pub year: i32,

    #[validate(length(min = 1, max = 255, message = "Tagline is required"))]
    pub tagline: String,

    #[validate(length(min = 2, message = "At least two hostels are required"))]
    #[validate(nested)]
    pub hostels: Vec<CreateHostelRequest>,
}

/// Request payload for editing the year record itself
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateYearRequest {
    #[validate(length(min = 1, max = 255))]
    pub tagline: Option<String>,

    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}
