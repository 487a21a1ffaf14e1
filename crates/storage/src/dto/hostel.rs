use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::validate_color;

/// Request payload for adding a hostel; its id is derived from the name
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostelRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 16))]
    pub abbreviation: String,

    #[validate(custom(function = "validate_color"))]
    pub color: String,

    #[validate(length(max = 1024))]
    pub logo: Option<String>,
}

/// Request payload for editing a hostel. The id never changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHostelRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 16))]
    pub abbreviation: Option<String>,

    #[validate(custom(function = "validate_color"))]
    pub color: Option<String>,

    #[validate(length(max = 1024))]
    pub logo: Option<String>,
}
