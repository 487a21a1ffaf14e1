use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryItemRequest {
    #[validate(length(min = 1, max = 1024, message = "Image source is required"))]
    pub src: String,

    /// Defaults to "GC Photo"
    #[validate(length(max = 255))]
    pub alt: Option<String>,

    pub leg_id: Option<String>,

    pub event_id: Option<String>,

    #[validate(length(max = 1024))]
    pub caption: Option<String>,
}
