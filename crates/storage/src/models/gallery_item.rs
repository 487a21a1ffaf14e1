use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A photo in the year's gallery; `leg_id` and `event_id` are not checked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}
