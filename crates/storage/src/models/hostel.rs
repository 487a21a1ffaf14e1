use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A participating residential unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Hostel {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}
