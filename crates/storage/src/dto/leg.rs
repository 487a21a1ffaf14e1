use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Only a leg's name and theme are editable
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLegRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub theme: Option<UpdateLegTheme>,
}

/// Partial theme; missing fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLegTheme {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub gradient: Option<String>,
    pub glow_color: Option<String>,
}
