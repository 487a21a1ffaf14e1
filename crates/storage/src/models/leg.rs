use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Event;

/// Visual theme of a leg as consumed by the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LegTheme {
    pub primary: String,
    pub secondary: String,
    pub gradient: String,
    pub glow_color: String,
}

/// One of the fixed competition categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Leg {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub icon: String,
    pub theme: LegTheme,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Leg {
    fn preset(id: &str, name: &str, icon: &str, theme: [&str; 4]) -> Self {
        let [primary, secondary, gradient, glow_color] = theme;
        Self {
            id: id.to_string(),
            name: name.to_string(),
            slug: id.to_string(),
            icon: icon.to_string(),
            theme: LegTheme {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
                gradient: gradient.to_string(),
                glow_color: glow_color.to_string(),
            },
            events: Vec::new(),
        }
    }

    /// Sports, Tech and Cultural, in that order, with no events
    pub fn defaults() -> Vec<Leg> {
        vec![
            Self::preset(
                "sports",
                "Sports",
                "trophy",
                [
                    "#f97316",
                    "#ea580c",
                    "from-orange-500 to-orange-600",
                    "rgba(249, 115, 22, 0.4)",
                ],
            ),
            Self::preset(
                "tech",
                "Tech",
                "cpu",
                [
                    "#3b82f6",
                    "#1d4ed8",
                    "from-blue-500 to-blue-700",
                    "rgba(59, 130, 246, 0.4)",
                ],
            ),
            Self::preset(
                "cult",
                "Cultural",
                "music",
                [
                    "#a855f7",
                    "#7c3aed",
                    "from-purple-500 to-violet-600",
                    "rgba(168, 85, 247, 0.4)",
                ],
            ),
        ]
    }

    pub fn find_event(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    pub fn find_event_mut(&mut self, event_id: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_legs() {
        let legs = Leg::defaults();
        let ids: Vec<&str> = legs.iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, vec!["sports", "tech", "cult"]);
        assert_eq!(legs[2].name, "Cultural");
        assert!(legs.iter().all(|l| l.events.is_empty()));
    }

    #[test]
    fn test_theme_uses_camel_case_on_the_wire() {
        let leg = &Leg::defaults()[0];
        let json = serde_json::to_value(leg).unwrap();
        assert_eq!(json["theme"]["glowColor"], "rgba(249, 115, 22, 0.4)");
    }
}
