use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state shared by competition years and events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Upcoming, Status::Ongoing, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("invalid status '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("upcoming".parse::<Status>().unwrap(), Status::Upcoming);
        assert_eq!("ongoing".parse::<Status>().unwrap(), Status::Ongoing);
        assert_eq!("completed".parse::<Status>().unwrap(), Status::Completed);

        assert!("Completed".parse::<Status>().is_err());
        assert!("done".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&Status::Ongoing).unwrap();
        assert_eq!(json, "\"ongoing\"");
    }
}
