use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Announcement, ContactPerson, Event, GalleryItem, Hostel, Leg, Status};

/// The full dataset for one edition of the championship.
///
/// Every other entity is owned by exactly one year; the year is read and
/// written back as a whole on each mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CompetitionYear {
    pub year: i32,
    pub tagline: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub hostels: Vec<Hostel>,
    #[serde(default)]
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub announcements: Vec<Announcement>,
    #[serde(default)]
    pub contacts: Vec<ContactPerson>,
}

impl CompetitionYear {
    /// A fresh upcoming year with the default legs and nothing else
    pub fn new(year: i32, tagline: impl Into<String>, hostels: Vec<Hostel>) -> Self {
        Self {
            year,
            tagline: tagline.into(),
            status: Status::Upcoming,
            hostels,
            legs: Leg::defaults(),
            gallery: Vec::new(),
            announcements: Vec::new(),
            contacts: Vec::new(),
        }
    }

    pub fn find_hostel(&self, hostel_id: &str) -> Option<&Hostel> {
        self.hostels.iter().find(|h| h.id == hostel_id)
    }

    pub fn find_leg(&self, leg_id: &str) -> Option<&Leg> {
        self.legs.iter().find(|l| l.id == leg_id)
    }

    pub fn find_leg_mut(&mut self, leg_id: &str) -> Option<&mut Leg> {
        self.legs.iter_mut().find(|l| l.id == leg_id)
    }

    /// Looks a leg up by id first, then by its URL slug
    pub fn find_leg_by_id_or_slug(&self, key: &str) -> Option<&Leg> {
        self.find_leg(key)
            .or_else(|| self.legs.iter().find(|l| l.slug == key))
    }

    pub fn events(&self) -> impl Iterator<Item = (&Leg, &Event)> {
        self.legs
            .iter()
            .flat_map(|leg| leg.events.iter().map(move |event| (leg, event)))
    }
}

/// Which years exist and which one the site shows by default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YearIndex {
    #[serde(default)]
    pub years: Vec<i32>,
    #[serde(default)]
    pub current_year: Option<i32>,
}

impl YearIndex {
    pub fn contains(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Registers a year, keeping the list newest first. The first year ever
    /// registered becomes current.
    pub fn insert(&mut self, year: i32) {
        if !self.contains(year) {
            self.years.push(year);
            self.years.sort_unstable_by(|a, b| b.cmp(a));
        }
        if self.current_year.is_none() {
            self.current_year = Some(year);
        }
    }

    /// Drops a year; if it was current, the newest remaining year takes over.
    pub fn remove(&mut self, year: i32) {
        self.years.retain(|y| *y != year);
        if self.current_year == Some(year) {
            self.current_year = self.years.first().copied();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_keeps_years_newest_first() {
        let mut index = YearIndex::default();
        index.insert(2024);
        index.insert(2026);
        index.insert(2025);
        index.insert(2026);

        assert_eq!(index.years, vec![2026, 2025, 2024]);
        assert_eq!(index.current_year, Some(2024));
    }

    #[test]
    fn test_index_remove_current_falls_back_to_newest() {
        let mut index = YearIndex::default();
        index.insert(2025);
        index.insert(2026);
        index.current_year = Some(2025);

        index.remove(2025);
        assert_eq!(index.current_year, Some(2026));

        index.remove(2026);
        assert_eq!(index.current_year, None);
        assert!(index.years.is_empty());
    }

    #[test]
    fn test_leg_lookup_by_slug() {
        let mut year = CompetitionYear::new(2026, "Rise", Vec::new());
        year.legs[2].id = "cultural-2026".to_string();

        assert_eq!(year.find_leg_by_id_or_slug("cult").unwrap().name, "Cultural");
        assert_eq!(year.find_leg_by_id_or_slug("tech").unwrap().name, "Tech");
        assert!(year.find_leg_by_id_or_slug("music").is_none());
    }
}
