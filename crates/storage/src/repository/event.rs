use super::{YearStore, load_year, save_year};
use crate::dto::event::{CreateEventRequest, UpdateEventRequest, UpdateScoresRequest};
use crate::dto::standings::{LegEvent, LegEvents};
use crate::error::{Result, StorageError};
use crate::models::{
    CompetitionYear, DEFAULT_EVENT_IMAGE, DEFAULT_MAX_POINTS, Event, MAX_EVENT_POINTS, Status,
    slugify,
};
use crate::services::{score_validation, standings};

/// Repository for events and their scores
pub struct EventRepository<'a> {
    store: &'a dyn YearStore,
}

fn locate(data: &CompetitionYear, leg_id: &str, event_id: &str) -> Result<(usize, usize)> {
    let leg_index = data
        .legs
        .iter()
        .position(|l| l.id == leg_id)
        .ok_or_else(|| StorageError::not_found("Leg", leg_id))?;
    let event_index = data.legs[leg_index]
        .events
        .iter()
        .position(|e| e.id == event_id)
        .ok_or_else(|| StorageError::not_found("Event", event_id))?;

    Ok((leg_index, event_index))
}

// Bounded so that per-hostel sums stay far inside i64
fn check_max_points(max_points: i64) -> Result<()> {
    if (1..=MAX_EVENT_POINTS).contains(&max_points) {
        Ok(())
    } else {
        Err(StorageError::InvalidInput(format!(
            "Max points must be between 1 and {}",
            MAX_EVENT_POINTS
        )))
    }
}

impl<'a> EventRepository<'a> {
    pub fn new(store: &'a dyn YearStore) -> Self {
        Self { store }
    }

    /// All events of a year, grouped by leg in leg order
    pub async fn list_grouped(&self, year: i32) -> Result<Vec<LegEvents>> {
        let data = load_year(self.store, year).await?;

        Ok(data
            .legs
            .into_iter()
            .map(|leg| LegEvents {
                leg_id: leg.id,
                leg_name: leg.name,
                events: leg.events,
            })
            .collect())
    }

    pub async fn list_by_status(&self, year: i32, status: Status) -> Result<Vec<LegEvent>> {
        let data = load_year(self.store, year).await?;
        Ok(standings::events_with_status(&data, status))
    }

    pub async fn list(&self, year: i32, leg_id: &str) -> Result<Vec<Event>> {
        let mut data = load_year(self.store, year).await?;
        let leg = data
            .find_leg_mut(leg_id)
            .ok_or_else(|| StorageError::not_found("Leg", leg_id))?;

        Ok(std::mem::take(&mut leg.events))
    }

    pub async fn find(&self, year: i32, leg_id: &str, event_id: &str) -> Result<Event> {
        let data = load_year(self.store, year).await?;
        let (l, e) = locate(&data, leg_id, event_id)?;
        Ok(data.legs[l].events[e].clone())
    }

    /// Add an event to a leg; its id is the slug of its name
    pub async fn create(&self, year: i32, leg_id: &str, req: &CreateEventRequest) -> Result<Event> {
        let mut data = load_year(self.store, year).await?;
        let leg = data
            .find_leg_mut(leg_id)
            .ok_or_else(|| StorageError::not_found("Leg", leg_id))?;

        let id = slugify(&req.name);
        if id.is_empty() {
            return Err(StorageError::InvalidInput(
                "Event name cannot be blank".to_string(),
            ));
        }
        if leg.find_event(&id).is_some() {
            return Err(StorageError::ConstraintViolation(format!(
                "Event '{}' already exists in leg '{}'",
                id, leg_id
            )));
        }

        let max_points = req.max_points.unwrap_or(DEFAULT_MAX_POINTS);
        check_max_points(max_points)?;

        let event = Event {
            id,
            name: req.name.trim().to_string(),
            image: req
                .image
                .clone()
                .unwrap_or_else(|| DEFAULT_EVENT_IMAGE.to_string()),
            description: req.description.clone().unwrap_or_default(),
            rules: req.rules.clone().unwrap_or_default(),
            max_points,
            scores: Vec::new(),
            status: Status::Upcoming,
        };
        leg.events.push(event.clone());
        save_year(self.store, &data).await?;

        tracing::info!("Added event '{}' to leg '{}' of GC {}", event.id, leg_id, year);
        Ok(event)
    }

    /// Edit event details. Lowering `max_points` below a recorded score is
    /// refused, so the score range invariant holds after every write.
    pub async fn update(
        &self,
        year: i32,
        leg_id: &str,
        event_id: &str,
        req: &UpdateEventRequest,
    ) -> Result<Event> {
        let mut data = load_year(self.store, year).await?;
        let (l, e) = locate(&data, leg_id, event_id)?;
        let event = &mut data.legs[l].events[e];

        if let Some(max_points) = req.max_points {
            check_max_points(max_points)?;
            score_validation::check_points(max_points, &event.scores)?;
            event.max_points = max_points;
        }
        if let Some(status) = &req.status {
            event.status = status.parse::<Status>().map_err(StorageError::InvalidInput)?;
        }
        if let Some(name) = &req.name {
            event.name = name.trim().to_string();
        }
        if let Some(image) = &req.image {
            event.image = image.clone();
        }
        if let Some(description) = &req.description {
            event.description = description.clone();
        }
        if let Some(rules) = &req.rules {
            event.rules = rules.clone();
        }

        let updated = event.clone();
        save_year(self.store, &data).await?;
        Ok(updated)
    }

    pub async fn delete(&self, year: i32, leg_id: &str, event_id: &str) -> Result<()> {
        let mut data = load_year(self.store, year).await?;
        let (l, e) = locate(&data, leg_id, event_id)?;

        data.legs[l].events.remove(e);
        save_year(self.store, &data).await?;

        tracing::info!("Deleted event '{}' from leg '{}' of GC {}", event_id, leg_id, year);
        Ok(())
    }

    /// Replace the event's score list after validation.
    ///
    /// The submitted list becomes the whole list: hostels left out drop back
    /// to zero. Nothing is written if any check fails.
    pub async fn update_scores(
        &self,
        year: i32,
        leg_id: &str,
        event_id: &str,
        req: &UpdateScoresRequest,
    ) -> Result<Event> {
        let mut data = load_year(self.store, year).await?;
        let (l, e) = locate(&data, leg_id, event_id)?;

        score_validation::apply_score_update(
            &mut data.legs[l].events[e],
            req.scores.clone(),
            req.status.as_deref(),
        )?;

        let event = &data.legs[l].events[e];
        if let Some(unknown) = event
            .scores
            .iter()
            .find(|s| data.find_hostel(&s.hostel_id).is_none())
        {
            return Err(StorageError::not_found("Hostel", &unknown.hostel_id));
        }

        let updated = event.clone();
        save_year(self.store, &data).await?;

        tracing::info!(
            "Updated {} scores for event '{}' in GC {} (status: {})",
            updated.scores.len(),
            event_id,
            year,
            updated.status
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Score;
    use crate::repository::MemoryStore;
    use crate::repository::test_support::store_with_year;
    use crate::repository::year::YearRepository;
    use crate::services::score_validation::ScoreError;

    fn create_request(name: &str, max_points: Option<i64>) -> CreateEventRequest {
        CreateEventRequest {
            name: name.to_string(),
            image: None,
            description: None,
            rules: None,
            max_points,
        }
    }

    fn scores(entries: &[(&str, i64)], status: Option<&str>) -> UpdateScoresRequest {
        UpdateScoresRequest {
            scores: entries.iter().map(|(h, p)| Score::new(*h, *p)).collect(),
            status: status.map(str::to_string),
        }
    }

    async fn store_with_relay() -> MemoryStore {
        let store = store_with_year(2026, &["Satluj", "Beas"]).await;
        EventRepository::new(&store)
            .create(2026, "sports", &create_request("Relay", Some(100)))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_create_event_defaults() {
        let store = store_with_year(2026, &["Satluj", "Beas"]).await;
        let repo = EventRepository::new(&store);

        let event = repo
            .create(2026, "tech", &create_request("Code Golf", None))
            .await
            .unwrap();

        assert_eq!(event.id, "code-golf");
        assert_eq!(event.max_points, 100);
        assert_eq!(event.image, "/events/default.jpg");
        assert_eq!(event.status, Status::Upcoming);
        assert!(event.scores.is_empty());
        assert_eq!(repo.list(2026, "tech").await.unwrap(), vec![event]);
    }

    #[tokio::test]
    async fn test_create_event_conflicts_and_missing_leg() {
        let store = store_with_relay().await;
        let repo = EventRepository::new(&store);

        let err = repo
            .create(2026, "sports", &create_request("relay", None))
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        // Same name in another leg is fine
        repo.create(2026, "cult", &create_request("Relay", None)).await.unwrap();

        let err = repo
            .create(2026, "esports", &create_request("Valorant", None))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_relay_scores_end_to_end() {
        let store = store_with_relay().await;
        let repo = EventRepository::new(&store);

        let event = repo
            .update_scores(
                2026,
                "sports",
                "relay",
                &scores(&[("satluj", 80), ("beas", 60)], Some("completed")),
            )
            .await
            .unwrap();
        assert_eq!(event.status, Status::Completed);

        let data = YearRepository::new(&store).find(2026).await.unwrap();
        let board = standings::leaderboard(&data);
        assert_eq!(board[0].hostel.id, "satluj");
        assert_eq!((board[0].total_score, board[0].rank), (80, 1));
        assert_eq!(board[1].hostel.id, "beas");
        assert_eq!((board[1].total_score, board[1].rank), (60, 2));

        let relay = data.legs[0].find_event("relay").unwrap();
        assert_eq!(standings::event_winner(relay, &data.hostels).unwrap().id, "satluj");
    }

    #[tokio::test]
    async fn test_partial_score_list_zeroes_omitted_hostels() {
        let store = store_with_relay().await;
        let repo = EventRepository::new(&store);

        repo.update_scores(2026, "sports", "relay", &scores(&[("satluj", 10), ("beas", 5)], None))
            .await
            .unwrap();
        repo.update_scores(2026, "sports", "relay", &scores(&[("satluj", 8)], None))
            .await
            .unwrap();

        let data = YearRepository::new(&store).find(2026).await.unwrap();
        assert_eq!(standings::leg_score("satluj", "sports", &data), 8);
        assert_eq!(standings::leg_score("beas", "sports", &data), 0);
    }

    #[tokio::test]
    async fn test_score_boundaries() {
        let store = store_with_relay().await;
        let repo = EventRepository::new(&store);

        repo.update_scores(2026, "sports", "relay", &scores(&[("satluj", 100)], None))
            .await
            .unwrap();

        let err = repo
            .update_scores(2026, "sports", "relay", &scores(&[("satluj", 101)], None))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::InvalidScore(ScoreError::ExceedsMaximum {
                points: 101,
                max_points: 100,
                ..
            })
        ));

        let err = repo
            .update_scores(2026, "sports", "relay", &scores(&[("beas", -1)], None))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidScore(ScoreError::Negative { .. })));

        // Rejected writes never reach the store
        let event = repo.find(2026, "sports", "relay").await.unwrap();
        assert_eq!(event.scores, vec![Score::new("satluj", 100)]);
    }

    #[tokio::test]
    async fn test_scores_for_unknown_hostel_are_rejected() {
        let store = store_with_relay().await;
        let repo = EventRepository::new(&store);

        let err = repo
            .update_scores(2026, "sports", "relay", &scores(&[("satluj", 5), ("ravi", 9)], None))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(repo.find(2026, "sports", "relay").await.unwrap().scores.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_status_is_rejected() {
        let store = store_with_relay().await;
        let repo = EventRepository::new(&store);

        let err = repo
            .update_scores(2026, "sports", "relay", &scores(&[("satluj", 5)], Some("done")))
            .await
            .unwrap_err();

        assert!(matches!(err, StorageError::InvalidScore(ScoreError::InvalidStatus(_))));
    }

    #[tokio::test]
    async fn test_lowering_max_points_below_scores_fails() {
        let store = store_with_relay().await;
        let repo = EventRepository::new(&store);
        repo.update_scores(2026, "sports", "relay", &scores(&[("satluj", 70)], None))
            .await
            .unwrap();

        let lower = UpdateEventRequest {
            max_points: Some(50),
            ..Default::default()
        };
        let err = repo.update(2026, "sports", "relay", &lower).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidScore(_)));

        let ok = UpdateEventRequest {
            max_points: Some(70),
            description: Some("4x100m".to_string()),
            status: Some("ongoing".to_string()),
            ..Default::default()
        };
        let event = repo.update(2026, "sports", "relay", &ok).await.unwrap();
        assert_eq!(event.max_points, 70);
        assert_eq!(event.description, "4x100m");
        assert_eq!(event.status, Status::Ongoing);
    }

    #[tokio::test]
    async fn test_max_points_is_bounded() {
        let store = store_with_relay().await;
        let repo = EventRepository::new(&store);

        let err = repo
            .create(2026, "sports", &create_request("Marathon", Some(i64::MAX)))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidInput(_)));

        let err = repo
            .create(2026, "sports", &create_request("Marathon", Some(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::InvalidInput(_)));

        let event = repo
            .create(2026, "sports", &create_request("Marathon", Some(MAX_EVENT_POINTS)))
            .await
            .unwrap();
        assert_eq!(event.max_points, MAX_EVENT_POINTS);

        let raise = UpdateEventRequest {
            max_points: Some(MAX_EVENT_POINTS + 1),
            ..Default::default()
        };
        let err = repo.update(2026, "sports", "relay", &raise).await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidInput(_)));
        assert_eq!(repo.find(2026, "sports", "relay").await.unwrap().max_points, 100);
    }

    #[tokio::test]
    async fn test_listing_and_delete() {
        let store = store_with_relay().await;
        let repo = EventRepository::new(&store);
        repo.create(2026, "tech", &create_request("Hackathon", None)).await.unwrap();
        repo.update(
            2026,
            "tech",
            "hackathon",
            &UpdateEventRequest {
                status: Some("ongoing".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let grouped = repo.list_grouped(2026).await.unwrap();
        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0].events.len(), 1);
        assert_eq!(grouped[1].leg_name, "Tech");

        let ongoing = repo.list_by_status(2026, Status::Ongoing).await.unwrap();
        assert_eq!(ongoing.len(), 1);
        assert_eq!(ongoing[0].event.id, "hackathon");

        repo.delete(2026, "sports", "relay").await.unwrap();
        assert!(repo.find(2026, "sports", "relay").await.unwrap_err().is_not_found());
        assert!(repo.delete(2026, "sports", "relay").await.unwrap_err().is_not_found());
    }
}
