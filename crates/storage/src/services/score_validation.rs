use thiserror::Error;

use crate::models::{Event, Score, Status};

/// Why a score submission was refused. Carries enough context for the
/// caller to show which hostel and which limit were involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid score: {points} points for hostel '{hostel_id}' is negative")]
    Negative { hostel_id: String, points: i64 },

    #[error(
        "invalid score: {points} points for hostel '{hostel_id}' exceeds maximum of {max_points}"
    )]
    ExceedsMaximum {
        hostel_id: String,
        points: i64,
        max_points: i64,
    },

    #[error("invalid status '{0}': expected upcoming, ongoing or completed")]
    InvalidStatus(String),
}

impl ScoreError {
    pub fn hostel_id(&self) -> Option<&str> {
        match self {
            Self::Negative { hostel_id, .. } | Self::ExceedsMaximum { hostel_id, .. } => {
                Some(hostel_id)
            }
            Self::InvalidStatus(_) => None,
        }
    }
}

/// Checks that every score lies in `0..=max_points`.
///
/// All entries are checked for negatives before any is checked against the
/// maximum, so a list with both problems reports the negative one.
pub fn check_points(max_points: i64, scores: &[Score]) -> Result<(), ScoreError> {
    if let Some(score) = scores.iter().find(|s| s.points < 0) {
        return Err(ScoreError::Negative {
            hostel_id: score.hostel_id.clone(),
            points: score.points,
        });
    }

    if let Some(score) = scores.iter().find(|s| s.points > max_points) {
        return Err(ScoreError::ExceedsMaximum {
            hostel_id: score.hostel_id.clone(),
            points: score.points,
            max_points,
        });
    }

    Ok(())
}

/// Validates a submission against an event without touching it
pub fn validate_score_update(
    event: &Event,
    scores: &[Score],
    status: Option<&str>,
) -> Result<Option<Status>, ScoreError> {
    check_points(event.max_points, scores)?;

    status
        .map(|s| {
            s.parse::<Status>()
                .map_err(|_| ScoreError::InvalidStatus(s.to_string()))
        })
        .transpose()
}

/// Validates and then replaces the event's score list wholesale.
///
/// Hostels missing from `scores` lose whatever they had before. On error the
/// event is left exactly as it was.
pub fn apply_score_update(
    event: &mut Event,
    scores: Vec<Score>,
    status: Option<&str>,
) -> Result<(), ScoreError> {
    let status = validate_score_update(event, &scores, status)?;

    event.scores = collapse_duplicates(scores);
    if let Some(status) = status {
        event.status = status;
    }

    Ok(())
}

// One entry per hostel: a repeated hostel keeps its first position and takes
// the later value.
fn collapse_duplicates(scores: Vec<Score>) -> Vec<Score> {
    let mut collapsed: Vec<Score> = Vec::with_capacity(scores.len());

    for score in scores {
        match collapsed.iter_mut().find(|s| s.hostel_id == score.hostel_id) {
            Some(existing) => existing.points = score.points,
            None => collapsed.push(score),
        }
    }

    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay(max_points: i64, scores: Vec<Score>) -> Event {
        Event {
            id: "relay".to_string(),
            name: "Relay".to_string(),
            image: String::new(),
            description: String::new(),
            rules: Vec::new(),
            max_points,
            scores,
            status: Status::Upcoming,
        }
    }

    #[test]
    fn test_exactly_max_points_is_accepted() {
        let mut event = relay(100, Vec::new());
        apply_score_update(&mut event, vec![Score::new("satluj", 100)], None).unwrap();
        assert_eq!(event.points_for("satluj"), 100);
    }

    #[test]
    fn test_one_over_max_points_is_rejected() {
        let event = relay(100, Vec::new());
        let err = validate_score_update(&event, &[Score::new("satluj", 101)], None).unwrap_err();

        assert_eq!(
            err,
            ScoreError::ExceedsMaximum {
                hostel_id: "satluj".to_string(),
                points: 101,
                max_points: 100,
            }
        );
        assert_eq!(err.hostel_id(), Some("satluj"));
    }

    #[test]
    fn test_negative_points_are_rejected() {
        let event = relay(100, Vec::new());
        let err = validate_score_update(&event, &[Score::new("beas", -1)], None).unwrap_err();

        assert_eq!(
            err,
            ScoreError::Negative {
                hostel_id: "beas".to_string(),
                points: -1,
            }
        );
    }

    #[test]
    fn test_negative_reported_before_exceeding() {
        let event = relay(10, Vec::new());
        let scores = vec![Score::new("satluj", 50), Score::new("beas", -3)];

        let err = validate_score_update(&event, &scores, Some("bogus")).unwrap_err();
        assert!(matches!(err, ScoreError::Negative { ref hostel_id, .. } if hostel_id == "beas"));
    }

    #[test]
    fn test_invalid_status_checked_after_points() {
        let event = relay(10, Vec::new());

        let err = validate_score_update(&event, &[Score::new("satluj", 5)], Some("finished"))
            .unwrap_err();
        assert_eq!(err, ScoreError::InvalidStatus("finished".to_string()));

        let err = validate_score_update(&event, &[Score::new("satluj", 11)], Some("finished"))
            .unwrap_err();
        assert!(matches!(err, ScoreError::ExceedsMaximum { .. }));
    }

    #[test]
    fn test_failed_update_leaves_event_untouched() {
        let mut event = relay(100, vec![Score::new("satluj", 40)]);
        let before = event.clone();

        let result = apply_score_update(
            &mut event,
            vec![Score::new("satluj", 10), Score::new("beas", 500)],
            Some("completed"),
        );

        assert!(result.is_err());
        assert_eq!(event, before);
    }

    #[test]
    fn test_update_replaces_rather_than_merges() {
        let mut event = relay(100, vec![Score::new("a", 10), Score::new("b", 5)]);

        apply_score_update(&mut event, vec![Score::new("a", 8)], None).unwrap();

        assert_eq!(event.scores, vec![Score::new("a", 8)]);
        assert_eq!(event.points_for("b"), 0);
    }

    #[test]
    fn test_update_applies_status() {
        let mut event = relay(100, Vec::new());
        apply_score_update(&mut event, Vec::new(), Some("completed")).unwrap();
        assert_eq!(event.status, Status::Completed);

        apply_score_update(&mut event, Vec::new(), None).unwrap();
        assert_eq!(event.status, Status::Completed);
    }

    #[test]
    fn test_duplicate_hostel_entries_collapse() {
        let mut event = relay(100, Vec::new());
        let scores = vec![
            Score::new("a", 10),
            Score::new("b", 20),
            Score::new("a", 30),
        ];

        apply_score_update(&mut event, scores, None).unwrap();

        assert_eq!(event.scores, vec![Score::new("a", 30), Score::new("b", 20)]);
    }
}
