//! Derived ranking views over a [`CompetitionYear`].
//!
//! Nothing here is stored: every view is recomputed from the year snapshot,
//! so standings can never disagree with the recorded scores. Ties are left in
//! input order (hostel order for the leaderboard, score-list order for event
//! winners) and ranks are positional, so equal totals still get 1, 2, 3.

use chrono::Utc;

use crate::dto::standings::{HostelScore, Leaderboard, LegEvent, LegScore};
use crate::models::{CompetitionYear, Event, Hostel, Leg, Status};

fn points_in_leg(hostel_id: &str, leg: &Leg) -> i64 {
    leg.events
        .iter()
        .fold(0i64, |acc, e| acc.saturating_add(e.points_for(hostel_id)))
}

/// Sum of a hostel's points across every event of every leg
pub fn total_score(hostel_id: &str, year: &CompetitionYear) -> i64 {
    year.legs
        .iter()
        .fold(0i64, |acc, leg| acc.saturating_add(points_in_leg(hostel_id, leg)))
}

/// Sum of a hostel's points within one leg; zero for an unknown leg
pub fn leg_score(hostel_id: &str, leg_id: &str, year: &CompetitionYear) -> i64 {
    year.find_leg(leg_id)
        .map_or(0, |leg| points_in_leg(hostel_id, leg))
}

fn hostel_score(hostel: &Hostel, year: &CompetitionYear) -> HostelScore {
    let leg_scores = year
        .legs
        .iter()
        .map(|leg| LegScore {
            leg_id: leg.id.clone(),
            leg_name: leg.name.clone(),
            score: points_in_leg(&hostel.id, leg),
        })
        .collect();

    HostelScore {
        hostel: hostel.clone(),
        total_score: total_score(&hostel.id, year),
        leg_scores,
        rank: 0,
    }
}

/// Every hostel ranked by total points, highest first
pub fn leaderboard(year: &CompetitionYear) -> Vec<HostelScore> {
    let mut standings: Vec<HostelScore> = year
        .hostels
        .iter()
        .map(|hostel| hostel_score(hostel, year))
        .collect();

    // `sort_by` is stable: equal totals keep hostel order
    standings.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    for (index, entry) in standings.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }

    standings
}

pub fn leaderboard_snapshot(year: &CompetitionYear) -> Leaderboard {
    Leaderboard {
        year: year.year,
        standings: leaderboard(year),
        last_updated: Utc::now(),
    }
}

/// The leaderboard row of a single hostel, rank included
pub fn hostel_standing(year: &CompetitionYear, hostel_id: &str) -> Option<HostelScore> {
    leaderboard(year)
        .into_iter()
        .find(|entry| entry.hostel.id == hostel_id)
}

/// Highest scorer of an event. Among equal maxima the first entry in the
/// event's score list wins.
pub fn event_winner<'a>(event: &Event, hostels: &'a [Hostel]) -> Option<&'a Hostel> {
    let mut best = event.scores.first()?;
    for score in &event.scores[1..] {
        if score.points > best.points {
            best = score;
        }
    }

    hostels.iter().find(|h| h.id == best.hostel_id)
}

/// Top hostel of one leg. The returned row keeps its overall rank.
pub fn leg_leader(year: &CompetitionYear, leg_id: &str) -> Option<HostelScore> {
    let mut standings = leaderboard(year);
    standings.sort_by(|a, b| b.leg_score(leg_id).cmp(&a.leg_score(leg_id)));
    standings.into_iter().next()
}

/// Events in the given state, in leg order then event order
pub fn events_with_status(year: &CompetitionYear, status: Status) -> Vec<LegEvent> {
    year.events()
        .filter(|(_, event)| event.status == status)
        .map(|(leg, event)| LegEvent {
            leg_id: leg.id.clone(),
            leg_name: leg.name.clone(),
            event: event.clone(),
        })
        .collect()
}
