//! Astronomical events and the upcoming/past listing windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of an astronomical event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AstronomicalEventKind {
    /// Full moon.
    FullMoon,
    /// New moon.
    NewMoon,
    /// Solar or lunar eclipse.
    Eclipse,
    /// Meteor shower.
    MeteorShower,
    /// Perigee full moon.
    Supermoon,
    /// Planetary conjunction.
    Conjunction,
    /// Any other event type.
    Other(String),
}

impl AstronomicalEventKind {
    /// Wire value, e.g. `meteor_shower`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::FullMoon => "full_moon",
            Self::NewMoon => "new_moon",
            Self::Eclipse => "eclipse",
            Self::MeteorShower => "meteor_shower",
            Self::Supermoon => "supermoon",
            Self::Conjunction => "conjunction",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Display title with underscores replaced by spaces.
    #[must_use]
    pub fn title(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl From<String> for AstronomicalEventKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "full_moon" => Self::FullMoon,
            "new_moon" => Self::NewMoon,
            "eclipse" => Self::Eclipse,
            "meteor_shower" => Self::MeteorShower,
            "supermoon" => Self::Supermoon,
            "conjunction" => Self::Conjunction,
            _ => Self::Other(raw),
        }
    }
}

impl From<AstronomicalEventKind> for String {
    fn from(kind: AstronomicalEventKind) -> Self {
        match kind {
            AstronomicalEventKind::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

/// A published astronomical event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstronomicalEvent {
    /// Unique identifier.
    pub id: String,
    /// Event category.
    #[serde(rename = "event_type")]
    pub kind: AstronomicalEventKind,
    /// Peak time of the event.
    #[serde(rename = "event_date")]
    pub date: DateTime<Utc>,
    /// Headline.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// Expected visibility, `0..=100`.
    pub visibility_percentage: u8,
    /// Free-text viewing window.
    #[serde(default)]
    pub best_viewing_time: Option<String>,
    /// Location recommended for viewing.
    #[serde(default)]
    pub recommended_location_id: Option<String>,
    /// Viewing tips such as `items` and `what_to_bring`, kept as stored.
    #[serde(default)]
    pub recommendations: serde_json::Value,
}

/// Which events a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventWindow {
    /// Events at or after `now`, soonest first.
    #[default]
    Upcoming,
    /// Events before `now`, most recent first.
    Past,
    /// Every event, oldest first.
    All,
}

/// Select and order events for a listing window.
///
/// Sorting is stable, so events sharing a timestamp keep their input order.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use climexa_core::{AstronomicalEvent, AstronomicalEventKind, EventWindow, select_events};
///
/// let event = |id: &str, day| AstronomicalEvent {
///     id: id.into(),
///     kind: AstronomicalEventKind::FullMoon,
///     date: Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap(),
///     title: id.into(),
///     description: None,
///     visibility_percentage: 90,
///     best_viewing_time: None,
///     recommended_location_id: None,
///     recommendations: serde_json::Value::Null,
/// };
/// let events = [event("late", 20), event("early", 2)];
/// let now = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();
/// let upcoming = select_events(&events, EventWindow::Upcoming, now);
/// assert_eq!(upcoming.len(), 1);
/// assert_eq!(upcoming[0].id, "late");
/// ```
#[must_use]
pub fn select_events(
    events: &[AstronomicalEvent],
    window: EventWindow,
    now: DateTime<Utc>,
) -> Vec<&AstronomicalEvent> {
    let mut selected: Vec<&AstronomicalEvent> = events
        .iter()
        .filter(|event| match window {
            EventWindow::Upcoming => event.date >= now,
            EventWindow::Past => event.date < now,
            EventWindow::All => true,
        })
        .collect();
    match window {
        EventWindow::Past => selected.sort_by(|a, b| b.date.cmp(&a.date)),
        EventWindow::Upcoming | EventWindow::All => selected.sort_by_key(|event| event.date),
    }
    log::debug!(
        "selected {} of {} astronomical events for {window:?}",
        selected.len(),
        events.len()
    );
    selected
}
