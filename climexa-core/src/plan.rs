//! Planned-event payloads handed to the persistence collaborator.
//!
//! The engine never stores these records. It only fills in the prediction
//! fields so the caller can persist the draft as an opaque row.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::ActivityType;

/// Lifecycle state of a planned event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    /// Newly planned.
    #[default]
    Planned,
    /// Took place.
    Completed,
    /// Called off.
    Cancelled,
}

/// A planned outdoor event ready to be persisted.
///
/// `weather_prediction` is kept as an opaque JSON value because the storage
/// schema does not interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedEvent {
    /// Owner of the event.
    pub user_id: String,
    /// Headline.
    pub title: String,
    /// Optional free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Planned activity.
    #[serde(rename = "event_type")]
    pub activity: ActivityType,
    /// Where the event takes place.
    pub location_id: String,
    /// Calendar day of the event.
    #[serde(rename = "event_date")]
    pub date: NaiveDate,
    /// Optional start time.
    #[serde(rename = "event_time", default)]
    pub time: Option<NaiveTime>,
    /// Synthetic weather payload, `{}` when no prediction was made.
    pub weather_prediction: serde_json::Value,
    /// Joined advice text.
    #[serde(rename = "ai_recommendations", default)]
    pub advice: Option<String>,
    /// Lifecycle state.
    #[serde(default)]
    pub status: EventStatus,
}
