//! Predictions for a planned outing and the draft record built from them.

use chrono::{NaiveDate, NaiveTime};
use climexa_core::{ActivityType, EventStatus, Location, PlannedEvent, RandomSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Advice, SyntheticWeather, compose_advice, synthesize_weather};

/// Weather reading and advice for one location, activity and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Synthetic weather for the date.
    pub weather: SyntheticWeather,
    /// Advice fragments derived from the weather.
    pub advice: Advice,
}

/// Synthesize weather for `date` at `location` and compose advice for it.
///
/// Consumes exactly one draw from `random`.
pub fn predict<R: RandomSource + ?Sized>(
    location: &Location,
    activity: ActivityType,
    date: NaiveDate,
    random: &mut R,
) -> Prediction {
    let weather = synthesize_weather(location, date, random);
    let advice = compose_advice(activity, &weather, location);
    Prediction { weather, advice }
}

/// Errors raised while turning a [`PlanRequest`] into a draft.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A required text field was empty or whitespace.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    /// The weather reading could not be encoded as JSON.
    #[error("failed to encode weather prediction: {0}")]
    Encode(#[from] serde_json::Error),
}

/// User input for planning an outing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Owner of the event.
    pub user_id: String,
    /// Headline.
    pub title: String,
    /// Optional free text.
    #[serde(default)]
    pub description: Option<String>,
    /// Planned activity.
    pub activity: ActivityType,
    /// Where the outing takes place.
    pub location_id: String,
    /// Calendar day.
    pub date: NaiveDate,
    /// Optional start time.
    #[serde(default)]
    pub time: Option<NaiveTime>,
}

impl PlanRequest {
    /// Build a [`PlannedEvent`] draft carrying `prediction`.
    ///
    /// Without a prediction the weather payload is an empty JSON object and
    /// no advice is attached. Blank descriptions are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::MissingField`] when the title, user id or
    /// location id is blank, and [`PlanError::Encode`] if the weather cannot
    /// be serialised.
    pub fn into_draft(self, prediction: Option<&Prediction>) -> Result<PlannedEvent, PlanError> {
        require("user_id", &self.user_id)?;
        require("title", &self.title)?;
        require("location_id", &self.location_id)?;

        let (weather_prediction, advice) = match prediction {
            Some(found) => (
                serde_json::to_value(&found.weather)?,
                Some(found.advice.to_string()),
            ),
            None => (serde_json::Value::Object(serde_json::Map::new()), None),
        };

        Ok(PlannedEvent {
            user_id: self.user_id,
            title: self.title.trim().to_owned(),
            description: self
                .description
                .filter(|text| !text.trim().is_empty()),
            activity: self.activity,
            location_id: self.location_id,
            date: self.date,
            time: self.time,
            weather_prediction,
            advice,
            status: EventStatus::Planned,
        })
    }
}

fn require(field: &'static str, value: &str) -> Result<(), PlanError> {
    if value.trim().is_empty() {
        Err(PlanError::MissingField(field))
    } else {
        Ok(())
    }
}
