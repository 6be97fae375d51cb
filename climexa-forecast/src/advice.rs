//! Activity advice composed from a synthetic weather reading.

use std::fmt;

use climexa_core::{ActivityType, Location};
use serde::{Deserialize, Serialize};

use crate::SyntheticWeather;

/// Separator placed between fragments in the joined advice text.
pub const ADVICE_SEPARATOR: &str = " • ";

const ALTITUDE_NOTICE_M: f64 = 3000.0;
const RAIN_NOTICE_PERCENT: u32 = 15;

/// Ordered advice fragments for one planned outing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Advice {
    fragments: Vec<String>,
}

impl Advice {
    /// Fragments in the order they were composed.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Number of fragments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Report whether no fragment was composed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragments.join(ADVICE_SEPARATOR))
    }
}

/// Compose advice for `activity` under `weather` at `location`.
///
/// Fragments follow a fixed order: activity guidance, the rain warning when
/// the precipitation chance exceeds 15%, the sun-protection note when the UV
/// label mentions "high", and finally the closing line naming the activity.
/// Only the closing line is unconditional.
///
/// # Examples
/// ```
/// use climexa_core::{ActivityType, Location, Terrain};
/// use climexa_forecast::{SyntheticWeather, compose_advice};
///
/// let weather = SyntheticWeather {
///     temperature: "18-24°C".into(),
///     conditions: "partly cloudy".into(),
///     humidity: "medium (50-60%)".into(),
///     wind: "light to moderate (10-20 km/h)".into(),
///     precipitation: "5%".into(),
///     uv_index: "medium (5-7)".into(),
///     visibility: "excellent (>10 km)".into(),
/// };
/// let location = Location::new("a", "A", Terrain::Canyon);
/// let advice = compose_advice(ActivityType::Picnic, &weather, &location);
/// assert_eq!(advice.to_string(), "ideal conditions for picnic");
/// ```
#[must_use]
pub fn compose_advice(
    activity: ActivityType,
    weather: &SyntheticWeather,
    location: &Location,
) -> Advice {
    let mut advice = Advice::default();

    match activity {
        ActivityType::Hiking | ActivityType::Climbing => {
            advice.push("start early to take advantage of the best conditions");
            advice.push("bring enough water (minimum 2 liters per person)");
            if location.elevation_above(ALTITUDE_NOTICE_M) {
                advice.push("account for altitude, take frequent breaks");
            }
        }
        ActivityType::Camping => {
            advice.push("ensure gear is rated for low nighttime temperatures");
            advice.push("arrive before sunset to set up camp");
        }
        ActivityType::Photography | ActivityType::Stargazing => {
            advice.push("best hours are sunrise and sunset");
            advice.push("bring warm layers as temperature drops quickly");
        }
        _ => {}
    }

    if weather
        .precipitation_percent()
        .is_some_and(|percent| percent > RAIN_NOTICE_PERCENT)
    {
        advice.push("chance of rain, bring waterproof gear");
    }
    if weather.has_high_uv() {
        advice.push("wear sunscreen and a hat due to the high UV index");
    }
    advice.push(format!(
        "ideal conditions for {}",
        activity.label().to_lowercase()
    ));

    log::trace!(
        "composed {} advice fragments for {}",
        advice.len(),
        activity.as_str()
    );
    advice
}
