//! Synthetic weather readings.

use chrono::NaiveDate;
use climexa_core::{Location, Month, RandomSource, Terrain};
use serde::{Deserialize, Serialize};

/// Draws strictly above this value predict a 20% chance of rain.
pub const RAIN_THRESHOLD: f64 = 0.7;

const HIGH_ALTITUDE_M: f64 = 3500.0;

const RAIN_LIKELY: &str = "20%";
const RAIN_UNLIKELY: &str = "5%";
const UV_HIGH: &str = "high (8-10)";
const UV_MEDIUM: &str = "medium (5-7)";
const VISIBILITY: &str = "excellent (>10 km)";

/// A synthetic weather reading.
///
/// Keys serialise in camelCase to match the persisted `weather_prediction`
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntheticWeather {
    /// Temperature range, e.g. `"16-20°C"`.
    pub temperature: String,
    /// Sky conditions.
    pub conditions: String,
    /// Humidity band.
    pub humidity: String,
    /// Wind band.
    pub wind: String,
    /// Chance of precipitation, e.g. `"5%"`.
    pub precipitation: String,
    /// UV index band.
    pub uv_index: String,
    /// Visibility band.
    pub visibility: String,
}

impl SyntheticWeather {
    /// Leading integer of the precipitation label, if any.
    ///
    /// # Examples
    /// ```
    /// use climexa_core::{Location, Terrain};
    /// use climexa_core::RandomSource;
    /// use climexa_forecast::synthesize_weather;
    ///
    /// struct Wet;
    /// impl RandomSource for Wet {
    ///     fn next_unit(&mut self) -> f64 { 0.9 }
    /// }
    ///
    /// let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 5).expect("valid date");
    /// let location = Location::new("a", "A", Terrain::Canyon);
    /// let weather = synthesize_weather(&location, date, &mut Wet);
    /// assert_eq!(weather.precipitation_percent(), Some(20));
    /// ```
    #[must_use]
    pub fn precipitation_percent(&self) -> Option<u32> {
        let trimmed = self.precipitation.trim_start();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        trimmed.get(..end).and_then(|digits| digits.parse().ok())
    }

    /// Report whether the UV label mentions a high index.
    #[must_use]
    pub fn has_high_uv(&self) -> bool {
        self.uv_index.contains("high")
    }
}

/// Literal temperature/conditions/humidity/wind row for one site tier.
struct Profile {
    winter_temperature: &'static str,
    temperature: &'static str,
    conditions: &'static str,
    humidity: &'static str,
    wind: &'static str,
}

const HIGH_ALTITUDE: Profile = Profile {
    winter_temperature: "8-12°C",
    temperature: "16-20°C",
    conditions: "mostly clear",
    humidity: "low (40-50%)",
    wind: "moderate (15-25 km/h)",
};

const DESERT: Profile = Profile {
    winter_temperature: "12-18°C",
    temperature: "22-28°C",
    conditions: "clear",
    humidity: "very low (20-30%)",
    wind: "light (10-15 km/h)",
};

const TEMPERATE: Profile = Profile {
    winter_temperature: "10-15°C",
    temperature: "18-24°C",
    conditions: "partly cloudy",
    humidity: "medium (50-60%)",
    wind: "light to moderate (10-20 km/h)",
};

fn profile_for(location: &Location) -> &'static Profile {
    if location.elevation_above(HIGH_ALTITUDE_M) {
        &HIGH_ALTITUDE
    } else if location.terrain == Terrain::Desert {
        &DESERT
    } else {
        &TEMPERATE
    }
}

/// Synthesize a weather reading for `location` on `date`.
///
/// High sites (above 3500 m) take precedence over deserts, which take
/// precedence over the temperate default. Winter months pick the cooler
/// temperature band; summer and shoulder months share the warmer one. The
/// only random input is one draw for the precipitation chance.
pub fn synthesize_weather<R: RandomSource + ?Sized>(
    location: &Location,
    date: NaiveDate,
    random: &mut R,
) -> SyntheticWeather {
    let month = Month::from_date(date);
    let profile = profile_for(location);
    let temperature = if month.is_winter() {
        profile.winter_temperature
    } else {
        profile.temperature
    };
    let precipitation = if random.next_unit() > RAIN_THRESHOLD {
        RAIN_LIKELY
    } else {
        RAIN_UNLIKELY
    };
    let uv_index = if month.is_summer() { UV_HIGH } else { UV_MEDIUM };

    SyntheticWeather {
        temperature: temperature.to_owned(),
        conditions: profile.conditions.to_owned(),
        humidity: profile.humidity.to_owned(),
        wind: profile.wind.to_owned(),
        precipitation: precipitation.to_owned(),
        uv_index: uv_index.to_owned(),
        visibility: VISIBILITY.to_owned(),
    }
}
