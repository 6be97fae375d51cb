//! Synthetic weather, activity advice and monthly climate statistics.
//!
//! Nothing here is a meteorological model. Every value comes from small
//! literal tables keyed by elevation, terrain and season, plus a single
//! uniform draw deciding the precipitation chance:
//! - [`synthesize_weather`] produces a [`SyntheticWeather`] reading for a
//!   location on a date.
//! - [`compose_advice`] turns an activity and a reading into ordered advice
//!   fragments joined by `" • "`.
//! - [`monthly_statistics`] produces twelve [`MonthlyRecord`] values and a
//!   [`YearSummary`].
//! - [`predict`] and [`PlanRequest`] prepare a planned-event payload for the
//!   persistence collaborator.

#![forbid(unsafe_code)]

mod advice;
mod plan;
mod stats;
mod weather;

pub use advice::{ADVICE_SEPARATOR, Advice, compose_advice};
pub use plan::{PlanError, PlanRequest, Prediction, predict};
pub use stats::{
    ClimateClass, ClimateNormal, MonthlyRecord, MonthlyStatistics, YearSummary,
    monthly_statistics,
};
pub use weather::{RAIN_THRESHOLD, SyntheticWeather, synthesize_weather};
