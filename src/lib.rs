//! Facade crate for the Climexa recommendation engine.
//!
//! This crate re-exports the domain types, the location scorer and ranker,
//! and the weather, advice and statistics generators so applications can
//! depend on a single crate.
//!
//! # Examples
//!
//! ```
//! use climexa::{
//!     ActivityType, Location, Month, RecommendationRanker, RngSource, Terrain,
//!     monthly_statistics, predict,
//! };
//!
//! let peak = Location::new("peak", "Cerro Toco", Terrain::Mountain).with_elevation(5600.0);
//! let locations = vec![peak.clone()];
//! let mut random = RngSource::seeded(1);
//!
//! let month = Month::new(11).expect("valid month");
//! let ranked = RecommendationRanker::default().rank(
//!     ActivityType::Stargazing,
//!     month,
//!     &locations,
//!     &mut random,
//! );
//! assert_eq!(ranked.first().map(|rec| rec.result.score), Some(100));
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 11, 20).expect("valid date");
//! let prediction = predict(&peak, ActivityType::Stargazing, date, &mut random);
//! assert_eq!(prediction.weather.conditions, "mostly clear");
//!
//! assert_eq!(monthly_statistics(&peak).summary.average_clear_days, 19);
//! ```

#![forbid(unsafe_code)]

pub use climexa_core::{
    ActivityType, AstronomicalEvent, AstronomicalEventKind, EventStatus, EventWindow, Location,
    LocationReview, Month, MonthError, ParseActivityError, PlannedEvent, RandomSource, Rating,
    RatingError, RatingSummary, RngSource, ScoreResult, Season, SuitabilityScorer, Terrain,
    select_events,
};
pub use climexa_forecast::{
    Advice, ClimateClass, MonthlyRecord, MonthlyStatistics, PlanError, PlanRequest, Prediction,
    SyntheticWeather, YearSummary, compose_advice, monthly_statistics, predict,
    synthesize_weather,
};
pub use climexa_scorer::{
    LocationScorer, Recommendation, RecommendationRanker, RecommendationRequest, score_location,
    success_rate,
};

#[cfg(feature = "test-support")]
pub use climexa_core::test_support;
