//! Rule-based location scoring and recommendation ranking.
//!
//! The crate provides two layers:
//! - **Location scoring** ([`LocationScorer`]) assigns each location a score
//!   starting from a baseline of 50, adjusted by terrain, elevation and
//!   season rules for the chosen activity, together with the reasons that
//!   fired and day/weather guidance.
//! - **Recommendation ranking** ([`RecommendationRanker`]) scores a set of
//!   locations, attaches a jittered success rate, sorts by raw score and
//!   keeps the best four.
//!
//! # Examples
//!
//! ```
//! use climexa_core::{ActivityType, Location, Month, RngSource, Terrain};
//! use climexa_scorer::RecommendationRanker;
//!
//! let locations = vec![
//!     Location::new("a", "Cerro Toco", Terrain::Mountain).with_elevation(3800.0),
//!     Location::new("b", "Salar", Terrain::Desert),
//! ];
//! let month = Month::new(10).expect("valid month");
//! let ranked = RecommendationRanker::default().rank(
//!     ActivityType::Stargazing,
//!     month,
//!     &locations,
//!     &mut RngSource::seeded(7),
//! );
//! assert_eq!(ranked[0].location.id, "a");
//! assert!(ranked[0].best_option);
//! ```

#![forbid(unsafe_code)]

mod ranker;
mod rules;

pub use ranker::{
    MAX_RECOMMENDATIONS, Recommendation, RecommendationRanker, RecommendationRequest,
    SUCCESS_RATE_CAP, success_rate,
};
pub use rules::{LocationScorer, score_location};

#[cfg(test)]
mod tests;
