//! Core domain types for the Climexa engine.
//!
//! These values are plain immutable records handed over by the persistence
//! collaborator. Constructors that can fail return `Result` so invalid input
//! (a month of 13, a six-star rating) surfaces before it reaches scoring.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod activity;
pub mod astro;
pub mod location;
pub mod month;
pub mod plan;
pub mod random;
pub mod review;
pub mod scorer;
pub mod terrain;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use activity::{ActivityType, ParseActivityError};
pub use astro::{AstronomicalEvent, AstronomicalEventKind, EventWindow, select_events};
pub use location::Location;
pub use month::{Month, MonthError, Season};
pub use plan::{EventStatus, PlannedEvent};
pub use random::{RandomSource, RngSource};
pub use review::{LocationReview, Rating, RatingError, RatingSummary};
pub use scorer::{ScoreResult, SuitabilityScorer};
pub use terrain::Terrain;
