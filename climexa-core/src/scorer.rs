//! Score locations for an activity in a given month.
//!
//! The [`SuitabilityScorer`] trait assigns a [`ScoreResult`] to a
//! [`Location`](crate::Location). Rankers are generic over it so tests can
//! plug in stubs.

use serde::{Deserialize, Serialize};

use crate::{ActivityType, Location, Month};

/// Baseline every score starts from before adjustments.
pub const BASELINE_SCORE: i32 = 50;

/// Outcome of scoring one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Additively adjusted score.
    pub score: i32,
    /// Human-readable reasons, in the order the rules fired.
    pub reasons: Vec<String>,
    /// Guidance on which days of the month suit the activity.
    pub ideal_days: String,
    /// Expected conditions for the month.
    pub weather_summary: String,
}

impl ScoreResult {
    /// A result at the baseline with no guidance.
    #[must_use]
    pub const fn baseline() -> Self {
        Self {
            score: BASELINE_SCORE,
            reasons: Vec::new(),
            ideal_days: String::new(),
            weather_summary: String::new(),
        }
    }

    /// Adjust the score and record why.
    pub fn adjust(&mut self, delta: i32, reason: &str) {
        self.score += delta;
        self.reasons.push(reason.to_owned());
    }

    /// Report whether any rule produced day or weather guidance.
    #[must_use]
    pub fn has_guidance(&self) -> bool {
        !self.ideal_days.is_empty() || !self.weather_summary.is_empty()
    }
}

impl Default for ScoreResult {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Calculate how well a location suits an activity in a month.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and total: every
/// location, including ones with unknown terrain or no elevation, receives a
/// result.
///
/// # Examples
///
/// ```rust
/// use climexa_core::{ActivityType, Location, Month, ScoreResult, SuitabilityScorer, Terrain};
///
/// struct FlatScorer;
///
/// impl SuitabilityScorer for FlatScorer {
///     fn score(&self, _location: &Location, _activity: ActivityType, _month: Month) -> ScoreResult {
///         ScoreResult::baseline()
///     }
/// }
///
/// let location = Location::new("a", "A", Terrain::Canyon);
/// let month = Month::new(4).expect("valid month");
/// assert_eq!(FlatScorer.score(&location, ActivityType::Picnic, month).score, 50);
/// ```
pub trait SuitabilityScorer: Send + Sync {
    /// Return a score for `location` given `activity` and `month`.
    fn score(&self, location: &Location, activity: ActivityType, month: Month) -> ScoreResult;
}
