//! Rank candidate locations for an activity and month.

use climexa_core::{
    ActivityType, Location, Month, RandomSource, ScoreResult, SuitabilityScorer,
};
use serde::{Deserialize, Serialize};

use crate::LocationScorer;

/// Maximum number of recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Upper bound of the displayed success rate.
pub const SUCCESS_RATE_CAP: i32 = 95;

const SUCCESS_JITTER_BOUND: u32 = 10;

/// Visitor selections driving a recommendation run.
///
/// Either field may be missing while the visitor is still choosing; the
/// ranker then returns no recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// Selected activity.
    pub activity: Option<ActivityType>,
    /// Selected month.
    pub month: Option<Month>,
}

/// One ranked location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The scored location.
    pub location: Location,
    /// Score, reasons and guidance.
    #[serde(flatten)]
    pub result: ScoreResult,
    /// Jittered score capped at [`SUCCESS_RATE_CAP`], for display only.
    pub success_rate: i32,
    /// Set on the first recommendation only.
    pub best_option: bool,
}

/// Jitter a raw score into a display success rate.
///
/// Adds a uniform integer draw from `0..10` and caps the result at
/// [`SUCCESS_RATE_CAP`].
///
/// # Examples
/// ```
/// use climexa_core::RandomSource;
/// use climexa_scorer::success_rate;
///
/// struct Top;
///
/// impl RandomSource for Top {
///     fn next_unit(&mut self) -> f64 {
///         0.95
///     }
/// }
///
/// assert_eq!(success_rate(60, &mut Top), 69);
/// assert_eq!(success_rate(100, &mut Top), 95);
/// ```
pub fn success_rate<R: RandomSource + ?Sized>(score: i32, random: &mut R) -> i32 {
    let jitter = random.below(SUCCESS_JITTER_BOUND);
    score.saturating_add_unsigned(jitter).min(SUCCESS_RATE_CAP)
}

/// Scores locations with a [`SuitabilityScorer`] and keeps the best.
#[derive(Debug, Clone)]
pub struct RecommendationRanker<S> {
    scorer: S,
    limit: usize,
}

impl Default for RecommendationRanker<LocationScorer> {
    fn default() -> Self {
        Self::new(LocationScorer)
    }
}

impl<S: SuitabilityScorer> RecommendationRanker<S> {
    /// Build a ranker returning at most [`MAX_RECOMMENDATIONS`] entries.
    pub const fn new(scorer: S) -> Self {
        Self {
            scorer,
            limit: MAX_RECOMMENDATIONS,
        }
    }

    /// Rank locations for the visitor's selections.
    ///
    /// Returns an empty list when the activity or month is still unselected.
    pub fn recommend<R: RandomSource + ?Sized>(
        &self,
        request: &RecommendationRequest,
        locations: &[Location],
        random: &mut R,
    ) -> Vec<Recommendation> {
        let (Some(activity), Some(month)) = (request.activity, request.month) else {
            log::debug!("recommendation skipped: activity or month not selected");
            return Vec::new();
        };
        self.rank(activity, month, locations, random)
    }

    /// Score every location, sort by raw score and keep the best entries.
    ///
    /// One success-rate draw is taken per location, in input order, before
    /// sorting. The sort is stable, so equally scored locations keep their
    /// input order. The success rate never influences the order.
    pub fn rank<R: RandomSource + ?Sized>(
        &self,
        activity: ActivityType,
        month: Month,
        locations: &[Location],
        random: &mut R,
    ) -> Vec<Recommendation> {
        if locations.is_empty() {
            log::warn!("no locations to rank for {}", activity.as_str());
            return Vec::new();
        }
        let mut ranked: Vec<Recommendation> = locations
            .iter()
            .map(|location| {
                let result = self.scorer.score(location, activity, month);
                let success_rate = success_rate(result.score, random);
                Recommendation {
                    location: location.clone(),
                    result,
                    success_rate,
                    best_option: false,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        ranked.truncate(self.limit);
        if let Some(first) = ranked.first_mut() {
            first.best_option = true;
        }

        log::debug!(
            "ranked {} of {} locations for {activity} in {month}",
            ranked.len(),
            locations.len()
        );
        ranked
    }
}
