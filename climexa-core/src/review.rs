//! Visitor reviews of locations and their aggregate rating.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Star rating from one to five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

/// Errors returned by [`Rating::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatingError {
    /// The value was outside `1..=5`.
    #[error("rating must be between 1 and 5 stars, got {0}")]
    OutOfRange(u8),
}

impl Rating {
    /// Highest rating a review can carry.
    pub const MAX: u8 = 5;

    /// Validate and construct a [`Rating`].
    ///
    /// # Errors
    /// Returns [`RatingError::OutOfRange`] for values outside `1..=5`.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars >= 1 && stars <= Self::MAX {
            Ok(Self(stars))
        } else {
            Err(RatingError::OutOfRange(stars))
        }
    }

    /// Number of stars.
    #[must_use]
    pub const fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A visitor's review of a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationReview {
    /// Unique identifier.
    pub id: String,
    /// Reviewed location.
    pub location_id: String,
    /// Author.
    pub user_id: String,
    /// Star rating.
    pub rating: Rating,
    /// Optional free text.
    #[serde(default)]
    pub comment: Option<String>,
    /// Date of the visit, when supplied.
    #[serde(default)]
    pub visit_date: Option<NaiveDate>,
    /// Conditions the visitor reported.
    #[serde(default)]
    pub weather_conditions: Option<String>,
}

/// Review count and mean rating for one location.
///
/// # Examples
/// ```
/// use climexa_core::{LocationReview, Rating, RatingSummary};
///
/// let review = |id: &str, stars| LocationReview {
///     id: id.into(),
///     location_id: "loc-1".into(),
///     user_id: "u".into(),
///     rating: Rating::new(stars).expect("valid rating"),
///     comment: None,
///     visit_date: None,
///     weather_conditions: None,
/// };
/// let reviews = [review("r1", 5), review("r2", 4)];
/// let summary = RatingSummary::for_location("loc-1", &reviews);
/// assert_eq!(summary.count, 2);
/// assert_eq!(summary.average_label(), "4.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Number of matching reviews.
    pub count: usize,
    /// Mean star rating, `0.0` when there are no reviews.
    pub average: f64,
}

impl RatingSummary {
    /// Aggregate the reviews belonging to `location_id`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "averaging a small number of star ratings"
    )]
    pub fn for_location(location_id: &str, reviews: &[LocationReview]) -> Self {
        let (count, total) = reviews
            .iter()
            .filter(|review| review.location_id == location_id)
            .fold((0_usize, 0_u64), |(count, total), review| {
                (count + 1, total + u64::from(review.rating.stars()))
            });
        let average = if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        };
        Self { count, average }
    }

    /// Mean rating rounded to one decimal place.
    #[must_use]
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn review(location_id: &str, stars: u8) -> LocationReview {
        LocationReview {
            id: format!("{location_id}-{stars}"),
            location_id: location_id.to_owned(),
            user_id: "user".to_owned(),
            rating: Rating::new(stars).expect("valid rating"),
            comment: None,
            visit_date: None,
            weather_conditions: None,
        }
    }

    #[fixture]
    fn reviews() -> Vec<LocationReview> {
        vec![review("a", 5), review("b", 1), review("a", 4), review("a", 4)]
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn rating_rejects_out_of_range(#[case] stars: u8) {
        assert_eq!(Rating::new(stars), Err(RatingError::OutOfRange(stars)));
    }

    #[rstest]
    fn summary_filters_by_location(reviews: Vec<LocationReview>) {
        let summary = RatingSummary::for_location("a", &reviews);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average_label(), "4.3");
    }

    #[rstest]
    fn summary_without_reviews_is_zero(reviews: Vec<LocationReview>) {
        let summary = RatingSummary::for_location("missing", &reviews);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average_label(), "0.0");
    }

    #[rstest]
    fn review_rejects_invalid_rating_payload() {
        let json = r#"{"id":"r","location_id":"a","user_id":"u","rating":9}"#;
        assert!(serde_json::from_str::<LocationReview>(json).is_err());
    }
}
