//! Calendar months and the seasonal banding used by every rule table.
//!
//! Seasons follow a southern-hemisphere style banding: September through
//! February count as summer and May through July as winter. March, April and
//! August fall into neither band and are reported as [`Season::Shoulder`].
//!
//! # Examples
//! ```
//! use climexa_core::{Month, Season};
//!
//! # fn main() -> Result<(), climexa_core::MonthError> {
//! let october = Month::new(10)?;
//! assert!(october.is_summer());
//! assert_eq!(Month::new(8)?.season(), Season::Shoulder);
//! # Ok(())
//! # }
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month, 1 = January.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

/// Errors returned by [`Month::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MonthError {
    /// The value was outside `1..=12`.
    #[error("month must be between 1 and 12, got {0}")]
    OutOfRange(u8),
}

/// Seasonal bucket used by the weather and statistics tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// September through February.
    Summer,
    /// May through July.
    Winter,
    /// March, April and August.
    Shoulder,
}

impl Month {
    /// Validate and construct a [`Month`].
    ///
    /// # Errors
    /// Returns [`MonthError::OutOfRange`] for values outside `1..=12`.
    pub const fn new(number: u8) -> Result<Self, MonthError> {
        if number >= 1 && number <= 12 {
            Ok(Self(number))
        } else {
            Err(MonthError::OutOfRange(number))
        }
    }

    /// Month of a calendar date.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "chrono months are always within 1..=12"
    )]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.month() as u8)
    }

    /// Iterate January through December.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=12).map(Month)
    }

    /// Return the month number, 1 = January.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// English month name.
    #[must_use]
    pub fn name(self) -> &'static str {
        MONTH_NAMES
            .get(usize::from(self.0.saturating_sub(1)))
            .copied()
            .unwrap_or_default()
    }

    /// September through February.
    #[must_use]
    pub const fn is_summer(self) -> bool {
        summer_band(self.0)
    }

    /// May through July.
    #[must_use]
    pub const fn is_winter(self) -> bool {
        winter_band(self.0)
    }

    /// Seasonal bucket for the month. Winter is checked first.
    #[must_use]
    pub const fn season(self) -> Season {
        band(self.0)
    }

    /// Seasonal bucket keyed by the zero-based month index.
    ///
    /// The monthly statistics table feeds the index rather than the month
    /// number through the same bands, so its winter is June to August and
    /// its shoulder months are April, May and September.
    #[must_use]
    pub const fn index_season(self) -> Season {
        band(self.0.saturating_sub(1))
    }
}

const fn summer_band(value: u8) -> bool {
    value >= 9 || value <= 2
}

const fn winter_band(value: u8) -> bool {
    value >= 5 && value <= 7
}

const fn band(value: u8) -> Season {
    if winter_band(value) {
        Season::Winter
    } else if summer_band(value) {
        Season::Summer
    } else {
        Season::Shoulder
    }
}

impl TryFrom<u8> for Month {
    type Error = MonthError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
