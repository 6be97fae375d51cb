//! Outdoor activities a visitor can plan.
//!
//! # Examples
//! ```
//! use climexa_core::ActivityType;
//!
//! let activity: ActivityType = "stargazing".parse().expect("known activity");
//! assert_eq!(activity, ActivityType::Stargazing);
//! assert_eq!(activity.label(), "Stargazing");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Activity selected by the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Day hikes and treks.
    Hiking,
    /// Overnight camping.
    Camping,
    /// Landscape photography.
    Photography,
    /// Night-sky observation.
    Stargazing,
    /// Picnics.
    Picnic,
    /// Road or trail cycling.
    Cycling,
    /// Rock climbing.
    Climbing,
    /// Anything else.
    Other,
}

/// Error returned when parsing an unknown activity name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown activity '{0}'")]
pub struct ParseActivityError(pub String);

impl ActivityType {
    /// Every activity in presentation order.
    pub const ALL: [Self; 8] = [
        Self::Hiking,
        Self::Camping,
        Self::Photography,
        Self::Stargazing,
        Self::Picnic,
        Self::Cycling,
        Self::Climbing,
        Self::Other,
    ];

    /// Return the wire value stored by the persistence layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hiking => "hiking",
            Self::Camping => "camping",
            Self::Photography => "photography",
            Self::Stargazing => "stargazing",
            Self::Picnic => "picnic",
            Self::Cycling => "cycling",
            Self::Climbing => "climbing",
            Self::Other => "other",
        }
    }

    /// Return the human-readable label shown to visitors.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hiking => "Hiking",
            Self::Camping => "Camping",
            Self::Photography => "Photography",
            Self::Stargazing => "Stargazing",
            Self::Picnic => "Picnic",
            Self::Cycling => "Cycling",
            Self::Climbing => "Climbing",
            Self::Other => "Other",
        }
    }

    /// Activities that happen under an open sky and benefit from elevation.
    #[must_use]
    pub const fn is_observation(self) -> bool {
        matches!(self, Self::Stargazing | Self::Photography)
    }

    /// Activities that cover ground on foot and sleep or walk outdoors.
    #[must_use]
    pub const fn is_trail(self) -> bool {
        matches!(self, Self::Hiking | Self::Camping)
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ActivityType {
    type Err = ParseActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == wanted)
            .ok_or_else(|| ParseActivityError(s.to_owned()))
    }
}
