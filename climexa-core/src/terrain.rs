//! Terrain categories attached to a [`Location`](crate::Location).
//!
//! The persistence layer stores terrain as free-form text. Only four values
//! are recognised and matching is case-sensitive; everything else lands in
//! [`Terrain::Other`] with the raw text preserved.
//!
//! # Examples
//! ```
//! use climexa_core::Terrain;
//!
//! assert_eq!(Terrain::from("desert"), Terrain::Desert);
//! assert_eq!(Terrain::from("Desert"), Terrain::Other("Desert".into()));
//! assert_eq!(Terrain::Canyon.as_str(), "canyon");
//! ```

use serde::{Deserialize, Serialize};

/// Terrain category of a location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Terrain {
    /// Mountain terrain.
    Mountain,
    /// Scenic viewpoint.
    Viewpoint,
    /// Desert terrain.
    Desert,
    /// Canyon terrain.
    Canyon,
    /// Any unrecognised terrain string.
    Other(String),
}

impl Terrain {
    /// Return the wire representation of the terrain.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mountain => "mountain",
            Self::Viewpoint => "viewpoint",
            Self::Desert => "desert",
            Self::Canyon => "canyon",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Report whether the terrain offers an elevated observation point.
    #[must_use]
    pub const fn is_elevated_outlook(&self) -> bool {
        matches!(self, Self::Mountain | Self::Viewpoint)
    }

    /// Report whether the terrain suits hiking and camping.
    #[must_use]
    pub const fn is_trail_terrain(&self) -> bool {
        matches!(self, Self::Mountain | Self::Canyon)
    }
}

impl From<&str> for Terrain {
    fn from(raw: &str) -> Self {
        match raw {
            "mountain" => Self::Mountain,
            "viewpoint" => Self::Viewpoint,
            "desert" => Self::Desert,
            "canyon" => Self::Canyon,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Terrain {
    fn from(raw: String) -> Self {
        match Self::from(raw.as_str()) {
            Self::Other(_) => Self::Other(raw),
            known => known,
        }
    }
}

impl From<Terrain> for String {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
