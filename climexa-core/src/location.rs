//! Locations visitors can plan activities at.

use serde::{Deserialize, Serialize};

use crate::Terrain;

/// A place stored by the persistence collaborator.
///
/// # Examples
///
/// ```
/// use climexa_core::{Location, Terrain};
///
/// let location = Location::new("loc-1", "Cerro Negro", Terrain::Mountain)
///     .with_elevation(3800.0);
/// assert!(location.elevation_above(3500.0));
/// assert!(!location.elevation_above(4000.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: f64,
    /// Elevation in metres, when surveyed.
    #[serde(default)]
    pub elevation: Option<f64>,
    /// Terrain category.
    #[serde(rename = "terrain_type")]
    pub terrain: Terrain,
    /// Reference to a cover image.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Location {
    /// Construct a location with only the attributes scoring depends on.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, terrain: Terrain) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            latitude: 0.0,
            longitude: 0.0,
            elevation: None,
            terrain,
            image_url: None,
        }
    }

    /// Set the elevation while returning `self` for chaining.
    #[must_use]
    pub fn with_elevation(mut self, metres: f64) -> Self {
        self.elevation = Some(metres);
        self
    }

    /// Set the coordinates while returning `self` for chaining.
    #[must_use]
    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Report whether a surveyed elevation exceeds `metres`.
    ///
    /// Locations without an elevation never exceed any threshold.
    #[must_use]
    pub fn elevation_above(&self, metres: f64) -> bool {
        self.elevation.is_some_and(|elevation| elevation > metres)
    }
}
