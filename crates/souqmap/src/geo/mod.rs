//! Geographic positions: coordinate normalization and viewport filtering.

mod coords;
mod viewport;

use serde::{Deserialize, Serialize};

pub use coords::normalize_coords;
pub use viewport::{Located, ViewportState, within_bounds};

/// A validated `(latitude, longitude)` pair.
///
/// Serializes as a `[lat, lng]` array. Deserializing checks the pair is
/// finite and inside global ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", try_from = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn as_pair(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

impl From<Coords> for [f64; 2] {
    fn from(coords: Coords) -> Self {
        coords.as_pair()
    }
}

impl TryFrom<[f64; 2]> for Coords {
    type Error = &'static str;

    fn try_from([lat, lng]: [f64; 2]) -> Result<Self, Self::Error> {
        let coords = Self::new(lat, lng);
        if GeoBounds::GLOBAL.contains(coords) {
            Ok(coords)
        } else {
            Err("coordinates outside global ranges")
        }
    }
}

/// A rectangular latitude/longitude box, inclusive on every edge.
///
/// A box whose `west` edge lies east of its `east` edge spans the
/// antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Every valid position on the globe.
    pub const GLOBAL: Self = Self::new(-90.0, -180.0, 90.0, 180.0);

    /// Plausible positions for Yemeni listings.
    pub const YEMEN: Self = Self::new(12.0, 41.5, 19.5, 54.7);

    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self {
            south,
            west,
            north,
            east,
        }
    }

    pub fn contains_lat(&self, lat: f64) -> bool {
        (self.south..=self.north).contains(&lat)
    }

    pub fn contains_lng(&self, lng: f64) -> bool {
        if self.west <= self.east {
            (self.west..=self.east).contains(&lng)
        } else {
            lng >= self.west || lng <= self.east
        }
    }

    pub fn contains(&self, coords: Coords) -> bool {
        self.contains_lat(coords.lat) && self.contains_lng(coords.lng)
    }

    /// Whether the box is usable as a target region: finite edges inside
    /// global ranges, with `south < north` and `west < east`.
    pub fn is_valid_region(&self) -> bool {
        [self.south, self.west, self.north, self.east]
            .iter()
            .all(|edge| edge.is_finite())
            && Self::GLOBAL.contains(Coords::new(self.south, self.west))
            && Self::GLOBAL.contains(Coords::new(self.north, self.east))
            && self.south < self.north
            && self.west < self.east
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::YEMEN
    }
}
