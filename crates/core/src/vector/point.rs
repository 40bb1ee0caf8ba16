//! WGS84 geographic point

use geo_types::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Valid longitude range in degrees
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Valid latitude range in degrees
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// A WGS84 position in degrees.
///
/// Both components are finite and inside the valid range; the only way to
/// build one is through [`GeographicPoint::new`], which rejects anything else
/// with [`Error::InvalidCoordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPoint")]
pub struct GeographicPoint {
    lon: f64,
    lat: f64,
}

impl GeographicPoint {
    /// Create a validated point from longitude and latitude in degrees.
    pub fn new(lon: f64, lat: f64) -> Result<Self> {
        let lon_ok = lon.is_finite() && (MIN_LON..=MAX_LON).contains(&lon);
        let lat_ok = lat.is_finite() && (MIN_LAT..=MAX_LAT).contains(&lat);
        if !(lon_ok && lat_ok) {
            return Err(Error::InvalidCoordinate { lon, lat });
        }
        Ok(Self { lon, lat })
    }

    /// Validate a geo coordinate interpreted as (lon, lat).
    pub fn from_coord(coord: Coord<f64>) -> Result<Self> {
        Self::new(coord.x, coord.y)
    }

    #[inline]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    #[inline]
    pub fn to_coord(self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

/// Unvalidated wire form; deserialization goes through [`GeographicPoint::new`].
#[derive(Deserialize)]
struct RawPoint {
    lon: f64,
    lat: f64,
}

impl TryFrom<RawPoint> for GeographicPoint {
    type Error = Error;

    fn try_from(raw: RawPoint) -> Result<Self> {
        Self::new(raw.lon, raw.lat)
    }
}

impl From<GeographicPoint> for Coord<f64> {
    fn from(p: GeographicPoint) -> Self {
        p.to_coord()
    }
}

impl fmt::Display for GeographicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}
