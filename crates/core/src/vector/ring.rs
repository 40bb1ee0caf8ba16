//! Ordered coordinate paths and the grid cells built from them

use geo_types::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

use super::point::GeographicPoint;
use crate::error::Result;

/// An ordered path of geographic points.
///
/// An open path has at least two points. A closed path (polygon boundary)
/// has at least four points with the first equal to the last. Construction
/// only validates coordinates; length requirements belong to the operation
/// consuming the ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring(Vec<GeographicPoint>);

impl Ring {
    pub fn new(points: Vec<GeographicPoint>) -> Self {
        Self(points)
    }

    /// Build a ring from raw `(lon, lat)` pairs, validating every position.
    pub fn from_lon_lat(pairs: &[(f64, f64)]) -> Result<Self> {
        pairs
            .iter()
            .map(|&(lon, lat)| GeographicPoint::new(lon, lat))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Build a ring from a geo line string whose coordinates are (lon, lat).
    pub fn from_line_string(ls: &LineString<f64>) -> Result<Self> {
        ls.0.iter()
            .map(|&c| GeographicPoint::from_coord(c))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn points(&self) -> &[GeographicPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the first and last vertices are exactly equal.
    ///
    /// No tolerance is applied: a path drawn back onto its start point by a
    /// client that snaps to the first vertex compares equal, anything else
    /// is treated as open.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) if self.0.len() > 1 => first == last,
            _ => false,
        }
    }

    /// Midpoint of the axis-aligned bounding box of the path.
    pub fn bbox_center(&self) -> Option<GeographicPoint> {
        let first = self.0.first()?;
        let (mut min_lon, mut min_lat) = (first.lon(), first.lat());
        let (mut max_lon, mut max_lat) = (min_lon, min_lat);
        for p in &self.0[1..] {
            min_lon = min_lon.min(p.lon());
            max_lon = max_lon.max(p.lon());
            min_lat = min_lat.min(p.lat());
            max_lat = max_lat.max(p.lat());
        }
        // Midpoint of two in-range values is in range.
        GeographicPoint::new((min_lon + max_lon) / 2.0, (min_lat + max_lat) / 2.0).ok()
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::new(self.0.iter().map(|p| p.to_coord()).collect::<Vec<Coord<f64>>>())
    }

    /// Polygon with this ring as its exterior and no holes.
    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(self.to_line_string(), vec![])
    }
}

impl From<Vec<GeographicPoint>> for Ring {
    fn from(points: Vec<GeographicPoint>) -> Self {
        Self(points)
    }
}

/// One square tile of a segmentation grid, in geographic coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Dense 1-based identifier, in enumeration order
    pub id: u32,
    /// Closed boundary ring
    pub boundary: Ring,
}

impl GridCell {
    pub fn new(id: u32, boundary: Ring) -> Self {
        Self { id, boundary }
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        self.boundary.to_polygon()
    }
}
