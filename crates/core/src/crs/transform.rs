//! Coordinate transforms between WGS84 and WGS84 UTM zones

use geo_types::Coord;

use super::utm::{utm_to_wgs84, wgs84_to_utm, UtmZone};
use super::CRS;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operation {
    Identity,
    Forward(UtmZone),
    Inverse(UtmZone),
}

/// A prepared transform from one CRS to another.
///
/// Coordinates are always (x, y): (lon, lat) in degrees for WGS84 and
/// (easting, northing) in metres for UTM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    from: CRS,
    to: CRS,
    op: Operation,
}

impl Transform {
    /// Prepare a transform. Only WGS84 ↔ UTM and same-CRS pairs are supported.
    pub fn new(from: &CRS, to: &CRS) -> Result<Self> {
        let op = if from.is_equivalent(to) {
            Operation::Identity
        } else if from.is_geographic() {
            Operation::Forward(to.utm_zone().ok_or_else(|| unsupported(from, to))?)
        } else if to.is_geographic() {
            Operation::Inverse(from.utm_zone().ok_or_else(|| unsupported(from, to))?)
        } else {
            return Err(unsupported(from, to));
        };
        Ok(Self {
            from: *from,
            to: *to,
            op,
        })
    }

    pub fn source(&self) -> CRS {
        self.from
    }

    pub fn target(&self) -> CRS {
        self.to
    }

    /// Transform one coordinate
    pub fn apply(&self, coord: Coord<f64>) -> Result<Coord<f64>> {
        match self.op {
            Operation::Identity => Ok(coord),
            Operation::Forward(zone) => wgs84_to_utm(coord, zone),
            Operation::Inverse(zone) => utm_to_wgs84(coord, zone),
        }
    }

    /// The transform in the opposite direction
    pub fn inverse(&self) -> Self {
        let op = match self.op {
            Operation::Identity => Operation::Identity,
            Operation::Forward(zone) => Operation::Inverse(zone),
            Operation::Inverse(zone) => Operation::Forward(zone),
        };
        Self {
            from: self.to,
            to: self.from,
            op,
        }
    }
}

fn unsupported(from: &CRS, to: &CRS) -> Error {
    Error::Projection(format!("unsupported transform {from} -> {to}"))
}
