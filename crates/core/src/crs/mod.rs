//! Coordinate Reference System handling
//!
//! Input geometry is always WGS84 (EPSG:4326). Area and distance work happens
//! in the UTM zone picked from a single point of the AOI, see
//! [`select_planar_crs`].

mod transform;
mod utm;

pub use transform::Transform;
pub use utm::{parse_utm_epsg, UtmZone};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vector::GeographicPoint;

/// EPSG code of WGS84 geographic coordinates
pub const WGS84_EPSG: u32 = 4326;

/// Coordinate Reference System identified by its EPSG code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CRS {
    epsg: u32,
}

impl CRS {
    /// Create a CRS from an EPSG code
    pub fn from_epsg(code: u32) -> Self {
        Self { epsg: code }
    }

    /// WGS84 geographic CRS (EPSG:4326)
    pub fn wgs84() -> Self {
        Self::from_epsg(WGS84_EPSG)
    }

    /// UTM zone on the WGS84 datum (EPSG 326zz north, 327zz south)
    pub fn utm(zone: UtmZone) -> Self {
        Self::from_epsg(zone.epsg())
    }

    pub fn epsg(&self) -> u32 {
        self.epsg
    }

    pub fn is_geographic(&self) -> bool {
        self.epsg == WGS84_EPSG
    }

    /// UTM zone if this is a WGS84 UTM CRS
    pub fn utm_zone(&self) -> Option<UtmZone> {
        parse_utm_epsg(self.epsg)
    }

    /// Check if two CRS are equivalent
    pub fn is_equivalent(&self, other: &CRS) -> bool {
        self.epsg == other.epsg
    }

    /// Get a string identifier for this CRS
    pub fn identifier(&self) -> String {
        format!("EPSG:{}", self.epsg)
    }
}

impl fmt::Display for CRS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl Default for CRS {
    fn default() -> Self {
        Self::wgs84()
    }
}

/// Pick the UTM zone CRS that is locally accurate around `point`.
///
/// zone = `floor((lon + 180) / 6) mod 60 + 1`, so lon = 180 wraps to zone 1.
/// Latitude >= 0 selects the northern hemisphere (EPSG 326zz), otherwise the
/// southern one (EPSG 327zz). Range validation happens when the
/// [`GeographicPoint`] is built, so selection itself cannot fail.
pub fn select_planar_crs(point: &GeographicPoint) -> CRS {
    let zone = ((point.lon() + 180.0) / 6.0).floor() as u32 % 60 + 1;
    let north = point.lat() >= 0.0;
    CRS::utm(UtmZone::new(zone, north))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lon: f64, lat: f64) -> GeographicPoint {
        GeographicPoint::new(lon, lat).unwrap()
    }

    #[test]
    fn test_crs_epsg() {
        let crs = CRS::from_epsg(4326);
        assert_eq!(crs.epsg(), 4326);
        assert_eq!(crs.identifier(), "EPSG:4326");
        assert!(crs.is_geographic());
    }

    #[test]
    fn test_crs_equivalence() {
        let a = CRS::from_epsg(4326);
        let b = CRS::wgs84();
        assert!(a.is_equivalent(&b));
        assert!(!a.is_equivalent(&CRS::from_epsg(32631)));
    }

    #[test]
    fn select_madrid() {
        let crs = select_planar_crs(&pt(-3.7037, 40.4168));
        assert_eq!(crs.epsg(), 32630);
        assert_eq!(crs.to_string(), "EPSG:32630");
    }

    #[test]
    fn select_southern_hemisphere() {
        let crs = select_planar_crs(&pt(-58.3816, -34.6037));
        assert_eq!(crs.epsg(), 32721);
    }

    #[test]
    fn equator_is_north() {
        assert_eq!(select_planar_crs(&pt(0.5, 0.0)).epsg(), 32631);
    }

    #[test]
    fn zone_edges() {
        assert_eq!(select_planar_crs(&pt(-180.0, 10.0)).epsg(), 32601);
        assert_eq!(select_planar_crs(&pt(-174.0, 10.0)).epsg(), 32602);
        assert_eq!(select_planar_crs(&pt(179.99, 10.0)).epsg(), 32660);
        // 180 wraps back to zone 1
        assert_eq!(select_planar_crs(&pt(180.0, 10.0)).epsg(), 32601);
    }

    #[test]
    fn selection_is_deterministic() {
        for lon in [-179.5, -91.2, -0.001, 0.0, 33.3, 120.0, 179.0] {
            for lat in [-89.0, -12.5, 0.0, 45.0, 89.9] {
                let p = pt(lon, lat);
                let a = select_planar_crs(&p);
                let b = select_planar_crs(&p);
                assert_eq!(a, b);
                assert!(a.utm_zone().is_some());
            }
        }
    }
}
