//! Pure-Rust WGS84 ↔ UTM projection (Snyder 1987, USGS formulas).
//!
//! Covers EPSG 326xx (UTM North) and 327xx (UTM South). No external C
//! dependencies (no libproj).

use geo_types::Coord;

use crate::error::{Error, Result};

// ── WGS84 ellipsoid constants ────────────────────────────────────────────

const A: f64 = 6_378_137.0; // semi-major axis (m)
const F: f64 = 1.0 / 298.257_223_563; // flattening
const E2: f64 = 2.0 * F - F * F; // eccentricity squared
const E_PRIME2: f64 = E2 / (1.0 - E2); // second eccentricity squared
const K0: f64 = 0.9996; // UTM scale factor
const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Largest longitude offset from the central meridian the series is used for.
const MAX_MERIDIAN_OFFSET_DEG: f64 = 90.0;

/// A UTM zone (1..=60) and hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtmZone {
    zone: u32,
    north: bool,
}

impl UtmZone {
    /// `None` unless `zone` is in 1..=60.
    pub fn try_new(zone: u32, north: bool) -> Option<Self> {
        (1..=60).contains(&zone).then_some(Self { zone, north })
    }

    /// Caller guarantees `zone` is in 1..=60.
    pub(crate) fn new(zone: u32, north: bool) -> Self {
        debug_assert!((1..=60).contains(&zone), "UTM zone {zone} out of range");
        Self { zone, north }
    }

    pub fn zone(&self) -> u32 {
        self.zone
    }

    pub fn is_north(&self) -> bool {
        self.north
    }

    pub fn epsg(&self) -> u32 {
        if self.north {
            32600 + self.zone
        } else {
            32700 + self.zone
        }
    }

    /// Central meridian of the zone in degrees
    pub fn central_meridian(&self) -> f64 {
        (self.zone as f64 - 1.0) * 6.0 - 180.0 + 3.0
    }
}

/// Parse an EPSG code into a UTM zone.
///
/// - EPSG 326xx → zone xx, North hemisphere
/// - EPSG 327xx → zone xx, South hemisphere
pub fn parse_utm_epsg(epsg: u32) -> Option<UtmZone> {
    if (32601..=32660).contains(&epsg) {
        UtmZone::try_new(epsg - 32600, true)
    } else if (32701..=32760).contains(&epsg) {
        UtmZone::try_new(epsg - 32700, false)
    } else {
        None
    }
}

// ── Forward projection (Snyder 1987, USGS Prof. Paper 1395, pp. 61-64) ──

/// Convert WGS84 (longitude, latitude) in degrees to UTM (easting, northing)
/// in metres.
pub(crate) fn wgs84_to_utm(coord: Coord<f64>, zone: UtmZone) -> Result<Coord<f64>> {
    let (lon_deg, lat_deg) = (coord.x, coord.y);
    if !(lon_deg.is_finite() && lat_deg.is_finite()) || lat_deg.abs() >= 90.0 {
        return Err(Error::Projection(format!(
            "({lon_deg}, {lat_deg}) has no image in EPSG:{}",
            zone.epsg()
        )));
    }

    let offset = wrap_degrees(lon_deg - zone.central_meridian());
    if offset.abs() > MAX_MERIDIAN_OFFSET_DEG {
        return Err(Error::Projection(format!(
            "longitude {lon_deg} is {offset:.1}° from the central meridian of EPSG:{}",
            zone.epsg()
        )));
    }

    let lat = lat_deg.to_radians();
    let dlon = offset.to_radians();

    let sin_lat = lat.sin();
    let cos_lat = lat.cos();
    let tan_lat = lat.tan();

    let n = A / (1.0 - E2 * sin_lat * sin_lat).sqrt();
    let t = tan_lat * tan_lat;
    let c = E_PRIME2 * cos_lat * cos_lat;
    let a_coeff = cos_lat * dlon;

    // Meridional arc length M (Snyder eq. 3-21)
    let m = meridional_arc(lat);

    let a2 = a_coeff * a_coeff;
    let a4 = a2 * a2;
    let a6 = a4 * a2;

    // Easting (Snyder eq. 8-9)
    let easting = K0
        * n
        * (a_coeff
            + (1.0 - t + c) * a2 * a_coeff / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * E_PRIME2) * a4 * a_coeff / 120.0)
        + FALSE_EASTING;

    // Northing (Snyder eq. 8-10)
    let northing = K0
        * (m + n
            * tan_lat
            * (a2 / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * E_PRIME2) * a6 / 720.0));

    let northing = if zone.north {
        northing
    } else {
        northing + FALSE_NORTHING_SOUTH
    };

    finite(Coord { x: easting, y: northing }, zone)
}

// ── Inverse projection (Snyder eqs. 8-12 .. 8-18, 3-24..3-26) ───────────

/// Convert UTM (easting, northing) in metres back to WGS84 (longitude,
/// latitude) in degrees.
pub(crate) fn utm_to_wgs84(coord: Coord<f64>, zone: UtmZone) -> Result<Coord<f64>> {
    if !(coord.x.is_finite() && coord.y.is_finite()) {
        return Err(Error::Projection(format!(
            "non-finite planar coordinate ({}, {}) in EPSG:{}",
            coord.x,
            coord.y,
            zone.epsg()
        )));
    }

    let x = coord.x - FALSE_EASTING;
    let y = if zone.north {
        coord.y
    } else {
        coord.y - FALSE_NORTHING_SOUTH
    };

    let e4 = E2 * E2;
    let e6 = e4 * E2;

    // Footpoint latitude from the rectifying latitude mu
    let m = y / K0;
    let mu = m / (A * (1.0 - E2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0));
    let sqrt_1me2 = (1.0 - E2).sqrt();
    let e1 = (1.0 - sqrt_1me2) / (1.0 + sqrt_1me2);
    let e1_2 = e1 * e1;
    let e1_3 = e1_2 * e1;
    let e1_4 = e1_3 * e1;

    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1_3 / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1_2 / 16.0 - 55.0 * e1_4 / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1_3 / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1_4 / 512.0) * (8.0 * mu).sin();

    let sin_phi1 = phi1.sin();
    let cos_phi1 = phi1.cos();
    let tan_phi1 = phi1.tan();

    let c1 = E_PRIME2 * cos_phi1 * cos_phi1;
    let t1 = tan_phi1 * tan_phi1;
    let w = 1.0 - E2 * sin_phi1 * sin_phi1;
    let n1 = A / w.sqrt();
    let r1 = A * (1.0 - E2) / (w * w.sqrt());
    let d = x / (n1 * K0);

    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d2 * d2;
    let d5 = d4 * d;
    let d6 = d4 * d2;

    let lat = phi1
        - (n1 * tan_phi1 / r1)
            * (d2 / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * E_PRIME2) * d4 / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1
                    - 252.0 * E_PRIME2
                    - 3.0 * c1 * c1)
                    * d6
                    / 720.0);

    let dlon = (d - (1.0 + 2.0 * t1 + c1) * d3 / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * E_PRIME2 + 24.0 * t1 * t1) * d5
            / 120.0)
        / cos_phi1;

    let lon_deg = zone.central_meridian() + dlon.to_degrees();
    let lat_deg = lat.to_degrees();

    let out = finite(Coord { x: lon_deg, y: lat_deg }, zone)?;
    if !(-180.0..=180.0).contains(&out.x) || !(-90.0..=90.0).contains(&out.y) {
        return Err(Error::Projection(format!(
            "({}, {}) in EPSG:{} maps outside the geographic domain",
            coord.x,
            coord.y,
            zone.epsg()
        )));
    }
    Ok(out)
}

/// Meridional arc from equator to latitude `lat` (radians).
/// Snyder eq. 3-21.
fn meridional_arc(lat: f64) -> f64 {
    let e2 = E2;
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    A * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * lat
        - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * lat).sin()
        + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * lat).sin()
        - (35.0 * e6 / 3072.0) * (6.0 * lat).sin())
}

/// Wrap an angle in degrees into [-180, 180).
fn wrap_degrees(deg: f64) -> f64 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

fn finite(c: Coord<f64>, zone: UtmZone) -> Result<Coord<f64>> {
    if c.x.is_finite() && c.y.is_finite() {
        Ok(c)
    } else {
        Err(Error::Projection(format!(
            "transform through EPSG:{} produced a non-finite coordinate",
            zone.epsg()
        )))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
