//! Geometric measurements

use geo::Area;

/// Square metres per square kilometre
const SQM_PER_SQKM: f64 = 1_000_000.0;

/// Unsigned area of a planar geometry in km², rounded to 3 decimals.
///
/// The geometry must be in a metre-based CRS; geographic coordinates would
/// give square degrees.
pub fn area_sqkm<G: Area<f64>>(geom: &G) -> f64 {
    round_to(geom.unsigned_area() / SQM_PER_SQKM, 3)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
