//! Polygon validation and repair
//!
//! An invalid polygon (self-intersecting ring, spikes, collinear collapse)
//! gets exactly one repair attempt: a self-overlay with the empty set, which
//! rebuilds the boundary from its arrangement the way a zero-distance buffer
//! does. Whatever is still invalid or empty after that pass is rejected.

use geo::{Area, BooleanOps, MultiPolygon, Polygon, Validation};
use tracing::{debug, warn};

use aoigrid_core::{Error, Result, Ring};

/// Build a polygon from a closed ring, repairing it once if invalid.
pub fn repair_polygon(ring: &Ring) -> Result<Polygon<f64>> {
    repair(ring.to_polygon())
}

/// Return `polygon` unchanged if valid, otherwise the result of one repair
/// pass.
///
/// When the pass splits the polygon into several parts the largest one is
/// kept, since only single-polygon areas are supported downstream.
pub fn repair(polygon: Polygon<f64>) -> Result<Polygon<f64>> {
    if polygon.is_valid() {
        return Ok(polygon);
    }

    let repaired = MultiPolygon::new(vec![polygon]).union(&MultiPolygon::new(vec![]));
    let parts = repaired.0.len();

    let fixed = repaired
        .0
        .into_iter()
        .max_by(|a, b| a.unsigned_area().total_cmp(&b.unsigned_area()))
        .ok_or_else(|| Error::UnrepairableGeometry("repair produced an empty polygon".into()))?;

    if parts > 1 {
        warn!("Repair split the polygon into {parts} parts, keeping the largest");
    }

    if !fixed.is_valid() || fixed.unsigned_area() == 0.0 {
        return Err(Error::UnrepairableGeometry(
            "polygon is still invalid after repair".into(),
        ));
    }

    debug!("Invalid polygon fixed by a single repair pass");
    Ok(fixed)
}
