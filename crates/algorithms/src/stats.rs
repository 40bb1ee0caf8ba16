//! AOI statistics
//!
//! Point count, closure, centroid and planar area of a drawn path. The area
//! branch never aborts the computation: if repair, centroid or projection
//! fails the area degrades to 0 and the cause is reported through
//! [`AreaStatus::Unavailable`].

use serde::Serialize;
use tracing::warn;

use aoigrid_core::{select_planar_crs, Algorithm, Error, GeographicPoint, Result, Ring, CRS};

use crate::vector::{area_sqkm, centroid, repair_polygon, reproject};

/// Descriptive statistics of a drawn path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AoiStats {
    #[serde(rename = "num_points")]
    pub point_count: usize,
    pub area_sqkm: f64,
    pub is_closed: bool,
    pub centroid: Option<GeographicPoint>,
}

/// How the area field of [`AoiStats`] was obtained
#[derive(Debug)]
pub enum AreaStatus {
    /// Planar area measured in the given UTM CRS
    Measured { crs: CRS },
    /// Open path, or closed path with fewer than 4 points; area is 0
    NotApplicable,
    /// Closed path whose area could not be computed; reported as 0
    Unavailable(Error),
}

/// Statistics plus the outcome of the area computation
#[derive(Debug)]
pub struct StatsReport {
    pub stats: AoiStats,
    pub area: AreaStatus,
}

impl StatsReport {
    /// True when every field was computed (no degraded area)
    pub fn is_complete(&self) -> bool {
        !matches!(self.area, AreaStatus::Unavailable(_))
    }
}

/// AOI statistics algorithm
#[derive(Debug, Clone, Default)]
pub struct AoiStatistics;

impl Algorithm for AoiStatistics {
    type Input = Ring;
    type Output = StatsReport;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "AOI Statistics"
    }

    fn description(&self) -> &'static str {
        "Point count, closure, centroid and UTM-projected area of a drawn path"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        compute_stats(&input)
    }
}

/// Compute statistics for a drawn path.
///
/// - Closed path with at least 4 points: the polygon is repaired if needed,
///   its centroid selects a UTM zone and the area is measured there, in km²
///   rounded to 3 decimals.
/// - Open path: the centroid is the midpoint of the path's bounding box and
///   the area is 0.
/// - Closed path too short to be a polygon: no centroid, area 0.
///
/// Fails only when the path has fewer than 2 points.
pub fn compute_stats(ring: &Ring) -> Result<StatsReport> {
    let point_count = ring.len();
    if point_count < 2 {
        return Err(Error::InvalidInput(format!(
            "a path requires at least 2 points, got {point_count}"
        )));
    }
    let is_closed = ring.is_closed();

    if is_closed && point_count >= 4 {
        let (centroid, measured) = measure_polygon(ring);
        let (area_sqkm, area) = match measured {
            Ok((value, crs)) => (value, AreaStatus::Measured { crs }),
            Err(e) => {
                warn!("Area unavailable for closed AOI, reporting 0: {e}");
                (0.0, AreaStatus::Unavailable(e))
            }
        };
        return Ok(StatsReport {
            stats: AoiStats {
                point_count,
                area_sqkm,
                is_closed,
                centroid,
            },
            area,
        });
    }

    let centroid = if is_closed { None } else { ring.bbox_center() };
    Ok(StatsReport {
        stats: AoiStats {
            point_count,
            area_sqkm: 0.0,
            is_closed,
            centroid,
        },
        area: AreaStatus::NotApplicable,
    })
}

/// Centroid (when computable) and the measured area with its CRS.
fn measure_polygon(ring: &Ring) -> (Option<GeographicPoint>, Result<(f64, CRS)>) {
    let polygon = match repair_polygon(ring) {
        Ok(p) => p,
        Err(e) => return (None, Err(e)),
    };
    let Some(center) = centroid(&polygon) else {
        return (None, Err(Error::EmptyCentroid));
    };

    let crs = select_planar_crs(&center);
    let area = reproject(&polygon, &CRS::wgs84(), &crs).map(|planar| (area_sqkm(&planar), crs));
    (Some(center), area)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        Ring::from_lon_lat(coords).unwrap()
    }

    #[test]
    fn too_few_points_rejected() {
        let err = compute_stats(&ring(&[(1.0, 1.0)])).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn open_segment_uses_bbox_midpoint() {
        let report = compute_stats(&ring(&[(10.0, 50.0), (12.0, 51.0)])).unwrap();
        assert_eq!(report.stats.point_count, 2);
        assert!(!report.stats.is_closed);
        assert_eq!(report.stats.area_sqkm, 0.0);
        let c = report.stats.centroid.unwrap();
        assert_eq!((c.lon(), c.lat()), (11.0, 50.5));
        assert!(matches!(report.area, AreaStatus::NotApplicable));
        assert!(report.is_complete());
    }

    #[test]
    fn closed_triangle_path_of_three_points_is_not_a_polygon() {
        // first == last but only 3 points: neither a polygon nor an open path
        let report = compute_stats(&ring(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)])).unwrap();
        assert!(report.stats.is_closed);
        assert_eq!(report.stats.area_sqkm, 0.0);
        assert!(matches!(report.area, AreaStatus::NotApplicable));
        assert!(report.stats.centroid.is_none());

        let json = serde_json::to_value(&report.stats).unwrap();
        assert!(json["centroid"].is_null());
    }

    #[test]
    fn closed_square_area_near_equator() {
        // 0.1° square at the equator: ~11.132 km × ~11.057 km
        let report = compute_stats(&ring(&[
            (0.0, 0.0),
            (0.0, 0.1),
            (0.1, 0.1),
            (0.1, 0.0),
            (0.0, 0.0),
        ]))
        .unwrap();

        let expected = 111.319_49 * 0.1 * 110.574 * 0.1;
        let area = report.stats.area_sqkm;
        assert!(
            (area - expected).abs() / expected < 0.01,
            "area {area} vs expected {expected}"
        );
        match report.area {
            AreaStatus::Measured { crs } => assert_eq!(crs.epsg(), 32631),
            other => panic!("expected measured area, got {other:?}"),
        }
        let c = report.stats.centroid.unwrap();
        assert!((c.lon() - 0.05).abs() < 1e-9);
        assert!((c.lat() - 0.05).abs() < 1e-9);
    }

    #[test]
    fn area_is_rounded_to_three_decimals() {
        let report = compute_stats(&ring(&[
            (0.0, 0.0),
            (0.0, 0.1),
            (0.1, 0.1),
            (0.1, 0.0),
            (0.0, 0.0),
        ]))
        .unwrap();
        let scaled = report.stats.area_sqkm * 1000.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn unrepairable_polygon_degrades_to_zero_area() {
        let report =
            compute_stats(&ring(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (0.0, 0.0)])).unwrap();
        assert_eq!(report.stats.point_count, 4);
        assert!(report.stats.is_closed);
        assert_eq!(report.stats.area_sqkm, 0.0);
        assert!(report.stats.centroid.is_none());
        assert!(matches!(
            report.area,
            AreaStatus::Unavailable(Error::UnrepairableGeometry(_))
        ));
        assert!(!report.is_complete());
    }

    #[test]
    fn polar_projection_failure_keeps_centroid() {
        // Touches the pole: the centroid exists but the vertex at lat 90 has
        // no UTM image, so the area degrades.
        let report = compute_stats(&ring(&[
            (0.0, 88.0),
            (10.0, 88.0),
            (5.0, 90.0),
            (0.0, 88.0),
        ]))
        .unwrap();
        assert_eq!(report.stats.area_sqkm, 0.0);
        assert!(report.stats.centroid.is_some());
        assert!(matches!(
            report.area,
            AreaStatus::Unavailable(Error::Projection(_))
        ));
    }

    #[test]
    fn stats_serialize_with_wire_names() {
        let report = compute_stats(&ring(&[(10.0, 50.0), (12.0, 51.0)])).unwrap();
        let json = serde_json::to_value(&report.stats).unwrap();
        assert_eq!(json["num_points"], 2);
        assert_eq!(json["is_closed"], false);
        assert_eq!(json["centroid"]["lon"], 11.0);
        assert_eq!(json["centroid"]["lat"], 50.5);
    }

    #[test]
    fn algorithm_trait_matches_free_function() {
        let input = ring(&[(10.0, 50.0), (12.0, 51.0)]);
        let via_trait = AoiStatistics.execute_default(input.clone()).unwrap();
        let direct = compute_stats(&input).unwrap();
        assert_eq!(via_trait.stats, direct.stats);
    }
}
