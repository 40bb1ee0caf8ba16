//! Grid segmentation of a closed AOI
//!
//! The AOI is repaired, projected to the UTM zone of its centroid,
//! optionally buffered, and its envelope is tiled with squares of the
//! requested area. Squares touching the target area are projected back to
//! WGS84 and numbered densely in column-major order.

mod grid;

pub use grid::{GridPlan, MAX_GRID_CELLS};

use geo::{MultiPolygon, Validation};
use tracing::{debug, info, warn};

use aoigrid_core::{select_planar_crs, Algorithm, Error, GridCell, Result, Ring, Transform, CRS};

use crate::vector::{
    bounding_box, buffer_polygon, centroid, repair, repair_polygon, reproject_with, BoundingBox,
    BufferParams,
};

/// Parameters for grid segmentation
#[derive(Debug, Clone)]
pub struct SegmentParams {
    /// Approximate area of one grid cell in km² (must be > 0)
    pub grid_area_sqkm: f64,
    /// Outward buffer applied to the AOI before tiling, in km (>= 0)
    pub buffer_km: f64,
}

impl Default for SegmentParams {
    fn default() -> Self {
        Self {
            grid_area_sqkm: 20.0,
            buffer_km: 0.0,
        }
    }
}

impl SegmentParams {
    fn validate(&self) -> Result<()> {
        if !(self.grid_area_sqkm.is_finite() && self.grid_area_sqkm > 0.0) {
            return Err(Error::invalid_parameter(
                "grid_area_sqkm",
                self.grid_area_sqkm,
                "grid area must be positive",
            ));
        }
        if !(self.buffer_km.is_finite() && self.buffer_km >= 0.0) {
            return Err(Error::invalid_parameter(
                "buffer_km",
                self.buffer_km,
                "buffer must be zero or positive",
            ));
        }
        Ok(())
    }

    /// Side of a square cell in metres
    pub fn side_length_m(&self) -> f64 {
        (self.grid_area_sqkm * 1_000_000.0).sqrt()
    }
}

/// Output of [`segment`]
#[derive(Debug, Clone)]
pub struct SegmentationResult {
    /// Emitted cells, ids 1..=N in enumeration order
    pub cells: Vec<GridCell>,
    /// Retained cells dropped because repair or back-projection failed
    pub skipped_count: usize,
    /// Human readable summary
    pub message: String,
    /// UTM CRS the tiling was done in
    pub crs: CRS,
    /// Planar envelope of the tiled target area
    pub envelope: BoundingBox,
    /// Cell side length in metres
    pub side_length_m: f64,
    /// Grid columns before filtering
    pub columns: usize,
    /// Grid rows before filtering
    pub rows: usize,
}

impl SegmentationResult {
    /// Cells that passed the intersection filter: emitted plus skipped.
    pub fn retained_count(&self) -> usize {
        self.cells.len() + self.skipped_count
    }
}

/// Grid segmentation algorithm
#[derive(Debug, Clone, Default)]
pub struct GridSegmenter;

impl Algorithm for GridSegmenter {
    type Input = Ring;
    type Output = SegmentationResult;
    type Params = SegmentParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Grid Segmentation"
    }

    fn description(&self) -> &'static str {
        "Partition a closed AOI into square cells of approximately fixed area"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        segment_with(&input, &params)
    }
}

/// Segment a closed AOI into square cells of about `grid_area_sqkm`,
/// after expanding it by `buffer_km`.
pub fn segment(ring: &Ring, grid_area_sqkm: f64, buffer_km: f64) -> Result<SegmentationResult> {
    segment_with(
        ring,
        &SegmentParams {
            grid_area_sqkm,
            buffer_km,
        },
    )
}

/// [`segment`] taking a parameter struct.
pub fn segment_with(ring: &Ring, params: &SegmentParams) -> Result<SegmentationResult> {
    params.validate()?;
    if ring.len() < 4 || !ring.is_closed() {
        return Err(Error::InvalidInput(format!(
            "segmentation requires a closed path with at least 4 points (got {} points, closed: {})",
            ring.len(),
            ring.is_closed()
        )));
    }

    let aoi = repair_polygon(ring)?;
    let center = centroid(&aoi).ok_or(Error::EmptyCentroid)?;

    let crs = select_planar_crs(&center);
    let to_planar = Transform::new(&CRS::wgs84(), &crs)?;
    let to_geographic = to_planar.inverse();
    debug!("Projecting AOI centred at {center} to {crs}");

    let planar = reproject_with(&aoi, &to_planar)?;

    let target = if params.buffer_km > 0.0 {
        let buffer = BufferParams::from_km(params.buffer_km);
        info!(
            "Applying buffer of {} km ({} m)",
            params.buffer_km, buffer.distance
        );
        let buffered = buffer_polygon(&planar, &buffer);
        if buffered.0.is_empty() || !buffered.is_valid() {
            return Err(Error::InvalidBuffer {
                buffer_km: params.buffer_km,
            });
        }
        buffered
    } else {
        MultiPolygon::new(vec![planar])
    };

    let envelope = bounding_box(&target)
        .ok_or_else(|| Error::UnrepairableGeometry("target area has no extent".into()))?;
    let plan = GridPlan::new(envelope, params.side_length_m())?;

    let mut cells: Vec<GridCell> = Vec::new();
    let mut skipped_count = 0usize;

    for (index, cell) in plan.intersecting(&target).enumerate() {
        let position = index + 1;

        let cell = match repair(cell) {
            Ok(c) => c,
            Err(e) => {
                warn!("Skipping invalid UTM grid cell {position}: {e}");
                skipped_count += 1;
                continue;
            }
        };

        let boundary = reproject_with(&cell, &to_geographic).and_then(|geo_cell| {
            if geo_cell.is_valid() {
                Ring::from_line_string(geo_cell.exterior())
            } else {
                Err(Error::Projection(
                    "cell is invalid after transformation".into(),
                ))
            }
        });

        match boundary {
            Ok(boundary) => {
                // Running counter: ids stay dense across skipped cells.
                let id = cells.len() as u32 + 1;
                cells.push(GridCell::new(id, boundary));
            }
            Err(e) => {
                warn!("Skipping grid cell {position} on transformation to WGS84: {e}");
                skipped_count += 1;
            }
        }
    }

    let message = summary(cells.len(), skipped_count);
    info!("{message}");

    Ok(SegmentationResult {
        cells,
        skipped_count,
        message,
        crs,
        envelope,
        side_length_m: plan.side(),
        columns: plan.columns(),
        rows: plan.rows(),
    })
}

fn summary(cells: usize, skipped: usize) -> String {
    if skipped > 0 {
        format!("Segmentation complete ({cells} cells). {skipped} invalid cells skipped.")
    } else {
        format!("Segmentation complete ({cells} cells).")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Ring {
        Ring::from_lon_lat(coords).unwrap()
    }

    fn small_square() -> Ring {
        ring(&[
            (10.0, 45.0),
            (10.0, 45.05),
            (10.05, 45.05),
            (10.05, 45.0),
            (10.0, 45.0),
        ])
    }

    #[test]
    fn defaults() {
        let p = SegmentParams::default();
        assert_eq!(p.grid_area_sqkm, 20.0);
        assert_eq!(p.buffer_km, 0.0);
        assert!((p.side_length_m() - 4472.135_955).abs() < 1e-6);
    }

    #[test]
    fn rejects_non_positive_grid_area() {
        for bad in [0.0, -5.0, f64::NAN] {
            assert!(matches!(
                segment(&small_square(), bad, 0.0),
                Err(Error::InvalidParameter { name: "grid_area_sqkm", .. })
            ));
        }
    }

    #[test]
    fn rejects_negative_buffer() {
        assert!(matches!(
            segment(&small_square(), 1.0, -1.0),
            Err(Error::InvalidParameter { name: "buffer_km", .. })
        ));
    }

    #[test]
    fn rejects_open_path() {
        let open = ring(&[(10.0, 45.0), (10.0, 45.05), (10.05, 45.05), (10.05, 45.0)]);
        assert!(matches!(segment(&open, 1.0, 0.0), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn rejects_unrepairable_aoi() {
        let flat = ring(&[(10.0, 45.0), (10.1, 45.0), (10.2, 45.0), (10.0, 45.0)]);
        assert!(matches!(
            segment(&flat, 1.0, 0.0),
            Err(Error::UnrepairableGeometry(_))
        ));
    }

    #[test]
    fn ids_are_dense_and_ordered() {
        let result = segment(&small_square(), 1.0, 0.0).unwrap();
        assert_eq!(result.skipped_count, 0);
        assert!(!result.cells.is_empty());
        for (i, cell) in result.cells.iter().enumerate() {
            assert_eq!(cell.id as usize, i + 1);
            assert!(cell.boundary.is_closed());
            assert_eq!(cell.boundary.len(), 5);
        }
        assert_eq!(result.crs.epsg(), 32632);
        assert_eq!(result.retained_count(), result.cells.len());
        assert!(result.retained_count() <= result.columns * result.rows);
    }

    #[test]
    fn message_reports_counts() {
        let result = segment(&small_square(), 1.0, 0.0).unwrap();
        assert_eq!(
            result.message,
            format!("Segmentation complete ({} cells).", result.cells.len())
        );
        assert_eq!(
            summary(7, 2),
            "Segmentation complete (7 cells). 2 invalid cells skipped."
        );
    }

    #[test]
    fn buffer_expands_envelope_on_every_side() {
        let plain = segment(&small_square(), 1.0, 0.0).unwrap();
        let buffered = segment(&small_square(), 1.0, 0.5).unwrap();
        assert!(buffered.envelope.strictly_contains(&plain.envelope));
        // ~500 m of growth per side, less a little for arc discretisation
        let grow_west = plain.envelope.min_x - buffered.envelope.min_x;
        let grow_north = buffered.envelope.max_y - plain.envelope.max_y;
        assert!((grow_west - 500.0).abs() < 10.0, "west growth {grow_west}");
        assert!((grow_north - 500.0).abs() < 10.0, "north growth {grow_north}");
        assert!(buffered.cells.len() > plain.cells.len());
    }

    #[test]
    fn grid_limit_produces_no_result() {
        // ~4 km square with 1e-4 km² cells (10 m side): ~400 x 550 steps
        let err = segment(&small_square(), 1e-4, 0.0).unwrap_err();
        assert!(matches!(err, Error::GridLimitExceeded { .. }));
    }

    #[test]
    fn algorithm_trait_uses_params() {
        let result = GridSegmenter
            .execute(
                small_square(),
                SegmentParams {
                    grid_area_sqkm: 4.0,
                    buffer_km: 0.0,
                },
            )
            .unwrap();
        assert!((result.side_length_m - 2000.0).abs() < 1e-9);
    }
}
