//! Regular square tiling of a planar envelope

use geo::{Intersects, MultiPolygon, Polygon};

use aoigrid_core::{Error, Result};

use crate::vector::BoundingBox;

/// Upper bound on columns × rows before any cell is generated
pub const MAX_GRID_CELLS: u64 = 10_000;

/// A tiling of an envelope with squares of a fixed side length.
///
/// The grid is anchored at the envelope's lower-left corner. Column `i`
/// starts at `min_x + i * side` and exists while that origin is `< max_x`;
/// rows likewise in y. Edge cells may extend past the envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPlan {
    envelope: BoundingBox,
    side: f64,
    columns: usize,
    rows: usize,
}

impl GridPlan {
    /// Plan the tiling, rejecting grids larger than [`MAX_GRID_CELLS`].
    pub fn new(envelope: BoundingBox, side: f64) -> Result<Self> {
        if !(side.is_finite() && side > 0.0) {
            return Err(Error::invalid_parameter(
                "side_length_m",
                side,
                "must be a positive finite length",
            ));
        }

        let columns = steps(envelope.width(), side);
        let rows = steps(envelope.height(), side);
        if columns * rows > MAX_GRID_CELLS as f64 {
            tracing::warn!(
                "Grid of {columns} x {rows} cells exceeds the limit of {MAX_GRID_CELLS}"
            );
            return Err(Error::GridLimitExceeded {
                columns: columns as u64,
                rows: rows as u64,
                limit: MAX_GRID_CELLS,
            });
        }

        Ok(Self {
            envelope,
            side,
            columns: columns as usize,
            rows: rows as usize,
        })
    }

    pub fn envelope(&self) -> BoundingBox {
        self.envelope
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of candidate cells before the intersection filter
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The square at (`column`, `row`)
    pub fn cell(&self, column: usize, row: usize) -> Polygon<f64> {
        let x = self.envelope.min_x + column as f64 * self.side;
        let y = self.envelope.min_y + row as f64 * self.side;
        BoundingBox::new(x, y, x + self.side, y + self.side).to_polygon()
    }

    /// All candidate cells in column-major order: for each column, every row
    /// from bottom to top.
    pub fn cells(&self) -> impl Iterator<Item = Polygon<f64>> + '_ {
        (0..self.columns).flat_map(move |col| (0..self.rows).map(move |row| self.cell(col, row)))
    }

    /// Candidate cells that intersect `target`, boundary contact included.
    ///
    /// Cells are not clipped: a kept cell is the full square even where it
    /// overhangs the target outline.
    pub fn intersecting<'a>(
        &'a self,
        target: &'a MultiPolygon<f64>,
    ) -> impl Iterator<Item = Polygon<f64>> + 'a {
        self.cells().filter(move |cell| target.intersects(cell))
    }
}

/// Count of origins `i * side` strictly below `extent`.
fn steps(extent: f64, side: f64) -> f64 {
    if extent > 0.0 {
        (extent / side).ceil()
    } else {
        0.0
    }
}
