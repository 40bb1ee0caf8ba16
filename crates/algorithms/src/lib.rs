//! # AOIGrid Algorithms
//!
//! Geometry pipeline for areas of interest drawn on a map.
//!
//! ## Available Algorithm Categories
//!
//! - **vector**: Repair, reprojection, buffer, bounding box, centroid, area
//! - **stats**: Point count, closure, centroid and area of a drawn path
//! - **segmentation**: Tiling a closed AOI into fixed-area square cells

pub mod segmentation;
pub mod stats;
pub mod vector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::segmentation::{
        segment, segment_with, GridPlan, GridSegmenter, SegmentParams, SegmentationResult,
        MAX_GRID_CELLS,
    };
    pub use crate::stats::{compute_stats, AoiStatistics, AoiStats, AreaStatus, StatsReport};
    pub use crate::vector::{repair_polygon, reproject, BoundingBox};
    pub use aoigrid_core::prelude::*;
}
