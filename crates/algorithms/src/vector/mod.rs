//! Vector geometry operations
//!
//! - Repair: single-pass fix of invalid polygons
//! - Reproject: transform every vertex between CRS
//! - Buffer: outward offset of planar polygons
//! - Bounding box / centroid
//! - Area in square kilometres

mod buffer;
mod measurements;
mod repair;
mod reproject;
mod spatial;

pub use buffer::{buffer_polygon, BufferParams};
pub use measurements::{area_sqkm, round_to};
pub use repair::{repair, repair_polygon};
pub use reproject::{reproject, reproject_with};
pub use spatial::{bounding_box, centroid, BoundingBox};
