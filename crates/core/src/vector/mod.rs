//! Vector data model: geographic points, rings and grid cells.
//!
//! Coordinates are WGS84 degrees in longitude-then-latitude order, matching
//! the GeoJSON wire convention.

mod point;
mod ring;

pub use point::GeographicPoint;
pub use ring::{GridCell, Ring};
