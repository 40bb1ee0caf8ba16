//! I/O for the GeoJSON wire format
//!
//! - Input: a drawn path as a GeoJSON `Feature`, `FeatureCollection` or bare
//!   geometry with `LineString` or `Polygon` type.
//! - Output: segmentation cells as a `FeatureCollection` of polygons carrying
//!   an integer `grid_id` property, optionally written to a directory.

mod geojson_io;

pub use geojson_io::{
    cells_to_feature_collection, parse_ring, read_ring, ring_from_geojson,
    write_feature_collection, GRID_ID_PROPERTY,
};
