//! Buffer operations
//!
//! Expand planar polygons outward by a fixed distance. Corners are rounded,
//! so the result encloses every point within `distance` of the input.

use geo::{Buffer, MultiPolygon, Polygon};

/// Parameters for buffer operations
#[derive(Debug, Clone)]
pub struct BufferParams {
    /// Buffer distance in CRS units (positive = expand, negative = shrink)
    pub distance: f64,
}

impl BufferParams {
    /// Buffer distance given in kilometres, for metre-based CRS
    pub fn from_km(km: f64) -> Self {
        Self {
            distance: km * 1000.0,
        }
    }
}

impl Default for BufferParams {
    fn default() -> Self {
        Self { distance: 0.0 }
    }
}

/// Buffer a polygon.
///
/// The result may be empty (a large negative distance) or contain several
/// parts; validity checks are left to the caller.
pub fn buffer_polygon(polygon: &Polygon<f64>, params: &BufferParams) -> MultiPolygon<f64> {
    polygon.buffer(params.distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, BoundingRect, LineString, Validation};

    fn square(side: f64) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (side, 0.0),
                (side, side),
                (0.0, side),
                (0.0, 0.0),
            ]),
            vec![],
        )
    }

    #[test]
    fn test_buffer_square_area() {
        // 1000 m square buffered by 100 m: a² + 4ad + πd²
        let buffered = buffer_polygon(&square(1000.0), &BufferParams { distance: 100.0 });
        let expected = 1000.0 * 1000.0 + 4.0 * 1000.0 * 100.0 + std::f64::consts::PI * 100.0 * 100.0;
        let actual = buffered.unsigned_area();

        let error = (actual - expected).abs() / expected;
        assert!(
            error < 0.01,
            "Buffer area error {:.2}% (expected {:.1}, got {:.1})",
            error * 100.0,
            expected,
            actual
        );
        assert!(buffered.is_valid());
    }

    #[test]
    fn test_buffer_grows_envelope() {
        let buffered = buffer_polygon(&square(1000.0), &BufferParams::from_km(0.5));
        let rect = buffered.bounding_rect().unwrap();
        assert!((rect.min().x + 500.0).abs() < 1.0);
        assert!((rect.min().y + 500.0).abs() < 1.0);
        assert!((rect.max().x - 1500.0).abs() < 1.0);
        assert!((rect.max().y - 1500.0).abs() < 1.0);
    }

    #[test]
    fn test_buffer_large_negative_is_empty() {
        let shrunk = buffer_polygon(&square(10.0), &BufferParams { distance: -100.0 });
        assert!(shrunk.0.is_empty());
    }

    #[test]
    fn test_from_km() {
        assert_eq!(BufferParams::from_km(2.5).distance, 2500.0);
    }
}
