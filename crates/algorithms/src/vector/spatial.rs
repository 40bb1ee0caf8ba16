//! Spatial helpers: bounding box and centroid

use geo::{BoundingRect, Centroid as GeoCentroid, LineString, Polygon, Rect};

use aoigrid_core::GeographicPoint;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when `other` lies strictly inside `self` on all four sides.
    pub fn strictly_contains(&self, other: &BoundingBox) -> bool {
        self.min_x < other.min_x
            && self.min_y < other.min_y
            && self.max_x > other.max_x
            && self.max_y > other.max_y
    }

    pub fn to_polygon(&self) -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (self.min_x, self.min_y),
                (self.max_x, self.min_y),
                (self.max_x, self.max_y),
                (self.min_x, self.max_y),
                (self.min_x, self.min_y),
            ]),
            vec![],
        )
    }
}

impl From<Rect<f64>> for BoundingBox {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            min_x: rect.min().x,
            min_y: rect.min().y,
            max_x: rect.max().x,
            max_y: rect.max().y,
        }
    }
}

/// Compute the bounding box of a geometry, `None` if it is empty
pub fn bounding_box<G>(geom: &G) -> Option<BoundingBox>
where
    G: BoundingRect<f64, Output = Option<Rect<f64>>>,
{
    geom.bounding_rect().map(BoundingBox::from)
}

/// Area-weighted centroid of a geographic polygon.
///
/// `None` when the polygon is empty or the centroid falls outside the valid
/// longitude/latitude range.
pub fn centroid(polygon: &Polygon<f64>) -> Option<GeographicPoint> {
    let c = polygon.centroid()?;
    GeographicPoint::new(c.x(), c.y()).ok()
}
