//! Geometry reprojection
//!
//! Every vertex of every ring is pushed through a [`Transform`]. Vertex
//! count, order and ring structure are untouched, and since identical input
//! coordinates map to identical outputs a closed ring stays closed.

use geo::MapCoords;

use aoigrid_core::{Result, Transform, CRS};

/// Reproject `geometry` from `from` to `to`.
///
/// Fails with a projection error if the pair is unsupported or any single
/// coordinate has no image in the target CRS.
pub fn reproject<G>(geometry: &G, from: &CRS, to: &CRS) -> Result<G::Output>
where
    G: MapCoords<f64, f64>,
{
    let transform = Transform::new(from, to)?;
    reproject_with(geometry, &transform)
}

/// Reproject with an already prepared transform.
pub fn reproject_with<G>(geometry: &G, transform: &Transform) -> Result<G::Output>
where
    G: MapCoords<f64, f64>,
{
    geometry.try_map_coords(|coord| transform.apply(coord))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoigrid_core::Error;
    use geo::{LineString, Polygon};

    fn geographic_square() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (0.0, 1.0),
                (1.0, 1.0),
                (1.0, 0.0),
                (0.0, 0.0),
            ]),
            vec![],
        )
    }

    #[test]
    fn preserves_structure_and_closure() {
        let utm = CRS::from_epsg(32631);
        let planar = reproject(&geographic_square(), &CRS::wgs84(), &utm).unwrap();
        let ext = planar.exterior();
        assert_eq!(ext.0.len(), 5);
        assert_eq!(ext.0.first(), ext.0.last());
        // Metres, not degrees
        assert!(ext.0[2].x > 100_000.0);
        assert!(ext.0[2].y > 100_000.0);
    }

    #[test]
    fn round_trip_within_tolerance() {
        let original = geographic_square();
        let utm = CRS::from_epsg(32631);
        let planar = reproject(&original, &CRS::wgs84(), &utm).unwrap();
        let back = reproject(&planar, &utm, &CRS::wgs84()).unwrap();

        for (a, b) in original.exterior().0.iter().zip(back.exterior().0.iter()) {
            assert!((a.x - b.x).abs() < 1e-6, "lon {} vs {}", a.x, b.x);
            assert!((a.y - b.y).abs() < 1e-6, "lat {} vs {}", a.y, b.y);
        }
    }

    #[test]
    fn round_trip_with_hole() {
        let poly = Polygon::new(
            LineString::from(vec![(10.0, 45.0), (11.0, 45.0), (11.0, 46.0), (10.0, 45.0)]),
            vec![LineString::from(vec![
                (10.6, 45.2),
                (10.8, 45.2),
                (10.8, 45.4),
                (10.6, 45.2),
            ])],
        );
        let utm = CRS::from_epsg(32632);
        let planar = reproject(&poly, &CRS::wgs84(), &utm).unwrap();
        assert_eq!(planar.interiors().len(), 1);
        assert_eq!(planar.interiors()[0].0.len(), 4);

        let back = reproject(&planar, &utm, &CRS::wgs84()).unwrap();
        let (a, b) = (poly.interiors()[0].0[1], back.interiors()[0].0[1]);
        assert!((a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6);
    }

    #[test]
    fn single_bad_coordinate_fails_whole_geometry() {
        let line = LineString::from(vec![(0.0, 0.0), (0.0, 90.0)]);
        let err = reproject(&line, &CRS::wgs84(), &CRS::from_epsg(32631)).unwrap_err();
        assert!(matches!(err, Error::Projection(_)));
    }
}
