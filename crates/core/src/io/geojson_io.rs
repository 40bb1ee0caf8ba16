//! GeoJSON reading and writing

use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::vector::{GeographicPoint, GridCell, Ring};

/// Feature property holding the cell identifier
pub const GRID_ID_PROPERTY: &str = "grid_id";

/// Parse a GeoJSON document into the ring of the drawn path.
pub fn parse_ring(text: &str) -> Result<Ring> {
    let geojson: GeoJson = text
        .parse()
        .map_err(|e| Error::InvalidInput(format!("invalid GeoJSON: {e}")))?;
    ring_from_geojson(geojson)
}

/// Read a GeoJSON file and extract the ring of the drawn path.
pub fn read_ring(path: &Path) -> Result<Ring> {
    let text = fs::read_to_string(path)?;
    parse_ring(&text)
}

/// Extract the drawn path from a parsed GeoJSON document.
///
/// A `FeatureCollection` contributes its first feature. `LineString`
/// geometries are taken as-is; for a `Polygon` the exterior ring is used.
pub fn ring_from_geojson(geojson: GeoJson) -> Result<Ring> {
    let geometry = match geojson {
        GeoJson::FeatureCollection(fc) => {
            let feature = fc
                .features
                .into_iter()
                .next()
                .ok_or_else(|| Error::InvalidInput("FeatureCollection has no features".into()))?;
            feature_geometry(feature)?
        }
        GeoJson::Feature(feature) => feature_geometry(feature)?,
        GeoJson::Geometry(geometry) => geometry,
    };

    let positions = match geometry.value {
        Value::LineString(positions) => positions,
        Value::Polygon(rings) => rings
            .into_iter()
            .next()
            .ok_or_else(|| Error::InvalidInput("Polygon has no exterior ring".into()))?,
        other => {
            return Err(Error::InvalidInput(format!(
                "geometry must be a LineString or Polygon, got {}",
                value_type(&other)
            )))
        }
    };

    positions
        .iter()
        .map(|pos| match pos.as_slice() {
            [lon, lat, ..] => GeographicPoint::new(*lon, *lat),
            _ => Err(Error::InvalidInput(format!(
                "position needs [lon, lat], got {pos:?}"
            ))),
        })
        .collect::<Result<Vec<_>>>()
        .map(Ring::new)
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn feature_geometry(feature: Feature) -> Result<Geometry> {
    feature
        .geometry
        .ok_or_else(|| Error::InvalidInput("Feature has no geometry".into()))
}

/// Encode grid cells as a FeatureCollection with a `grid_id` on each feature.
pub fn cells_to_feature_collection(cells: &[GridCell]) -> FeatureCollection {
    let features = cells
        .iter()
        .map(|cell| {
            let ring: Vec<Vec<f64>> = cell
                .boundary
                .points()
                .iter()
                .map(|p| vec![p.lon(), p.lat()])
                .collect();

            let mut properties = JsonObject::new();
            properties.insert(GRID_ID_PROPERTY.to_string(), cell.id.into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Write a FeatureCollection as a standalone, pretty-printed GeoJSON file.
///
/// The file is named `segmented_aoi_<8 hex chars>.geojson` and placed in
/// `dir`, which is created if missing. Returns the full path written.
pub fn write_feature_collection(fc: &FeatureCollection, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let id = Uuid::new_v4().simple().to_string();
    let path = dir.join(format!("segmented_aoi_{}.geojson", &id[..8]));

    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(&mut writer, fc)?;
    writer.flush()?;

    tracing::info!(
        "Segmented GeoJSON with {} cells saved to: {}",
        fc.features.len(),
        path.display()
    );
    Ok(path)
}
