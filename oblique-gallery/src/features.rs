//! Land polygons read from GeoJSON.
//!
//! Only the exterior ring of each polygon is kept. `FeatureCollection`,
//! `Feature`, `GeometryCollection`, `Polygon` and `MultiPolygon` objects are
//! understood; other geometry types are skipped.

use std::fs;
use std::path::Path;

use oblique_proj::GeoCoord;
use serde_json::Value;

use crate::error::{GalleryError, GalleryResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureLayer {
    pub polygons: Vec<Vec<GeoCoord>>,
}

impl FeatureLayer {
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }
}

pub fn load_features(path: &Path) -> GalleryResult<FeatureLayer> {
    let text = fs::read_to_string(path).map_err(|e| GalleryError::io(path, e))?;
    let value: Value = serde_json::from_str(&text).map_err(|e| GalleryError::json(path, e))?;
    let layer = parse_geojson(&value).map_err(|message| GalleryError::features(path, message))?;
    tracing::debug!(path = %path.display(), polygons = layer.len(), "loaded features");
    Ok(layer)
}

pub fn parse_geojson(value: &Value) -> Result<FeatureLayer, String> {
    let mut layer = FeatureLayer::default();
    collect(value, &mut layer.polygons)?;
    Ok(layer)
}

fn collect(value: &Value, out: &mut Vec<Vec<GeoCoord>>) -> Result<(), String> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or("GeoJSON object without a \"type\"")?;

    match kind {
        "FeatureCollection" => {
            for feature in array(value, "features")? {
                collect(feature, out)?;
            }
        }
        "Feature" => match value.get("geometry") {
            Some(Value::Null) | None => {}
            Some(geometry) => collect(geometry, out)?,
        },
        "GeometryCollection" => {
            for geometry in array(value, "geometries")? {
                collect(geometry, out)?;
            }
        }
        "Polygon" => {
            if let Some(ring) = array(value, "coordinates")?.first() {
                out.push(ring_coords(ring)?);
            }
        }
        "MultiPolygon" => {
            for polygon in array(value, "coordinates")? {
                let rings = polygon.as_array().ok_or("MultiPolygon member is not an array")?;
                if let Some(ring) = rings.first() {
                    out.push(ring_coords(ring)?);
                }
            }
        }
        other => tracing::trace!(kind = other, "skipping geometry"),
    }
    Ok(())
}

fn array<'a>(value: &'a Value, key: &str) -> Result<&'a Vec<Value>, String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| format!("missing array \"{}\"", key))
}

fn ring_coords(ring: &Value) -> Result<Vec<GeoCoord>, String> {
    let positions = ring.as_array().ok_or("ring is not an array")?;
    positions
        .iter()
        .map(|pos| match pos.as_array().map(Vec::as_slice) {
            Some([lon, lat, ..]) => match (lon.as_f64(), lat.as_f64()) {
                (Some(lon), Some(lat)) if (-90.0..=90.0).contains(&lat) => {
                    Ok(GeoCoord::new(lon, lat))
                }
                _ => Err(format!("invalid position {}", pos)),
            },
            _ => Err(format!("invalid position {}", pos)),
        })
        .collect()
}
