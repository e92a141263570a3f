//! Country boundaries from a GeoJSON feature collection

use std::path::Path;
use std::str::FromStr;
use geojson::{GeoJson, Feature, Geometry};
use tracing::{debug, warn};

use crate::DataError;

/// One map region
#[derive(Debug, Clone)]
pub struct CountryBoundary {
    /// Two-letter join key against record countries, when the feature has a usable one
    pub code: Option<String>,
    /// Display name from the feature's `name` property
    pub name: Option<String>,
    /// Outline for the render layer
    pub geometry: Option<Geometry>,
}

/// All map regions, in file order
#[derive(Debug, Clone, Default)]
pub struct GeoBoundaries {
    source_name: String,
    features: Vec<CountryBoundary>,
}

impl GeoBoundaries {
    /// Parse a GeoJSON document
    ///
    /// `code_property` names the feature property holding the country code.
    /// Codes that are not two ASCII letters (such as the `-99` placeholder
    /// used by Natural Earth) are kept as regions without a join key.
    pub fn from_geojson_str(source_name: &str, json: &str, code_property: &str) -> Result<Self, DataError> {
        let features = match GeoJson::from_str(json)? {
            GeoJson::FeatureCollection(collection) => collection.features,
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::Geometry(_) => {
                return Err(DataError::GeoJson(
                    "expected a Feature or FeatureCollection, found a bare Geometry".to_string(),
                ));
            }
        };

        let features: Vec<CountryBoundary> = features
            .into_iter()
            .map(|feature| Self::boundary_from_feature(feature, code_property))
            .collect();

        let without_code = features.iter().filter(|f| f.code.is_none()).count();
        if without_code > 0 {
            warn!("{} of {} features in {} have no usable '{}' code",
                without_code, features.len(), source_name, code_property);
        }

        Ok(Self {
            source_name: source_name.to_string(),
            features,
        })
    }

    /// Load a GeoJSON file
    pub async fn load(path: &Path, code_property: &str) -> Result<Self, DataError> {
        let json = tokio::fs::read_to_string(path).await?;
        let source_name = path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.geojson");
        let boundaries = Self::from_geojson_str(source_name, &json, code_property)?;
        debug!("Loaded {} boundary features from {}", boundaries.len(), source_name);
        Ok(boundaries)
    }

    fn boundary_from_feature(feature: Feature, code_property: &str) -> CountryBoundary {
        let code = feature
            .property(code_property)
            .and_then(|v| v.as_str())
            .map(|s| s.trim().to_uppercase())
            .filter(|s| s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic()));
        let name = feature
            .property("name")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        CountryBoundary {
            code,
            name,
            geometry: feature.geometry,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn features(&self) -> &[CountryBoundary] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Find a region by its country code
    pub fn find(&self, code: &str) -> Option<&CountryBoundary> {
        self.features.iter().find(|f| f.code.as_deref() == Some(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "iso_a2": "de", "name": "Germany" },
              "geometry": { "type": "Point", "coordinates": [10.0, 51.0] } },
            { "type": "Feature", "properties": { "iso_a2": "-99", "name": "Kosovo" }, "geometry": null },
            { "type": "Feature", "properties": { "name": "Nowhere" }, "geometry": null }
        ]
    }"#;

    #[test]
    fn test_parse_feature_collection() {
        let boundaries = GeoBoundaries::from_geojson_str("world.geojson", SAMPLE, "iso_a2").unwrap();
        assert_eq!(boundaries.len(), 3);
        assert_eq!(boundaries.features()[0].code.as_deref(), Some("DE"));
        assert!(boundaries.features()[0].geometry.is_some());
        assert_eq!(boundaries.features()[1].code, None);
        assert_eq!(boundaries.features()[2].code, None);
        assert_eq!(boundaries.find("DE").and_then(|b| b.name.as_deref()), Some("Germany"));
    }

    #[test]
    fn test_bare_geometry_is_rejected() {
        let json = r#"{ "type": "Point", "coordinates": [0.0, 0.0] }"#;
        let result = GeoBoundaries::from_geojson_str("point.geojson", json, "iso_a2");
        assert!(matches!(result, Err(DataError::GeoJson(_))));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let result = GeoBoundaries::from_geojson_str("broken.geojson", "{", "iso_a2");
        assert!(matches!(result, Err(DataError::GeoJson(_))));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.geo.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let boundaries = GeoBoundaries::load(&path, "iso_a2").await.unwrap();
        assert_eq!(boundaries.source_name(), "custom.geo.json");
        assert_eq!(boundaries.len(), 3);
    }
}
