//! Dashboard configuration file

use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use av_core::YearBounds;

use super::null_handling::NullConfig;
use crate::DataError;

/// Settings for loading the dataset and sizing the derived views
///
/// Every field has a default, so a config file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Exhibition records CSV
    pub data_path: PathBuf,

    /// Country boundaries GeoJSON
    pub boundaries_path: Option<PathBuf>,

    /// Feature property holding the two-letter country code
    pub geo_code_property: String,

    /// Year shown before the slider is touched
    pub initial_year: i32,

    /// Slider range
    pub year_bounds: YearBounds,

    /// Length of the ranked artist list
    pub top_artists: usize,

    /// Number of cities named in the country summary
    pub key_cities: usize,

    /// Values treated as missing during normalization
    pub null_config: NullConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/cleaned_artvis.csv"),
            boundaries_path: Some(PathBuf::from("data/custom.geo.json")),
            geo_code_property: "iso_a2".to_string(),
            initial_year: 1905,
            year_bounds: YearBounds::default(),
            top_artists: 5,
            key_cities: 3,
            null_config: NullConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn from_file(path: &Path) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject settings that would make every view empty
    pub fn validate(&self) -> Result<(), DataError> {
        if self.year_bounds.min > self.year_bounds.max {
            return Err(DataError::Config(format!(
                "year_bounds min {} is greater than max {}",
                self.year_bounds.min, self.year_bounds.max
            )));
        }
        if self.top_artists == 0 {
            return Err(DataError::Config("top_artists must be at least 1".to_string()));
        }
        if self.geo_code_property.trim().is_empty() {
            return Err(DataError::Config("geo_code_property must not be empty".to_string()));
        }
        Ok(())
    }
}
