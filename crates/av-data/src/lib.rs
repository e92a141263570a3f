//! Exhibition records: loading, normalization and the country/year index

pub mod config;
pub mod index;
pub mod loader;
pub mod normalize;
pub mod record;
pub mod sources;
pub mod store;

use tokio::task::JoinError;
use thiserror::Error;

// Re-exports
pub use config::{DashboardConfig, NullConfig};
pub use index::AggregationIndex;
pub use loader::{LoadedDataset, load_dataset, load_from_sources};
pub use normalize::Normalizer;
pub use record::{ExhibitionRecord, RawRow};
pub use sources::{CsvSource, GeoBoundaries, CountryBoundary, MemorySource, RecordSource};
pub use store::RecordStore;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("GeoJSON error: {0}")]
    GeoJson(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Join error: {0}")]
    Join(#[from] JoinError),
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(std::io::Error::new(io_err.kind(), error.to_string())),
            _ => DataError::Csv(error.to_string()),
        }
    }
}

impl From<geojson::Error> for DataError {
    fn from(error: geojson::Error) -> Self {
        DataError::GeoJson(error.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Config(error.to_string())
    }
}
