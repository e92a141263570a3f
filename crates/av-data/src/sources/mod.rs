pub mod csv_source;
pub mod geo_source;
pub mod memory_source;

pub use csv_source::CsvSource;
pub use geo_source::{GeoBoundaries, CountryBoundary};
pub use memory_source::MemorySource;

use async_trait::async_trait;
use crate::record::RawRow;
use crate::DataError;

/// Trait for sources of raw exhibition rows
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Read every row
    async fn read_rows(&self) -> Result<Vec<RawRow>, DataError>;

    /// Get the source name/path
    fn source_name(&self) -> &str;
}
