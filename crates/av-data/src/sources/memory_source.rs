//! In-memory row source

use async_trait::async_trait;

use super::RecordSource;
use crate::record::RawRow;
use crate::DataError;

/// Rows already held in memory, e.g. handed over by an embedding application
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    rows: Vec<RawRow>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>, rows: Vec<RawRow>) -> Self {
        Self { name: name.into(), rows }
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn read_rows(&self) -> Result<Vec<RawRow>, DataError> {
        Ok(self.rows.clone())
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
