use std::path::{Path, PathBuf};
use std::fs::File;
use std::io::{BufReader, Read};
use async_trait::async_trait;
use csv::ReaderBuilder;
use tracing::{debug, warn};

use super::RecordSource;
use crate::record::{columns, RawRow};
use crate::DataError;

/// CSV data source for the exhibition records file
pub struct CsvSource {
    /// Path to the CSV file
    path: PathBuf,
    /// Header names in file order
    headers: Vec<String>,
}

impl CsvSource {
    /// Open a CSV file and read its header
    pub async fn open(path: PathBuf) -> Result<Self, DataError> {
        let headers = tokio::task::spawn_blocking({
            let path = path.clone();
            move || -> Result<Vec<String>, DataError> {
                let file = File::open(&path)?;
                let mut csv_reader = ReaderBuilder::new()
                    .has_headers(true)
                    .from_reader(BufReader::new(file));
                Ok(csv_reader.headers()?.iter().map(|h| h.trim().to_string()).collect())
            }
        }).await??;

        let source = Self { path, headers };
        let missing = source.missing_columns();
        if !missing.is_empty() {
            warn!("{} is missing columns {:?}; they will read as empty", source.source_name(), missing);
        }

        Ok(source)
    }

    /// Header names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Expected columns not present in the header
    pub fn missing_columns(&self) -> Vec<&'static str> {
        columns::ALL
            .iter()
            .copied()
            .filter(|c| !self.headers.iter().any(|h| h == c))
            .collect()
    }

    /// Parse rows from any reader with a header line
    ///
    /// Short rows are accepted; absent trailing fields read as empty.
    pub fn read_rows_from_reader<R: Read>(reader: R) -> Result<Vec<RawRow>, DataError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let row: RawRow = headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.as_str(), v))
                .collect();
            rows.push(row);
        }

        Ok(rows)
    }

    fn read_file(path: &Path) -> Result<Vec<RawRow>, DataError> {
        let file = File::open(path)?;
        Self::read_rows_from_reader(BufReader::new(file))
    }
}

#[async_trait]
impl RecordSource for CsvSource {
    async fn read_rows(&self) -> Result<Vec<RawRow>, DataError> {
        let path = self.path.clone();
        let rows = tokio::task::spawn_blocking(move || Self::read_file(&path)).await??;
        debug!("Read {} rows from {}", rows.len(), self.source_name());
        Ok(rows)
    }

    fn source_name(&self) -> &str {
        self.path.file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.csv")
    }
}
