//! Immutable record store

use std::sync::Arc;

use crate::record::ExhibitionRecord;

/// Normalized records loaded once at startup
///
/// Cloning is cheap; all clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<Vec<ExhibitionRecord>>,
}

impl RecordStore {
    pub fn new(records: Vec<ExhibitionRecord>) -> Self {
        Self { records: Arc::new(records) }
    }

    pub fn records(&self) -> &[ExhibitionRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExhibitionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose start year could not be parsed
    pub fn unparsed_years(&self) -> usize {
        self.records.iter().filter(|r| !r.has_year()).count()
    }

    /// Smallest and largest parsed start year
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().filter_map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

impl From<Vec<ExhibitionRecord>> for RecordStore {
    fn from(records: Vec<ExhibitionRecord>) -> Self {
        Self::new(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: Option<i32>) -> ExhibitionRecord {
        ExhibitionRecord {
            year,
            country: "DE".to_string(),
            city: String::new(),
            exhibition_type: String::new(),
            paintings: 0,
            artist_id: String::new(),
            artist_first_name: String::new(),
            artist_last_name: String::new(),
            artist_gender: String::new(),
        }
    }

    #[test]
    fn test_year_span_skips_unparsed() {
        let store = RecordStore::new(vec![record(Some(1907)), record(None), record(Some(1903))]);
        assert_eq!(store.year_span(), Some((1903, 1907)));
        assert_eq!(store.unparsed_years(), 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::default();
        assert!(store.is_empty());
        assert_eq!(store.year_span(), None);
    }

    #[test]
    fn test_clones_share_records() {
        let store = RecordStore::new(vec![record(Some(1905))]);
        let clone = store.clone();
        assert!(std::ptr::eq(store.records(), clone.records()));
    }
}
