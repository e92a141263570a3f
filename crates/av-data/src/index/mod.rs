//! Country/year exhibition counts for the map view
//!
//! Built once from the full record store; every slider tick reads from it
//! instead of re-scanning the records.

use indexmap::IndexMap;
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::record::ExhibitionRecord;

type YearCounts = IndexMap<i32, usize>;

/// `country → year → count`, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregationIndex {
    counts: IndexMap<String, YearCounts>,
}

impl AggregationIndex {
    /// Count records per country and year
    ///
    /// Records without a parsed year are left out. Chunks are counted in
    /// parallel and merged left to right, so key order matches a sequential
    /// scan.
    pub fn build(records: &[ExhibitionRecord]) -> Self {
        let counts = records
            .par_iter()
            .fold(IndexMap::new, |mut acc: IndexMap<String, YearCounts>, record| {
                if let Some(year) = record.year {
                    *acc.entry(record.country.clone())
                        .or_default()
                        .entry(year)
                        .or_insert(0) += 1;
                }
                acc
            })
            .reduce(IndexMap::new, Self::merge);

        let index = Self { counts };
        info!("Built country/year index: {} countries, {} records", index.len(), index.total());
        index
    }

    fn merge(
        mut left: IndexMap<String, YearCounts>,
        right: IndexMap<String, YearCounts>,
    ) -> IndexMap<String, YearCounts> {
        for (country, years) in right {
            let target = left.entry(country).or_default();
            for (year, count) in years {
                *target.entry(year).or_insert(0) += count;
            }
        }
        left
    }

    /// Exhibitions in a country for a year; 0 when there are none
    pub fn count(&self, country: &str, year: i32) -> usize {
        self.counts
            .get(country)
            .and_then(|years| years.get(&year))
            .copied()
            .unwrap_or(0)
    }

    /// Per-year counts for one country
    pub fn years_for(&self, country: &str) -> Option<&YearCounts> {
        self.counts.get(country)
    }

    /// Countries with at least one dated record
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Every indexed country with its count for `year` (0 when absent)
    pub fn year_slice(&self, year: i32) -> Vec<(&str, usize)> {
        self.counts
            .iter()
            .map(|(country, years)| (country.as_str(), years.get(&year).copied().unwrap_or(0)))
            .collect()
    }

    /// Largest single-country count for `year`
    pub fn max_for_year(&self, year: i32) -> usize {
        self.counts
            .values()
            .filter_map(|years| years.get(&year))
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().flat_map(|years| years.values()).sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &YearCounts)> {
        self.counts.iter().map(|(c, y)| (c.as_str(), y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(country: &str, year: Option<i32>) -> ExhibitionRecord {
        ExhibitionRecord {
            year,
            country: country.to_string(),
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
    fn test_build_counts_country_year() {
        let records = vec![
            record("DE", Some(1905)),
            record("DE", Some(1905)),
            record("DE", Some(1906)),
            record("FR", Some(1905)),
            record("FR", None),
        ];
        let index = AggregationIndex::build(&records);

        assert_eq!(index.count("DE", 1905), 2);
        assert_eq!(index.count("DE", 1906), 1);
        assert_eq!(index.count("FR", 1905), 1);
        assert_eq!(index.count("IT", 1905), 0);
        assert_eq!(index.total(), 4);
        assert_eq!(index.countries().collect::<Vec<_>>(), vec!["DE", "FR"]);
    }

    #[test]
    fn test_year_slice_fills_zeroes() {
        let records = vec![record("DE", Some(1905)), record("FR", Some(1906))];
        let index = AggregationIndex::build(&records);

        assert_eq!(index.year_slice(1906), vec![("DE", 0), ("FR", 1)]);
        assert_eq!(index.max_for_year(1906), 1);
        assert_eq!(index.max_for_year(1950), 0);
    }

    #[test]
    fn test_empty_input() {
        let index = AggregationIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.total(), 0);
    }

    proptest! {
        #[test]
        fn prop_total_matches_dated_records(
            entries in prop::collection::vec((0usize..4, prop::option::of(1900i32..1920)), 0..300)
        ) {
            let codes = ["DE", "FR", "NL", "AT"];
            let records: Vec<_> = entries.iter().map(|(c, y)| record(codes[*c], *y)).collect();
            let index = AggregationIndex::build(&records);

            let dated = records.iter().filter(|r| r.year.is_some()).count();
            prop_assert_eq!(index.total(), dated);

            // Country order follows first appearance among dated records
            let mut expected: Vec<&str> = Vec::new();
            for r in records.iter().filter(|r| r.year.is_some()) {
                if !expected.contains(&r.country.as_str()) {
                    expected.push(&r.country);
                }
            }
            prop_assert_eq!(index.countries().collect::<Vec<_>>(), expected);
        }
    }
}
