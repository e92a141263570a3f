//! Coercion of raw rows into exhibition records
//!
//! Normalization never fails. Values that cannot be coerced become explicit
//! defaults: an unparsable start year becomes `None` and an unparsable
//! painting count becomes 0. Dropping records without a year is left to
//! the aggregation code.
//!
//! Missing-value markers only apply to the numeric columns. Text columns
//! are trimmed and kept as written, so a code such as `NA` survives.

use tracing::debug;

use crate::config::NullConfig;
use crate::record::{columns, ExhibitionRecord, RawRow};

/// Turns raw rows into [`ExhibitionRecord`]s
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    null_config: NullConfig,
}

impl Normalizer {
    pub fn new(null_config: NullConfig) -> Self {
        Self { null_config }
    }

    /// Normalize a single row
    pub fn normalize(&self, row: &RawRow) -> ExhibitionRecord {
        ExhibitionRecord {
            year: self.parse_year(row.get(columns::START_DATE)),
            country: self.text(row.get(columns::COUNTRY)).to_uppercase(),
            city: self.text(row.get(columns::CITY)),
            exhibition_type: self.text(row.get(columns::TYPE)),
            paintings: self.parse_paintings(row.get(columns::PAINTINGS)),
            artist_id: self.text(row.get(columns::ARTIST_ID)),
            artist_first_name: self.text(row.get(columns::ARTIST_FIRST_NAME)),
            artist_last_name: self.text(row.get(columns::ARTIST_LAST_NAME)),
            artist_gender: self.text(row.get(columns::ARTIST_GENDER)),
        }
    }

    /// Normalize every row, keeping rows with an unparsable year
    pub fn normalize_rows(&self, rows: &[RawRow]) -> Vec<ExhibitionRecord> {
        let records: Vec<ExhibitionRecord> = rows.iter().map(|row| self.normalize(row)).collect();

        let unparsed = records.iter().filter(|r| !r.has_year()).count();
        if unparsed > 0 {
            debug!("{} of {} rows have no numeric start year", unparsed, records.len());
        }

        records
    }

    fn text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    fn parse_year(&self, value: &str) -> Option<i32> {
        let value = self.null_config.present(value)?;
        if let Ok(year) = value.parse::<i32>() {
            return Some(year);
        }
        // "1905.0" style values from spreadsheet exports
        match value.parse::<f64>() {
            Ok(v) if v.is_finite() && v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => {
                Some(v as i32)
            }
            _ => None,
        }
    }

    fn parse_paintings(&self, value: &str) -> u32 {
        let Some(value) = self.null_config.present(value) else {
            return 0;
        };
        if let Ok(count) = value.parse::<u32>() {
            return count;
        }
        match value.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => v.min(u32::MAX as f64) as u32,
            _ => 0,
        }
    }
}

/// Normalize with the default null patterns
pub fn normalize_rows(rows: &[RawRow]) -> Vec<ExhibitionRecord> {
    Normalizer::default().normalize_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(year: &str, country: &str, paintings: &str) -> RawRow {
        RawRow::new()
            .with(columns::START_DATE, year)
            .with(columns::COUNTRY, country)
            .with(columns::CITY, "  Paris ")
            .with(columns::TYPE, " solo")
            .with(columns::PAINTINGS, paintings)
            .with(columns::ARTIST_ID, " 17 ")
            .with(columns::ARTIST_FIRST_NAME, "Jeanne")
            .with(columns::ARTIST_LAST_NAME, "Rij-Rousseau")
            .with(columns::ARTIST_GENDER, "F")
    }

    #[test]
    fn test_well_formed_row() {
        let record = Normalizer::default().normalize(&row("1905", " fr ", "12"));
        assert_eq!(record.year, Some(1905));
        assert_eq!(record.country, "FR");
        assert_eq!(record.city, "Paris");
        assert_eq!(record.exhibition_type, "solo");
        assert_eq!(record.paintings, 12);
        assert_eq!(record.artist_id, "17");
        assert_eq!(record.artist_gender, "F");
    }

    #[test]
    fn test_unparsable_year_becomes_sentinel() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize(&row("circa 1905", "DE", "1")).year, None);
        assert_eq!(normalizer.normalize(&row("", "DE", "1")).year, None);
        assert_eq!(normalizer.normalize(&row("1905.5", "DE", "1")).year, None);
        assert_eq!(normalizer.normalize(&row("1905.0", "DE", "1")).year, Some(1905));
    }

    #[test]
    fn test_paintings_default_to_zero() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize(&row("1905", "DE", "many")).paintings, 0);
        assert_eq!(normalizer.normalize(&row("1905", "DE", "")).paintings, 0);
        assert_eq!(normalizer.normalize(&row("1905", "DE", "-4")).paintings, 0);
        assert_eq!(normalizer.normalize(&row("1905", "DE", "2.7")).paintings, 2);
    }

    #[test]
    fn test_rows_with_bad_years_are_kept() {
        let rows = vec![row("1905", "DE", "1"), row("n/a", "DE", "1")];
        let records = normalize_rows(&rows);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].year, None);
    }

    #[test]
    fn test_missing_columns_produce_empty_fields() {
        let record = Normalizer::default().normalize(&RawRow::new());
        assert_eq!(record.year, None);
        assert_eq!(record.country, "");
        assert_eq!(record.paintings, 0);
    }

    #[test]
    fn test_country_codes_matching_null_patterns_are_kept() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize(&row("1905", "NA", "1")).country, "NA");
        assert_eq!(normalizer.normalize(&row("1905", " na ", "1")).country, "NA");
    }

    #[test]
    fn test_null_patterns_leave_text_fields_alone() {
        let record = Normalizer::default().normalize(
            &row("1905", "DE", "1")
                .with(columns::CITY, " None ")
                .with(columns::ARTIST_LAST_NAME, "-"),
        );
        assert_eq!(record.city, "None");
        assert_eq!(record.artist_last_name, "-");
    }

    #[test]
    fn test_null_patterns_apply_to_numeric_fields() {
        let normalizer = Normalizer::default();
        let record = normalizer.normalize(&row("NA", "DE", "N/A"));
        assert_eq!(record.year, None);
        assert_eq!(record.paintings, 0);

        let strict = Normalizer::new(NullConfig::default().with_pattern("9999"));
        assert_eq!(strict.normalize(&row("9999", "DE", "1")).year, None);
    }

    proptest! {
        #[test]
        fn prop_normalization_never_panics(year in ".*", country in ".*", paintings in ".*") {
            let record = Normalizer::default().normalize(&row(&year, &country, &paintings));
            prop_assert_eq!(record.country.trim(), record.country.as_str());
        }

        #[test]
        fn prop_integer_years_round_trip(year in 1800i32..2100) {
            let record = Normalizer::default().normalize(&row(&year.to_string(), "DE", "0"));
            prop_assert_eq!(record.year, Some(year));
        }
    }
}
