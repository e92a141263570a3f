//! Raw input rows and the normalized exhibition record

use ahash::AHashMap;
use serde::{Serialize, Deserialize};

/// Source column names of the exhibition dataset
pub mod columns {
    pub const START_DATE: &str = "e.startdate";
    pub const COUNTRY: &str = "e.country";
    pub const CITY: &str = "e.city";
    pub const TYPE: &str = "e.type";
    pub const PAINTINGS: &str = "e.paintings";
    pub const ARTIST_ID: &str = "a.id";
    pub const ARTIST_FIRST_NAME: &str = "a.firstname";
    pub const ARTIST_LAST_NAME: &str = "a.lastname";
    pub const ARTIST_GENDER: &str = "a.gender";

    /// Every column the normalizer reads
    pub const ALL: [&str; 9] = [
        START_DATE,
        COUNTRY,
        CITY,
        TYPE,
        PAINTINGS,
        ARTIST_ID,
        ARTIST_FIRST_NAME,
        ARTIST_LAST_NAME,
        ARTIST_GENDER,
    ];
}

/// One untyped input row, keyed by column name
///
/// Only the loaders and the normalizer see these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: AHashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Value of a column; missing columns read as an empty string
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// One artist's participation in one exhibition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionRecord {
    /// Exhibition start year; `None` when the source value was not a number
    pub year: Option<i32>,
    /// Uppercase two-letter country code
    pub country: String,
    pub city: String,
    pub exhibition_type: String,
    /// Number of paintings shown, never negative
    pub paintings: u32,
    pub artist_id: String,
    pub artist_first_name: String,
    pub artist_last_name: String,
    pub artist_gender: String,
}

impl ExhibitionRecord {
    /// "First Last" as shown in the artist list
    pub fn artist_name(&self) -> String {
        match (self.artist_first_name.is_empty(), self.artist_last_name.is_empty()) {
            (false, false) => format!("{} {}", self.artist_first_name, self.artist_last_name),
            (false, true) => self.artist_first_name.clone(),
            (true, false) => self.artist_last_name.clone(),
            (true, true) => String::new(),
        }
    }

    pub fn has_year(&self) -> bool {
        self.year.is_some()
    }

    /// Whether this record belongs to the given country/year slice
    pub fn matches(&self, country: &str, year: i32) -> bool {
        self.year == Some(year) && self.country == country
    }
}
