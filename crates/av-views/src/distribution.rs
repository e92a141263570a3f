//! Pie and bar chart data: counts per category within a slice

use serde::Serialize;

use av_data::ExhibitionRecord;
use crate::aggregate::{count_by_keys, top_n, KeyField, TieBreak};

/// Counts per category, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Distribution {
    entries: Vec<(String, usize)>,
}

impl Distribution {
    /// Group a slice by one record attribute
    pub fn from_records<'a, I>(records: I, field: KeyField) -> Self
    where
        I: IntoIterator<Item = &'a ExhibitionRecord>,
    {
        let entries = count_by_keys(records, &[field])
            .entries()
            .into_iter()
            .map(|(key, count)| (key.to_string(), count))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// No records in the slice; the render layer shows a "no data" message
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Share of each category in percent
    pub fn percentages(&self) -> Vec<(String, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        self.entries
            .iter()
            .map(|(k, c)| (k.clone(), *c as f64 * 100.0 / total as f64))
            .collect()
    }

    /// Category with the largest count; among equal maxima the last one wins
    pub fn dominant(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.1 >= b.1) {
                best = Some(entry);
            }
        }
        best.map(|(k, _)| k.as_str())
    }

    /// The `n` largest categories, ties by name
    pub fn ranked(&self, n: usize) -> Vec<(String, usize)> {
        top_n(self.entries.iter().cloned(), n, TieBreak::KeyAscending)
    }
}

/// Exhibitions per exhibition type
pub fn type_distribution<'a, I>(records: I) -> Distribution
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
{
    Distribution::from_records(records, KeyField::ExhibitionType)
}

/// Exhibitions per city
pub fn city_distribution<'a, I>(records: I) -> Distribution
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
{
    Distribution::from_records(records, KeyField::City)
}

/// Exhibition participations per artist gender
pub fn gender_distribution<'a, I>(records: I) -> Distribution
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
{
    Distribution::from_records(records, KeyField::ArtistGender)
}
