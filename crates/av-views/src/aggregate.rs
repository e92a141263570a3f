//! Grouped counts and statistics over exhibition records
//!
//! Everything here is a pure function of its input. Apart from the one-time
//! index build in `av-data`, callers pass a single country/year slice rather
//! than the whole store.

use std::fmt;
use std::hash::Hash;
use ahash::AHashSet;
use indexmap::IndexMap;
use serde::Serialize;

use av_data::ExhibitionRecord;

/// A grouping key produced by a [`KeyField`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Year(i32),
    Text(String),
}

impl GroupKey {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GroupKey::Text(s) => Some(s),
            GroupKey::Year(_) => None,
        }
    }

    pub fn as_year(&self) -> Option<i32> {
        match self {
            GroupKey::Year(y) => Some(*y),
            GroupKey::Text(_) => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Year(y) => write!(f, "{}", y),
            GroupKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for GroupKey {
    fn from(s: &str) -> Self {
        GroupKey::Text(s.to_string())
    }
}

impl From<i32> for GroupKey {
    fn from(y: i32) -> Self {
        GroupKey::Year(y)
    }
}

/// Record attribute used as a grouping key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
    Country,
    Year,
    City,
    ExhibitionType,
    ArtistId,
    ArtistName,
    ArtistGender,
}

impl KeyField {
    /// Extract the key; `None` for a record without a parsed year when grouping by year
    pub fn extract(&self, record: &ExhibitionRecord) -> Option<GroupKey> {
        let text = |s: &str| Some(GroupKey::Text(s.to_string()));
        match self {
            KeyField::Country => text(&record.country),
            KeyField::Year => record.year.map(GroupKey::Year),
            KeyField::City => text(&record.city),
            KeyField::ExhibitionType => text(&record.exhibition_type),
            KeyField::ArtistId => text(&record.artist_id),
            KeyField::ArtistName => Some(GroupKey::Text(record.artist_name())),
            KeyField::ArtistGender => text(&record.artist_gender),
        }
    }
}

/// Nested counts, one level per key field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GroupCounts {
    Count(usize),
    Groups(IndexMap<GroupKey, GroupCounts>),
}

/// One flattened path through [`GroupCounts`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupRow {
    pub keys: Vec<GroupKey>,
    pub count: usize,
}

impl GroupCounts {
    fn empty(depth: usize) -> Self {
        if depth == 0 {
            GroupCounts::Count(0)
        } else {
            GroupCounts::Groups(IndexMap::new())
        }
    }

    fn increment(&mut self, path: &[GroupKey]) {
        match self {
            GroupCounts::Count(count) => *count += 1,
            GroupCounts::Groups(groups) => {
                if let Some((head, rest)) = path.split_first() {
                    groups
                        .entry(head.clone())
                        .or_insert_with(|| GroupCounts::empty(rest.len()))
                        .increment(rest);
                }
            }
        }
    }

    /// Child group for a key
    pub fn get(&self, key: &GroupKey) -> Option<&GroupCounts> {
        match self {
            GroupCounts::Count(_) => None,
            GroupCounts::Groups(groups) => groups.get(key),
        }
    }

    /// Count below a key path; 0 when the path does not exist
    pub fn count_at(&self, path: &[GroupKey]) -> usize {
        match path.split_first() {
            None => self.total(),
            Some((head, rest)) => self.get(head).map(|g| g.count_at(rest)).unwrap_or(0),
        }
    }

    /// Sum of all leaf counts
    pub fn total(&self) -> usize {
        match self {
            GroupCounts::Count(count) => *count,
            GroupCounts::Groups(groups) => groups.values().map(GroupCounts::total).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Keys at this level, in first-seen order
    pub fn keys(&self) -> Vec<&GroupKey> {
        match self {
            GroupCounts::Count(_) => Vec::new(),
            GroupCounts::Groups(groups) => groups.keys().collect(),
        }
    }

    /// `(key, total)` for each group at this level
    pub fn entries(&self) -> Vec<(GroupKey, usize)> {
        match self {
            GroupCounts::Count(_) => Vec::new(),
            GroupCounts::Groups(groups) => groups
                .iter()
                .map(|(k, g)| (k.clone(), g.total()))
                .collect(),
        }
    }

    /// Depth-first `{keys, count}` rows
    pub fn flatten(&self) -> Vec<GroupRow> {
        let mut rows = Vec::new();
        self.flatten_into(&mut Vec::new(), &mut rows);
        rows
    }

    fn flatten_into(&self, prefix: &mut Vec<GroupKey>, rows: &mut Vec<GroupRow>) {
        match self {
            GroupCounts::Count(count) => rows.push(GroupRow { keys: prefix.clone(), count: *count }),
            GroupCounts::Groups(groups) => {
                for (key, child) in groups {
                    prefix.push(key.clone());
                    child.flatten_into(prefix, rows);
                    prefix.pop();
                }
            }
        }
    }
}

/// Count records grouped by `keys`, outermost first
///
/// A record is skipped when any of its keys cannot be extracted.
pub fn count_by_keys<'a, I>(records: I, keys: &[KeyField]) -> GroupCounts
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
{
    let mut root = GroupCounts::empty(keys.len());
    let mut path = Vec::with_capacity(keys.len());

    'records: for record in records {
        path.clear();
        for key in keys {
            match key.extract(record) {
                Some(k) => path.push(k),
                None => continue 'records,
            }
        }
        root.increment(&path);
    }

    root
}

/// Single-level count with an arbitrary key function
pub fn count_by<'a, I, K, F>(records: I, key: F) -> IndexMap<K, usize>
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
    K: Eq + Hash,
    F: Fn(&ExhibitionRecord) -> Option<K>,
{
    let mut counts = IndexMap::new();
    for record in records {
        if let Some(k) = key(record) {
            *counts.entry(k).or_insert(0) += 1;
        }
    }
    counts
}

/// Single-level sum of `value` per key
pub fn sum_by<'a, I, K, F, V>(records: I, key: F, value: V) -> IndexMap<K, u64>
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
    K: Eq + Hash,
    F: Fn(&ExhibitionRecord) -> K,
    V: Fn(&ExhibitionRecord) -> u64,
{
    let mut sums = IndexMap::new();
    for record in records {
        *sums.entry(key(record)).or_insert(0) += value(record);
    }
    sums
}

/// Records of one country in one year
pub fn filter_by_country_year<'a, I>(records: I, country: &str, year: i32) -> Vec<&'a ExhibitionRecord>
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
{
    records
        .into_iter()
        .filter(|r| r.matches(country, year))
        .collect()
}

/// Ordering among groups with equal counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Smaller key first
    #[default]
    KeyAscending,
    /// Keep input order
    FirstSeen,
}

/// The `n` largest groups, largest first
pub fn top_n<K, C, I>(groups: I, n: usize, tie_break: TieBreak) -> Vec<(K, C)>
where
    I: IntoIterator<Item = (K, C)>,
    K: Ord,
    C: Ord + Copy,
{
    let mut entries: Vec<(K, C)> = groups.into_iter().collect();
    match tie_break {
        TieBreak::KeyAscending => entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))),
        TieBreak::FirstSeen => entries.sort_by(|a, b| b.1.cmp(&a.1)),
    }
    entries.truncate(n);
    entries
}

/// Mean of `value` over the records; 0 for no records
pub fn mean<'a, I, F>(records: I, value: F) -> f64
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
    F: Fn(&ExhibitionRecord) -> f64,
{
    let (sum, count) = records
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), r| (sum + value(r), count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Number of distinct values of an attribute
pub fn distinct_count<'a, I, K, F>(records: I, key: F) -> usize
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
    K: Eq + Hash,
    F: Fn(&'a ExhibitionRecord) -> K,
{
    records.into_iter().map(key).collect::<AHashSet<K>>().len()
}
