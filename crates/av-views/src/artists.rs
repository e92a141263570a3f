//! Artist ranking and per-artist painting series

use serde::Serialize;

use av_data::ExhibitionRecord;
use crate::aggregate::{top_n, TieBreak};

/// Identity of an artist in the ranked list
///
/// Ordered by display name, then id, which is the tie-break for equal
/// painting totals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ArtistKey {
    pub name: String,
    pub id: String,
}

impl ArtistKey {
    fn of(record: &ExhibitionRecord) -> Self {
        Self {
            name: record.artist_name(),
            id: record.artist_id.clone(),
        }
    }
}

/// Paintings shown by one artist within a slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistTotal {
    pub artist: ArtistKey,
    pub paintings: u64,
}

/// Artists ranked by total paintings in the slice, at most `n`
pub fn top_artists<'a, I>(records: I, n: usize) -> Vec<ArtistTotal>
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
{
    let totals = crate::aggregate::sum_by(records, ArtistKey::of, |r| r.paintings as u64);
    top_n(totals, n, TieBreak::KeyAscending)
        .into_iter()
        .map(|(artist, paintings)| ArtistTotal { artist, paintings })
        .collect()
}

/// One exhibition in an artist's timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub paintings: u32,
}

/// Paintings per exhibition over time for one artist in one country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistSeries {
    pub artist_id: String,
    pub artist_name: String,
    pub country: String,
    pub points: Vec<SeriesPoint>,
}

impl ArtistSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_paintings(&self) -> u64 {
        self.points.iter().map(|p| p.paintings as u64).sum()
    }
}

/// Every dated exhibition of `artist_id` in `country`, ordered by year
///
/// Spans all years, not only the selected one. `None` when the artist has
/// no dated exhibitions there.
pub fn artist_series<'a, I>(records: I, country: &str, artist_id: &str) -> Option<ArtistSeries>
where
    I: IntoIterator<Item = &'a ExhibitionRecord>,
{
    let matching: Vec<&ExhibitionRecord> = records
        .into_iter()
        .filter(|r| r.artist_id == artist_id && r.country == country && r.year.is_some())
        .collect();

    let first = matching.first()?;
    let artist_name = first.artist_name();

    let mut points: Vec<SeriesPoint> = matching
        .iter()
        .filter_map(|r| r.year.map(|year| SeriesPoint { year, paintings: r.paintings }))
        .collect();
    // Stable: exhibitions in the same year keep file order
    points.sort_by_key(|p| p.year);

    Some(ArtistSeries {
        artist_id: artist_id.to_string(),
        artist_name,
        country: country.to_string(),
        points,
    })
}
