//! Derived views over exhibition records
//!
//! The aggregation functions in [`aggregate`] are pure and work on any
//! iterator of records. The remaining modules shape their output into the
//! chart data the render layer draws, and [`dashboard`] ties them to the
//! selection state.

pub mod aggregate;
pub mod artists;
pub mod dashboard;
pub mod distribution;
pub mod map;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{
    count_by, count_by_keys, distinct_count, filter_by_country_year, mean, sum_by, top_n,
    GroupCounts, GroupKey, GroupRow, KeyField, TieBreak,
};
pub use artists::{artist_series, top_artists, ArtistKey, ArtistSeries, ArtistTotal, SeriesPoint};
pub use dashboard::{Dashboard, DashboardViews, SelectionViews};
pub use distribution::{city_distribution, gender_distribution, type_distribution, Distribution};
pub use map::{MapRegion, MapView};
pub use summary::{CountrySummary, TypeShare};
