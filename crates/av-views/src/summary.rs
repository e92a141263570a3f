//! Country tooltip: headline figures for one country/year slice

use serde::Serialize;

use av_data::ExhibitionRecord;
use crate::aggregate::{distinct_count, mean};
use crate::distribution::{city_distribution, type_distribution};

/// Share of one exhibition type
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeShare {
    pub exhibition_type: String,
    pub percentage: f64,
}

/// Tooltip content for a country in a year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CountrySummary {
    /// The slice is empty
    NoData { country: String, year: i32 },
    Summary {
        country: String,
        year: i32,
        total_exhibitions: usize,
        dominant_type: String,
        type_shares: Vec<TypeShare>,
        key_cities: Vec<String>,
        unique_artists: usize,
        avg_paintings: f64,
    },
}

impl CountrySummary {
    /// Summarize a slice already filtered to `country`/`year`
    pub fn from_slice(country: &str, year: i32, slice: &[&ExhibitionRecord], key_cities: usize) -> Self {
        if slice.is_empty() {
            return CountrySummary::NoData { country: country.to_string(), year };
        }

        let types = type_distribution(slice.iter().copied());
        let type_shares = types
            .percentages()
            .into_iter()
            .map(|(exhibition_type, percentage)| TypeShare { exhibition_type, percentage })
            .collect();
        let key_cities = city_distribution(slice.iter().copied())
            .ranked(key_cities)
            .into_iter()
            .map(|(city, _)| city)
            .collect();

        CountrySummary::Summary {
            country: country.to_string(),
            year,
            total_exhibitions: slice.len(),
            dominant_type: types.dominant().unwrap_or("None").to_string(),
            type_shares,
            key_cities,
            unique_artists: distinct_count(slice.iter().copied(), |r| r.artist_id.as_str()),
            avg_paintings: mean(slice.iter().copied(), |r| r.paintings as f64),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CountrySummary::NoData { .. })
    }

    /// Plain-text tooltip body
    pub fn to_text(&self) -> String {
        match self {
            CountrySummary::NoData { country, year } => {
                format!("{}\nNo data available for {}.", country, year)
            }
            CountrySummary::Summary {
                country,
                year,
                total_exhibitions,
                dominant_type,
                type_shares,
                key_cities,
                unique_artists,
                avg_paintings,
            } => {
                let mut text = format!(
                    "{} ({}):\nTotal Exhibitions: {}\nDominant Type: {}\nProportions:\n",
                    country, year, total_exhibitions, dominant_type
                );
                for share in type_shares {
                    text.push_str(&format!("- {}: {:.1}%\n", share.exhibition_type, share.percentage));
                }
                text.push_str(&format!(
                    "Key Cities: {}\nUnique Artists: {}\nAvg Paintings per Exhibition: {:.1}",
                    key_cities.join(", "),
                    unique_artists,
                    avg_paintings
                ));
                text
            }
        }
    }
}
