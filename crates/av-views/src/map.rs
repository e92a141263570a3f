//! Choropleth data for one year

use serde::Serialize;

use av_data::{AggregationIndex, GeoBoundaries};

/// One colored region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapRegion {
    /// Join key; `None` for boundary features without a usable code
    pub code: Option<String>,
    pub name: Option<String>,
    pub count: usize,
}

/// Exhibition counts per region for the year on the slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapView {
    pub year: i32,
    pub regions: Vec<MapRegion>,
    /// Upper end of the color scale
    pub max_count: usize,
}

impl MapView {
    /// Read counts for `year` from the index
    ///
    /// With boundaries, there is one region per feature in file order and
    /// features without data get 0. Without boundaries, there is one region
    /// per indexed country.
    pub fn build(index: &AggregationIndex, boundaries: Option<&GeoBoundaries>, year: i32) -> Self {
        let regions = match boundaries {
            Some(boundaries) => boundaries
                .features()
                .iter()
                .map(|feature| MapRegion {
                    code: feature.code.clone(),
                    name: feature.name.clone(),
                    count: feature.code.as_deref().map(|c| index.count(c, year)).unwrap_or(0),
                })
                .collect(),
            None => index
                .year_slice(year)
                .into_iter()
                .map(|(country, count)| MapRegion {
                    code: Some(country.to_string()),
                    name: None,
                    count,
                })
                .collect(),
        };

        Self {
            year,
            regions,
            max_count: index.max_for_year(year),
        }
    }

    /// Count for a region code; 0 when unknown
    pub fn count_for(&self, code: &str) -> usize {
        self.regions
            .iter()
            .find(|r| r.code.as_deref() == Some(code))
            .map(|r| r.count)
            .unwrap_or(0)
    }

    /// Position on the color scale in `[0, 1]`; `None` means "no data" styling
    pub fn intensity(&self, code: &str) -> Option<f64> {
        let count = self.count_for(code);
        if count == 0 || self.max_count == 0 {
            None
        } else {
            Some(count as f64 / self.max_count as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scenario;

    const WORLD: &str = r#"{"type":"FeatureCollection","features":[
        {"type":"Feature","properties":{"iso_a2":"FR","name":"France"},"geometry":null},
        {"type":"Feature","properties":{"iso_a2":"DE","name":"Germany"},"geometry":null},
        {"type":"Feature","properties":{"iso_a2":"-99","name":"Somaliland"},"geometry":null}
    ]}"#;

    #[test]
    fn test_map_from_index_only() {
        let index = AggregationIndex::build(&scenario());
        let map = MapView::build(&index, None, 1905);

        assert_eq!(map.regions.len(), 1);
        assert_eq!(map.count_for("DE"), 2);
        assert_eq!(map.max_count, 2);
        assert_eq!(map.intensity("DE"), Some(1.0));
    }

    #[test]
    fn test_map_joins_boundaries() {
        let index = AggregationIndex::build(&scenario());
        let world = GeoBoundaries::from_geojson_str("world", WORLD, "iso_a2").unwrap();
        let map = MapView::build(&index, Some(&world), 1906);

        assert_eq!(map.regions.len(), 3);
        assert_eq!(map.regions[0].count, 0);
        assert_eq!(map.regions[1].count, 1);
        assert_eq!(map.regions[2].code, None);
        assert_eq!(map.intensity("FR"), None);
    }

    #[test]
    fn test_year_without_data() {
        let index = AggregationIndex::build(&scenario());
        let map = MapView::build(&index, None, 1950);
        assert_eq!(map.max_count, 0);
        assert_eq!(map.intensity("DE"), None);
    }
}
