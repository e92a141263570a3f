//! Startup loading: records first, then boundaries
//!
//! The dashboard is only constructed from a [`LoadedDataset`], so no
//! selection can happen before both loads have resolved.

use std::sync::Arc;
use av_core::EventBus;
use av_core::events::events::{BoundariesLoaded, DatasetLoaded};
use tracing::info;

use crate::config::DashboardConfig;
use crate::index::AggregationIndex;
use crate::normalize::Normalizer;
use crate::sources::{CsvSource, GeoBoundaries, RecordSource};
use crate::store::RecordStore;
use crate::DataError;

/// Everything the dashboard needs, available after loading completes
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub store: RecordStore,
    pub index: Arc<AggregationIndex>,
    pub boundaries: Option<Arc<GeoBoundaries>>,
}

impl LoadedDataset {
    /// Assemble a dataset from already-normalized records
    pub fn from_store(store: RecordStore, boundaries: Option<GeoBoundaries>) -> Self {
        let index = AggregationIndex::build(store.records());
        Self {
            store,
            index: Arc::new(index),
            boundaries: boundaries.map(Arc::new),
        }
    }
}

/// Load the configured CSV and, if configured, the boundaries file
pub async fn load_dataset(config: &DashboardConfig, bus: &EventBus) -> Result<LoadedDataset, DataError> {
    let source = CsvSource::open(config.data_path.clone()).await?;
    load_from_sources(&source, config, bus).await
}

/// Load records from any source, then boundaries from the configured path
pub async fn load_from_sources(
    source: &dyn RecordSource,
    config: &DashboardConfig,
    bus: &EventBus,
) -> Result<LoadedDataset, DataError> {
    let rows = source.read_rows().await?;
    let records = Normalizer::new(config.null_config.clone()).normalize_rows(&rows);
    let store = RecordStore::new(records);

    let index = tokio::task::spawn_blocking({
        let store = store.clone();
        move || AggregationIndex::build(store.records())
    }).await?;

    info!("Loaded {} records from {}", store.len(), source.source_name());
    bus.publish(DatasetLoaded {
        source_name: source.source_name().to_string(),
        record_count: store.len(),
        unparsed_years: store.unparsed_years(),
    });

    // Boundaries are only fetched once the records are in
    let boundaries = match &config.boundaries_path {
        Some(path) => {
            let boundaries = GeoBoundaries::load(path, &config.geo_code_property).await?;
            bus.publish(BoundariesLoaded {
                source_name: boundaries.source_name().to_string(),
                feature_count: boundaries.len(),
            });
            Some(Arc::new(boundaries))
        }
        None => None,
    };

    Ok(LoadedDataset {
        store,
        index: Arc::new(index),
        boundaries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{columns, RawRow};
    use crate::sources::MemorySource;
    use av_core::handler_from_fn;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn rows() -> Vec<RawRow> {
        vec![
            RawRow::new().with(columns::START_DATE, "1905").with(columns::COUNTRY, "de"),
            RawRow::new().with(columns::START_DATE, "1905").with(columns::COUNTRY, "DE"),
            RawRow::new().with(columns::START_DATE, "unknown").with(columns::COUNTRY, "FR"),
        ]
    }

    #[tokio::test]
    async fn test_load_from_memory_without_boundaries() {
        let config = DashboardConfig { boundaries_path: None, ..DashboardConfig::default() };
        let bus = EventBus::new();
        let loaded_events = Arc::new(AtomicUsize::new(0));
        let counter = loaded_events.clone();
        bus.subscribe::<DatasetLoaded>(handler_from_fn(move |event| {
            if let Some(loaded) = event.as_any().downcast_ref::<DatasetLoaded>() {
                assert_eq!(loaded.record_count, 3);
                assert_eq!(loaded.unparsed_years, 1);
                counter.fetch_add(1, Ordering::SeqCst);
            }
        }));

        let source = MemorySource::new("memory", rows());
        let dataset = load_from_sources(&source, &config, &bus).await.unwrap();

        assert_eq!(dataset.store.len(), 3);
        assert_eq!(dataset.index.count("DE", 1905), 2);
        assert_eq!(dataset.index.total(), 2);
        assert!(dataset.boundaries.is_none());
        assert_eq!(loaded_events.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_csv_and_boundaries() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("records.csv");
        let geo_path = dir.path().join("world.geojson");
        std::fs::write(&data_path, "e.startdate,e.country,e.city\n1905,DE,Berlin\n1906,FR,Paris\n").unwrap();
        std::fs::write(&geo_path, r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"iso_a2":"DE"},"geometry":null}]}"#).unwrap();

        let config = DashboardConfig {
            data_path,
            boundaries_path: Some(geo_path),
            ..DashboardConfig::default()
        };
        let dataset = load_dataset(&config, &EventBus::new()).await.unwrap();

        assert_eq!(dataset.store.len(), 2);
        assert_eq!(dataset.boundaries.as_ref().map(|b| b.len()), Some(1));
    }

    #[tokio::test]
    async fn test_missing_boundaries_fail_the_load() {
        let config = DashboardConfig {
            boundaries_path: Some("/nonexistent/world.geojson".into()),
            ..DashboardConfig::default()
        };
        let source = MemorySource::new("memory", rows());
        let result = load_from_sources(&source, &config, &EventBus::new()).await;
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn test_from_store_builds_index() {
        let store = RecordStore::new(Normalizer::default().normalize_rows(&rows()));
        let dataset = LoadedDataset::from_store(store, None);
        assert_eq!(dataset.index.count("DE", 1905), 2);
    }
}
