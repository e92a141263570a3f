//! Command-line front end for the exhibition dashboard
//!
//! Loads the dataset, replays the requested interactions against the
//! dashboard and prints the resulting views.

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use av_core::{handler_from_fn, EventBus};
use av_core::events::events::{BoundariesLoaded, DatasetLoaded};
use av_data::{load_dataset, DashboardConfig};
use av_views::Dashboard;

mod render;

#[derive(Parser, Debug)]
#[command(name = "artvis", version, about = "Art exhibitions dashboard, 1902-1916")]
struct Args {
    /// JSON config file; defaults apply when omitted
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Exhibition records CSV
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Country boundaries GeoJSON
    #[arg(long, value_name = "FILE", conflicts_with = "no_boundaries")]
    boundaries: Option<PathBuf>,

    /// Skip the boundaries file and list indexed countries only
    #[arg(long)]
    no_boundaries: bool,

    /// Country to click, as a two-letter code
    #[arg(long)]
    country: Option<String>,

    /// Slider positions, applied in order
    #[arg(long = "year", value_name = "YEAR")]
    years: Vec<i32>,

    /// Artist to click in the ranked list
    #[arg(long, value_name = "ID")]
    artist: Option<String>,

    /// Print the final views as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::from_file(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => DashboardConfig::default(),
        };

        if let Some(data) = &self.data {
            config.data_path = data.clone();
        }
        if let Some(boundaries) = &self.boundaries {
            config.boundaries_path = Some(boundaries.clone());
        }
        if self.no_boundaries {
            config.boundaries_path = None;
        }
        Ok(config)
    }
}

fn subscribe_load_logging(bus: &EventBus) {
    bus.subscribe::<DatasetLoaded>(handler_from_fn(|event| {
        if let Some(loaded) = event.as_any().downcast_ref::<DatasetLoaded>() {
            info!("Loaded {} records from {}", loaded.record_count, loaded.source_name);
            if loaded.unparsed_years > 0 {
                warn!("{} records have no usable year and are left off the map", loaded.unparsed_years);
            }
        }
    }));
    bus.subscribe::<BoundariesLoaded>(handler_from_fn(|event| {
        if let Some(loaded) = event.as_any().downcast_ref::<BoundariesLoaded>() {
            info!("Loaded {} boundary features from {}", loaded.feature_count, loaded.source_name);
        }
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = args.config()?;

    let bus = Arc::new(EventBus::new());
    subscribe_load_logging(&bus);

    let dataset = load_dataset(&config, &bus)
        .await
        .with_context(|| format!("Failed to load dataset from {}", config.data_path.display()))?;

    let mut dashboard = Dashboard::new(dataset, &config, bus);

    if let Some(country) = &args.country {
        dashboard.select_country(country);
    }
    for year in &args.years {
        dashboard.set_year(*year);
    }
    if let Some(artist) = &args.artist {
        if dashboard.state().selected_country().is_none() {
            warn!("Ignoring --artist {}: no country selected", artist);
        }
        dashboard.select_artist(artist);
    }

    if args.json {
        let json = serde_json::to_string_pretty(dashboard.views())
            .context("Failed to serialize views")?;
        println!("{}", json);
    } else {
        print!("{}", render::TextReport(dashboard.views()));
    }

    Ok(())
}
