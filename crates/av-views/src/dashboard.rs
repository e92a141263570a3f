//! Dashboard controller
//!
//! Owns the selection state, applies each interaction to it and recomputes
//! the views named by the resulting refresh plan. Every event is handled in
//! full; rapid slider input recomputes once per tick.

use std::sync::Arc;
use serde::Serialize;
use tracing::debug;

use av_core::{EventBus, RefreshPlan, Selection, SelectionState, ViewKind};
use av_core::events::events::{SelectionChanged, ViewsRefreshed};
use av_data::{DashboardConfig, ExhibitionRecord, LoadedDataset};

use crate::aggregate::filter_by_country_year;
use crate::artists::{artist_series, top_artists, ArtistSeries, ArtistTotal};
use crate::distribution::{city_distribution, gender_distribution, type_distribution, Distribution};
use crate::map::MapView;
use crate::summary::CountrySummary;

/// Views derived from the selected country/year slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionViews {
    pub country: String,
    pub year: i32,
    pub summary: CountrySummary,
    pub types: Distribution,
    pub cities: Distribution,
    pub genders: Distribution,
    pub top_artists: Vec<ArtistTotal>,
    /// Focused artist's timeline; `None` shows "no data"
    pub artist_series: Option<ArtistSeries>,
}

impl SelectionViews {
    fn empty(country: &str, year: i32) -> Self {
        Self {
            country: country.to_string(),
            year,
            summary: CountrySummary::NoData { country: country.to_string(), year },
            types: Distribution::default(),
            cities: Distribution::default(),
            genders: Distribution::default(),
            top_artists: Vec::new(),
            artist_series: None,
        }
    }

    /// No records for the selected country in the selected year
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }
}

/// Latest output for the render layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub selection: Selection,
    pub map: MapView,
    /// Present once a country has been clicked
    pub country: Option<SelectionViews>,
}

/// Interactive dashboard over a loaded dataset
pub struct Dashboard {
    dataset: LoadedDataset,
    state: SelectionState,
    top_artists: usize,
    key_cities: usize,
    bus: Arc<EventBus>,
    views: DashboardViews,
}

impl Dashboard {
    /// Create the dashboard and draw the initial map
    pub fn new(dataset: LoadedDataset, config: &DashboardConfig, bus: Arc<EventBus>) -> Self {
        let state = SelectionState::new(config.initial_year, config.year_bounds);
        let map = MapView::build(&dataset.index, dataset.boundaries.as_deref(), state.year());
        let views = DashboardViews {
            selection: state.selection().clone(),
            map,
            country: None,
        };

        Self {
            dataset,
            state,
            top_artists: config.top_artists,
            key_cities: config.key_cities,
            bus,
            views,
        }
    }

    /// Map-region click
    pub fn select_country(&mut self, code: &str) -> &DashboardViews {
        let plan = self.state.select_country(code);
        self.apply(plan);
        &self.views
    }

    /// Year-slider input
    pub fn set_year(&mut self, year: i32) -> &DashboardViews {
        let plan = self.state.set_year(year);
        self.apply(plan);
        &self.views
    }

    /// Artist-list click
    pub fn select_artist(&mut self, artist_id: &str) -> &DashboardViews {
        let plan = self.state.select_artist(artist_id);
        self.apply(plan);
        &self.views
    }

    pub fn views(&self) -> &DashboardViews {
        &self.views
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn dataset(&self) -> &LoadedDataset {
        &self.dataset
    }

    fn apply(&mut self, plan: RefreshPlan) {
        if plan.is_empty() {
            return;
        }

        let year = self.state.year();
        self.views.selection = self.state.selection().clone();

        if plan.contains(ViewKind::Map) {
            self.views.map = MapView::build(&self.dataset.index, self.dataset.boundaries.as_deref(), year);
        }
        self.bus.publish(SelectionChanged {
            country: self.state.selected_country().map(str::to_string),
            year,
            focused_artist: self.state.focused_artist().map(str::to_string),
        });

        if plan.touches_selection() {
            if let Some(country) = self.state.selected_country() {
                let records = self.dataset.store.records();
                let slice = filter_by_country_year(records, country, year);
                let mut views = match self.views.country.take() {
                    Some(v) if v.country == country && v.year == year => v,
                    _ => SelectionViews::empty(country, year),
                };

                Self::refresh_slice_views(&mut views, &plan, &slice, self.top_artists, self.key_cities);
                if plan.contains(ViewKind::ArtistSeries) {
                    let focused = self
                        .state
                        .focused_artist()
                        .map(str::to_string)
                        .or_else(|| views.top_artists.first().map(|a| a.artist.id.clone()));
                    views.artist_series = focused
                        .and_then(|id| artist_series(records, country, &id));
                }

                debug!("Refreshed {} views for {} {} ({} records)",
                    plan.views().len(), country, year, slice.len());
                self.views.country = Some(views);
            }
        }

        self.bus.publish(ViewsRefreshed { views: plan.views().to_vec() });
    }

    fn refresh_slice_views(
        views: &mut SelectionViews,
        plan: &RefreshPlan,
        slice: &[&ExhibitionRecord],
        top_n: usize,
        key_cities: usize,
    ) {
        for view in plan.views() {
            match view {
                ViewKind::CountrySummary => {
                    views.summary = CountrySummary::from_slice(&views.country, views.year, slice, key_cities);
                }
                ViewKind::TypeDistribution => views.types = type_distribution(slice.iter().copied()),
                ViewKind::CityDistribution => views.cities = city_distribution(slice.iter().copied()),
                ViewKind::GenderDistribution => views.genders = gender_distribution(slice.iter().copied()),
                ViewKind::TopArtists => views.top_artists = top_artists(slice.iter().copied(), top_n),
                ViewKind::Map | ViewKind::ArtistSeries => {}
            }
        }
    }
}
