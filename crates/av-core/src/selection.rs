//! Country/year selection state
//!
//! The dashboard starts with no country selected. Clicking a map region moves
//! it to [`Selection::CountrySelected`]; after that, year changes keep the
//! country and refresh every per-selection view. There is no way back to
//! [`Selection::NoSelection`]. Until the first click, only the map follows the
//! year slider.

use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

/// A derived view the render layer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    /// Choropleth of exhibition counts for the selected year
    Map,
    /// Tooltip-style summary of the selected country
    CountrySummary,
    /// Exhibition counts per exhibition type
    TypeDistribution,
    /// Exhibition counts per city
    CityDistribution,
    /// Exhibition counts per artist gender
    GenderDistribution,
    /// Artists ranked by painting count
    TopArtists,
    /// Painting counts over time for the focused artist
    ArtistSeries,
}

impl ViewKind {
    /// Views recomputed from the selected country/year slice
    pub const PER_SELECTION: [ViewKind; 6] = [
        ViewKind::CountrySummary,
        ViewKind::TypeDistribution,
        ViewKind::CityDistribution,
        ViewKind::GenderDistribution,
        ViewKind::TopArtists,
        ViewKind::ArtistSeries,
    ];
}

/// The set of views a transition requires to be recomputed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshPlan {
    views: Vec<ViewKind>,
}

impl RefreshPlan {
    /// Nothing to refresh
    pub fn none() -> Self {
        Self::default()
    }

    /// Only the map
    pub fn map_only() -> Self {
        Self { views: vec![ViewKind::Map] }
    }

    /// The map and every per-selection view
    pub fn full() -> Self {
        let mut views = vec![ViewKind::Map];
        views.extend_from_slice(&ViewKind::PER_SELECTION);
        Self { views }
    }

    /// Only the artist series
    pub fn artist_series() -> Self {
        Self { views: vec![ViewKind::ArtistSeries] }
    }

    pub fn contains(&self, view: ViewKind) -> bool {
        self.views.contains(&view)
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Whether any view derived from the country/year slice is included
    pub fn touches_selection(&self) -> bool {
        ViewKind::PER_SELECTION.iter().any(|v| self.contains(*v))
    }

    pub fn views(&self) -> &[ViewKind] {
        &self.views
    }
}

/// Inclusive bounds of the year slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    pub fn new(min: i32, max: i32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn clamp(&self, year: i32) -> i32 {
        year.clamp(self.min, self.max)
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        Self { min: 1902, max: 1916 }
    }
}

/// The user's current country/year focus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Initial state: the slider moves the map, nothing else
    NoSelection { year: i32 },
    /// A country has been clicked
    CountrySelected { country: String, year: i32 },
}

impl Selection {
    pub fn year(&self) -> i32 {
        match self {
            Selection::NoSelection { year } | Selection::CountrySelected { year, .. } => *year,
        }
    }

    pub fn country(&self) -> Option<&str> {
        match self {
            Selection::NoSelection { .. } => None,
            Selection::CountrySelected { country, .. } => Some(country),
        }
    }
}

/// Mutable selection owned by the dashboard and passed to view computations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selection: Selection,
    bounds: YearBounds,
    focused_artist: Option<String>,
}

impl SelectionState {
    /// Create the initial state at `initial_year`, clamped into `bounds`
    pub fn new(initial_year: i32, bounds: YearBounds) -> Self {
        Self {
            selection: Selection::NoSelection { year: bounds.clamp(initial_year) },
            bounds,
            focused_artist: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn year(&self) -> i32 {
        self.selection.year()
    }

    pub fn selected_country(&self) -> Option<&str> {
        self.selection.country()
    }

    pub fn is_country_selected(&self) -> bool {
        matches!(self.selection, Selection::CountrySelected { .. })
    }

    /// Artist picked from the ranked list, if any
    pub fn focused_artist(&self) -> Option<&str> {
        self.focused_artist.as_deref()
    }

    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Map-region click
    ///
    /// The code is normalized like record countries. A blank code leaves the
    /// state untouched.
    pub fn select_country(&mut self, code: &str) -> RefreshPlan {
        let country = code.trim().to_uppercase();
        if country.is_empty() {
            warn!("Ignoring click on a region without a country code");
            return RefreshPlan::none();
        }

        let year = self.year();
        debug!("Country selected: {} ({})", country, year);
        self.selection = Selection::CountrySelected { country, year };
        self.focused_artist = None;
        RefreshPlan::full()
    }

    /// Year-slider input
    ///
    /// Every call yields a plan, even when the year is unchanged.
    pub fn set_year(&mut self, year: i32) -> RefreshPlan {
        let year = self.bounds.clamp(year);
        match &mut self.selection {
            Selection::NoSelection { year: current } => {
                *current = year;
                RefreshPlan::map_only()
            }
            Selection::CountrySelected { year: current, country } => {
                debug!("Year changed to {} with {} selected", year, country);
                *current = year;
                self.focused_artist = None;
                RefreshPlan::full()
            }
        }
    }

    /// Artist-list click
    pub fn select_artist(&mut self, artist_id: &str) -> RefreshPlan {
        if !self.is_country_selected() {
            return RefreshPlan::none();
        }
        self.focused_artist = Some(artist_id.to_string());
        RefreshPlan::artist_series()
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        let bounds = YearBounds::default();
        Self::new(1905, bounds)
    }
}
