//! Plain-text rendering of the dashboard views

use std::fmt;

use av_views::{DashboardViews, Distribution, SelectionViews};

const NO_DATA: &str = "No data available.";

/// Text report of every view, written through `Display`
pub struct TextReport<'a>(pub &'a DashboardViews);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_map(f, self.0)?;
        match &self.0.country {
            Some(country) => write_country(f, country),
            None => writeln!(f, "\nClick a country to see its exhibitions."),
        }
    }
}

fn write_map(f: &mut fmt::Formatter<'_>, views: &DashboardViews) -> fmt::Result {
    let map = &views.map;
    writeln!(f, "== Exhibitions in {} (max {}) ==", map.year, map.max_count)?;

    let mut with_data: Vec<_> = map.regions.iter().filter(|r| r.count > 0).collect();
    with_data.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.code.cmp(&b.code)));
    if with_data.is_empty() {
        writeln!(f, "{}", NO_DATA)?;
    }
    for region in with_data {
        let label = region.name.as_deref().or(region.code.as_deref()).unwrap_or("?");
        writeln!(f, "{:<24} {:>5}", label, region.count)?;
    }
    Ok(())
}

fn write_country(f: &mut fmt::Formatter<'_>, views: &SelectionViews) -> fmt::Result {
    writeln!(f, "\n== {} in {} ==", views.country, views.year)?;
    writeln!(f, "{}", views.summary.to_text())?;

    write_distribution(f, "Top Cities by Exhibitions", &views.cities)?;
    write_distribution(f, "Exhibition Types Distribution", &views.types)?;
    write_distribution(f, "Artist Gender Distribution", &views.genders)?;

    writeln!(f, "\n-- Top artists --")?;
    if views.top_artists.is_empty() {
        writeln!(f, "No artists found for this country and year.")?;
    }
    for artist in &views.top_artists {
        writeln!(f, "{} ({} paintings)", artist.artist.name, artist.paintings)?;
    }

    match &views.artist_series {
        Some(series) => {
            writeln!(f, "\n-- Exhibition trends for {} --", series.artist_name)?;
            for point in &series.points {
                writeln!(f, "{}: {} paintings", point.year, point.paintings)?;
            }
            Ok(())
        }
        None => writeln!(f, "\n-- Exhibition trends --\n{}", NO_DATA),
    }
}

fn write_distribution(f: &mut fmt::Formatter<'_>, title: &str, dist: &Distribution) -> fmt::Result {
    writeln!(f, "\n-- {} --", title)?;
    if dist.is_empty() {
        return writeln!(f, "{}", NO_DATA);
    }
    for (key, count) in dist.entries() {
        let label = if key.is_empty() { "(unknown)" } else { key.as_str() };
        writeln!(f, "{:<24} {:>5}", label, count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use av_core::EventBus;
    use av_data::{DashboardConfig, ExhibitionRecord, LoadedDataset, RecordStore};
    use av_views::Dashboard;

    fn record(year: i32, city: &str) -> ExhibitionRecord {
        ExhibitionRecord {
            year: Some(year),
            country: "DE".to_string(),
            city: city.to_string(),
            exhibition_type: "solo".to_string(),
            paintings: 2,
            artist_id: "1".to_string(),
            artist_first_name: "Paula".to_string(),
            artist_last_name: "Becker".to_string(),
            artist_gender: "F".to_string(),
        }
    }

    fn dashboard() -> Dashboard {
        let store = RecordStore::new(vec![record(1905, "Berlin"), record(1906, "Bremen")]);
        let dataset = LoadedDataset::from_store(store, None);
        Dashboard::new(dataset, &DashboardConfig::default(), Arc::new(EventBus::new()))
    }

    #[test]
    fn test_render_before_selection() {
        let dashboard = dashboard();
        let text = TextReport(dashboard.views()).to_string();
        assert!(text.starts_with("== Exhibitions in 1905 (max 1) =="));
        assert!(text.contains("Click a country"));
    }

    #[test]
    fn test_render_selected_country() {
        let mut dashboard = dashboard();
        let text = TextReport(dashboard.select_country("DE")).to_string();
        assert!(text.contains("== DE in 1905 =="));
        assert!(text.contains("Paula Becker (2 paintings)"));
        assert!(text.contains("1906: 2 paintings"));
    }

    #[test]
    fn test_render_empty_selection() {
        let mut dashboard = dashboard();
        let text = TextReport(dashboard.select_country("NL")).to_string();
        assert!(text.contains("No data available for 1905."));
        assert!(text.contains("No artists found for this country and year."));
        assert!(text.ends_with("-- Exhibition trends --\nNo data available.\n"));
    }
}
