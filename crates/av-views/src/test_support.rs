use av_data::ExhibitionRecord;

pub fn record(country: &str, year: Option<i32>, exhibition_type: &str) -> ExhibitionRecord {
    ExhibitionRecord {
        year,
        country: country.to_string(),
        city: String::new(),
        exhibition_type: exhibition_type.to_string(),
        paintings: 0,
        artist_id: String::new(),
        artist_first_name: String::new(),
        artist_last_name: String::new(),
        artist_gender: String::new(),
    }
}

/// DE/1905 solo, DE/1905 group, DE/1906 solo
pub fn scenario() -> Vec<ExhibitionRecord> {
    vec![
        record("DE", Some(1905), "solo"),
        record("DE", Some(1905), "group"),
        record("DE", Some(1906), "solo"),
    ]
}

pub fn artist_record(id: &str, first: &str, last: &str, year: i32, paintings: u32) -> ExhibitionRecord {
    ExhibitionRecord {
        paintings,
        artist_id: id.to_string(),
        artist_first_name: first.to_string(),
        artist_last_name: last.to_string(),
        ..record("DE", Some(year), "solo")
    }
}
