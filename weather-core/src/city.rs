use std::{collections::HashMap, sync::LazyLock};

use serde::Serialize;

use crate::error::LookupError;

/// A supported city with the coordinates sent to the weather service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityEntry {
    pub display_name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

static CITIES: [(&str, CityEntry); 6] = [
    (
        "nairobi",
        CityEntry {
            display_name: "Nairobi, Kenya",
            latitude: -1.2864,
            longitude: 36.8172,
        },
    ),
    (
        "london",
        CityEntry {
            display_name: "London, UK",
            latitude: 51.5074,
            longitude: -0.1278,
        },
    ),
    (
        "new york",
        CityEntry {
            display_name: "New York, USA",
            latitude: 40.7128,
            longitude: -74.006,
        },
    ),
    (
        "tokyo",
        CityEntry {
            display_name: "Tokyo, Japan",
            latitude: 35.6762,
            longitude: 139.6503,
        },
    ),
    (
        "paris",
        CityEntry {
            display_name: "Paris, France",
            latitude: 48.8566,
            longitude: 2.3522,
        },
    ),
    (
        "sydney",
        CityEntry {
            display_name: "Sydney, Australia",
            latitude: -33.8688,
            longitude: 151.2093,
        },
    ),
];

static CITY_TABLE: LazyLock<HashMap<&'static str, CityEntry>> =
    LazyLock::new(|| CITIES.iter().cloned().collect());

/// Trim surrounding whitespace and lowercase, producing a table key.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Resolve free-text input to a table entry. Exact key match only.
pub fn resolve(raw: &str) -> Result<&'static CityEntry, LookupError> {
    let key = normalize(raw);
    if key.is_empty() {
        return Err(LookupError::NotFound);
    }

    CITY_TABLE.get(key.as_str()).ok_or(LookupError::NotFound)
}

/// All supported cities in display order.
pub fn supported_cities() -> impl Iterator<Item = &'static CityEntry> {
    CITIES.iter().map(|(_, entry)| entry)
}
