//! City table
//!
//! Ordered mapping of airport codes to display names. The first entry is the
//! default destination of the dashboard.

use serde::{Deserialize, Serialize};

/// A single city served by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// IATA city/airport code (e.g. "SYD")
    pub code: String,
    /// Human readable name (e.g. "Sydney")
    pub name: String,
}

impl City {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Ordered city table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityTable {
    cities: Vec<City>,
}

const DEFAULT_CITIES: [(&str, &str); 7] = [
    ("SYD", "Sydney"),
    ("MEL", "Melbourne"),
    ("BNE", "Brisbane"),
    ("PER", "Perth"),
    ("ADL", "Adelaide"),
    ("CBR", "Canberra"),
    ("HBA", "Hobart"),
];

impl Default for CityTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_CITIES
                .iter()
                .map(|(code, name)| City::new(*code, *name))
                .collect(),
        )
    }
}

impl CityTable {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// All cities in table order
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Look up the display name of a code
    pub fn name(&self, code: &str) -> Option<&str> {
        self.cities
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.name.as_str())
    }

    /// Display name, falling back to the code itself for unknown cities
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.name(code).unwrap_or(code)
    }

    /// Code of the first city, used when no destination is selected
    pub fn default_code(&self) -> Option<&str> {
        self.cities.first().map(|c| c.code.as_str())
    }

    /// Every city code except `destination`, in table order
    pub fn origins_for(&self, destination: &str) -> Vec<String> {
        self.cities
            .iter()
            .filter(|c| c.code != destination)
            .map(|c| c.code.clone())
            .collect()
    }
}
