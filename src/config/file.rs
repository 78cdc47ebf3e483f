//! File-based configuration loading
//!
//! Loads an alternative city table from a JSON file

use super::cities::CityTable;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

impl CityTable {
    /// Load the city table from a JSON file
    ///
    /// The file holds an array of `{"code": "...", "name": "..."}` objects.
    /// Order is preserved; the first entry becomes the default destination.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading city table from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read city file: {:?}", path))?;

        let table: CityTable = serde_json::from_str(&content)
            .with_context(|| "Failed to parse city JSON")?;

        table.validate()?;

        debug!("Loaded {} cities", table.len());
        Ok(table)
    }

    /// Validate the city table
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            anyhow::bail!("At least one city must be configured");
        }

        let mut seen = HashSet::new();
        for city in self.cities() {
            if city.code.trim().is_empty() {
                anyhow::bail!("City '{}' must have a code", city.name);
            }
            if city.code.contains(char::is_whitespace) {
                anyhow::bail!("City code cannot contain whitespace: '{}'", city.code);
            }
            if !seen.insert(city.code.as_str()) {
                anyhow::bail!("Duplicate city code: {}", city.code);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_city_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"code": "OOL", "name": "Gold Coast"},
                {"code": "CNS", "name": "Cairns"}
            ]"#,
        )
        .unwrap();

        let table = CityTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.default_code(), Some("OOL"));
        assert_eq!(table.name("CNS"), Some("Cairns"));
    }

    #[test]
    fn test_reject_empty_table() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        let err = CityTable::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("At least one city"));
    }

    #[test]
    fn test_reject_duplicate_codes() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"[{"code": "SYD", "name": "Sydney"}, {"code": "SYD", "name": "Sydney again"}]"#,
        )
        .unwrap();

        let err = CityTable::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate city code"));
    }

    #[test]
    fn test_missing_file() {
        let result = CityTable::load(Path::new("/nonexistent/cities.json"));
        assert!(result.is_err());
    }
}
