// ⚙️ Display Configuration - labels as data
// UI strings loaded from JSON; the denomination set is not configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub subtitle: String,

    /// Column headers: denomination, decrement, quantity, increment, total
    pub denomination_header: String,
    pub decrement_header: String,
    pub quantity_header: String,
    pub increment_header: String,
    pub total_header: String,

    /// Label next to the grand total
    pub grand_total_label: String,

    pub reset_label: String,
    pub hint: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: "Kalkulator Kas".to_string(),
            subtitle: "Hitung total nilai uang dari berbagai denominasi Rupiah".to_string(),
            denomination_header: "Denominasi".to_string(),
            decrement_header: "Kurang".to_string(),
            quantity_header: "Jumlah".to_string(),
            increment_header: "Tambah".to_string(),
            total_header: "Total".to_string(),
            grand_total_label: "Total Kas".to_string(),
            reset_label: "Reset".to_string(),
            hint: "Gunakan tombol +/- untuk menambah atau mengurangi jumlah, atau ketik langsung di kolom jumlah. Total akan dihitung secara otomatis.".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Load labels from a JSON file; missing fields keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read display config: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse display config JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_indonesian_labels() {
        let config = DisplayConfig::default();

        assert_eq!(config.title, "Kalkulator Kas");
        assert_eq!(config.grand_total_label, "Total Kas");
        assert_eq!(config.quantity_header, "Jumlah");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DisplayConfig::from_json(r#"{ "title": "Cash Count", "grand_total_label": "Drawer Total" }"#)
            .unwrap();

        assert_eq!(config.title, "Cash Count");
        assert_eq!(config.grand_total_label, "Drawer Total");
        assert_eq!(config.denomination_header, "Denominasi");
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = DisplayConfig::from_json("{ title: ").unwrap_err();
        assert!(err.to_string().contains("display config"));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("kalkulator-kas-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "reset_label": "Clear" }"#).unwrap();

        let config = DisplayConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.reset_label, "Clear");
        assert_eq!(config.title, "Kalkulator Kas");
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = DisplayConfig::from_file("/nonexistent/kalkulator-kas.json");
        assert!(result.is_err());
    }
}
