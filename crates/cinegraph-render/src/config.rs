//! Chart configuration and styling

use cinegraph_common::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for one rendered chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Number of Movies Released Over Time".to_string(),
            width: 1350,
            height: 500,
            x_label: None,
            y_label: Some("Number of Movies Released".to_string()),
            style: StyleConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Load a chart configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parse a chart configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|err| {
            cinegraph_common::CineGraphError::config_with_source("invalid chart config", err)
        })
    }
}

/// Styling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub background_color: Option<String>,
    #[serde(default)]
    pub title_font: FontConfig,
    #[serde(default)]
    pub label_font: FontConfig,
    #[serde(default)]
    pub margins: MarginConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: Some("#FFFFFF".to_string()),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 16,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
        }
    }
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12,
        }
    }
}

/// Margin configuration, mirroring the original chart geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 10,
            right: 10,
            bottom: 60,
            left: 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.width, 1350);
        assert_eq!(config.style.title_font.size, 16);
        assert_eq!(config.style.margins.left, 40);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ChartConfig {
            title: "Test".to_string(),
            width: 800,
            height: 400,
            x_label: Some("Year".to_string()),
            y_label: None,
            style: StyleConfig::default(),
        };
        let toml_text = toml::to_string(&config).unwrap();
        let parsed = ChartConfig::from_toml_str(&toml_text).unwrap();

        assert_eq!(parsed.title, "Test");
        assert_eq!(parsed.width, 800);
        assert_eq!(parsed.x_label.as_deref(), Some("Year"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ChartConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "title = \"From File\"\nwidth = 640\nheight = 480\n"
        )
        .unwrap();

        let config = ChartConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.title, "From File");
        assert_eq!(config.width, 640);
        // Omitted sections fall back to defaults.
        assert_eq!(config.style.margins.bottom, 60);
    }
}
