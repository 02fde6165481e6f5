//! Dashboard Configuration
//! Paths, resolution and chart labels, loadable from a JSON file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Smallest canvas the 2x2 layout still fits in.
pub const MIN_WIDTH: u32 = 800;
pub const MIN_HEIGHT: u32 = 500;
pub const MAX_SIDE: u32 = 12_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config JSON")]
    Parse(#[from] serde_json::Error),
    #[error(
        "Resolution {width}x{height} out of range (min {}x{}, max {})",
        MIN_WIDTH,
        MIN_HEIGHT,
        MAX_SIDE
    )]
    Resolution { width: u32, height: u32 },
}

/// Text drawn on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLabels {
    pub title: String,
    pub currency_prefix: String,
    pub product_title: String,
    pub product_axis: String,
    pub region_title: String,
    pub trend_title: String,
    pub trend_x_axis: String,
    pub trend_y_axis: String,
    pub top_title: String,
    pub top_axis: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            title: "SALES DASHBOARD 2024 - FULL ANALYSIS".to_string(),
            currency_prefix: "$".to_string(),
            product_title: "Total Sales by Product".to_string(),
            product_axis: "Sales (COP $)".to_string(),
            region_title: "Sales Distribution by Region".to_string(),
            trend_title: "Daily Sales Trend (2024)".to_string(),
            trend_x_axis: "Date".to_string(),
            trend_y_axis: "Total Sales (COP $)".to_string(),
            top_title: "Top 5 Best-Selling Products".to_string(),
            top_axis: "Total Sales (COP $)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Open the saved image in the system viewer.
    pub show: bool,
    pub labels: ChartLabels,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        // 16x10 inches at 200 dpi
        Self {
            input: PathBuf::from("sales_data_2024.csv"),
            output: PathBuf::from("sales_dashboard.png"),
            width: 3200,
            height: 2000,
            show: false,
            labels: ChartLabels::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fits = (MIN_WIDTH..=MAX_SIDE).contains(&self.width)
            && (MIN_HEIGHT..=MAX_SIDE).contains(&self.height);
        if fits {
            Ok(())
        } else {
            Err(ConfigError::Resolution {
                width: self.width,
                height: self.height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json_str(
            r#"{ "input": "q3.csv", "width": 1600, "labels": { "currency_prefix": "€" } }"#,
        )
        .unwrap();

        assert_eq!(config.input, PathBuf::from("q3.csv"));
        assert_eq!(config.width, 1600);
        assert_eq!(config.height, 2000);
        assert_eq!(config.output, PathBuf::from("sales_dashboard.png"));
        assert_eq!(config.labels.currency_prefix, "€");
        assert_eq!(config.labels.title, ChartLabels::default().title);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DashboardConfig::from_json_str("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn resolution_bounds() {
        assert!(DashboardConfig::default().validate().is_ok());

        let tiny = DashboardConfig {
            width: 320,
            height: 200,
            ..Default::default()
        };
        assert!(matches!(
            tiny.validate(),
            Err(ConfigError::Resolution {
                width: 320,
                height: 200
            })
        ));
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.json");
        std::fs::write(&path, r#"{ "show": true, "output": "out/q.png" }"#).unwrap();

        let config = DashboardConfig::from_json_file(&path).unwrap();

        assert!(config.show);
        assert_eq!(config.output, PathBuf::from("out/q.png"));
        assert!(matches!(
            DashboardConfig::from_json_file(dir.path().join("missing.json")),
            Err(ConfigError::Read { .. })
        ));
    }
}
