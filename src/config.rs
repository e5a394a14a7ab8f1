//! Run configuration.
//!
//! Everything the pipeline needs to know up front lives in [`RunConfig`]:
//! where the dataset is, where the chart panel goes, the reference year for
//! validity checks and the chart styling. The config is built once in the
//! entry point and passed down explicitly; no stage reads ambient state.
//!
//! Path resolution mirrors the deployment layout: the containerized paths
//! are tried first, then the local relative ones. A CLI override beats both.

use anyhow::{Context as _, Result};
use chrono::{Datelike as _, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dataset path inside the container image.
pub const CONTAINER_DATA_PATH: &str = "/app/data/vgsales.csv";
/// Dataset path for local runs.
pub const LOCAL_DATA_PATH: &str = "data/vgsales.csv";

/// Output directory inside the container image.
pub const CONTAINER_OUTPUT_DIR: &str = "/app/output";
/// Output directory for local runs, created on demand.
pub const LOCAL_OUTPUT_DIR: &str = "output";

/// File name of the rendered chart panel.
pub const CHART_FILE_NAME: &str = "vgsales_analysis.png";

/// How many entries "top N" listings show.
pub const DEFAULT_TOP_N: usize = 10;

/// Styling for the chart panel, passed to the renderer instead of being
/// configured globally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Font size for panel captions.
    pub caption_px: u32,
    /// Font size for axis labels.
    pub label_px: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1800,
            height: 1200,
            caption_px: 22,
            label_px: 14,
        }
    }
}

/// Resolved configuration for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub data_path: PathBuf,
    pub output_dir: PathBuf,
    /// Upper bound for valid release years, read from the system clock once
    /// at startup so the cleaner itself stays deterministic.
    pub reference_year: i32,
    pub top_n: usize,
    pub chart: ChartStyle,
}

impl RunConfig {
    /// Builds the configuration, preferring CLI overrides over the
    /// container/local fallback paths.
    pub fn resolve(data: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        let data_path = data.unwrap_or_else(|| {
            if Path::new(CONTAINER_DATA_PATH).exists() {
                PathBuf::from(CONTAINER_DATA_PATH)
            } else {
                PathBuf::from(LOCAL_DATA_PATH)
            }
        });
        let output_dir = output.unwrap_or_else(|| {
            if Path::new(CONTAINER_OUTPUT_DIR).exists() {
                PathBuf::from(CONTAINER_OUTPUT_DIR)
            } else {
                PathBuf::from(LOCAL_OUTPUT_DIR)
            }
        });

        Self {
            data_path,
            output_dir,
            reference_year: Local::now().year(),
            top_n: DEFAULT_TOP_N,
            chart: ChartStyle::default(),
        }
    }

    /// Full path of the chart panel image.
    pub fn chart_path(&self) -> PathBuf {
        self.output_dir.join(CHART_FILE_NAME)
    }

    /// Creates the output directory if it does not exist yet.
    pub fn ensure_output_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir).with_context(|| {
            format!(
                "failed to create output directory: {}",
                self.output_dir.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_fallback() {
        let config = RunConfig::resolve(
            Some(PathBuf::from("/tmp/other.csv")),
            Some(PathBuf::from("/tmp/out")),
        );
        assert_eq!(config.data_path, PathBuf::from("/tmp/other.csv"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_chart_path_joins_file_name() {
        let config = RunConfig::resolve(None, Some(PathBuf::from("/tmp/out")));
        assert_eq!(config.chart_path(), PathBuf::from("/tmp/out").join(CHART_FILE_NAME));
    }

    #[test]
    fn test_reference_year_is_plausible() {
        let config = RunConfig::resolve(None, None);
        assert!(config.reference_year >= 2024);
    }
}
