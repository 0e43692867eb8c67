//! Configuration for the dashboard views and exporters.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::algorithm::ranking::LabelPolicy;
use crate::error::util::read_text_file;
use crate::error::{DashboardError, Result};
use crate::models::DatasetKind;
use crate::utils::color::MISSING_COLOR;

/// Configuration for the `Dashboard`
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the JSON snapshots
    pub data_dir: PathBuf,
    /// Names longer than this many characters are shortened on chart labels
    pub label_max_chars: usize,
    /// Characters kept from a shortened label
    pub label_keep_chars: usize,
    /// Suffix appended to a shortened label
    pub label_suffix: String,
    /// Bars shown per category chart
    pub chart_limits: ChartLimits,
    /// Decimals used when formatting percentages
    pub percentage_decimals: usize,
    /// Maximum entities in a side-by-side comparison
    pub compare_max_selection: usize,
    /// Entities shown individually in a share breakdown before "Others"
    pub share_top_k: usize,
    /// Nearest peers listed on an entity profile
    pub peer_count: usize,
    /// Map palettes per dataset
    pub palettes: MapPalettes,
    /// Fill for entities with no value
    pub missing_color: String,
    /// Export settings
    pub export: ExportConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            label_max_chars: 15,
            label_keep_chars: 12,
            label_suffix: "...".to_string(),
            chart_limits: ChartLimits::default(),
            percentage_decimals: 1,
            compare_max_selection: 4,
            share_top_k: 5,
            peer_count: 3,
            palettes: MapPalettes::default(),
            missing_color: MISSING_COLOR.to_string(),
            export: ExportConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Load overrides from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = read_text_file(path, "loading the dashboard configuration")?;
        let config: Self = serde_json::from_str(&text).map_err(|e| DashboardError::json(path, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the views cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.label_keep_chars > self.label_max_chars {
            return Err(DashboardError::Config(format!(
                "label_keep_chars ({}) exceeds label_max_chars ({})",
                self.label_keep_chars, self.label_max_chars
            )));
        }
        if self.compare_max_selection == 0 {
            return Err(DashboardError::Config(
                "compare_max_selection must be at least 1".to_string(),
            ));
        }
        if self.export.min_column_width > self.export.max_column_width {
            return Err(DashboardError::Config(format!(
                "min_column_width ({}) exceeds max_column_width ({})",
                self.export.min_column_width, self.export.max_column_width
            )));
        }
        if self.export.pixel_ratio <= 0.0 {
            return Err(DashboardError::Config(
                "pixel_ratio must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Chart label shortening rule
    #[must_use]
    pub fn label_policy(&self) -> LabelPolicy {
        LabelPolicy {
            max_chars: self.label_max_chars,
            keep_chars: self.label_keep_chars,
            suffix: self.label_suffix.clone(),
        }
    }
}

/// Per-dataset bar count; `None` shows every record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChartLimits {
    pub gdp: Option<usize>,
    pub banking: Option<usize>,
    pub exports: Option<usize>,
    pub tourism: Option<usize>,
}

impl Default for ChartLimits {
    fn default() -> Self {
        Self {
            gdp: None,
            banking: Some(20),
            exports: Some(15),
            tourism: Some(15),
        }
    }
}

impl ChartLimits {
    /// Limit for one dataset
    #[must_use]
    pub const fn limit(&self, kind: DatasetKind) -> Option<usize> {
        match kind {
            DatasetKind::Gdp => self.gdp,
            DatasetKind::Banking => self.banking,
            DatasetKind::Exports => self.exports,
            DatasetKind::Tourism => self.tourism,
        }
    }
}

/// Six-step map palettes, light to dark
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapPalettes {
    pub gdp: Vec<String>,
    pub banking: Vec<String>,
    pub exports: Vec<String>,
    pub tourism: Vec<String>,
}

fn palette(colors: [&str; 6]) -> Vec<String> {
    colors.iter().map(|c| (*c).to_string()).collect()
}

impl Default for MapPalettes {
    fn default() -> Self {
        Self {
            gdp: palette(["#e8f4f8", "#b3d9e8", "#7ebfd8", "#49a5c8", "#148bb8", "#003366"]),
            exports: palette(["#fff3e6", "#ffe0b3", "#ffcc80", "#ffb74d", "#ffa726", "#ff9933"]),
            banking: palette(["#e8f5e9", "#c8e6c9", "#a5d6a7", "#81c784", "#4caf50", "#138808"]),
            tourism: palette(["#ede7f6", "#d1c4e9", "#b39ddb", "#9575cd", "#7e57c2", "#6366f1"]),
        }
    }
}

impl MapPalettes {
    /// Palette for one dataset
    #[must_use]
    pub fn palette(&self, kind: DatasetKind) -> &[String] {
        match kind {
            DatasetKind::Gdp => &self.gdp,
            DatasetKind::Banking => &self.banking,
            DatasetKind::Exports => &self.exports,
            DatasetKind::Tourism => &self.tourism,
        }
    }
}

/// Settings for CSV, spreadsheet, and chart image exports
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Narrowest spreadsheet column, in character widths
    pub min_column_width: usize,
    /// Widest spreadsheet column, in character widths
    pub max_column_width: usize,
    /// Extra width added to the longest cell of a column
    pub column_padding: usize,
    /// Raster density of chart images
    pub pixel_ratio: f32,
    /// Sheet name used when the dataset title is unusable
    pub sheet_fallback_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            min_column_width: 10,
            max_column_width: 40,
            column_padding: 2,
            pixel_ratio: 2.0,
            sheet_fallback_name: "Data".to_string(),
        }
    }
}
