//! Export of the displayed data slice
//!
//! Tables are exported as CSV or XLSX from a list of rows and a column list;
//! charts are exported as PNG from a `ChartCapture`. Numeric cells carry the
//! raw value, never the display-formatted string.

pub mod csv;
pub mod image;
pub mod spreadsheet;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::algorithm::{JoinedRecord, RankedEntry};
use crate::error::util::ensure_directory;
use crate::error::{DashboardError, Result};
use crate::models::{DatasetKind, Metric, MetricRecord, RegionSelection, ValueFormat};
use crate::utils::logging::log_warning;

pub use self::csv::export_csv;
pub use self::image::{ChartCapture, export_png};
pub use self::spreadsheet::{export_xlsx, sheet_name};

/// Key of the entity-name column
pub const STATE_KEY: &str = "state";

/// Table export format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// File extension without the dot
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

/// A column of an exported table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportColumn {
    /// Field key looked up on each row
    pub key: String,
    /// Header text
    pub label: String,
    pub format: ValueFormat,
}

impl ExportColumn {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>, format: ValueFormat) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            format,
        }
    }

    /// The entity-name column
    #[must_use]
    pub fn state() -> Self {
        Self::new(STATE_KEY, "State", ValueFormat::Text)
    }

    /// Column for a metric, with its export label
    #[must_use]
    pub fn metric(metric: Metric) -> Self {
        Self::new(metric.key(), metric.export_label(), metric.format())
    }

    /// Column for a metric with a custom header
    #[must_use]
    pub fn metric_labelled(metric: Metric, label: impl Into<String>) -> Self {
        Self::new(metric.key(), label, metric.format())
    }
}

/// Columns of a category table: the state name, then each metric
#[must_use]
pub fn dataset_columns(kind: DatasetKind) -> Vec<ExportColumn> {
    let metrics: &[Metric] = match kind {
        DatasetKind::Gdp => &[Metric::Gsdp, Metric::Growth, Metric::PerCapita],
        DatasetKind::Banking => &[
            Metric::Branches,
            Metric::Deposits,
            Metric::Credit,
            Metric::CdRatio,
        ],
        DatasetKind::Exports => &[Metric::Exports, Metric::Share],
        DatasetKind::Tourism => &[Metric::Domestic, Metric::Foreign, Metric::Total],
    };

    std::iter::once(ExportColumn::state())
        .chain(metrics.iter().map(|&metric| ExportColumn::metric(metric)))
        .collect()
}

/// Columns of the comparison table
#[must_use]
pub fn comparison_columns() -> Vec<ExportColumn> {
    vec![
        ExportColumn::state(),
        ExportColumn::metric_labelled(Metric::Gsdp, "GDP (Rs Crore)"),
        ExportColumn::metric_labelled(Metric::Growth, "GDP Growth (%)"),
        ExportColumn::metric_labelled(Metric::PerCapita, "Per Capita (Rs)"),
        ExportColumn::metric(Metric::Exports),
        ExportColumn::metric_labelled(Metric::Share, "Export Share (%)"),
        ExportColumn::metric_labelled(Metric::Branches, "Branches"),
        ExportColumn::metric(Metric::Deposits),
        ExportColumn::metric(Metric::Credit),
        ExportColumn::metric(Metric::CdRatio),
        ExportColumn::metric(Metric::Total),
        ExportColumn::metric(Metric::Foreign),
    ]
}

/// Columns of a ranking table
#[must_use]
pub fn ranking_columns(metric: Metric) -> Vec<ExportColumn> {
    vec![
        ExportColumn::new("rank", "Rank", ValueFormat::Number),
        ExportColumn::state(),
        ExportColumn::new("value", metric.export_label(), metric.format()),
    ]
}

/// One exported cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Text as written to CSV and used for column sizing
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
            Self::Empty => String::new(),
        }
    }

    fn numeric(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Number)
    }
}

/// A row that can be exported
pub trait ExportRow {
    /// Cell for a column; unknown keys give `CellValue::Empty`
    fn cell(&self, column: &ExportColumn) -> CellValue;
}

impl ExportRow for MetricRecord {
    fn cell(&self, column: &ExportColumn) -> CellValue {
        if column.key == STATE_KEY {
            CellValue::Text(self.state.clone())
        } else {
            CellValue::numeric(self.value(&column.key))
        }
    }
}

impl ExportRow for JoinedRecord {
    fn cell(&self, column: &ExportColumn) -> CellValue {
        match column.key.as_str() {
            STATE_KEY | "name" => CellValue::Text(self.entity.name.clone()),
            "region" => CellValue::Text(self.entity.region.label().to_string()),
            "capital" => CellValue::Text(self.entity.capital.clone()),
            "code" => CellValue::Text(self.entity.code.clone()),
            key => CellValue::numeric(Metric::from_key(key).and_then(|metric| self.value(metric))),
        }
    }
}

impl ExportRow for RankedEntry {
    fn cell(&self, column: &ExportColumn) -> CellValue {
        match column.key.as_str() {
            "rank" => CellValue::Number(self.rank as f64),
            STATE_KEY | "name" => CellValue::Text(self.name.clone()),
            "label" => CellValue::Text(self.label.clone()),
            "value" => CellValue::Number(self.value),
            _ => CellValue::Empty,
        }
    }
}

impl<T: ExportRow + ?Sized> ExportRow for &T {
    fn cell(&self, column: &ExportColumn) -> CellValue {
        (**self).cell(column)
    }
}

/// A generated export, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Write the file into `dir`, creating it if needed
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        ensure_directory(dir)?;
        let path = dir.join(&self.filename);
        if path.exists() {
            log_warning("Overwriting existing export", Some(&path));
        }
        std::fs::write(&path, &self.bytes).map_err(|e| DashboardError::io(&path, e))?;
        log::info!("Wrote {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// `<dataset>-data-<region>-<year>.<ext>`, region lowercased
#[must_use]
pub fn data_filename(kind: DatasetKind, region: RegionSelection, year: &str, ext: &str) -> String {
    format!(
        "{}-data-{}-{year}.{ext}",
        kind.slug(),
        region.label().to_lowercase()
    )
}

/// File stem of a comparison export
#[must_use]
pub fn comparison_filename(selected: usize) -> String {
    format!("state-comparison-{selected}-states")
}

/// `<slug>-<YYYY-MM-DD>.png`
#[must_use]
pub fn chart_image_filename(slug: &str, date: NaiveDate) -> String {
    format!("{slug}-{}.png", date.format("%Y-%m-%d"))
}

/// File slug for a chart title
///
/// Lowercases, turns whitespace runs into hyphens, and drops anything
/// outside `[a-z0-9-]`.
#[must_use]
pub fn chart_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }
    slug
}
