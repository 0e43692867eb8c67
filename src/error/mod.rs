//! Error handling for the dashboard aggregation layer.
//!
//! Expected outcomes (an unknown slug, an entity missing from one dataset, a
//! degenerate value range) are modelled as `Option`s or report lists and never
//! surface here. This type covers the genuinely exceptional paths: loading
//! snapshots, invalid selectors, and export failures.

use std::io;
use std::path::{Path, PathBuf};

use crate::models::{DatasetKind, Metric};

pub mod util;

/// Specialized error type for the aggregation layer
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Error opening, reading, or writing a file
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error decoding a JSON snapshot read from disk
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error decoding an in-memory JSON document
    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A metric key that no dataset defines
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// A region label outside the fixed region set
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    /// A metric selector used against a dataset it does not belong to
    #[error("Metric {metric} does not belong to the {kind} dataset")]
    MetricDatasetMismatch { metric: Metric, kind: DatasetKind },

    /// A catalog built without one of the category datasets
    #[error("Dataset {0} is missing from the catalog")]
    MissingDataset(DatasetKind),

    /// A catalog built with the same category twice
    #[error("Dataset {0} was supplied more than once")]
    DuplicateDataset(DatasetKind),

    /// Spreadsheet generation failed
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    /// PNG encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The chart container could not be rasterised
    #[error("Chart capture failed: {0}")]
    Capture(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    /// Wrap an IO error together with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a JSON decoding error together with the file it came from
    pub fn json(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a capture error with a message
    pub fn capture(message: impl Into<String>) -> Self {
        Self::Capture(message.into())
    }
}

/// Result type for aggregation layer operations
pub type Result<T> = std::result::Result<T, DashboardError>;
