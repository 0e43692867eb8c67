//! Aggregation, join, and export layer for Indian state-level indicator
//! snapshots (GDP, banking, exports, tourism).
//!
//! Tables are loaded once into an immutable `Catalog`; every view (region
//! filters, rankings, summary statistics, the cross-dataset join, entity
//! profiles, map colouring) is a pure function of it.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod models;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::DashboardConfig;
pub use dashboard::{CategoryView, Dashboard, MapView};
pub use error::{DashboardError, Result};
pub use loader::load_catalog;

// Data model
pub use collections::EntityIndex;
pub use models::{
    Catalog, Dataset, DatasetKind, Entity, FieldSelector, Metric, MetricRecord, Region,
    RegionSelection, ValueFormat,
};

// Aggregation
pub use algorithm::{
    ComparisonSelection, EntityProfile, JoinedRecord, JoinedView, MissingPolicy, RankedEntry,
    SummaryStats, inner_join, median, rank_of, summarize, top_n,
};
pub use filter::{Filter, RegionFilter, filter_by_region};

// Export
pub use export::{ChartCapture, ExportColumn, ExportFile, ExportFormat, ExportRow};
