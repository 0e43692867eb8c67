//! Domain models for the state indicator tables
//!
//! Entities (states and union territories) form the canonical key set; every
//! metric dataset is a list of per-entity records joined on the entity name.

pub mod catalog;
pub mod dataset;
pub mod entity;
pub mod metric;
pub mod record;
pub mod region;

// Re-export commonly used types
pub use catalog::Catalog;
pub use dataset::Dataset;
pub use entity::Entity;
pub use metric::{DatasetKind, FieldSelector, Metric, ValueFormat};
pub use record::MetricRecord;
pub use region::{Region, RegionSelection};
