//! Metric datasets: ordered records plus provenance and the national summary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::metric::DatasetKind;
use super::record::{MetricRecord, numeric_fields};
use crate::error::Result;

/// One category's records with their metadata
///
/// `national` is the authoritative aggregate shipped with the snapshot. It is
/// read as-is and never recomputed from `records`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub kind: DatasetKind,
    pub title: String,
    pub description: String,
    pub source: String,
    pub year: String,
    pub unit: Option<String>,
    pub national: BTreeMap<String, f64>,
    pub records: Vec<MetricRecord>,
}

impl Dataset {
    /// Create an empty dataset of the given category
    #[must_use]
    pub fn new(kind: DatasetKind, title: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: String::new(),
            source: String::new(),
            year: year.into(),
            unit: None,
            national: BTreeMap::new(),
            records: Vec::new(),
        }
    }

    /// Set the records
    #[must_use]
    pub fn with_records(mut self, records: Vec<MetricRecord>) -> Self {
        self.records = records;
        self
    }

    /// Add an entry to the national summary
    #[must_use]
    pub fn with_national(mut self, key: impl Into<String>, value: f64) -> Self {
        self.national.insert(key.into(), value);
        self
    }

    /// Decode a snapshot document
    pub fn from_json_str(kind: DatasetKind, json: &str) -> Result<Self> {
        let snapshot: DatasetSnapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(kind, snapshot))
    }

    pub(crate) fn from_snapshot(kind: DatasetKind, snapshot: DatasetSnapshot) -> Self {
        let national = numeric_fields(snapshot.national, kind.slug());
        Self {
            kind,
            title: snapshot.title,
            description: snapshot.description,
            source: snapshot.source,
            year: snapshot.year.into_string(),
            unit: snapshot.unit,
            national,
            records: snapshot.data,
        }
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record for an entity name (exact match)
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&MetricRecord> {
        self.records.iter().find(|record| record.state == name)
    }

    /// Entity names in record order
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.state.as_str())
    }

    /// Value from the provided national summary
    #[must_use]
    pub fn national_value(&self, key: &str) -> Option<f64> {
        self.national.get(key).copied()
    }
}

/// On-disk layout of a category snapshot
#[derive(Debug, Deserialize)]
pub(crate) struct DatasetSnapshot {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    year: YearRepr,
    #[serde(default)]
    unit: Option<String>,
    #[serde(default)]
    national: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    data: Vec<MetricRecord>,
}

/// Snapshot years appear both as `"2022-23"` and as `2023`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Text(String),
    Number(serde_json::Number),
}

impl Default for YearRepr {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl YearRepr {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}
