//! Per-entity metric rows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of a metric dataset: an entity name plus its numeric fields
///
/// A field whose snapshot value is `null`, a string, or missing altogether is
/// absent from `fields`. Callers decide per computation whether absence counts
/// as zero (`value_or_zero`) or excludes the row (`value`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct MetricRecord {
    /// Entity name, matched exactly against the reference table
    pub state: String,
    /// Numeric fields keyed by their snapshot key
    #[serde(flatten)]
    pub fields: BTreeMap<String, f64>,
}

impl MetricRecord {
    /// Create a record with no fields
    #[must_use]
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field to the record
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: f64) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Value of a field, `None` when absent
    #[must_use]
    pub fn value(&self, key: &str) -> Option<f64> {
        self.fields.get(key).copied()
    }

    /// Value of a field with absence treated as zero
    #[must_use]
    pub fn value_or_zero(&self, key: &str) -> f64 {
        self.value(key).unwrap_or(0.0)
    }
}

/// Snapshot row before non-numeric values are discarded
#[derive(Debug, Deserialize)]
struct RawRecord {
    state: String,
    #[serde(flatten)]
    rest: BTreeMap<String, serde_json::Value>,
}

impl From<RawRecord> for MetricRecord {
    fn from(raw: RawRecord) -> Self {
        let fields = numeric_fields(raw.rest, &raw.state);
        Self {
            state: raw.state,
            fields,
        }
    }
}

/// Keep only the numeric entries of a JSON object
pub(crate) fn numeric_fields(
    values: BTreeMap<String, serde_json::Value>,
    context: &str,
) -> BTreeMap<String, f64> {
    values
        .into_iter()
        .filter_map(|(key, value)| match value.as_f64() {
            Some(number) => Some((key, number)),
            None => {
                if !value.is_null() {
                    log::debug!("Dropping non-numeric field {key} ({value}) for {context}");
                }
                None
            }
        })
        .collect()
}
