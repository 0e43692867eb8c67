//! Cross-dataset inner join on the entity name
//!
//! Only entities that have a record in every participating dataset appear in
//! the joined view. The rest are reported in `JoinedView::missing` together
//! with the datasets they are absent from, never filled with defaults.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::collections::EntityIndex;
use crate::models::{Dataset, DatasetKind, Entity, Metric, MetricRecord};

/// One entity's records from every joined dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedRecord {
    pub entity: Entity,
    pub parts: BTreeMap<DatasetKind, MetricRecord>,
}

impl JoinedRecord {
    /// Entity name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// Source record from one dataset
    #[must_use]
    pub fn part(&self, kind: DatasetKind) -> Option<&MetricRecord> {
        self.parts.get(&kind)
    }

    /// Value of a metric, read from the record of its dataset
    #[must_use]
    pub fn value(&self, metric: Metric) -> Option<f64> {
        self.value_in(metric.dataset(), metric.key())
    }

    /// Value of an arbitrary field of one dataset's record
    #[must_use]
    pub fn value_in(&self, kind: DatasetKind, key: &str) -> Option<f64> {
        self.part(kind).and_then(|record| record.value(key))
    }
}

/// An entity left out of the join
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingEntity {
    pub name: String,
    /// Datasets with no record for the entity
    pub absent_from: Vec<DatasetKind>,
}

/// Result of an inner join: joined rows plus the entities that were dropped
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JoinedView {
    /// Joined rows in entity-table order
    pub records: Vec<JoinedRecord>,
    /// Dropped entities in entity-table order
    pub missing: Vec<MissingEntity>,
}

impl JoinedView {
    /// Joined row for an entity name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&JoinedRecord> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Names of the dropped entities
    #[must_use]
    pub fn missing_names(&self) -> Vec<&str> {
        self.missing.iter().map(|m| m.name.as_str()).collect()
    }

    /// Names of the joined entities
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(JoinedRecord::name)
    }

    /// Number of joined rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no entity survived the join
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// First record per entity name of one dataset
fn record_lookup(dataset: &Dataset) -> FxHashMap<&str, &MetricRecord> {
    let mut lookup = FxHashMap::default();
    for record in &dataset.records {
        if lookup.contains_key(record.state.as_str()) {
            log::warn!(
                "Duplicate record for {} in {} dataset, keeping the first row",
                record.state,
                dataset.kind
            );
            continue;
        }
        lookup.insert(record.state.as_str(), record);
    }
    lookup
}

/// Inner join of `datasets` over the canonical entity table
///
/// Rows follow entity-table order. A dataset kind given more than once is
/// joined from its first occurrence only. Records naming entities outside the table
/// are not joined; they are logged at debug level.
#[must_use]
pub fn inner_join(index: &EntityIndex, datasets: &[&Dataset]) -> JoinedView {
    let mut lookups: Vec<(DatasetKind, FxHashMap<&str, &MetricRecord>)> = Vec::new();
    for dataset in datasets {
        if lookups.iter().any(|(kind, _)| *kind == dataset.kind) {
            log::warn!(
                "{} dataset passed to the join more than once, keeping the first",
                dataset.kind
            );
            continue;
        }
        lookups.push((dataset.kind, record_lookup(dataset)));
    }

    for (kind, lookup) in &lookups {
        for name in lookup.keys().filter(|name| !index.contains(name)) {
            log::debug!("{kind} record for {name} has no entity in the reference table");
        }
    }

    let mut view = JoinedView::default();
    for entity in index.entities() {
        let absent_from: Vec<DatasetKind> = lookups
            .iter()
            .filter(|(_, lookup)| !lookup.contains_key(entity.name.as_str()))
            .map(|(kind, _)| *kind)
            .collect();

        if !absent_from.is_empty() {
            view.missing.push(MissingEntity {
                name: entity.name.clone(),
                absent_from,
            });
            continue;
        }

        let parts = lookups
            .iter()
            .filter_map(|(kind, lookup)| {
                lookup
                    .get(entity.name.as_str())
                    .map(|record| (*kind, (*record).clone()))
            })
            .collect();

        view.records.push(JoinedRecord {
            entity: entity.clone(),
            parts,
        });
    }

    view
}
