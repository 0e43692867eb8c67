//! Record filters keyed on the entity name.

use super::generic::Filter;
use crate::collections::EntityIndex;
use crate::models::{MetricRecord, RegionSelection};

/// Keeps records whose entity belongs to the selected region
///
/// Region membership is read from the entity index, so a record naming an
/// entity outside the reference table lands in the `Unknown` bucket.
#[derive(Debug, Clone, Copy)]
pub struct RegionFilter<'a> {
    selection: RegionSelection,
    index: &'a EntityIndex,
}

impl<'a> RegionFilter<'a> {
    /// Create a region filter backed by an entity index
    #[must_use]
    pub const fn new(selection: RegionSelection, index: &'a EntityIndex) -> Self {
        Self { selection, index }
    }

    /// The region this filter selects
    #[must_use]
    pub const fn selection(&self) -> RegionSelection {
        self.selection
    }
}

impl Filter<MetricRecord> for RegionFilter<'_> {
    fn matches(&self, input: &MetricRecord) -> bool {
        self.selection.matches(self.index.region_of(&input.state))
    }
}

/// Drops the record of one named entity
#[derive(Debug, Clone)]
pub struct ExcludeEntityFilter {
    name: String,
}

impl ExcludeEntityFilter {
    /// Exclude the entity with this exact name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Filter<MetricRecord> for ExcludeEntityFilter {
    fn matches(&self, input: &MetricRecord) -> bool {
        input.state != self.name
    }
}

/// Apply a filter to a record sequence, keeping input order
///
/// Accepts both a dataset's own records and an already filtered list, which is
/// what makes repeated filtering compose.
pub fn filter_records<'r, I, F>(records: I, filter: &F) -> Vec<&'r MetricRecord>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    F: Filter<MetricRecord> + ?Sized,
{
    records
        .into_iter()
        .filter(|record| filter.matches(record))
        .collect()
}

/// Records of the selected region, in input order
pub fn filter_by_region<'r, I>(
    records: I,
    selection: RegionSelection,
    index: &EntityIndex,
) -> Vec<&'r MetricRecord>
where
    I: IntoIterator<Item = &'r MetricRecord>,
{
    filter_records(records, &RegionFilter::new(selection, index))
}
