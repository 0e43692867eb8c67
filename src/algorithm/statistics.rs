//! Summary statistics over one numeric column
//!
//! Statistics are recomputed from the current record selection on every call;
//! the only inputs are the records, the field selector, and the policy for
//! absent values.

use itertools::Itertools;
use serde::Serialize;

use super::ranking::{self, RankedEntry};
use crate::models::{FieldSelector, MetricRecord};

/// How absent field values enter a computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Absent values count as zero
    #[default]
    TreatAsZero,
    /// Records without the field are left out
    Exclude,
}

/// Minimum, maximum, mean, and median of a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

impl SummaryStats {
    /// Statistics of a value list; `None` when it is empty
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let median = median(values)?;
        let mean = mean(values)?;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            });

        Some(Self {
            count: values.len(),
            min,
            max,
            mean,
            median,
        })
    }
}

/// Median with the usual even/odd split
///
/// The input does not need to be sorted.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let sorted: Vec<f64> = values.iter().copied().sorted_by(f64::total_cmp).collect();
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[middle - 1] + sorted[middle]) / 2.0)
    } else {
        Some(sorted[middle])
    }
}

/// Arithmetic mean; `None` for an empty list
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Sum divided by `max(count, 1)`, so an empty list averages to zero
#[must_use]
pub fn average_or_zero(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len().max(1) as f64
}

/// Extract one column from a record set
pub fn column_values<'r, I, S>(records: I, selector: &S, policy: MissingPolicy) -> Vec<f64>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    records
        .into_iter()
        .filter_map(|record| match (selector.select(record), policy) {
            (Some(value), _) => Some(value),
            (None, MissingPolicy::TreatAsZero) => Some(0.0),
            (None, MissingPolicy::Exclude) => None,
        })
        .collect()
}

/// Summary statistics of a column
pub fn summarize<'r, I, S>(records: I, selector: &S, policy: MissingPolicy) -> Option<SummaryStats>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    SummaryStats::from_values(&column_values(records, selector, policy))
}

/// Highlights of one metric over a record selection
///
/// `top` and `bottom` come from the zero-filled ranking, while `stats`
/// excludes records without the field so absent data does not drag the mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub top: Option<RankedEntry>,
    pub bottom: Option<RankedEntry>,
    pub stats: Option<SummaryStats>,
}

impl MetricSummary {
    /// Compute the summary for `records`
    pub fn build<'r, I, S>(records: I, selector: &S) -> Self
    where
        I: IntoIterator<Item = &'r MetricRecord>,
        S: FieldSelector + ?Sized,
    {
        let records: Vec<&MetricRecord> = records.into_iter().collect();
        let ranked = ranking::rank_descending(records.iter().copied(), selector);
        let count = ranked.len();

        let entry = |position: usize| {
            ranked.get(position).map(|(record, value)| RankedEntry {
                rank: position + 1,
                name: record.state.clone(),
                label: record.state.clone(),
                value: *value,
            })
        };

        Self {
            top: entry(0),
            bottom: count.checked_sub(1).and_then(entry),
            stats: summarize(records.iter().copied(), selector, MissingPolicy::Exclude),
        }
    }
}
