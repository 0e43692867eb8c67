//! Rankings over a record set
//!
//! Every function takes the records and a `FieldSelector`, so the same code
//! ranks GSDP, deposits, exports, or tourist counts. Rankings are descending
//! and stable: records with equal values keep their input order. A missing
//! field ranks as zero.

use std::cmp::Ordering;

use itertools::Itertools;
use serde::Serialize;

use crate::collections::EntityIndex;
use crate::models::{FieldSelector, MetricRecord, Region};

/// Name shown for the remainder bucket of a share breakdown
pub const OTHERS_LABEL: &str = "Others";

/// Rule for shortening long entity names on chart axes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPolicy {
    /// Names with more characters than this are shortened
    pub max_chars: usize,
    /// Characters kept before the suffix
    pub keep_chars: usize,
    /// Appended to a shortened name
    pub suffix: String,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self {
            max_chars: 15,
            keep_chars: 12,
            suffix: "...".to_string(),
        }
    }
}

impl LabelPolicy {
    /// Chart label for an entity name
    ///
    /// ```
    /// use state_stats::algorithm::ranking::LabelPolicy;
    ///
    /// let policy = LabelPolicy::default();
    /// assert_eq!(policy.chart_label("Tamil Nadu"), "Tamil Nadu");
    /// assert_eq!(policy.chart_label("Andaman and Nicobar Islands"), "Andaman and ...");
    /// ```
    #[must_use]
    pub fn chart_label(&self, name: &str) -> String {
        if name.chars().count() > self.max_chars {
            let kept: String = name.chars().take(self.keep_chars).collect();
            format!("{kept}{}", self.suffix)
        } else {
            name.to_string()
        }
    }
}

/// One position of a ranking
///
/// `name` is the full entity name for lookups and links; `label` is the
/// possibly shortened form for chart axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based position
    pub rank: usize,
    pub name: String,
    pub label: String,
    pub value: f64,
}

/// A slice of a share breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSlice {
    pub name: String,
    pub value: f64,
}

/// Distance between an entity and one of its peers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerGap {
    pub name: String,
    pub value: f64,
    /// Absolute difference to the reference entity's value
    pub gap: f64,
}

/// Largest first; `-0.0` and `0.0` compare equal so signed zeros keep input order
fn descending(a: f64, b: f64) -> Ordering {
    let unsigned_zero = |v: f64| if v == 0.0 { 0.0 } else { v };
    unsigned_zero(b).total_cmp(&unsigned_zero(a))
}

/// Records paired with their selected value, largest first
///
/// The sort is stable, so ties keep input order.
pub fn rank_descending<'r, I, S>(records: I, selector: &S) -> Vec<(&'r MetricRecord, f64)>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    records
        .into_iter()
        .map(|record| (record, selector.select(record).unwrap_or(0.0)))
        .sorted_by(|a, b| descending(a.1, b.1))
        .collect()
}

/// The `n` records with the largest value, as ranked entries
///
/// Returns `min(n, records)` entries. Labels are left unshortened; see
/// `top_n_labelled` for chart labels.
pub fn top_n<'r, I, S>(records: I, selector: &S, n: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    rank_descending(records, selector)
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(position, (record, value))| RankedEntry {
            rank: position + 1,
            name: record.state.clone(),
            label: record.state.clone(),
            value,
        })
        .collect()
}

/// `top_n` with chart labels shortened by `policy`
pub fn top_n_labelled<'r, I, S>(
    records: I,
    selector: &S,
    n: usize,
    policy: &LabelPolicy,
) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    let mut entries = top_n(records, selector, n);
    for entry in &mut entries {
        entry.label = policy.chart_label(&entry.name);
    }
    entries
}

/// 1-based position of `name` in the descending ranking
///
/// Uses the first record for the name, as lookups do.
pub fn rank_of<'r, I, S>(records: I, selector: &S, name: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    rank_descending(records, selector)
        .iter()
        .position(|(record, _)| record.state == name)
        .map(|position| position + 1)
}

/// Record with the largest value (first on ties)
pub fn leader<'r, I, S>(records: I, selector: &S) -> Option<(&'r MetricRecord, f64)>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    rank_descending(records, selector).into_iter().next()
}

/// Record with the smallest value (last of the descending ranking)
pub fn laggard<'r, I, S>(records: I, selector: &S) -> Option<(&'r MetricRecord, f64)>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    rank_descending(records, selector).into_iter().last()
}

/// Top `k` entities plus an "Others" slice summing the rest
///
/// The "Others" slice is omitted when nothing is left over.
pub fn share_breakdown<'r, I, S>(records: I, selector: &S, k: usize) -> Vec<ShareSlice>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    let ranked = rank_descending(records, selector);
    let split = k.min(ranked.len());
    let (head, rest) = ranked.split_at(split);

    let mut slices: Vec<ShareSlice> = head
        .iter()
        .map(|(record, value)| ShareSlice {
            name: record.state.clone(),
            value: *value,
        })
        .collect();

    if !rest.is_empty() {
        slices.push(ShareSlice {
            name: OTHERS_LABEL.to_string(),
            value: rest.iter().map(|(_, value)| value).sum(),
        });
    }
    slices
}

/// Sum of the selected field per region, largest first
///
/// Names outside the entity table count towards `Region::Unknown`. Regions
/// with equal totals keep the order in which they first appear.
pub fn region_totals<'r, I, S>(records: I, selector: &S, index: &EntityIndex) -> Vec<(Region, f64)>
where
    I: IntoIterator<Item = &'r MetricRecord>,
    S: FieldSelector + ?Sized,
{
    let mut totals: Vec<(Region, f64)> = Vec::new();
    for record in records {
        let region = index.region_of(&record.state);
        let value = selector.select(record).unwrap_or(0.0);
        match totals.iter_mut().find(|(seen, _)| *seen == region) {
            Some((_, total)) => *total += value,
            None => totals.push((region, value)),
        }
    }

    totals
        .into_iter()
        .sorted_by(|a, b| descending(a.1, b.1))
        .collect()
}

/// The `k` other entities closest in value to `name`
///
/// Returns an empty list when `name` has no value for the field. Records
/// without a value are skipped; equal gaps keep input order.
pub fn nearest_peers<'r, I, S>(records: I, selector: &S, name: &str, k: usize) -> Vec<PeerGap>
where
    I: IntoIterator<Item = &'r MetricRecord> + Clone,
    S: FieldSelector + ?Sized,
{
    let Some(reference) = records
        .clone()
        .into_iter()
        .find(|record| record.state == name)
        .and_then(|record| selector.select(record))
    else {
        return Vec::new();
    };

    records
        .into_iter()
        .filter(|record| record.state != name)
        .filter_map(|record| {
            selector.select(record).map(|value| PeerGap {
                name: record.state.clone(),
                value,
                gap: (value - reference).abs(),
            })
        })
        .sorted_by(|a, b| a.gap.total_cmp(&b.gap))
        .take(k)
        .collect()
}

/// `value` as a percentage of `max`; a zero `max` yields 0
#[must_use]
pub fn percent_of_max(value: f64, max: f64) -> f64 {
    if max == 0.0 { 0.0 } else { value / max * 100.0 }
}
