//! Side-by-side comparison of a few entities over the joined view.

use serde::Serialize;

use super::join::{JoinedRecord, JoinedView};
use super::ranking::percent_of_max;
use crate::models::Metric;

/// Metrics shown on the comparison view, in display order
pub const COMPARISON_METRICS: [Metric; 6] = [
    Metric::Gsdp,
    Metric::PerCapita,
    Metric::Exports,
    Metric::Branches,
    Metric::Deposits,
    Metric::Total,
];

/// Metrics with a "leader" highlight
pub const LEADER_METRICS: [Metric; 4] = [
    Metric::Gsdp,
    Metric::Exports,
    Metric::Deposits,
    Metric::Total,
];

/// Entities selected when the comparison view opens
pub const DEFAULT_SELECTION: [&str; 2] = ["Maharashtra", "Tamil Nadu"];

/// Upper bound on the selection when none is configured
pub const DEFAULT_MAX_SELECTION: usize = 4;

/// What a `toggle` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// The selection is full; nothing was added
    LimitReached,
    /// The entity is the only one selected; it stays
    LastSelection,
    /// The entity is not part of the joined view
    Unavailable,
}

/// Top selected entity for one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonLeader {
    pub metric: Metric,
    pub name: String,
    pub value: f64,
}

/// Ordered selection of entities to compare
///
/// Only entities of the joined view can be selected, so every selected entity
/// has a record in each dataset. The selection holds between one and `max`
/// names once anything is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSelection {
    available: Vec<String>,
    selected: Vec<String>,
    max: usize,
}

impl ComparisonSelection {
    /// Start from the default selection, restricted to the joined entities
    ///
    /// When none of the defaults is available the first joined entity is
    /// selected instead.
    #[must_use]
    pub fn new(view: &JoinedView, max: usize) -> Self {
        let available: Vec<String> = view.names().map(str::to_string).collect();
        let max = max.max(1);

        let mut selected: Vec<String> = DEFAULT_SELECTION
            .iter()
            .filter(|name| available.iter().any(|a| a == *name))
            .take(max)
            .map(|name| (*name).to_string())
            .collect();
        if selected.is_empty() {
            selected.extend(available.first().cloned());
        }

        Self {
            available,
            selected,
            max,
        }
    }

    /// Selected names in selection order
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Names that may be selected
    #[must_use]
    pub fn available(&self) -> &[String] {
        &self.available
    }

    /// Maximum number of selected entities
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }

    /// Whether `name` is selected
    #[must_use]
    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.iter().any(|s| s == name)
    }

    /// Whether `name` could be added right now
    #[must_use]
    pub fn can_add(&self, name: &str) -> bool {
        !self.is_selected(name)
            && self.selected.len() < self.max
            && self.available.iter().any(|a| a == name)
    }

    /// Add `name` if absent, remove it if present
    ///
    /// Removing the last selected entity and adding beyond `max` are refused.
    pub fn toggle(&mut self, name: &str) -> ToggleOutcome {
        if let Some(position) = self.selected.iter().position(|s| s == name) {
            if self.selected.len() == 1 {
                return ToggleOutcome::LastSelection;
            }
            self.selected.remove(position);
            return ToggleOutcome::Removed;
        }

        if !self.available.iter().any(|a| a == name) {
            return ToggleOutcome::Unavailable;
        }
        if self.selected.len() >= self.max {
            return ToggleOutcome::LimitReached;
        }

        self.selected.push(name.to_string());
        ToggleOutcome::Added
    }

    /// Joined rows of the selected entities, in selection order
    #[must_use]
    pub fn rows<'v>(&self, view: &'v JoinedView) -> Vec<&'v JoinedRecord> {
        self.selected
            .iter()
            .filter_map(|name| view.get(name))
            .collect()
    }

    /// Leader per highlight metric; the earlier selection wins ties
    #[must_use]
    pub fn leaders(&self, view: &JoinedView) -> Vec<ComparisonLeader> {
        let rows = self.rows(view);
        LEADER_METRICS
            .into_iter()
            .filter_map(|metric| {
                rows.iter()
                    .map(|row| (row.name(), row.value(metric).unwrap_or(0.0)))
                    .fold(None, |best: Option<(&str, f64)>, (name, value)| match best {
                        Some((_, top)) if top >= value => best,
                        _ => Some((name, value)),
                    })
                    .map(|(name, value)| ComparisonLeader {
                        metric,
                        name: name.to_string(),
                        value,
                    })
            })
            .collect()
    }

    /// Largest selected value per comparison metric, absent values as zero
    #[must_use]
    pub fn max_values(&self, view: &JoinedView) -> Vec<(Metric, f64)> {
        let rows = self.rows(view);
        COMPARISON_METRICS
            .into_iter()
            .map(|metric| {
                let max = rows
                    .iter()
                    .map(|row| row.value(metric).unwrap_or(0.0))
                    .fold(0.0, f64::max);
                (metric, max)
            })
            .collect()
    }

    /// Bar length of `name` for `metric`, as a percentage of the selection max
    #[must_use]
    pub fn bar_percent(&self, view: &JoinedView, name: &str, metric: Metric) -> Option<f64> {
        let value = view.get(name)?.value(metric).unwrap_or(0.0);
        let max = self
            .max_values(view)
            .into_iter()
            .find(|(m, _)| *m == metric)
            .map_or(0.0, |(_, max)| max);
        Some(percent_of_max(value, max))
    }
}
