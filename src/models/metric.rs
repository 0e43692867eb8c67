//! Dataset categories and the numeric fields each one carries.
//!
//! `Metric` is the field selector used by the generic aggregation functions:
//! every filter, ranking, and summary takes the selector as an argument instead
//! of hard-coding a field per view.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::MetricRecord;
use crate::error::DashboardError;

/// Category of a metric dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Gdp,
    Banking,
    Exports,
    Tourism,
}

impl DatasetKind {
    /// Every dataset category
    pub const ALL: [Self; 4] = [Self::Gdp, Self::Banking, Self::Exports, Self::Tourism];

    /// Lowercase identifier used in file names and export names
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Gdp => "gdp",
            Self::Banking => "banking",
            Self::Exports => "exports",
            Self::Tourism => "tourism",
        }
    }

    /// Human readable category name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gdp => "GDP",
            Self::Banking => "Banking",
            Self::Exports => "Exports",
            Self::Tourism => "Tourism",
        }
    }

    /// Snapshot file name inside the data directory
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.json", self.slug())
    }

    /// Fields carried by records of this dataset
    #[must_use]
    pub const fn metrics(self) -> &'static [Metric] {
        match self {
            Self::Gdp => &[Metric::Gsdp, Metric::Growth, Metric::PerCapita],
            Self::Banking => &[
                Metric::Branches,
                Metric::Deposits,
                Metric::Credit,
                Metric::CdRatio,
            ],
            Self::Exports => &[Metric::Exports, Metric::Share],
            Self::Tourism => &[Metric::Total, Metric::Domestic, Metric::Foreign],
        }
    }

    /// Metric selected when a category view is first opened
    #[must_use]
    pub const fn default_metric(self) -> Metric {
        match self {
            Self::Gdp => Metric::Gsdp,
            Self::Banking => Metric::Deposits,
            Self::Exports => Metric::Exports,
            Self::Tourism => Metric::Total,
        }
    }

    /// Metric used for map colouring and entity rankings
    #[must_use]
    pub const fn map_metric(self) -> Metric {
        match self {
            Self::Gdp => Metric::Gsdp,
            Self::Banking => Metric::Branches,
            Self::Exports => Metric::Exports,
            Self::Tourism => Metric::Total,
        }
    }

    /// Metric used for the per-entity rank shown on the detail view
    #[must_use]
    pub const fn rank_metric(self) -> Metric {
        match self {
            Self::Banking => Metric::Deposits,
            other => other.map_metric(),
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a value is presented and exported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    Text,
    Number,
    Currency,
    Percentage,
}

/// Numeric field selector across all datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    /// Gross state domestic product (Rs crore)
    Gsdp,
    /// GSDP growth rate (%)
    Growth,
    /// Per-capita income (Rs)
    PerCapita,
    /// Scheduled commercial bank branches
    Branches,
    /// Bank deposits (Rs crore)
    Deposits,
    /// Bank credit (Rs crore)
    Credit,
    /// Credit-to-deposit ratio (%)
    CdRatio,
    /// Export value (Rs crore)
    Exports,
    /// Share of national exports (%)
    Share,
    /// Domestic tourist visits
    Domestic,
    /// Foreign tourist visits
    Foreign,
    /// Total tourist visits
    Total,
}

impl Metric {
    /// Every metric, grouped by dataset
    pub const ALL: [Self; 12] = [
        Self::Gsdp,
        Self::Growth,
        Self::PerCapita,
        Self::Branches,
        Self::Deposits,
        Self::Credit,
        Self::CdRatio,
        Self::Exports,
        Self::Share,
        Self::Domestic,
        Self::Foreign,
        Self::Total,
    ];

    /// Dataset this field lives in
    #[must_use]
    pub const fn dataset(self) -> DatasetKind {
        match self {
            Self::Gsdp | Self::Growth | Self::PerCapita => DatasetKind::Gdp,
            Self::Branches | Self::Deposits | Self::Credit | Self::CdRatio => {
                DatasetKind::Banking
            }
            Self::Exports | Self::Share => DatasetKind::Exports,
            Self::Domestic | Self::Foreign | Self::Total => DatasetKind::Tourism,
        }
    }

    /// JSON key of the field inside a record
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gsdp => "gsdp",
            Self::Growth => "growth",
            Self::PerCapita => "perCapita",
            Self::Branches => "branches",
            Self::Deposits => "deposits",
            Self::Credit => "credit",
            Self::CdRatio => "cdRatio",
            Self::Exports => "exports",
            Self::Share => "share",
            Self::Domestic => "domestic",
            Self::Foreign => "foreign",
            Self::Total => "total",
        }
    }

    /// Label used on charts and tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gsdp => "GSDP (₹ Cr)",
            Self::Growth => "Growth %",
            Self::PerCapita => "Per Capita (₹)",
            Self::Branches => "Bank Branches",
            Self::Deposits => "Deposits (₹ Cr)",
            Self::Credit => "Credit (₹ Cr)",
            Self::CdRatio => "CD Ratio (%)",
            Self::Exports => "Exports (₹ Cr)",
            Self::Share => "Share %",
            Self::Domestic => "Domestic Tourists",
            Self::Foreign => "Foreign Tourists",
            Self::Total => "Total Tourists",
        }
    }

    /// Column label used in CSV / spreadsheet exports (ASCII currency)
    #[must_use]
    pub const fn export_label(self) -> &'static str {
        match self {
            Self::Gsdp => "GSDP (Rs Crore)",
            Self::Growth => "Growth (%)",
            Self::PerCapita => "Per Capita Income (Rs)",
            Self::Branches => "Bank Branches",
            Self::Deposits => "Deposits (Rs Crore)",
            Self::Credit => "Credit (Rs Crore)",
            Self::CdRatio => "CD Ratio (%)",
            Self::Exports => "Exports (Rs Crore)",
            Self::Share => "Share (%)",
            Self::Domestic => "Domestic Tourists",
            Self::Foreign => "Foreign Tourists",
            Self::Total => "Total Tourists",
        }
    }

    /// Presentation format of the field
    #[must_use]
    pub const fn format(self) -> ValueFormat {
        match self {
            Self::Gsdp | Self::PerCapita | Self::Deposits | Self::Credit | Self::Exports => {
                ValueFormat::Currency
            }
            Self::Growth | Self::CdRatio | Self::Share => ValueFormat::Percentage,
            Self::Branches | Self::Domestic | Self::Foreign | Self::Total => ValueFormat::Number,
        }
    }

    /// Look a metric up by its JSON key
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.key() == key)
    }
}

impl FromStr for Metric {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| DashboardError::UnknownMetric(s.to_string()))
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Selects one numeric field from a metric record
///
/// Implemented by `Metric` for the known fields and by `str` for ad-hoc keys,
/// so the aggregation functions stay generic over the field being ranked.
pub trait FieldSelector {
    /// Key of the selected field
    fn field_key(&self) -> &str;

    /// Value of the field in `record`, if present
    fn select(&self, record: &MetricRecord) -> Option<f64> {
        record.value(self.field_key())
    }
}

impl FieldSelector for Metric {
    fn field_key(&self) -> &str {
        self.key()
    }
}

impl FieldSelector for str {
    fn field_key(&self) -> &str {
        self
    }
}

impl FieldSelector for String {
    fn field_key(&self) -> &str {
        self.as_str()
    }
}

impl<T: FieldSelector + ?Sized> FieldSelector for &T {
    fn field_key(&self) -> &str {
        (**self).field_key()
    }
}
