//! Geographic region categories used to group states and union territories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Region an entity belongs to
///
/// Names that do not appear in the canonical entity table, or region labels
/// outside the fixed set, resolve to `Unknown` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
    Northeast,
    Unknown,
}

impl Region {
    /// The known regions, in the order the dashboard lists them
    pub const KNOWN: [Self; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Central,
        Self::Northeast,
    ];

    /// Display label, identical to the label used in the snapshots
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
            Self::Central => "Central",
            Self::Northeast => "Northeast",
            Self::Unknown => "Unknown",
        }
    }

    /// Resolve an exact label; anything unrecognised becomes `Unknown`
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|region| region.label() == label)
            .unwrap_or(Self::Unknown)
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<Region> for String {
    fn from(value: Region) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Region filter selection: everything, or a single region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum RegionSelection {
    #[default]
    All,
    Only(Region),
}

impl RegionSelection {
    /// Whether an entity in `region` passes this selection
    #[must_use]
    pub fn matches(self, region: Region) -> bool {
        match self {
            Self::All => true,
            Self::Only(target) => target == region,
        }
    }

    /// Label shown on the filter control and used in export filenames
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(region) => region.label(),
        }
    }
}

impl FromStr for RegionSelection {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        Region::KNOWN
            .into_iter()
            .chain(std::iter::once(Region::Unknown))
            .find(|region| region.label().eq_ignore_ascii_case(trimmed))
            .map(Self::Only)
            .ok_or_else(|| DashboardError::UnknownRegion(trimmed.to_string()))
    }
}

impl From<Region> for RegionSelection {
    fn from(value: Region) -> Self {
        Self::Only(value)
    }
}

impl From<RegionSelection> for String {
    fn from(value: RegionSelection) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for RegionSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
