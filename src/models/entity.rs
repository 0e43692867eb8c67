//! Canonical state / union territory reference rows.

use serde::{Deserialize, Serialize};

use super::region::Region;
use crate::utils::slug::slugify;

/// A state or union territory from the reference table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Short code, e.g. "MH"
    pub code: String,
    /// Unique name, the join key across every dataset
    pub name: String,
    /// Region category
    pub region: Region,
    /// Capital city
    pub capital: String,
}

impl Entity {
    /// Create a new entity
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        region: Region,
        capital: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            region,
            capital: capital.into(),
        }
    }

    /// Slug addressing this entity's detail view
    #[must_use]
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

/// On-disk layout of the entity reference file
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EntityTable {
    pub states: Vec<Entity>,
}
