//! The immutable set of tables loaded at start-up.

use super::dataset::Dataset;
use super::entity::Entity;
use super::metric::DatasetKind;
use crate::collections::EntityIndex;
use crate::error::{DashboardError, Result};

/// Entity reference table plus one dataset per category
///
/// Built once and only ever borrowed afterwards; every derived view is
/// recomputed from these tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    entities: EntityIndex,
    gdp: Dataset,
    banking: Dataset,
    exports: Dataset,
    tourism: Dataset,
}

impl Catalog {
    /// Assemble a catalog, requiring exactly one dataset per category
    pub fn new(entities: Vec<Entity>, datasets: Vec<Dataset>) -> Result<Self> {
        let mut slots: [Option<Dataset>; 4] = [None, None, None, None];

        for dataset in datasets {
            let slot = &mut slots[Self::slot(dataset.kind)];
            if slot.is_some() {
                return Err(DashboardError::DuplicateDataset(dataset.kind));
            }
            *slot = Some(dataset);
        }

        let [gdp, banking, exports, tourism] = slots;
        Ok(Self {
            entities: EntityIndex::new(entities),
            gdp: gdp.ok_or(DashboardError::MissingDataset(DatasetKind::Gdp))?,
            banking: banking.ok_or(DashboardError::MissingDataset(DatasetKind::Banking))?,
            exports: exports.ok_or(DashboardError::MissingDataset(DatasetKind::Exports))?,
            tourism: tourism.ok_or(DashboardError::MissingDataset(DatasetKind::Tourism))?,
        })
    }

    const fn slot(kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Gdp => 0,
            DatasetKind::Banking => 1,
            DatasetKind::Exports => 2,
            DatasetKind::Tourism => 3,
        }
    }

    /// Canonical entity table
    #[must_use]
    pub const fn entities(&self) -> &EntityIndex {
        &self.entities
    }

    /// Dataset for a category
    #[must_use]
    pub const fn dataset(&self, kind: DatasetKind) -> &Dataset {
        match kind {
            DatasetKind::Gdp => &self.gdp,
            DatasetKind::Banking => &self.banking,
            DatasetKind::Exports => &self.exports,
            DatasetKind::Tourism => &self.tourism,
        }
    }

    /// All datasets in category order
    #[must_use]
    pub const fn datasets(&self) -> [&Dataset; 4] {
        [&self.gdp, &self.banking, &self.exports, &self.tourism]
    }
}
