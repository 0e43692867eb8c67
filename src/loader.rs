//! JSON snapshot loading
//!
//! A data directory holds `states.json` (the entity reference table) and one
//! `<dataset>.json` per category. The five files are read in parallel and
//! assembled into an immutable `Catalog`.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::error::util::{read_text_file, validate_directory};
use crate::error::{DashboardError, Result};
use crate::models::dataset::DatasetSnapshot;
use crate::models::entity::EntityTable;
use crate::models::{Catalog, Dataset, DatasetKind, Entity};
use crate::utils::logging::{log_load_complete, log_missing_entities, log_operation_start};

/// File name of the entity reference table
pub const ENTITY_FILE: &str = "states.json";

/// Decode an entity reference document (`{"states": [...]}`)
pub fn parse_entities(json: &str) -> Result<Vec<Entity>> {
    let table: EntityTable = serde_json::from_str(json)?;
    Ok(table.states)
}

/// Load the entity reference table from a file
pub fn load_entities(path: &Path) -> Result<Vec<Entity>> {
    let text = read_text_file(path, "loading the entity table")?;
    let table: EntityTable =
        serde_json::from_str(&text).map_err(|e| DashboardError::json(path, e))?;
    Ok(table.states)
}

/// Load one category snapshot from a file
pub fn load_dataset(kind: DatasetKind, path: &Path) -> Result<Dataset> {
    let text = read_text_file(path, "loading a dataset")?;
    let snapshot: DatasetSnapshot =
        serde_json::from_str(&text).map_err(|e| DashboardError::json(path, e))?;
    Ok(Dataset::from_snapshot(kind, snapshot))
}

/// Load every snapshot in `dir` into a catalog
///
/// Fails on the first unreadable or malformed file. Entities missing from a
/// dataset are logged, not treated as errors.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    validate_directory(dir, "loading the dashboard catalog")?;
    log_operation_start("Loading snapshots from", dir);
    let start = Instant::now();

    let (entities, datasets) = rayon::join(
        || load_entities(&dir.join(ENTITY_FILE)),
        || {
            DatasetKind::ALL
                .par_iter()
                .map(|&kind| load_dataset(kind, &dir.join(kind.file_name())))
                .collect::<Result<Vec<Dataset>>>()
        },
    );
    let catalog = Catalog::new(entities?, datasets?)?;

    for dataset in catalog.datasets() {
        log::debug!(
            "{}: {} records ({}, {})",
            dataset.kind,
            dataset.len(),
            dataset.title,
            dataset.year
        );
        log_missing_entities(dataset.kind.label(), &catalog.entities().missing_from(dataset));
    }

    log_load_complete(
        dir,
        catalog.entities().len() + catalog.datasets().iter().map(|d| d.len()).sum::<usize>(),
        Some(start.elapsed()),
    );
    Ok(catalog)
}
