use std::fs;

use crate::utils::write_data_dir;
use pretty_assertions::assert_eq;
use state_stats::error::DashboardError;
use state_stats::loader::{ENTITY_FILE, load_catalog, load_dataset};
use state_stats::models::{DatasetKind, Region};

/// A complete data directory loads into a catalog
#[test]
fn test_load_catalog_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path());

    let catalog = load_catalog(dir.path()).unwrap();
    assert_eq!(catalog.entities().len(), 10);
    assert_eq!(catalog.entities().region_of("Ladakh"), Region::North);

    let gdp = catalog.dataset(DatasetKind::Gdp);
    assert_eq!(gdp.year, "2022-23");
    assert_eq!(gdp.len(), 9);
    assert_eq!(gdp.national_value("totalGDP"), Some(27_000_000.0));

    // numeric years are kept as text
    assert_eq!(catalog.dataset(DatasetKind::Banking).year, "2023");
    assert_eq!(catalog.dataset(DatasetKind::Tourism).len(), 11);
}

/// Missing entities are reported, not fatal
#[test]
fn test_missing_entities_after_load() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path());

    let catalog = load_catalog(dir.path()).unwrap();
    assert_eq!(
        catalog.entities().missing_from(catalog.dataset(DatasetKind::Exports)),
        vec!["Ladakh", "Andaman and Nicobar Islands"]
    );
    assert!(
        catalog
            .entities()
            .missing_from(catalog.dataset(DatasetKind::Banking))
            .is_empty()
    );
}

/// A malformed snapshot names the offending file
#[test]
fn test_malformed_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path());
    let path = dir.path().join(DatasetKind::Tourism.file_name());
    fs::write(&path, "{\"year\": 2023, \"data\": [").unwrap();

    match load_catalog(dir.path()) {
        Err(DashboardError::Json { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected a JSON error, got {other:?}"),
    }
}

/// A missing entity table is an IO error on that file
#[test]
fn test_missing_entity_table() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path());
    fs::remove_file(dir.path().join(ENTITY_FILE)).unwrap();

    match load_catalog(dir.path()) {
        Err(DashboardError::Io { path, .. }) => assert_eq!(path, dir.path().join(ENTITY_FILE)),
        other => panic!("expected an IO error, got {other:?}"),
    }
}

/// A single snapshot can be loaded on its own
#[test]
fn test_load_single_dataset() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path());

    let exports = load_dataset(
        DatasetKind::Exports,
        &dir.path().join(DatasetKind::Exports.file_name()),
    )
    .unwrap();
    assert_eq!(exports.kind, DatasetKind::Exports);
    assert_eq!(exports.record("Gujarat").unwrap().value("share"), Some(33.0));
}
