//! Log line helpers for loading and export operations.

use std::path::Path;
use std::time::Duration;

/// Log the start of a load or export
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log a finished snapshot load
///
/// # Arguments
/// * `dir` - Directory the snapshots were read from
/// * `items` - Entities plus dataset records loaded
/// * `elapsed` - Optional elapsed time
pub fn log_load_complete(dir: &Path, items: usize, elapsed: Option<Duration>) {
    match elapsed {
        Some(duration) => log::info!(
            "Loaded {items} records from {} in {duration:?}",
            dir.display()
        ),
        None => log::info!("Loaded {items} records from {}", dir.display()),
    }
}

/// Log line for a finished export
#[must_use]
pub fn export_summary(filename: &str, rows: usize, elapsed: Option<Duration>) -> String {
    match elapsed {
        Some(duration) => format!("Exported {rows} rows to {filename} in {duration:?}"),
        None => format!("Exported {rows} rows to {filename}"),
    }
}

/// Log a finished export
pub fn log_export_complete(filename: &str, rows: usize, elapsed: Option<Duration>) {
    log::info!("{}", export_summary(filename, rows, elapsed));
}

/// Log a warning, optionally tied to a path
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}

/// Report entities missing from a dataset at warn level
pub fn log_missing_entities(dataset: &str, missing: &[String]) {
    if missing.is_empty() {
        log::debug!("{dataset}: no missing entities");
    } else {
        log::warn!(
            "{dataset}: {} entities missing: {}",
            missing.len(),
            missing.join(", ")
        );
    }
}
