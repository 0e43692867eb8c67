use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use log::{info, warn};
use state_stats::algorithm::ranking::top_n;
use state_stats::{Dashboard, DashboardConfig, DatasetKind, RegionSelection};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("data"), PathBuf::from);
    let config = DashboardConfig {
        data_dir,
        ..DashboardConfig::default()
    };

    let start = Instant::now();
    let mut dashboard = Dashboard::load(config.clone()).with_context(|| {
        format!("Failed to load snapshots from {}", config.data_dir.display())
    })?;
    info!("Catalog ready in {:?}", start.elapsed());

    for kind in DatasetKind::ALL {
        let metric = kind.map_metric();
        let view = dashboard
            .category_view(kind, RegionSelection::All, metric)
            .with_context(|| format!("Failed to build the {kind} view"))?;
        let dataset = dashboard.catalog().dataset(kind);

        info!(
            "{} ({}): {} records",
            dataset.title,
            dataset.year,
            dataset.len()
        );
        if !view.missing.is_empty() {
            warn!("  missing: {}", view.missing.join(", "));
        }

        for entry in top_n(&dataset.records, &metric, 5) {
            info!(
                "  #{} {} {}",
                entry.rank,
                entry.name,
                dashboard.format_value(metric, entry.value)
            );
        }

        match view.summary.stats {
            Some(stats) => info!(
                "  {}: count {}, min {}, max {}, mean {}, median {}",
                metric.label(),
                stats.count,
                dashboard.format_value(metric, stats.min),
                dashboard.format_value(metric, stats.max),
                dashboard.format_value(metric, stats.mean),
                dashboard.format_value(metric, stats.median)
            ),
            None => warn!("  {}: no values", metric.label()),
        }
    }

    let joined = dashboard.comparison_view();
    info!("Comparison view: {} entities in every dataset", joined.len());
    if !joined.missing.is_empty() {
        warn!(
            "  left out: {}",
            joined.missing_names().join(", ")
        );
    }

    Ok(())
}
