//! Dashboard views over an immutable catalog
//!
//! One generic aggregation path serves every category: the dataset, the region
//! selection, and the metric selector are parameters. Derived views are
//! memoised by their selection, which is sound because the catalog never
//! changes after loading.

use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::comparison::ComparisonSelection;
use crate::algorithm::join::{JoinedView, inner_join};
use crate::algorithm::profile::EntityProfile;
use crate::algorithm::ranking::{self, RankedEntry, ShareSlice};
use crate::algorithm::statistics::MetricSummary;
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::export::image::export_png_with;
use crate::export::spreadsheet::export_xlsx_with;
use crate::export::{
    ChartCapture, ExportFile, ExportFormat, chart_slug, comparison_columns, comparison_filename,
    data_filename, dataset_columns, export_csv,
};
use crate::filter::filter_by_region;
use crate::loader::load_catalog;
use crate::models::{
    Catalog, Dataset, DatasetKind, Entity, Metric, MetricRecord, Region, RegionSelection,
    ValueFormat,
};
use crate::utils::color::ColorScale;
use crate::utils::format::{format_currency, format_indian_number, format_percentage};
use crate::utils::logging::{log_export_complete, log_operation_start};

/// Sheet title of the comparison export
const COMPARISON_TITLE: &str = "State Comparison";

/// Memoisation key of a category view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewKey {
    pub kind: DatasetKind,
    pub region: RegionSelection,
    pub metric: Metric,
}

/// Leader of one metric over a whole dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricLeader {
    pub metric: Metric,
    pub entry: RankedEntry,
}

/// Dataset-wide highlight cards; independent of the region filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Highlights {
    /// Top entity per metric of the dataset
    pub leaders: Vec<MetricLeader>,
    /// Lowest entity by the dataset's default metric
    pub laggard: Option<RankedEntry>,
    /// Region with the largest total of the default metric
    pub top_region: Option<(Region, f64)>,
}

impl Highlights {
    fn build(dataset: &Dataset, catalog: &Catalog) -> Self {
        let entry = |(record, value): (&MetricRecord, f64), rank: usize| RankedEntry {
            rank,
            name: record.state.clone(),
            label: record.state.clone(),
            value,
        };

        let leaders = dataset
            .kind
            .metrics()
            .iter()
            .filter_map(|&metric| {
                ranking::leader(&dataset.records, &metric).map(|top| MetricLeader {
                    metric,
                    entry: entry(top, 1),
                })
            })
            .collect();

        let default_metric = dataset.kind.default_metric();
        let laggard = ranking::laggard(&dataset.records, &default_metric)
            .map(|low| entry(low, dataset.len()));
        let top_region = ranking::region_totals(&dataset.records, &default_metric, catalog.entities())
            .into_iter()
            .next();

        Self {
            leaders,
            laggard,
            top_region,
        }
    }

    /// Leader of one metric
    #[must_use]
    pub fn leader(&self, metric: Metric) -> Option<&RankedEntry> {
        self.leaders
            .iter()
            .find(|leader| leader.metric == metric)
            .map(|leader| &leader.entry)
    }
}

/// A category page for one region and metric selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub kind: DatasetKind,
    pub region: RegionSelection,
    pub metric: Metric,
    /// Region-filtered records in dataset order
    pub records: Vec<MetricRecord>,
    /// Top-N chart bars with shortened labels
    pub chart: Vec<RankedEntry>,
    /// Top, bottom, and statistics of the filtered records
    pub summary: MetricSummary,
    /// Top-k share of the filtered records plus "Others"
    pub share: Vec<ShareSlice>,
    /// Per-region totals of the metric over the whole dataset
    pub region_totals: Vec<(Region, f64)>,
    /// Canonical entities without a record in the dataset
    pub missing: Vec<String>,
    pub highlights: Highlights,
}

/// One entity on the choropleth map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapEntry {
    pub name: String,
    pub slug: String,
    pub region: Region,
    pub value: Option<f64>,
    pub color: String,
}

/// Map colouring of one dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub kind: DatasetKind,
    pub metric: Metric,
    /// Every canonical entity, in table order
    pub entries: Vec<MapEntry>,
    /// Summary over the entities that have a value
    pub summary: MetricSummary,
    /// Bounds of the colour scale
    pub min: f64,
    pub max: f64,
}

impl MapView {
    /// Entry of one entity
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&MapEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

/// Memoised views over a loaded catalog
#[derive(Debug)]
pub struct Dashboard {
    catalog: Catalog,
    config: DashboardConfig,
    joined: JoinedView,
    categories: FxHashMap<ViewKey, Arc<CategoryView>>,
    maps: FxHashMap<DatasetKind, Arc<MapView>>,
}

impl Dashboard {
    /// Wrap a catalog
    pub fn new(catalog: Catalog, config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let joined = inner_join(catalog.entities(), &catalog.datasets());
        if !joined.missing.is_empty() {
            log::info!(
                "{} entities left out of the comparison view: {}",
                joined.missing.len(),
                joined.missing_names().join(", ")
            );
        }

        Ok(Self {
            catalog,
            config,
            joined,
            categories: FxHashMap::default(),
            maps: FxHashMap::default(),
        })
    }

    /// Load the catalog from `config.data_dir`
    pub fn load(config: DashboardConfig) -> Result<Self> {
        let catalog = load_catalog(&config.data_dir)?;
        Self::new(catalog, config)
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Category page for a region and metric
    ///
    /// The metric must belong to the dataset. Views are cached per selection.
    pub fn category_view(
        &mut self,
        kind: DatasetKind,
        region: RegionSelection,
        metric: Metric,
    ) -> Result<Arc<CategoryView>> {
        if metric.dataset() != kind {
            return Err(DashboardError::MetricDatasetMismatch { metric, kind });
        }

        let key = ViewKey {
            kind,
            region,
            metric,
        };
        if let Some(view) = self.categories.get(&key) {
            log::debug!("Category view cache hit for {kind}/{region}/{metric}");
            return Ok(Arc::clone(view));
        }

        let view = Arc::new(self.build_category_view(key));
        self.categories.insert(key, Arc::clone(&view));
        Ok(view)
    }

    fn build_category_view(&self, key: ViewKey) -> CategoryView {
        let dataset = self.catalog.dataset(key.kind);
        let entities = self.catalog.entities();
        let filtered = filter_by_region(&dataset.records, key.region, entities);

        let limit = self
            .config
            .chart_limits
            .limit(key.kind)
            .unwrap_or(filtered.len());
        let chart = ranking::top_n_labelled(
            filtered.iter().copied(),
            &key.metric,
            limit,
            &self.config.label_policy(),
        );

        CategoryView {
            kind: key.kind,
            region: key.region,
            metric: key.metric,
            chart,
            summary: MetricSummary::build(filtered.iter().copied(), &key.metric),
            share: ranking::share_breakdown(
                filtered.iter().copied(),
                &key.metric,
                self.config.share_top_k,
            ),
            region_totals: ranking::region_totals(&dataset.records, &key.metric, entities),
            missing: entities.missing_from(dataset),
            highlights: Highlights::build(dataset, &self.catalog),
            records: filtered.into_iter().cloned().collect(),
        }
    }

    /// Map colouring of a dataset by its map metric
    pub fn map_view(&mut self, kind: DatasetKind) -> Arc<MapView> {
        if let Some(view) = self.maps.get(&kind) {
            return Arc::clone(view);
        }

        let view = Arc::new(self.build_map_view(kind));
        self.maps.insert(kind, Arc::clone(&view));
        view
    }

    fn build_map_view(&self, kind: DatasetKind) -> MapView {
        let dataset = self.catalog.dataset(kind);
        let metric = kind.map_metric();
        let values: Vec<f64> = dataset
            .records
            .iter()
            .filter_map(|record| record.value(metric.key()))
            .collect();

        let scale = ColorScale::from_values(self.config.palettes.palette(kind).to_vec(), values)
            .with_missing_color(self.config.missing_color.clone());

        let entries = self
            .catalog
            .entities()
            .entities()
            .iter()
            .map(|entity| {
                let value = dataset
                    .record(&entity.name)
                    .and_then(|record| record.value(metric.key()));
                MapEntry {
                    name: entity.name.clone(),
                    slug: entity.slug(),
                    region: entity.region,
                    value,
                    color: scale.color_for(value).to_string(),
                }
            })
            .collect();

        MapView {
            kind,
            metric,
            entries,
            summary: MetricSummary::build(
                dataset.records.iter().filter(|r| r.value(metric.key()).is_some()),
                &metric,
            ),
            min: scale.min(),
            max: scale.max(),
        }
    }

    /// Entities present in every dataset, plus the ones left out
    #[must_use]
    pub const fn comparison_view(&self) -> &JoinedView {
        &self.joined
    }

    /// A fresh comparison selection bounded by the configured maximum
    #[must_use]
    pub fn comparison_selection(&self) -> ComparisonSelection {
        ComparisonSelection::new(&self.joined, self.config.compare_max_selection)
    }

    /// Detail view for a slug; `None` is the "not found" state
    #[must_use]
    pub fn profile(&self, slug: &str) -> Option<EntityProfile> {
        let entity = self.catalog.entities().resolve_slug(slug)?;
        EntityProfile::build_with_peers(&self.catalog, &entity.name, self.config.peer_count)
    }

    /// Search box matches
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Entity> {
        self.catalog.entities().search(query)
    }

    /// Display string for a metric value
    #[must_use]
    pub fn format_value(&self, metric: Metric, value: f64) -> String {
        match metric.format() {
            ValueFormat::Currency => format_currency(value),
            ValueFormat::Percentage => format_percentage(value, self.config.percentage_decimals),
            ValueFormat::Number => format_indian_number(value),
            ValueFormat::Text => value.to_string(),
        }
    }

    /// Export the region-filtered table of a dataset
    pub fn export_category_table(
        &self,
        kind: DatasetKind,
        region: RegionSelection,
        format: ExportFormat,
    ) -> Result<ExportFile> {
        let dataset = self.catalog.dataset(kind);
        let rows = filter_by_region(&dataset.records, region, self.catalog.entities());
        let columns = dataset_columns(kind);
        let filename = data_filename(kind, region, &dataset.year, format.extension());

        let start = Instant::now();
        log_operation_start("Exporting", std::path::Path::new(&filename));
        let bytes = match format {
            ExportFormat::Csv => export_csv(&rows, &columns),
            ExportFormat::Xlsx => {
                export_xlsx_with(&rows, &columns, &dataset.title, &self.config.export)
                    .inspect_err(|e| log::error!("Failed to export {filename}: {e}"))?
            }
        };
        log_export_complete(&filename, rows.len(), Some(start.elapsed()));

        Ok(ExportFile { filename, bytes })
    }

    /// Export the selected rows of the comparison view
    pub fn export_comparison(
        &self,
        selection: &ComparisonSelection,
        format: ExportFormat,
    ) -> Result<ExportFile> {
        let rows = selection.rows(&self.joined);
        let columns = comparison_columns();
        let filename = format!(
            "{}.{}",
            comparison_filename(selection.selected().len()),
            format.extension()
        );

        let bytes = match format {
            ExportFormat::Csv => export_csv(&rows, &columns),
            ExportFormat::Xlsx => {
                export_xlsx_with(&rows, &columns, COMPARISON_TITLE, &self.config.export)
                    .inspect_err(|e| log::error!("Failed to export {filename}: {e}"))?
            }
        };
        log_export_complete(&filename, rows.len(), None);

        Ok(ExportFile { filename, bytes })
    }

    /// Export a chart as `<title slug>-<date>.png`
    pub fn export_chart(
        &self,
        capture: &dyn ChartCapture,
        title: &str,
        date: NaiveDate,
    ) -> Result<ExportFile> {
        export_png_with(capture, &chart_slug(title), date, &self.config.export)
    }
}
