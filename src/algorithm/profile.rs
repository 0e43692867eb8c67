//! Per-entity detail view
//!
//! Unlike the comparison join, a profile never drops an entity for missing
//! data: each dataset's record is optional and every derived figure is absent
//! when its inputs are.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::ranking::{self, PeerGap};
use super::statistics::average_or_zero;
use crate::models::{Catalog, DatasetKind, Entity, Metric, MetricRecord, Region};

/// Key of the national GSDP total in the GDP snapshot summary
pub const NATIONAL_GDP_KEY: &str = "totalGDP";

/// Peers listed when no count is configured
pub const DEFAULT_PEER_COUNT: usize = 3;

/// Averages over the entities of one region
///
/// Each average divides by the number of the region's records in that
/// dataset, or by one when there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalAverages {
    pub region: Region,
    /// Entities of the region in the reference table
    pub entity_count: usize,
    pub gsdp: f64,
    pub exports: f64,
    pub tourists: f64,
    pub branches: f64,
}

impl RegionalAverages {
    fn build(catalog: &Catalog, region: Region) -> Self {
        let members: FxHashSet<&str> = catalog
            .entities()
            .in_region(region)
            .map(|entity| entity.name.as_str())
            .collect();

        let average = |metric: Metric| {
            let values: Vec<f64> = catalog
                .dataset(metric.dataset())
                .records
                .iter()
                .filter(|record| members.contains(record.state.as_str()))
                .map(|record| record.value_or_zero(metric.key()))
                .collect();
            average_or_zero(&values)
        };

        Self {
            region,
            entity_count: members.len(),
            gsdp: average(Metric::Gsdp),
            exports: average(Metric::Exports),
            tourists: average(Metric::Total),
            branches: average(Metric::Branches),
        }
    }
}

/// Everything shown on an entity's detail view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityProfile {
    pub entity: Entity,
    /// Records of the datasets that have one for the entity
    pub records: BTreeMap<DatasetKind, MetricRecord>,
    /// 1-based national rank per dataset, by each dataset's rank metric
    pub ranks: BTreeMap<DatasetKind, usize>,
    /// Share of the national GSDP total, in percent
    pub gdp_share: Option<f64>,
    /// National GSDP total divided by the number of GDP records
    pub national_average_gsdp: Option<f64>,
    pub regional: RegionalAverages,
    /// Entities with the closest GSDP
    pub peers: Vec<PeerGap>,
}

impl EntityProfile {
    /// Profile of the entity with this exact name
    ///
    /// `None` when the name is not in the entity table.
    #[must_use]
    pub fn build(catalog: &Catalog, name: &str) -> Option<Self> {
        Self::build_with_peers(catalog, name, DEFAULT_PEER_COUNT)
    }

    /// Profile of the entity addressed by a detail-view slug
    #[must_use]
    pub fn from_slug(catalog: &Catalog, slug: &str) -> Option<Self> {
        let entity = catalog.entities().resolve_slug(slug)?;
        Self::build(catalog, &entity.name)
    }

    /// Profile listing `peer_count` nearest GSDP peers
    #[must_use]
    pub fn build_with_peers(catalog: &Catalog, name: &str, peer_count: usize) -> Option<Self> {
        let entity = catalog.entities().get(name)?.clone();

        let mut records = BTreeMap::new();
        let mut ranks = BTreeMap::new();
        for dataset in catalog.datasets() {
            let Some(record) = dataset.record(name) else {
                continue;
            };
            records.insert(dataset.kind, record.clone());
            if let Some(rank) =
                ranking::rank_of(&dataset.records, &dataset.kind.rank_metric(), name)
            {
                ranks.insert(dataset.kind, rank);
            }
        }

        let gdp = catalog.dataset(DatasetKind::Gdp);
        let national_total = gdp.national_value(NATIONAL_GDP_KEY);
        let gsdp = records
            .get(&DatasetKind::Gdp)
            .and_then(|record| record.value(Metric::Gsdp.key()));

        let gdp_share = match (gsdp, national_total) {
            (Some(value), Some(total)) if total != 0.0 => Some(value / total * 100.0),
            _ => None,
        };
        let national_average_gsdp = match national_total {
            Some(total) if !gdp.is_empty() => Some(total / gdp.len() as f64),
            _ => None,
        };

        let peers = ranking::nearest_peers(&gdp.records, &Metric::Gsdp, name, peer_count);
        let regional = RegionalAverages::build(catalog, entity.region);

        Some(Self {
            entity,
            records,
            ranks,
            gdp_share,
            national_average_gsdp,
            regional,
            peers,
        })
    }

    /// Record from one dataset
    #[must_use]
    pub fn record(&self, kind: DatasetKind) -> Option<&MetricRecord> {
        self.records.get(&kind)
    }

    /// National rank within one dataset
    #[must_use]
    pub fn rank(&self, kind: DatasetKind) -> Option<usize> {
        self.ranks.get(&kind).copied()
    }

    /// Datasets with no record for the entity
    #[must_use]
    pub fn absent_from(&self) -> Vec<DatasetKind> {
        DatasetKind::ALL
            .into_iter()
            .filter(|kind| !self.records.contains_key(kind))
            .collect()
    }
}
