use crate::utils::{assert_close, catalog};
use proptest::prelude::*;
use state_stats::algorithm::statistics::{
    MetricSummary, MissingPolicy, SummaryStats, column_values, median, summarize,
};
use state_stats::filter::filter_by_region;
use state_stats::models::{DatasetKind, Metric, Region, RegionSelection};

/// Statistics of the GSDP column
#[test]
fn test_gdp_summary() {
    let catalog = catalog();
    let gdp = catalog.dataset(DatasetKind::Gdp);

    let stats = summarize(&gdp.records, &Metric::Gsdp, MissingPolicy::Exclude).unwrap();
    assert_eq!(stats.count, 9);
    assert_eq!(stats.min, 11_000.0);
    assert_eq!(stats.max, 3_500_000.0);
    assert_eq!(stats.median, 2_100_000.0);
    assert_close(stats.mean, 14_041_000.0 / 9.0);
}

/// The growth column has one absent value
#[test]
fn test_missing_policy_changes_count() {
    let catalog = catalog();
    let gdp = catalog.dataset(DatasetKind::Gdp);

    let excluded = column_values(&gdp.records, &Metric::Growth, MissingPolicy::Exclude);
    let zeroed = column_values(&gdp.records, &Metric::Growth, MissingPolicy::TreatAsZero);
    assert_eq!(excluded.len(), 8);
    assert_eq!(zeroed.len(), 9);
    assert!(zeroed.contains(&0.0));
}

/// Summary of a filtered selection
#[test]
fn test_region_summary() {
    let catalog = catalog();
    let banking = catalog.dataset(DatasetKind::Banking);
    let south = filter_by_region(
        &banking.records,
        RegionSelection::Only(Region::South),
        catalog.entities(),
    );

    let summary = MetricSummary::build(south.iter().copied(), &Metric::Branches);
    assert_eq!(summary.top.unwrap().name, "Tamil Nadu");
    assert_eq!(summary.bottom.unwrap().name, "Kerala");
    let stats = summary.stats.unwrap();
    assert_eq!(stats.median, 11_500.0);
    assert_close(stats.mean, 31_100.0 / 3.0);
}

/// An empty selection has no statistics
#[test]
fn test_empty_selection() {
    let catalog = catalog();
    let exports = catalog.dataset(DatasetKind::Exports);
    let east = filter_by_region(
        &exports.records,
        RegionSelection::Only(Region::East),
        catalog.entities(),
    );

    let summary = MetricSummary::build(east, &Metric::Exports);
    assert!(summary.top.is_none());
    assert!(summary.bottom.is_none());
    assert!(summary.stats.is_none());
}

proptest! {
    /// Odd lengths give the middle element, even lengths the mean of the two middle ones
    #[test]
    fn prop_median_split(mut values in proptest::collection::vec(-1.0e6..1.0e6_f64, 1..50)) {
        let result = median(&values).unwrap();
        values.sort_by(f64::total_cmp);

        let middle = values.len() / 2;
        let expected = if values.len() % 2 == 1 {
            values[middle]
        } else {
            (values[middle - 1] + values[middle]) / 2.0
        };
        prop_assert_eq!(result, expected);
    }

    /// Statistics recompute identically and stay within bounds
    #[test]
    fn prop_summary_deterministic(values in proptest::collection::vec(-1.0e6..1.0e6_f64, 1..50)) {
        let first = SummaryStats::from_values(&values).unwrap();
        let second = SummaryStats::from_values(&values).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(first.min <= first.median && first.median <= first.max);
        prop_assert!(first.min <= first.mean + 1e-6 && first.mean <= first.max + 1e-6);
    }
}
