use crate::utils::{catalog, synthetic_records};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use state_stats::algorithm::ranking::{
    LabelPolicy, OTHERS_LABEL, laggard, leader, nearest_peers, rank_of, region_totals,
    share_breakdown, top_n, top_n_labelled,
};
use state_stats::models::{DatasetKind, Metric, Region};

/// Full GDP ranking, largest first
#[test]
fn test_gdp_ranking() {
    let catalog = catalog();
    let gdp = catalog.dataset(DatasetKind::Gdp);

    let ranked: Vec<String> = top_n(&gdp.records, &Metric::Gsdp, 5)
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    assert_eq!(
        ranked,
        vec!["Maharashtra", "Tamil Nadu", "Karnataka", "Gujarat", "Uttar Pradesh"]
    );
}

/// Long names are shortened on the label only
#[test]
fn test_labels_keep_full_name() {
    let catalog = catalog();
    let gdp = catalog.dataset(DatasetKind::Gdp);

    let chart = top_n_labelled(&gdp.records, &Metric::Gsdp, 20, &LabelPolicy::default());
    let andaman = chart.last().unwrap();
    assert_eq!(andaman.name, "Andaman and Nicobar Islands");
    assert_eq!(andaman.label, "Andaman and ...");
    assert_eq!(andaman.rank, 9);

    let up = chart.iter().find(|e| e.name == "Uttar Pradesh").unwrap();
    assert_eq!(up.label, "Uttar Pradesh");
}

/// Ranks, leaders, and laggards per dataset
#[test]
fn test_rank_of_entities() {
    let catalog = catalog();
    let banking = catalog.dataset(DatasetKind::Banking);
    let exports = catalog.dataset(DatasetKind::Exports);

    assert_eq!(rank_of(&banking.records, &Metric::Deposits, "Goa"), Some(8));
    assert_eq!(rank_of(&exports.records, &Metric::Exports, "Goa"), Some(7));
    assert_eq!(rank_of(&exports.records, &Metric::Exports, "Ladakh"), None);

    assert_eq!(leader(&banking.records, &Metric::Branches).unwrap().0.state, "Uttar Pradesh");
    assert_eq!(laggard(&banking.records, &Metric::Deposits).unwrap().0.state, "Ladakh");

    // ad-hoc key selectors rank the same way
    assert_eq!(rank_of(&banking.records, "cdRatio", "Tamil Nadu"), Some(1));
}

/// Growth is missing for Goa, so Goa ranks last with zero
#[test]
fn test_missing_value_ranks_as_zero() {
    let catalog = catalog();
    let gdp = catalog.dataset(DatasetKind::Gdp);

    let (record, value) = laggard(&gdp.records, &Metric::Growth).unwrap();
    assert_eq!(record.state, "Goa");
    assert_eq!(value, 0.0);
}

/// Top five exporters plus the rest
#[test]
fn test_export_share_breakdown() {
    let catalog = catalog();
    let exports = catalog.dataset(DatasetKind::Exports);

    let slices = share_breakdown(&exports.records, &Metric::Exports, 5);
    assert_eq!(slices.len(), 6);
    assert_eq!(slices[0].name, "Gujarat");
    assert_eq!(slices[5].name, OTHERS_LABEL);
    assert_eq!(slices[5].value, 70_000.0);
}

/// Export totals per region
#[test]
fn test_region_totals() {
    let catalog = catalog();
    let exports = catalog.dataset(DatasetKind::Exports);

    let totals = region_totals(&exports.records, &Metric::Exports, catalog.entities());
    assert_eq!(
        totals,
        vec![
            (Region::West, 1_521_000.0),
            (Region::South, 645_000.0),
            (Region::North, 160_000.0),
            (Region::Northeast, 4_000.0),
        ]
    );
}

/// Closest GSDP peers of Kerala
#[test]
fn test_nearest_gdp_peers() {
    let catalog = catalog();
    let gdp = catalog.dataset(DatasetKind::Gdp);

    let peers: Vec<(String, f64)> = nearest_peers(&gdp.records, &Metric::Gsdp, "Kerala", 3)
        .into_iter()
        .map(|peer| (peer.name, peer.gap))
        .collect();
    assert_eq!(
        peers,
        vec![
            ("Assam".to_string(), 510_000.0),
            ("Goa".to_string(), 910_000.0),
            ("Andaman and Nicobar Islands".to_string(), 989_000.0),
        ]
    );
}

fn rows_strategy() -> impl Strategy<Value = Vec<(String, Option<f64>)>> {
    proptest::collection::vec(
        (
            "[A-Z][a-z]{2,8}",
            proptest::option::of(-1.0e9..1.0e9_f64),
        ),
        0..30,
    )
}

proptest! {
    /// Top-N has length min(N, |D|) and is non-increasing with missing as zero
    #[test]
    fn prop_top_n_length_and_order(rows in rows_strategy(), n in 0usize..40) {
        let records = synthetic_records(&rows, "gsdp");
        let top = top_n(&records, &Metric::Gsdp, n);

        prop_assert_eq!(top.len(), n.min(records.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }

        // the ranked values are the n largest of the zero-filled column
        let mut column: Vec<f64> = records.iter().map(|r| r.value_or_zero("gsdp")).collect();
        column.sort_by(|a, b| b.total_cmp(a));
        column.truncate(n);
        let values: Vec<f64> = top.iter().map(|e| e.value).collect();
        prop_assert_eq!(values, column);

        for (position, entry) in top.iter().enumerate() {
            prop_assert_eq!(entry.rank, position + 1);
        }
    }

    /// Equal values keep their input order
    #[test]
    fn prop_ties_keep_input_order(count in 1usize..20) {
        let rows: Vec<(String, Option<f64>)> = (0..count)
            .map(|i| (format!("S{i:02}"), Some(5.0)))
            .collect();
        let records = synthetic_records(&rows, "gsdp");

        let ranked: Vec<String> = top_n(&records, "gsdp", count).into_iter().map(|e| e.name).collect();
        let expected: Vec<String> = rows.into_iter().map(|(name, _)| name).collect();
        prop_assert_eq!(ranked, expected);
    }
}
