use std::path::Path;

use serde_json::{Value, json};
use state_stats::loader::{ENTITY_FILE, parse_entities};
use state_stats::{Catalog, Dataset, DatasetKind, MetricRecord};

/// Entity reference table, in canonical order
///
/// Ladakh has no GDP or exports row, Andaman and Nicobar Islands has no
/// exports row, and the tourism snapshot carries an "Atlantis" row that is not
/// in this table.
#[must_use]
pub fn states_json() -> Value {
    json!({
        "states": [
            {"code": "MH", "name": "Maharashtra", "region": "West", "capital": "Mumbai"},
            {"code": "TN", "name": "Tamil Nadu", "region": "South", "capital": "Chennai"},
            {"code": "GJ", "name": "Gujarat", "region": "West", "capital": "Gandhinagar"},
            {"code": "KA", "name": "Karnataka", "region": "South", "capital": "Bengaluru"},
            {"code": "UP", "name": "Uttar Pradesh", "region": "North", "capital": "Lucknow"},
            {"code": "KL", "name": "Kerala", "region": "South", "capital": "Thiruvananthapuram"},
            {"code": "AS", "name": "Assam", "region": "Northeast", "capital": "Dispur"},
            {"code": "GA", "name": "Goa", "region": "West", "capital": "Panaji"},
            {"code": "LA", "name": "Ladakh", "region": "North", "capital": "Leh"},
            {"code": "AN", "name": "Andaman and Nicobar Islands", "region": "East", "capital": "Sri Vijaya Puram"}
        ]
    })
}

#[must_use]
pub fn gdp_json() -> Value {
    json!({
        "title": "Gross State Domestic Product",
        "description": "GSDP at current prices",
        "source": "MoSPI",
        "year": "2022-23",
        "unit": "Rs Crore",
        "national": {"totalGDP": 27_000_000, "avgGrowth": 7.5, "avgPerCapita": 170_000},
        "data": [
            {"state": "Maharashtra", "gsdp": 3_500_000, "growth": 9.1, "perCapita": 242_000},
            {"state": "Tamil Nadu", "gsdp": 2_400_000, "growth": 8.2, "perCapita": 275_000},
            {"state": "Gujarat", "gsdp": 2_200_000, "growth": 8.8, "perCapita": 275_000},
            {"state": "Karnataka", "gsdp": 2_250_000, "growth": 7.9, "perCapita": 301_000},
            {"state": "Uttar Pradesh", "gsdp": 2_100_000, "growth": 7.0, "perCapita": 83_000},
            {"state": "Kerala", "gsdp": 1_000_000, "growth": 6.6, "perCapita": 250_000},
            {"state": "Assam", "gsdp": 490_000, "growth": 7.25, "perCapita": 120_000},
            {"state": "Goa", "gsdp": 90_000, "growth": null, "perCapita": 470_000},
            {"state": "Andaman and Nicobar Islands", "gsdp": 11_000, "growth": 6.0, "perCapita": 230_000}
        ]
    })
}

#[must_use]
pub fn banking_json() -> Value {
    json!({
        "title": "Banking Indicators",
        "description": "Scheduled commercial banks",
        "source": "RBI",
        "year": 2023,
        "national": {"totalBranches": 157_930, "totalDeposits": 9_513_000},
        "data": [
            {"state": "Maharashtra", "branches": 15_000, "deposits": 3_000_000, "credit": 2_700_000, "cdRatio": 90.0},
            {"state": "Tamil Nadu", "branches": 12_000, "deposits": 1_200_000, "credit": 1_400_000, "cdRatio": 116.7},
            {"state": "Gujarat", "branches": 9_500, "deposits": 1_000_000, "credit": 760_000, "cdRatio": 76.0},
            {"state": "Karnataka", "branches": 11_500, "deposits": 1_300_000, "credit": 900_000, "cdRatio": 69.2},
            {"state": "Uttar Pradesh", "branches": 19_000, "deposits": 1_900_000, "credit": 850_000, "cdRatio": 44.7},
            {"state": "Kerala", "branches": 7_600, "deposits": 800_000, "credit": 550_000, "cdRatio": 68.8},
            {"state": "Assam", "branches": 2_400, "deposits": 190_000, "credit": 95_000, "cdRatio": 50.0},
            {"state": "Goa", "branches": 800, "deposits": 110_000, "credit": 30_000, "cdRatio": 27.3},
            {"state": "Ladakh", "branches": 60, "deposits": 5_000, "credit": 2_000, "cdRatio": 40.0},
            {"state": "Andaman and Nicobar Islands", "branches": 70, "deposits": 8_000, "credit": 3_000, "cdRatio": 37.5}
        ]
    })
}

#[must_use]
pub fn exports_json() -> Value {
    json!({
        "title": "Merchandise Exports",
        "description": "Exports by state of origin",
        "source": "DGCIS",
        "year": "2022-23",
        "national": {"totalExports": 2_880_000},
        "data": [
            {"state": "Gujarat", "exports": 950_000, "share": 33.0},
            {"state": "Maharashtra", "exports": 550_000, "share": 15.2},
            {"state": "Tamil Nadu", "exports": 420_000, "share": 9.0},
            {"state": "Karnataka", "exports": 180_000, "share": 5.4},
            {"state": "Uttar Pradesh", "exports": 160_000, "share": 4.3},
            {"state": "Kerala", "exports": 45_000, "share": 1.2},
            {"state": "Goa", "exports": 21_000, "share": 0.6},
            {"state": "Assam", "exports": 4_000, "share": 0.1}
        ]
    })
}

#[must_use]
pub fn tourism_json() -> Value {
    json!({
        "title": "Tourist Visits",
        "description": "Domestic and foreign tourist visits",
        "source": "Ministry of Tourism",
        "year": 2023,
        "national": {"totalDomestic": 2_509_000_000_u64, "totalForeign": 9_240_000},
        "data": [
            {"state": "Uttar Pradesh", "domestic": 317_000_000, "foreign": 650_000, "total": 317_650_000},
            {"state": "Tamil Nadu", "domestic": 218_000_000, "foreign": 400_000, "total": 218_400_000},
            {"state": "Maharashtra", "domestic": 150_000_000, "foreign": 1_500_000, "total": 151_500_000},
            {"state": "Karnataka", "domestic": 182_000_000, "foreign": 100_000, "total": 182_100_000},
            {"state": "Gujarat", "domestic": 60_000_000, "foreign": 500_000, "total": 60_500_000},
            {"state": "Kerala", "domestic": 22_000_000, "foreign": 350_000, "total": 22_350_000},
            {"state": "Goa", "domestic": 8_000_000, "foreign": 400_000, "total": 8_400_000},
            {"state": "Assam", "domestic": 8_000_000, "foreign": 10_000, "total": 8_010_000},
            {"state": "Ladakh", "domestic": 500_000, "foreign": 30_000, "total": 530_000},
            {"state": "Andaman and Nicobar Islands", "domestic": 500_000, "foreign": 16_000, "total": 516_000},
            {"state": "Atlantis", "domestic": 1, "foreign": 1, "total": 2}
        ]
    })
}

/// Snapshot document of one dataset
#[must_use]
pub fn dataset_json(kind: DatasetKind) -> Value {
    match kind {
        DatasetKind::Gdp => gdp_json(),
        DatasetKind::Banking => banking_json(),
        DatasetKind::Exports => exports_json(),
        DatasetKind::Tourism => tourism_json(),
    }
}

/// The fixture catalog, built in memory
#[must_use]
pub fn catalog() -> Catalog {
    let entities = parse_entities(&states_json().to_string()).expect("valid states fixture");
    let datasets = DatasetKind::ALL
        .into_iter()
        .map(|kind| {
            Dataset::from_json_str(kind, &dataset_json(kind).to_string())
                .expect("valid dataset fixture")
        })
        .collect();
    Catalog::new(entities, datasets).expect("complete catalog fixture")
}

/// Write the fixture snapshots into `dir`
pub fn write_data_dir(dir: &Path) {
    std::fs::write(dir.join(ENTITY_FILE), states_json().to_string()).expect("write states");
    for kind in DatasetKind::ALL {
        std::fs::write(dir.join(kind.file_name()), dataset_json(kind).to_string())
            .expect("write dataset");
    }
}

/// Names of a record list
#[must_use]
pub fn names<'a, I>(records: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a MetricRecord>,
{
    records.into_iter().map(|record| record.state.as_str()).collect()
}

/// Synthetic records for property tests: `(name, Option<value>)`
#[must_use]
pub fn synthetic_records(rows: &[(String, Option<f64>)], key: &str) -> Vec<MetricRecord> {
    rows.iter()
        .map(|(name, value)| {
            let record = MetricRecord::new(name.clone());
            match value {
                Some(value) => record.with_field(key, *value),
                None => record,
            }
        })
        .collect()
}

/// Compare floats to within a relative tolerance
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs().max(1.0) * 1e-9;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
