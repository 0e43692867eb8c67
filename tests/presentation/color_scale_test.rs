use proptest::prelude::*;
use state_stats::config::DashboardConfig;
use state_stats::models::DatasetKind;
use state_stats::utils::color::scale_index;
use state_stats::utils::{ColorScale, MISSING_COLOR, color_for_value};

/// Sample points on a six-colour palette over [0, 100]
#[test]
fn test_palette_sample_points() {
    let config = DashboardConfig::default();
    let palette = config.palettes.palette(DatasetKind::Gdp);

    assert_eq!(color_for_value(Some(0.0), 0.0, 100.0, palette), palette[0]);
    assert_eq!(color_for_value(Some(100.0), 0.0, 100.0, palette), palette[5]);
    assert_eq!(color_for_value(Some(50.0), 0.0, 100.0, palette), palette[2]);
}

/// A column where every value is equal maps to the last colour
#[test]
fn test_single_value_column() {
    let config = DashboardConfig::default();
    let palette = config.palettes.palette(DatasetKind::Tourism).to_vec();

    let scale = ColorScale::from_values(palette.clone(), [42.0, 42.0]);
    assert_eq!(scale.color_for(Some(42.0)), palette[5]);
}

/// Absent values get the placeholder, which can be overridden
#[test]
fn test_missing_value_placeholder() {
    let config = DashboardConfig::default();
    let palette = config.palettes.palette(DatasetKind::Banking).to_vec();

    let scale = ColorScale::new(palette, 0.0, 10.0);
    assert_eq!(scale.color_for(None), MISSING_COLOR);
    assert_eq!(scale.with_missing_color("#000000").color_for(None), "#000000");
}

proptest! {
    /// Bucket indices stay on the palette and never decrease as the value grows
    #[test]
    fn prop_scale_index_monotonic(
        min in -1.0e6..1.0e6_f64,
        span in 0.0..1.0e6_f64,
        a in -2.0e6..2.0e6_f64,
        b in -2.0e6..2.0e6_f64,
        len in 1usize..10,
    ) {
        let max = min + span;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low_index = scale_index(low, min, max, len).unwrap();
        let high_index = scale_index(high, min, max, len).unwrap();
        prop_assert!(high_index < len);
        prop_assert!(low_index <= high_index);
    }
}
