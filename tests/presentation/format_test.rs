use proptest::prelude::*;
use state_stats::utils::format::to_fixed;
use state_stats::utils::{
    format_currency, format_full_number, format_indian_full, format_indian_number,
    format_percentage,
};

/// Unit suffixes and trailing-zero trimming
#[test]
fn test_indian_number_units() {
    assert_eq!(format_indian_number(10_000_000.0), "1 Cr");
    assert_eq!(format_indian_number(150_000.0), "1.5 L");
    assert_eq!(format_indian_number(2_500.0), "2.5 K");
    assert_eq!(format_indian_number(3_500_000.0), "35 L");
    assert_eq!(format_indian_number(317_650_000.0), "31.77 Cr");
    assert_eq!(format_indian_number(270.5), "270.5");
}

/// Percentages use the requested precision
#[test]
fn test_percentage_precision() {
    assert_eq!(format_percentage(7.25, 1), "7.3%");
    assert_eq!(format_percentage(15.2, 1), "15.2%");
    assert_eq!(format_percentage(116.7, 0), "117%");
    assert_eq!(format_percentage(3.7037037, 2), "3.70%");
}

/// Currency is the Indian number with a Rupee prefix
#[test]
fn test_currency_prefix() {
    assert_eq!(format_currency(10_000_000.0), "₹1 Cr");
    assert_eq!(format_currency(800.0), "₹800");
}

/// Full numbers group as lakh and crore
#[test]
fn test_full_number_grouping() {
    assert_eq!(format_full_number(1_234_567.0), "12,34,567");
    assert_eq!(format_full_number(-98_765.0), "-98,765");
    assert_eq!(format_full_number(999.0), "999");
    assert_eq!(format_full_number(1_500.25), "1,500.25");
}

/// Segmented notation keeps the crore segment whole
#[test]
fn test_indian_full_segments() {
    assert_eq!(format_indian_full(12_345_678.0), "1,23,45,678");
    assert_eq!(format_indian_full(1_234_567_890.0), "123,45,67,890");
    assert_eq!(format_indian_full(5_000.0), "5,000");
    assert_eq!(format_indian_full(0.0), "0");
}

proptest! {
    /// Formatting depends only on the input value
    #[test]
    fn prop_formatting_is_pure(value in -1.0e12..1.0e12_f64) {
        prop_assert_eq!(format_indian_number(value), format_indian_number(value));
        prop_assert_eq!(format_percentage(value, 1), format_percentage(value, 1));
        prop_assert_eq!(format_full_number(value), format_full_number(value));
    }

    /// Values of at least one crore always carry the crore suffix
    #[test]
    fn prop_crore_suffix(value in 1.0e7..1.0e13_f64) {
        prop_assert!(format_indian_number(value).ends_with(" Cr"));
    }

    /// Fixed output has exactly the requested number of fraction digits
    #[test]
    fn prop_to_fixed_digits(value in -1.0e6..1.0e6_f64, digits in 0usize..6) {
        let fixed = to_fixed(value, digits);
        match fixed.split_once('.') {
            Some((_, fraction)) => prop_assert_eq!(fraction.len(), digits),
            None => prop_assert_eq!(digits, 0),
        }
        let parsed: f64 = fixed.parse().unwrap();
        prop_assert!((parsed - value).abs() <= 0.5 * 10f64.powi(-(digits as i32)) + 1e-9);
    }
}
