//! Indian numbering formatters
//!
//! Every function here is pure: the output depends only on the numeric input.
//! Fixed-decimal rounding is half-up on the exact binary value, so `7.25` at
//! one decimal renders as `7.3` (`{:.1}` would give `7.2`).

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Enough fraction digits to print any finite `f64` exactly
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Maximum fraction digits shown by the locale formatter
const LOCALE_FRACTION_DIGITS: usize = 3;

/// Format a magnitude as crores, lakhs, or thousands
///
/// Values of at least one crore render as `"X.XX Cr"`, one lakh as
/// `"X.XX L"`, one thousand as `"X.XX K"`, with trailing zeros dropped.
/// Smaller values use en-IN digit grouping.
///
/// ```
/// use state_stats::utils::format::format_indian_number;
///
/// assert_eq!(format_indian_number(10_000_000.0), "1 Cr");
/// assert_eq!(format_indian_number(150_000.0), "1.5 L");
/// assert_eq!(format_indian_number(2_500.0), "2.5 K");
/// ```
#[must_use]
pub fn format_indian_number(num: f64) -> String {
    if num == 0.0 {
        return "0".to_string();
    }

    let abs = num.abs();
    let sign = if num < 0.0 { "-" } else { "" };

    let scaled = [(CRORE, "Cr"), (LAKH, "L"), (THOUSAND, "K")]
        .into_iter()
        .find(|(unit, _)| abs >= *unit);

    match scaled {
        Some((unit, suffix)) => {
            let fixed = to_fixed(abs / unit, 2);
            format!("{sign}{} {suffix}", trim_fraction(&fixed))
        }
        None => format!("{sign}{}", format_locale(abs)),
    }
}

/// Indian-number format prefixed with the Rupee symbol
#[must_use]
pub fn format_currency(num: f64) -> String {
    format!("₹{}", format_indian_number(num))
}

/// Fixed-decimal percentage, e.g. `format_percentage(7.25, 1) == "7.3%"`
#[must_use]
pub fn format_percentage(num: f64, decimals: usize) -> String {
    format!("{}%", to_fixed(num, decimals))
}

/// Full number with en-IN grouping (`12,34,567.891`)
#[must_use]
pub fn format_full_number(num: f64) -> String {
    let sign = if num < 0.0 { "-" } else { "" };
    format!("{sign}{}", format_locale(num.abs()))
}

/// Crore / lakh / thousand segmented notation (`1,23,45,678`)
///
/// Unlike `format_full_number`, the crore segment is never regrouped, so
/// `1234567890` renders as `123,45,67,890`.
#[must_use]
pub fn format_indian_full(num: f64) -> String {
    if num == 0.0 {
        return "0".to_string();
    }

    let abs = num.abs();
    let sign = if num < 0.0 { "-" } else { "" };

    let crores = (abs / CRORE).floor() as u64;
    let lakhs = ((abs % CRORE) / LAKH).floor() as u64;
    let thousands = ((abs % LAKH) / THOUSAND).floor() as u64;
    let remaining = abs % THOUSAND;

    let mut out = String::new();
    if crores > 0 {
        out.push_str(&format!("{crores},"));
    }
    if crores > 0 || lakhs > 0 {
        if crores > 0 {
            out.push_str(&format!("{lakhs:02},"));
        } else {
            out.push_str(&format!("{lakhs},"));
        }
    }
    if crores > 0 || lakhs > 0 || thousands > 0 {
        if crores > 0 || lakhs > 0 {
            out.push_str(&format!("{thousands:02},"));
        } else {
            out.push_str(&format!("{thousands},"));
        }
        out.push_str(&pad_start(&remaining.to_string(), 3, '0'));
    } else {
        out.push_str(&remaining.to_string());
    }

    format!("{sign}{}", out.trim_matches(','))
}

/// Round to `digits` decimals, half-up on the exact binary value
#[must_use]
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let kept_fraction = digits.min(frac_part.len());
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(kept_fraction))
        .chain(std::iter::repeat_n(b'0', digits - kept_fraction))
        .collect();
    let mut int_len = int_part.len();

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&next| next >= b'5');
    if round_up {
        let mut position = kept.len();
        loop {
            if position == 0 {
                kept.insert(0, b'1');
                int_len += 1;
                break;
            }
            position -= 1;
            if kept[position] == b'9' {
                kept[position] = b'0';
            } else {
                kept[position] += 1;
                break;
            }
        }
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..int_len].iter().map(|&b| char::from(b)));
    if digits > 0 {
        out.push('.');
        out.extend(kept[int_len..].iter().map(|&b| char::from(b)));
    }
    out
}

/// Drop trailing fraction zeros and a dangling decimal point
fn trim_fraction(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

/// en-IN locale rendering of a non-negative value
fn format_locale(abs: f64) -> String {
    let fixed = to_fixed(abs, LOCALE_FRACTION_DIGITS);
    let trimmed = trim_fraction(&fixed);
    match trimmed.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{frac_part}", group_indian(int_part)),
        None => group_indian(trimmed),
    }
}

/// Group integer digits as `xx,xx,xxx`
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

fn pad_start(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    std::iter::repeat_n(fill, width - len).chain(text.chars()).collect()
}
