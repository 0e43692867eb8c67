//! Value -> colour bucket mapping for map fills and chart bars.

/// Fill used for entities that have no value in the dataset
pub const MISSING_COLOR: &str = "#e5e7eb";

/// Bucket index for `value` on a palette of `len` colours
///
/// `floor(((value - min) / (max - min)) * (len - 1))`, clamped to the palette.
/// A degenerate range (`max <= min`) selects the last bucket. Returns `None`
/// only for an empty palette.
#[must_use]
pub fn scale_index(value: f64, min: f64, max: f64, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;

    let range = max - min;
    if range <= 0.0 || !range.is_finite() {
        return Some(last);
    }

    let position = (((value - min) / range) * last as f64).floor();
    if position.is_nan() || position <= 0.0 {
        Some(0)
    } else {
        Some((position as usize).min(last))
    }
}

/// Colour for an optional value; absent values get `MISSING_COLOR`
#[must_use]
pub fn color_for_value<'a, C: AsRef<str>>(
    value: Option<f64>,
    min: f64,
    max: f64,
    colors: &'a [C],
) -> &'a str {
    value
        .and_then(|value| scale_index(value, min, max, colors.len()))
        .map_or(MISSING_COLOR, |index| colors[index].as_ref())
}

/// A palette bound to the value range of one data column
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    colors: Vec<String>,
    min: f64,
    max: f64,
    missing_color: String,
}

impl ColorScale {
    /// Bind a palette to an explicit range
    #[must_use]
    pub fn new(colors: Vec<String>, min: f64, max: f64) -> Self {
        Self {
            colors,
            min,
            max,
            missing_color: MISSING_COLOR.to_string(),
        }
    }

    /// Bind a palette to the range spanned by `values`
    ///
    /// An empty value list yields a `[0, 0]` range, so every value would map to
    /// the last bucket.
    #[must_use]
    pub fn from_values<I>(colors: Vec<String>, values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .fold(None, |range: Option<(f64, f64)>, value| match range {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
            .unwrap_or((0.0, 0.0));
        Self::new(colors, min, max)
    }

    /// Override the placeholder colour for absent values
    #[must_use]
    pub fn with_missing_color(mut self, color: impl Into<String>) -> Self {
        self.missing_color = color.into();
        self
    }

    /// Lower bound of the range
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the range
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Colour for a value, or the placeholder when absent
    #[must_use]
    pub fn color_for(&self, value: Option<f64>) -> &str {
        value
            .and_then(|value| scale_index(value, self.min, self.max, self.colors.len()))
            .map_or(self.missing_color.as_str(), |index| self.colors[index].as_str())
    }
}
