//! Pure helpers shared by the views and exporters
//!
//! Number formatting, colour bucketing, slug handling, and log line helpers.

pub mod color;
pub mod format;
pub mod logging;
pub mod slug;

pub use color::{ColorScale, MISSING_COLOR, color_for_value};
pub use format::{
    format_currency, format_full_number, format_indian_full, format_indian_number,
    format_percentage,
};
pub use slug::{deslugify, slugify};
