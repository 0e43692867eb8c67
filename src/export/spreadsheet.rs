//! XLSX export: one worksheet, bold header row, content-sized columns.

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use super::{CellValue, ExportColumn, ExportRow};
use crate::config::ExportConfig;
use crate::error::Result;

/// Excel's limit on worksheet name length
const MAX_SHEET_NAME_CHARS: usize = 31;

/// Characters Excel rejects in worksheet names
const INVALID_SHEET_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Worksheet name derived from a title
///
/// Drops characters Excel rejects, strips leading and trailing apostrophes and
/// whitespace, and keeps at most 31 characters. Falls back to `fallback` when
/// nothing usable remains.
#[must_use]
pub fn sheet_name(title: &str, fallback: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !INVALID_SHEET_CHARS.contains(c))
        .collect();
    let name: String = cleaned
        .trim_matches(|c: char| c == '\'' || c.is_whitespace())
        .chars()
        .take(MAX_SHEET_NAME_CHARS)
        .collect();
    let name = name.trim_end_matches(|c: char| c == '\'' || c.is_whitespace());

    if name.is_empty() {
        fallback.to_string()
    } else {
        name.to_string()
    }
}

/// Column widths in characters: `clamp(longest + padding, min, max)`
///
/// The header label counts towards the longest cell.
#[must_use]
pub fn column_widths<R: ExportRow>(
    rows: &[R],
    columns: &[ExportColumn],
    config: &ExportConfig,
) -> Vec<usize> {
    columns
        .iter()
        .map(|column| {
            let longest = rows
                .iter()
                .map(|row| row.cell(column).render().chars().count())
                .fold(column.label.chars().count(), usize::max);
            (longest + config.column_padding).clamp(config.min_column_width, config.max_column_width)
        })
        .collect()
}

/// Encode rows as an XLSX workbook with default export settings
pub fn export_xlsx<R: ExportRow>(rows: &[R], columns: &[ExportColumn], title: &str) -> Result<Vec<u8>> {
    export_xlsx_with(rows, columns, title, &ExportConfig::default())
}

/// Encode rows as an XLSX workbook
pub fn export_xlsx_with<R: ExportRow>(
    rows: &[R],
    columns: &[ExportColumn],
    title: &str,
    config: &ExportConfig,
) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(title, &config.sheet_fallback_name))?;

    let widths = column_widths(rows, columns, config);
    for (index, (column, width)) in columns.iter().zip(widths).enumerate() {
        let col = column_index(index)?;
        worksheet.write_string_with_format(0, col, &column.label, &header)?;
        worksheet.set_column_width(col, width as f64)?;
    }

    for (row_index, row) in rows.iter().enumerate() {
        let excel_row = u32::try_from(row_index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (index, column) in columns.iter().enumerate() {
            let col = column_index(index)?;
            match row.cell(column) {
                CellValue::Text(text) => {
                    worksheet.write_string(excel_row, col, &text)?;
                }
                CellValue::Number(number) => {
                    worksheet.write_number(excel_row, col, number)?;
                }
                CellValue::Empty => {}
            }
        }
    }

    let bytes = workbook.save_to_buffer()?;
    log::debug!(
        "Encoded {} rows x {} columns as XLSX ({} bytes)",
        rows.len(),
        columns.len(),
        bytes.len()
    );
    Ok(bytes)
}

fn column_index(index: usize) -> Result<u16> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError.into())
}
