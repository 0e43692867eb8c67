//! CSV export: UTF-8 with BOM, comma separated, `\n` line endings.

use super::{ExportColumn, ExportRow};

const BOM: &str = "\u{feff}";

/// Quote a field that contains a comma, a double quote, or a newline
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_line<I>(out: &mut String, fields: I)
where
    I: IntoIterator<Item = String>,
{
    let line = fields
        .into_iter()
        .map(|field| escape_field(&field))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
}

/// Encode rows as CSV, header row first
///
/// No trailing newline follows the last row.
pub fn export_csv<R: ExportRow>(rows: &[R], columns: &[ExportColumn]) -> Vec<u8> {
    let mut out = String::from(BOM);
    write_line(&mut out, columns.iter().map(|column| column.label.clone()));

    for row in rows {
        out.push('\n');
        write_line(
            &mut out,
            columns.iter().map(|column| row.cell(column).render()),
        );
    }

    log::debug!("Encoded {} rows x {} columns as CSV", rows.len(), columns.len());
    out.into_bytes()
}
