//! Parser layer for delimiter-separated text

mod delimiter;

use tracing::debug;

use crate::config::Config;
use crate::model::Row;

pub use self::delimiter::detect_delimiter;

/// Split one line into fields.
///
/// An empty line yields no fields, and a single trailing delimiter does not
/// produce a trailing empty field. Interior empty fields are kept.
pub fn split_fields(line: &str, delimiter: char) -> Vec<&str> {
    if line.is_empty() {
        return Vec::new();
    }
    let body = line.strip_suffix(delimiter).unwrap_or(line);
    body.split(delimiter).collect()
}

/// Build a row by pairing fields with columns positionally.
///
/// Columns without a field stay absent; fields without a column are dropped.
pub fn build_row(columns: &[String], fields: &[&str]) -> Row {
    columns
        .iter()
        .zip(fields.iter().copied())
        .map(|(column, field)| (column.clone(), field))
        .collect()
}

/// Parse `text` and append its header names to `columns` and its data lines to `rows`.
///
/// Data lines are paired with the whole `columns` list, including names left
/// over from earlier loads. A final newline adds no row, but every blank line
/// before it adds a row with no cells, so `"a\n1\n\n"` yields two rows.
/// Returns the delimiter used, or `None` when the text has no header line.
pub fn parse_text(
    text: &str,
    config: &Config,
    columns: &mut Vec<String>,
    rows: &mut Vec<Row>,
) -> Option<char> {
    let mut lines = text.lines();
    let header = lines.next()?;

    let delimiter = config.delimiter.unwrap_or_else(|| {
        detect_delimiter(
            header,
            &config.delimiter_candidates,
            config.fallback_delimiter,
        )
    });

    columns.extend(split_fields(header, delimiter).into_iter().map(String::from));

    let rows_before = rows.len();
    for line in lines {
        let fields = split_fields(line, delimiter);
        rows.push(build_row(columns, &fields));
    }

    debug!(
        "Parsed table with delimiter {:?}: {} columns, {} new rows",
        delimiter,
        columns.len(),
        rows.len() - rows_before
    );

    Some(delimiter)
}
