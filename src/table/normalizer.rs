//! Cleans parsed records before they are used for rendering.

use crate::table::row::{RawRow, Row};
use tracing::debug;

/// Normalizes one raw record.
/// Falsy cells are skipped before anything is trimmed; keys and the string form
/// of the remaining values are trimmed afterwards.
pub fn normalize_row(raw: &RawRow) -> Row {
    let mut row = Row::new();
    for (key, value) in raw {
        if value.is_truthy() {
            row.insert(key.trim(), value.to_string().trim());
        }
    }
    row
}

/// Normalizes raw records, dropping the ones with no surviving columns.
/// Order is preserved. An empty result is how "no usable data" is signalled.
pub fn normalize_rows<'a, I>(raw_rows: I) -> Vec<Row>
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut total = 0usize;
    let rows = raw_rows
        .into_iter()
        .inspect(|_| total += 1)
        .map(normalize_row)
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>();
    debug!(total, kept = rows.len(), "normalized tabular rows");
    rows
}
