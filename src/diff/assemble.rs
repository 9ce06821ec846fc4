//! Builds the status-tagged output table

use crate::model::{Header, Row};

use super::{DiffResult, DiffStats, RowStatus, TaggedRow};

/// Combine a header with added and removed rows into one result
///
/// The header gains `status_column`; every row gains a matching status cell.
/// Added rows come first, then removed rows.
pub fn assemble(
    header: &Header,
    added: &[&Row],
    removed: &[&Row],
    status_column: &str,
) -> DiffResult {
    let mut rows = Vec::with_capacity(added.len() + removed.len());
    rows.extend(added.iter().map(|row| tag(RowStatus::Added, row)));
    rows.extend(removed.iter().map(|row| tag(RowStatus::Deleted, row)));

    DiffResult {
        header: header.with_column(status_column),
        rows,
        stats: DiffStats {
            rows_added: added.len(),
            rows_removed: removed.len(),
            ..Default::default()
        },
    }
}

fn tag(status: RowStatus, row: &Row) -> TaggedRow {
    TaggedRow {
        status,
        row: row.with_cell(status.as_str()),
    }
}
