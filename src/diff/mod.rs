//! Diff engine for comparing tables

mod assemble;
pub mod header;
mod row_diff;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::model::{Archive, Header, Row, Table};

pub use assemble::assemble;
pub use header::validate;
pub use row_diff::{RowDelta, RowSetDiff};

/// Whether a result row was added or removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Added,
    Deleted,
}

impl RowStatus {
    /// Value written to the status column
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Added => "added",
            RowStatus::Deleted => "deleted",
        }
    }
}

impl std::fmt::Display for RowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A result row; `row` already ends with the status cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedRow {
    pub status: RowStatus,
    pub row: Row,
}

/// Statistics about the diff
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub rows_added: usize,
    pub rows_removed: usize,
    /// Distinct rows found on both sides
    pub rows_unchanged: usize,
    /// Input rows collapsed into an earlier identical row
    pub duplicates_collapsed: usize,
    pub old_row_count: usize,
    pub new_row_count: usize,
}

impl DiffStats {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.rows_added > 0 || self.rows_removed > 0
    }
}

/// Result of comparing two tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Shared input header plus the status column
    pub header: Header,
    /// Added rows followed by removed rows
    pub rows: Vec<TaggedRow>,
    pub stats: DiffStats,
}

impl DiffResult {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Get only added rows
    pub fn added_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows_with(RowStatus::Added)
    }

    /// Get only removed rows
    pub fn removed_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows_with(RowStatus::Deleted)
    }

    fn rows_with(&self, status: RowStatus) -> impl Iterator<Item = &Row> {
        self.rows
            .iter()
            .filter(move |r| r.status == status)
            .map(|r| &r.row)
    }

    /// Materialize as a plain table (header first, then every tagged row)
    pub fn to_table(&self) -> Table {
        let rows = self.rows.iter().map(|r| r.row.clone()).collect();
        Table::from_parts(self.header.clone(), rows)
    }
}

/// Main diff engine
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    config: Config,
}

impl DiffEngine {
    /// Create a new diff engine with configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compare two tables that share a header
    pub fn diff(&self, old_table: &Table, new_table: &Table) -> Result<DiffResult> {
        validate(old_table, new_table)?;

        self.config.progress(format_args!(
            "Calculating changes between {} old and {} new rows...",
            old_table.row_count(),
            new_table.row_count()
        ));

        let delta = RowSetDiff::compute(old_table.rows(), new_table.rows());
        let mut result = assemble(
            old_table.header(),
            &delta.added,
            &delta.removed,
            &self.config.status_column,
        );

        result.stats.rows_unchanged = delta.unchanged;
        result.stats.duplicates_collapsed = delta.duplicates;
        result.stats.old_row_count = old_table.row_count();
        result.stats.new_row_count = new_table.row_count();

        if delta.duplicates > 0 {
            log::debug!("Collapsed {} duplicate rows", delta.duplicates);
        }
        self.config.progress(format_args!(
            "Diff completed: {} added, {} removed",
            result.stats.rows_added, result.stats.rows_removed
        ));

        Ok(result)
    }

    /// Compare every table of `new_archive` against its header match in `old_archive`
    pub fn diff_archives(
        &self,
        old_archive: &Archive,
        new_archive: &Archive,
    ) -> Result<IndexMap<String, DiffResult>> {
        crate::batch::run(self, old_archive, new_archive)
    }
}

/// Diff two tables with the default configuration
pub fn diff(old_table: &Table, new_table: &Table) -> Result<DiffResult> {
    DiffEngine::default().diff(old_table, new_table)
}
