//! JSON summary format

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use termcolor::WriteColor;

use crate::diff::DiffStats;
use crate::model::Header;

use super::{SummaryEntry, SummaryFormatter};

/// Pretty-printed JSON summary formatter
pub struct JsonSummary;

impl JsonSummary {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonTable<'a> {
    file: &'a str,
    header: &'a Header,
    stats: &'a DiffStats,
}

#[derive(Serialize)]
struct JsonTotals {
    tables: usize,
    rows_added: usize,
    rows_removed: usize,
}

#[derive(Serialize)]
struct JsonSummaryOutput<'a> {
    tables: Vec<JsonTable<'a>>,
    totals: JsonTotals,
}

impl SummaryFormatter for JsonSummary {
    fn render(&self, entries: &[SummaryEntry<'_>], writer: &mut dyn WriteColor) -> Result<()> {
        let output = JsonSummaryOutput {
            tables: entries
                .iter()
                .map(|e| JsonTable {
                    file: e.name,
                    header: &e.result.header,
                    stats: &e.result.stats,
                })
                .collect(),
            totals: JsonTotals {
                tables: entries.len(),
                rows_added: entries.iter().map(|e| e.result.stats.rows_added).sum(),
                rows_removed: entries.iter().map(|e| e.result.stats.rows_removed).sum(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;

        Ok(())
    }
}
