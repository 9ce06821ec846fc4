//! Colored terminal summary

use std::io::Write;

use anyhow::Result;
use termcolor::{Color, ColorSpec, WriteColor};

use crate::diff::{DiffResult, RowStatus};

use super::{SummaryEntry, SummaryFormatter};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Terminal summary with colors
pub struct TerminalSummary {
    /// Changed rows shown per table before eliding the rest
    preview_rows: usize,
}

impl TerminalSummary {
    pub fn new() -> Self {
        Self { preview_rows: 10 }
    }

    pub fn with_preview_rows(preview_rows: usize) -> Self {
        Self { preview_rows }
    }

    fn write_banner(&self, entries: &[SummaryEntry<'_>], writer: &mut dyn WriteColor) -> Result<()> {
        writeln!(writer, "{}", RULE)?;
        writeln!(writer, " csvdiff: {} table(s) compared", entries.len())?;
        writeln!(writer, "{}", RULE)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_counts(&self, entry: &SummaryEntry<'_>, writer: &mut dyn WriteColor) -> Result<()> {
        let stats = &entry.result.stats;

        write!(writer, "{}: ", entry.name)?;
        write_colored(writer, Color::Green, &format!("+{} added", stats.rows_added))?;
        write!(writer, ", ")?;
        write_colored(writer, Color::Red, &format!("-{} deleted", stats.rows_removed))?;
        writeln!(
            writer,
            " (out of {} → {} rows, {} unchanged)",
            stats.old_row_count, stats.new_row_count, stats.rows_unchanged
        )?;

        if stats.duplicates_collapsed > 0 {
            write_colored(
                writer,
                Color::Yellow,
                &format!(
                    "  note: {} duplicate row(s) collapsed",
                    stats.duplicates_collapsed
                ),
            )?;
            writeln!(writer)?;
        }
        Ok(())
    }

    fn write_preview(&self, result: &DiffResult, writer: &mut dyn WriteColor) -> Result<()> {
        if !result.has_changes() || self.preview_rows == 0 {
            return Ok(());
        }

        let mut table_data: Vec<Vec<String>> = Vec::new();
        table_data.push(result.header.columns().to_vec());
        for tagged in result.rows.iter().take(self.preview_rows) {
            table_data.push(tagged.row.cells().to_vec());
        }

        let statuses: Vec<RowStatus> = result
            .rows
            .iter()
            .take(self.preview_rows)
            .map(|r| r.status)
            .collect();
        write_table(writer, &table_data, &statuses)?;

        let hidden = result.rows.len().saturating_sub(self.preview_rows);
        if hidden > 0 {
            writeln!(writer, "  ... {} more row(s)", hidden)?;
        }
        Ok(())
    }
}

impl Default for TerminalSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for TerminalSummary {
    fn render(&self, entries: &[SummaryEntry<'_>], writer: &mut dyn WriteColor) -> Result<()> {
        self.write_banner(entries, writer)?;

        if entries.iter().all(|e| !e.result.has_changes()) {
            writeln!(writer, "No differences found.")?;
            return Ok(());
        }

        for entry in entries {
            self.write_counts(entry, writer)?;
            self.write_preview(entry.result, writer)?;
            writeln!(writer)?;
        }

        Ok(())
    }
}

fn write_colored(writer: &mut dyn WriteColor, color: Color, text: &str) -> Result<()> {
    writer.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(writer, "{}", text)?;
    writer.reset()?;
    Ok(())
}

/// Draw a box table; body rows are colored by status
fn write_table(
    writer: &mut dyn WriteColor,
    data: &[Vec<String>],
    statuses: &[RowStatus],
) -> Result<()> {
    if data.is_empty() || data[0].is_empty() {
        return Ok(());
    }

    let col_count = data[0].len();
    let mut col_widths: Vec<usize> = vec![0; col_count];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            if i < col_widths.len() {
                col_widths[i] = col_widths[i].max(cell.chars().count());
            }
        }
    }

    let border = |left: char, mid: char, right: char| {
        let segments: Vec<String> = col_widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(mid.to_string().as_str()), right)
    };
    let line = |row: &[String]| {
        let mut out = String::from("│");
        for (cell, width) in row.iter().zip(&col_widths) {
            out.push_str(&format!(" {:width$} │", cell, width = *width));
        }
        out
    };

    writeln!(writer, "{}", border('┌', '┬', '┐'))?;
    writeln!(writer, "{}", line(data[0].as_slice()))?;
    writeln!(writer, "{}", border('├', '┼', '┤'))?;
    for (row, status) in data.iter().skip(1).zip(statuses) {
        let color = match status {
            RowStatus::Added => Color::Green,
            RowStatus::Deleted => Color::Red,
        };
        write_colored(writer, color, &line(row.as_slice()))?;
        writeln!(writer)?;
    }
    writeln!(writer, "{}", border('└', '┴', '┘'))?;

    Ok(())
}
