//! CSV table loader

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::model::{Header, Row, Table};

use super::{Input, Loader};

/// Loader for CSV files
pub struct CsvLoader;

impl Loader for CsvLoader {
    fn load(&self, path: &Path, config: &Config) -> Result<Input> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let table = read_table(BufReader::new(file))
            .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;

        config.progress(format_args!(
            "Loaded {} ({} rows)",
            path.display(),
            table.row_count()
        ));
        Ok(Input::Table(table))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        matches!(ext.to_lowercase().as_str(), "csv" | "txt")
    }
}

/// Read a table from CSV text
///
/// The first record is the header. Cells are kept verbatim; every row must be
/// exactly as wide as the header.
pub fn read_table<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv_reader.records();

    let header_record = records
        .next()
        .context("CSV input is empty, expected a header row")?
        .context("Failed to read CSV header")?;

    let mut columns: Vec<String> = header_record.iter().map(str::to_string).collect();
    if let Some(first) = columns.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = stripped.to_string();
        }
    }

    let mut rows = Vec::new();
    for (idx, result) in records.enumerate() {
        // +2 for 1-indexing and header
        let record = result.with_context(|| format!("Failed to read CSV row {}", idx + 2))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        if record.len() != columns.len() {
            bail!(
                "Line {} has {} fields but the header has {}",
                line,
                record.len(),
                columns.len()
            );
        }

        rows.push(Row::new(record.iter().map(str::to_string).collect()));
    }

    Ok(Table::new(Header::new(columns), rows)?)
}
