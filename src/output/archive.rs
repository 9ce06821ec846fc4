//! ZIP writer for a batch of diff results

use std::io::{Cursor, Seek, Write};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::diff::DiffResult;

use super::csv::write_csv;

/// Write one CSV entry per result, in map order
pub fn write_archive<W: Write + Seek>(
    results: &IndexMap<String, DiffResult>,
    writer: W,
) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, result) in results {
        zip.start_file(name.as_str(), options)
            .with_context(|| format!("Failed to add {} to archive", name))?;
        write_csv(result, &mut zip).with_context(|| format!("Failed to write {}", name))?;
    }

    zip.finish().context("Failed to finish archive")
}

/// Serialize a batch of results to ZIP bytes
pub fn to_zip_bytes(results: &IndexMap<String, DiffResult>) -> Result<Vec<u8>> {
    Ok(write_archive(results, Cursor::new(Vec::new()))?.into_inner())
}
