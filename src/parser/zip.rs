//! ZIP archive loader

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use anyhow::{Context, Result};
use zip::ZipArchive;

use crate::config::Config;
use crate::model::Archive;

use super::csv::read_table;
use super::{Input, Loader};

const MACOS_METADATA_DIR: &str = "__MACOSX/";

/// Loader for ZIP archives of CSV files
pub struct ZipLoader;

impl Loader for ZipLoader {
    fn load(&self, path: &Path, config: &Config) -> Result<Input> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
        let archive = read_archive(BufReader::new(file), config)
            .with_context(|| format!("Failed to read ZIP archive: {}", path.display()))?;

        Ok(Input::Archive(archive))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case("zip")
    }
}

/// Read every CSV entry of a ZIP archive, in archive order
///
/// Entries are keyed by their path inside the archive. Directories, macOS
/// metadata, hidden files and non-CSV files are skipped.
pub fn read_archive<R: Read + Seek>(reader: R, config: &Config) -> Result<Archive> {
    let mut zip = ZipArchive::new(reader).context("Not a valid ZIP archive")?;
    let mut archive = Archive::new();

    for i in 0..zip.len() {
        let mut entry = zip
            .by_index(i)
            .with_context(|| format!("Failed to read ZIP entry {}", i))?;
        let name = entry.name().to_string();

        if !is_data_entry(&name, entry.is_dir()) {
            log::debug!("Skipping {}", name);
            continue;
        }

        config.progress(format_args!("Extracting {}", name));

        let mut content = Vec::new();
        entry
            .read_to_end(&mut content)
            .with_context(|| format!("Failed to extract {}", name))?;
        let table =
            read_table(content.as_slice()).with_context(|| format!("Failed to parse {}", name))?;

        archive.insert(name, table)?;
    }

    Ok(archive)
}

fn is_data_entry(name: &str, is_dir: bool) -> bool {
    if is_dir || name.starts_with(MACOS_METADATA_DIR) {
        return false;
    }

    let file_name = name.rsplit('/').next().unwrap_or(name);
    if file_name.starts_with('.') {
        return false;
    }

    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
}
