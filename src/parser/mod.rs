//! Loaders turning files on disk into tables and archives

mod csv;
mod zip;

use std::path::Path;

use anyhow::{bail, Result};

use crate::config::Config;
use crate::model::{Archive, Table};

pub use self::csv::{read_table, CsvLoader};
pub use self::zip::{read_archive, ZipLoader};

/// A loaded input: either one table or an archive of tables
#[derive(Debug)]
pub enum Input {
    Table(Table),
    Archive(Archive),
}

impl Input {
    /// Short name of the input kind, for messages
    pub fn kind(&self) -> &'static str {
        match self {
            Input::Table(_) => "CSV file",
            Input::Archive(_) => "ZIP archive",
        }
    }
}

/// Trait for loading input files
pub trait Loader: Send + Sync {
    /// Load a file
    fn load(&self, path: &Path, config: &Config) -> Result<Input>;

    /// Check if this loader can handle the given file extension
    fn supports_extension(&self, ext: &str) -> bool;
}

/// Factory for picking a loader based on file extension
pub struct LoaderFactory {
    loaders: Vec<Box<dyn Loader>>,
}

impl Default for LoaderFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoaderFactory {
    /// Create a new loader factory with all supported loaders
    pub fn new() -> Self {
        Self {
            loaders: vec![Box::new(CsvLoader), Box::new(ZipLoader)],
        }
    }

    /// Get a loader for the given file path
    pub fn get_loader(&self, path: &Path) -> Result<&dyn Loader> {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_lowercase(),
            None => detect_format(path).unwrap_or("csv").to_string(),
        };

        for loader in &self.loaders {
            if loader.supports_extension(&ext) {
                return Ok(loader.as_ref());
            }
        }

        bail!("Unsupported file format: {}", ext)
    }

    /// Load a file using the appropriate loader
    pub fn load(&self, path: &Path, config: &Config) -> Result<Input> {
        let loader = self.get_loader(path)?;
        loader.load(path, config)
    }
}

/// Detect file format from content (for files without extension)
pub fn detect_format(path: &Path) -> Option<&'static str> {
    use std::fs::File;
    use std::io::Read;

    let mut file = File::open(path).ok()?;
    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).ok()?;

    if bytes_read < 4 {
        return None;
    }

    // Local file header, or the end record of an empty archive
    if &buffer == b"PK\x03\x04" || &buffer == b"PK\x05\x06" {
        return Some("zip");
    }

    Some("csv")
}
