//! Named collections of tables

use indexmap::IndexMap;

use crate::error::{Error, Result};

use super::table::Table;

/// Tables keyed by file name, iterated in insertion order
#[derive(Debug, Clone, Default)]
pub struct Archive {
    tables: IndexMap<String, Table>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table; file names must be unique
    pub fn insert(&mut self, file_name: impl Into<String>, table: Table) -> Result<()> {
        let file_name = file_name.into();
        if self.tables.contains_key(&file_name) {
            return Err(Error::DuplicateFile { file_name });
        }
        self.tables.insert(file_name, table);
        Ok(())
    }

    /// Builder-style insert, handy when assembling archives in code
    pub fn with_table(mut self, file_name: impl Into<String>, table: Table) -> Result<Self> {
        self.insert(file_name, table)?;
        Ok(self)
    }

    pub fn get(&self, file_name: &str) -> Option<&Table> {
        self.tables.get(file_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
