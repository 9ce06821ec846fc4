//! Header comparison logic

use crate::error::{Error, Result};
use crate::model::{Header, Table};

/// Check that two tables share an identical, ordered header
///
/// Must pass before any rows are compared.
pub fn validate(old_table: &Table, new_table: &Table) -> Result<()> {
    validate_headers(old_table.header(), new_table.header())
}

/// Compare two headers column by column
pub fn validate_headers(expected: &Header, found: &Header) -> Result<()> {
    if expected.len() != found.len() {
        return Err(Error::header_mismatch(expected, found));
    }

    if expected.iter().zip(found.iter()).any(|(a, b)| a != b) {
        return Err(Error::header_mismatch(expected, found));
    }

    Ok(())
}
