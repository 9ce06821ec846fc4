//! Error types for the diff core

use thiserror::Error;

use crate::model::Header;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Headers do not match: {}", describe_mismatch(.expected, .found))]
    HeaderMismatch { expected: Header, found: Header },

    #[error("No table in the old archive has the same header as {file_name}")]
    UnmatchedHeader { file_name: String },

    #[error("Row {row} has {found} cells, expected {expected}")]
    RowWidthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Archive already contains a file named {file_name}")]
    DuplicateFile { file_name: String },
}

impl Error {
    pub fn header_mismatch(expected: &Header, found: &Header) -> Self {
        Self::HeaderMismatch {
            expected: expected.clone(),
            found: found.clone(),
        }
    }

    pub fn unmatched_header(file_name: impl Into<String>) -> Self {
        Self::UnmatchedHeader {
            file_name: file_name.into(),
        }
    }
}

/// Point at the first place two headers diverge
fn describe_mismatch(expected: &Header, found: &Header) -> String {
    let position = expected
        .iter()
        .zip(found.iter())
        .position(|(a, b)| a != b);

    match position {
        Some(i) => format!(
            "column {} is \"{}\" in one table and \"{}\" in the other ([{}] vs [{}])",
            i + 1,
            expected.columns()[i],
            found.columns()[i],
            expected,
            found
        ),
        None => format!(
            "{} columns vs {} columns ([{}] vs [{}])",
            expected.len(),
            found.len(),
            expected,
            found
        ),
    }
}
