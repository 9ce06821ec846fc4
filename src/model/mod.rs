//! Data model for tables and archives

mod archive;
mod table;

pub use archive::Archive;
pub use table::{Header, Row, Table};
