//! csvdiff - Row-level diff for tabular snapshots
//!
//! Compares an old and a new table sharing a header and reports the rows that
//! were added and removed. Whole archives of tables can be compared at once;
//! tables are paired by header rather than by file name.

pub mod batch;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use batch::{diff_archives, pair, Pairing};
pub use config::Config;
pub use diff::{diff, DiffEngine, DiffResult};
pub use error::{Error, Result};
pub use model::{Archive, Header, Row, Table};
