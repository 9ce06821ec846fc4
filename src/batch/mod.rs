//! Batch diffs across two archives

mod pairing;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::diff::{DiffEngine, DiffResult};
use crate::error::Result;
use crate::model::Archive;

pub use pairing::{pair, Pairing};

use pairing::{match_tables, PairedTables};

/// Diff every table of `new_archive` against its header match in `old_archive`
///
/// Results are keyed by new-archive file name. Nothing is returned unless every
/// table pairs and diffs cleanly.
pub fn diff_archives(
    old_archive: &Archive,
    new_archive: &Archive,
) -> Result<IndexMap<String, DiffResult>> {
    DiffEngine::default().diff_archives(old_archive, new_archive)
}

pub(crate) fn run(
    engine: &DiffEngine,
    old_archive: &Archive,
    new_archive: &Archive,
) -> Result<IndexMap<String, DiffResult>> {
    let config = engine.config();
    config.progress(format_args!(
        "Pairing {} new tables against {} old tables...",
        new_archive.len(),
        old_archive.len()
    ));

    let pairs = match_tables(old_archive, new_archive)?;

    let diff_pair = |p: &PairedTables<'_>| -> Result<(String, DiffResult)> {
        config.progress(format_args!("Comparing {} against {}", p.new_name, p.old_name));
        let result = engine.diff(p.old_table, p.new_table)?;
        Ok((p.new_name.to_string(), result))
    };

    let results: Vec<(String, DiffResult)> = if config.parallel {
        pairs.par_iter().map(diff_pair).collect::<Result<_>>()?
    } else {
        pairs.iter().map(diff_pair).collect::<Result<_>>()?
    };

    config.progress(format_args!("Compared {} tables", results.len()));
    Ok(results.into_iter().collect())
}
