//! Header-based matching of tables across two archives

use std::collections::hash_map::Entry;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::model::{Archive, Table};

/// New-archive file name mapped to the old-archive file it is diffed against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    matches: IndexMap<String, String>,
}

impl Pairing {
    /// Old file paired with `new_file`
    pub fn get(&self, new_file: &str) -> Option<&str> {
        self.matches.get(new_file).map(String::as_str)
    }

    /// (new file, old file) pairs in new-archive order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.matches
            .iter()
            .map(|(new_file, old_file)| (new_file.as_str(), old_file.as_str()))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// One matched pair of tables, borrowed from the archives
#[derive(Debug, Clone, Copy)]
pub(crate) struct PairedTables<'a> {
    pub new_name: &'a str,
    pub old_name: &'a str,
    pub new_table: &'a Table,
    pub old_table: &'a Table,
    /// Earlier new table already paired with the same old table
    pub shares_baseline_with: Option<&'a str>,
}

/// Pair every table of `new_archive` with a table of `old_archive`
///
/// Each new table takes the first old table (in archive order) with an equal
/// header. An old table may serve more than one new table. Fails on the first
/// new table without a match.
pub fn pair(old_archive: &Archive, new_archive: &Archive) -> Result<Pairing> {
    let matches = match_tables(old_archive, new_archive)?
        .into_iter()
        .map(|p| (p.new_name.to_string(), p.old_name.to_string()))
        .collect();

    Ok(Pairing { matches })
}

pub(crate) fn match_tables<'a>(
    old_archive: &'a Archive,
    new_archive: &'a Archive,
) -> Result<Vec<PairedTables<'a>>> {
    let mut pairs = Vec::with_capacity(new_archive.len());
    let mut claimed: FxHashMap<&str, &str> = FxHashMap::default();

    for (new_name, new_table) in new_archive.iter() {
        let (old_name, old_table) = old_archive
            .iter()
            .find(|(_, old_table)| old_table.header() == new_table.header())
            .ok_or_else(|| Error::unmatched_header(new_name))?;

        let shares_baseline_with = match claimed.entry(old_name) {
            Entry::Occupied(first) => Some(*first.get()),
            Entry::Vacant(slot) => {
                slot.insert(new_name);
                None
            }
        };
        if let Some(first) = shares_baseline_with {
            log::warn!(
                "{} is the baseline for both {} and {}",
                old_name,
                first,
                new_name
            );
        }
        log::debug!("Paired {} with {}", new_name, old_name);

        pairs.push(PairedTables {
            new_name,
            old_name,
            new_table,
            old_table,
            shares_baseline_with,
        });
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Header, Row};

    fn table(header: Vec<&str>, rows: &[&[&str]]) -> Table {
        Table::new(
            Header::from(header),
            rows.iter().map(|r| Row::from(r.to_vec())).collect(),
        )
        .unwrap()
    }

    fn archive(entries: Vec<(&str, Table)>) -> Archive {
        let mut archive = Archive::new();
        for (name, table) in entries {
            archive.insert(name, table).unwrap();
        }
        archive
    }

    #[test]
    fn test_pairs_by_header_not_name() {
        let old = archive(vec![
            ("courses.csv", table(vec!["course_id", "title"], &[])),
            ("active_students.csv", table(vec!["id", "name"], &[])),
        ]);
        let new = archive(vec![
            ("students.csv", table(vec!["id", "name"], &[])),
            ("courses.csv", table(vec!["course_id", "title"], &[])),
        ]);

        let pairing = pair(&old, &new).unwrap();

        assert_eq!(pairing.get("students.csv"), Some("active_students.csv"));
        assert_eq!(pairing.get("courses.csv"), Some("courses.csv"));
        let order: Vec<_> = pairing.iter().map(|(n, _)| n).collect();
        assert_eq!(order, vec!["students.csv", "courses.csv"]);
    }

    #[test]
    fn test_first_match_wins() {
        let old = archive(vec![
            ("first.csv", table(vec!["id"], &[])),
            ("second.csv", table(vec!["id"], &[])),
        ]);
        let new = archive(vec![("ids.csv", table(vec!["id"], &[]))]);

        let pairing = pair(&old, &new).unwrap();

        assert_eq!(pairing.get("ids.csv"), Some("first.csv"));
    }

    #[test]
    fn test_old_table_can_serve_several_new_tables() {
        let old = archive(vec![("users.csv", table(vec!["id", "name"], &[]))]);
        let new = archive(vec![
            ("staff.csv", table(vec!["id", "name"], &[])),
            ("students.csv", table(vec!["id", "name"], &[])),
        ]);

        let pairing = pair(&old, &new).unwrap();

        assert_eq!(pairing.len(), 2);
        assert_eq!(pairing.get("staff.csv"), Some("users.csv"));
        assert_eq!(pairing.get("students.csv"), Some("users.csv"));
    }

    #[test]
    fn test_reused_old_table_is_flagged() {
        let old = archive(vec![
            ("users.csv", table(vec!["id", "name"], &[])),
            ("courses.csv", table(vec!["course_id"], &[])),
        ]);
        let new = archive(vec![
            ("staff.csv", table(vec!["id", "name"], &[])),
            ("courses.csv", table(vec!["course_id"], &[])),
            ("students.csv", table(vec!["id", "name"], &[])),
        ]);

        let pairs = match_tables(&old, &new).unwrap();

        let shared: Vec<_> = pairs
            .iter()
            .map(|p| (p.new_name, p.shares_baseline_with))
            .collect();
        assert_eq!(
            shared,
            vec![
                ("staff.csv", None),
                ("courses.csv", None),
                ("students.csv", Some("staff.csv")),
            ]
        );
    }

    #[test]
    fn test_unmatched_file_fails() {
        let old = archive(vec![("users.csv", table(vec!["id", "name"], &[]))]);
        let new = archive(vec![
            ("users.csv", table(vec!["id", "name"], &[])),
            ("sections.csv", table(vec!["section_id"], &[])),
        ]);

        let err = pair(&old, &new).unwrap_err();

        assert_eq!(
            err,
            Error::UnmatchedHeader {
                file_name: "sections.csv".into()
            }
        );
    }

    #[test]
    fn test_empty_new_archive_pairs_nothing() {
        let old = archive(vec![("users.csv", table(vec!["id"], &[]))]);

        let pairing = pair(&old, &Archive::new()).unwrap();

        assert!(pairing.is_empty());
    }
}
