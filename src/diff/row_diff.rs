//! Row set differencing

use rustc_hash::FxHashSet;

use crate::model::Row;

/// Rows that differ between two row collections
///
/// Borrowed from the inputs; the assembler copies what it keeps.
#[derive(Debug, Default)]
pub struct RowDelta<'a> {
    /// Distinct new rows absent from the old side, in new-side order
    pub added: Vec<&'a Row>,
    /// Distinct old rows absent from the new side, in old-side order
    pub removed: Vec<&'a Row>,
    /// Distinct rows present on both sides
    pub unchanged: usize,
    /// Input rows dropped because an identical row came earlier on the same side
    pub duplicates: usize,
}

impl RowDelta<'_> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Set-based row differ
///
/// Each side is treated as a set of whole rows, so exact duplicates collapse to
/// their first occurrence.
pub struct RowSetDiff;

impl RowSetDiff {
    /// Compare two row collections that share a header
    pub fn compute<'a>(old_rows: &'a [Row], new_rows: &'a [Row]) -> RowDelta<'a> {
        let old_index: FxHashSet<&Row> = old_rows.iter().collect();
        let new_index: FxHashSet<&Row> = new_rows.iter().collect();

        let added = distinct_missing(new_rows, &old_index);
        let removed = distinct_missing(old_rows, &new_index);
        let unchanged = new_index.iter().filter(|row| old_index.contains(*row)).count();
        let duplicates =
            (old_rows.len() - old_index.len()) + (new_rows.len() - new_index.len());

        RowDelta {
            added,
            removed,
            unchanged,
            duplicates,
        }
    }
}

/// Rows of `rows` not in `other`, each reported once
fn distinct_missing<'a>(rows: &'a [Row], other: &FxHashSet<&Row>) -> Vec<&'a Row> {
    let mut emitted: FxHashSet<&Row> = FxHashSet::default();
    rows.iter()
        .filter(|row| !other.contains(*row) && emitted.insert(*row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Row> {
        data.iter().map(|r| Row::from(r.to_vec())).collect()
    }

    #[test]
    fn test_added_and_removed() {
        let old = rows(&[&["1", "Alice"], &["2", "Bob"]]);
        let new = rows(&[&["1", "Alice"], &["3", "Carol"]]);

        let delta = RowSetDiff::compute(&old, &new);

        assert_eq!(delta.added, vec![&Row::from(vec!["3", "Carol"])]);
        assert_eq!(delta.removed, vec![&Row::from(vec!["2", "Bob"])]);
        assert_eq!(delta.unchanged, 1);
        assert_eq!(delta.duplicates, 0);
    }

    #[test]
    fn test_identical_sides_are_empty() {
        let table = rows(&[&["1", "a"], &["2", "b"], &["2", "b"]]);

        let delta = RowSetDiff::compute(&table, &table);

        assert!(delta.is_empty());
        assert_eq!(delta.unchanged, 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let old = rows(&[&["9", "x"], &["1", "a"], &["9", "x"]]);
        let new = rows(&[&["1", "a"]]);

        let delta = RowSetDiff::compute(&old, &new);

        assert_eq!(delta.removed, vec![&Row::from(vec!["9", "x"])]);
        assert!(delta.added.is_empty());
        assert_eq!(delta.duplicates, 1);
    }

    #[test]
    fn test_first_occurrence_order() {
        let old = rows(&[]);
        let new = rows(&[&["c"], &["a"], &["c"], &["b"], &["a"]]);

        let delta = RowSetDiff::compute(&old, &new);

        let order: Vec<_> = delta.added.iter().map(|r| r.cells()[0].as_str()).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_column_permutation_is_a_change() {
        let old = rows(&[&["1", "2"]]);
        let new = rows(&[&["2", "1"]]);

        let delta = RowSetDiff::compute(&old, &new);

        assert_eq!(delta.added.len(), 1);
        assert_eq!(delta.removed.len(), 1);
    }

    #[test]
    fn test_anti_symmetry() {
        let a = rows(&[&["1"], &["2"], &["3"], &["3"]]);
        let b = rows(&[&["2"], &["4"], &["5"]]);

        let forward = RowSetDiff::compute(&a, &b);
        let backward = RowSetDiff::compute(&b, &a);

        let as_set = |v: &[&Row]| v.iter().map(|r| (*r).clone()).collect::<FxHashSet<Row>>();
        assert_eq!(as_set(&forward.removed), as_set(&backward.added));
        assert_eq!(as_set(&forward.added), as_set(&backward.removed));
    }

    #[test]
    fn test_partition_is_exact() {
        let a = rows(&[&["1"], &["2"], &["2"], &["3"]]);
        let b = rows(&[&["3"], &["4"], &["1"]]);

        let delta = RowSetDiff::compute(&a, &b);

        for row in &a {
            assert!(delta.removed.contains(&row) || b.contains(row));
        }
        for row in &b {
            assert!(delta.added.contains(&row) || a.contains(row));
        }
    }
}
