use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::{debug, trace};

use super::error::Result;
use super::range::{SumRange, compute_range};
use super::reconstruct::reconstruct;
use super::table::ReachabilityTable;
use super::Sequence;

/// How the columns of one row are filled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    #[default]
    Parallel,
    Sequential,
}

/// Fills `table` row by row and reports whether a non-empty subset of
/// `sequence` sums to `target`. The table must have been cleared.
pub fn solve(sequence: &Sequence, table: &mut ReachabilityTable, target: i64) -> bool {
    solve_with(sequence, table, target, ScanMode::default())
}

pub fn solve_with(
    sequence: &Sequence,
    table: &mut ReachabilityTable,
    target: i64,
    mode: ScanMode,
) -> bool {
    assert_eq!(
        table.rows(),
        sequence.len(),
        "table rows must match sequence length"
    );
    let range = table.range();

    let Some(target_col) = range.column_of(target) else {
        trace!(target_sum = target, "target outside reachable range");
        return false;
    };

    table.set(0, element_column(range, sequence[0]));
    if sequence[0] == target {
        return true;
    }

    for row in 1..sequence.len() {
        let value = sequence[row];

        if value == target {
            table.set(row, target_col);
            trace!(target_sum = target, row, "target is an element");
            return true;
        }

        let (prev, cells) = table.prev_and_row_mut(row);
        if scan_row(prev, cells, value, target_col, mode) {
            trace!(target_sum = target, row, "target reached");
            return true;
        }

        table.set(row, element_column(range, value));
    }

    false
}

fn element_column(range: SumRange, value: i64) -> usize {
    range
        .column_of(value)
        .unwrap_or_else(|| panic!("element {value} outside sum range {range:?}"))
}

/// Carries every reachable sum of the previous row into `cells` and adds
/// `value` to each of them. Each cell is written by exactly one iteration,
/// which reads only `prev`. Returns whether the target column was reached
/// by an addition; the whole row is always filled first.
fn scan_row(
    prev: &[bool],
    cells: &mut [bool],
    value: i64,
    target_col: usize,
    mode: ScanMode,
) -> bool {
    let found = AtomicBool::new(false);

    let update = |(col, cell): (usize, &mut bool)| {
        let carried = prev[col];
        let added = (col as i64)
            .checked_sub(value)
            .and_then(|src| usize::try_from(src).ok())
            .is_some_and(|src| src < prev.len() && prev[src]);

        if carried || added {
            *cell = true;
        }
        if added && col == target_col {
            found.store(true, Ordering::Relaxed);
        }
    };

    match mode {
        ScanMode::Parallel => cells.par_iter_mut().enumerate().for_each(update),
        ScanMode::Sequential => cells.iter_mut().enumerate().for_each(update),
    }

    found.into_inner()
}

/// Owns a sequence and the table sized for it, clearing the table before
/// every query
#[derive(Debug)]
pub struct Solver {
    sequence: Sequence,
    table: ReachabilityTable,
    mode: ScanMode,
}

impl Solver {
    pub fn new(sequence: Sequence, mode: ScanMode) -> Result<Self> {
        let range = compute_range(sequence.as_slice())?;
        let table = ReachabilityTable::new(sequence.len(), range)?;

        debug!(
            rows = table.rows(),
            columns = table.columns(),
            offset = range.offset,
            ?mode,
            "allocated reachability table"
        );

        Ok(Self {
            sequence,
            table,
            mode,
        })
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn range(&self) -> SumRange {
        self.table.range()
    }

    pub fn table(&self) -> &ReachabilityTable {
        &self.table
    }

    pub fn solve(&mut self, target: i64) -> bool {
        self.table.clear();
        solve_with(&self.sequence, &mut self.table, target, self.mode)
    }

    /// Witness for the target of the last successful `solve`
    pub fn reconstruct(&self, target: i64) -> Vec<i64> {
        reconstruct(&self.sequence, &self.table, target)
    }

    pub fn query(&mut self, target: i64) -> Option<Vec<i64>> {
        self.solve(target).then(|| self.reconstruct(target))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::subset::SubsetError;

    fn solver(values: &[i64]) -> Solver {
        Solver::new(Sequence::new(values.to_vec()).unwrap(), ScanMode::Parallel).unwrap()
    }

    fn reachable_sums(table: &ReachabilityTable, row: usize) -> Vec<i64> {
        let offset = table.range().offset;
        table
            .row(row)
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(|(col, _)| col as i64 + offset)
            .collect()
    }

    fn brute_force(values: &[i64], target: i64) -> bool {
        (1u32..1 << values.len()).any(|mask| {
            values
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, v)| v)
                .sum::<i64>()
                == target
        })
    }

    #[test]
    fn test_solve_scenarios() {
        let mut s = solver(&[-5, 0, 1, 4, 7]);
        assert!(s.solve(0));
        assert!(s.solve(12));
        assert!(s.solve(-5));
        assert!(s.solve(3));
        assert!(!s.solve(100));
        assert!(!s.solve(-6));
        assert!(!s.solve(13));

        let mut s = solver(&[5]);
        assert!(s.solve(5));
        assert!(!s.solve(0));

        let mut s = solver(&[0]);
        assert!(s.solve(0));
    }

    #[test]
    fn test_solve_range_boundaries() {
        let mut s = solver(&[-5, 0, 1, 4, 7]);
        let range = s.range();
        assert!(s.solve(range.offset));
        assert!(s.solve(range.last()));
        assert!(!s.solve(range.offset - 1));
        assert!(!s.solve(range.offset + range.columns));
    }

    #[test]
    fn test_trailing_column_is_never_reached() {
        // offset 2 with 5 columns: the last column (sum 6) is unreachable
        let mut s = solver(&[2, 3]);
        assert_eq!(s.range().last(), 6);
        assert!(s.solve(5));
        assert!(!s.solve(6));
        assert!(!s.solve(7));
    }

    #[test]
    fn test_table_rows_after_solve() {
        let mut s = solver(&[-5, 0, 1, 4, 7]);
        assert!(s.solve(12));

        let t = s.table();
        assert_eq!(reachable_sums(t, 0), vec![-5]);
        assert_eq!(reachable_sums(t, 1), vec![-5, 0]);
        assert_eq!(reachable_sums(t, 2), vec![-5, -4, 0, 1]);
        assert_eq!(reachable_sums(t, 3), vec![-5, -4, -1, 0, 1, 4, 5]);
        assert_eq!(
            reachable_sums(t, 4),
            vec![-5, -4, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 11, 12]
        );
    }

    #[test]
    fn test_early_return_leaves_later_rows_empty() {
        let mut s = solver(&[-5, 0, 1, 4, 7]);
        assert!(s.solve(-1));
        assert_eq!(reachable_sums(s.table(), 3), vec![-5, -4, -1, 0, 1, 4, 5]);
        assert!(reachable_sums(s.table(), 4).is_empty());

        // an element equal to the target marks only that cell
        assert!(s.solve(4));
        assert_eq!(reachable_sums(s.table(), 3), vec![4]);
    }

    #[test]
    fn test_free_functions_on_cleared_table() {
        let sequence = Sequence::new(vec![1, 2, 4]).unwrap();
        let range = compute_range(sequence.as_slice()).unwrap();
        let mut table = ReachabilityTable::new(sequence.len(), range).unwrap();

        table.clear();
        assert!(solve(&sequence, &mut table, 5));
        assert_eq!(reconstruct(&sequence, &table, 5), vec![4, 1]);

        table.clear();
        assert!(!solve(&sequence, &mut table, 8));
    }

    #[test]
    fn test_wide_range_is_an_error() {
        let sequence = Sequence::new(vec![1, 1_000_000_000_000_000]).unwrap();
        let err = Solver::new(sequence, ScanMode::Sequential).unwrap_err();
        assert!(matches!(err, SubsetError::TableTooLarge { rows: 2, .. }));
    }

    #[test]
    fn test_query() {
        let mut s = solver(&[-5, 0, 1, 4, 7]);
        assert_eq!(s.query(0), Some(vec![0]));
        assert_eq!(s.query(100), None);
        assert_eq!(s.query(12), Some(vec![7, 4, 1]));
    }

    fn sorted_sequence() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-20i64..=20, 1..=10).prop_map(|mut v| {
            v.sort();
            v
        })
    }

    proptest! {
        #[test]
        fn solve_matches_brute_force(values in sorted_sequence(), target in -120i64..=120) {
            let mut s = solver(&values);
            prop_assert_eq!(s.solve(target), brute_force(&values, target));
        }

        #[test]
        fn solve_is_idempotent(values in sorted_sequence(), target in -120i64..=120) {
            let mut s = solver(&values);
            let first = s.solve(target);
            let table = s.table().clone();
            prop_assert_eq!(s.solve(target), first);
            prop_assert_eq!(s.table(), &table);
        }

        #[test]
        fn sequential_scan_matches_parallel(values in sorted_sequence(), target in -120i64..=120) {
            let sequence = Sequence::new(values).unwrap();
            let mut parallel = Solver::new(sequence.clone(), ScanMode::Parallel).unwrap();
            let mut sequential = Solver::new(sequence, ScanMode::Sequential).unwrap();
            prop_assert_eq!(parallel.solve(target), sequential.solve(target));
            prop_assert_eq!(parallel.table(), sequential.table());
        }
    }
}
