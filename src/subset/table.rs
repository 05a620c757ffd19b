use rayon::prelude::*;

use super::error::{Result, SubsetError};
use super::range::SumRange;

/// Row-major boolean grid: one row per sequence element, one column per sum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityTable {
    range: SumRange,
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl ReachabilityTable {
    pub fn new(rows: usize, range: SumRange) -> Result<Self> {
        if rows == 0 {
            return Err(SubsetError::EmptySequence);
        }
        if range.columns <= 0 {
            return Err(SubsetError::NonPositiveColumns {
                columns: range.columns,
            });
        }

        let too_large = SubsetError::TableTooLarge {
            rows,
            columns: range.columns,
        };
        let columns = usize::try_from(range.columns).map_err(|_| too_large.clone())?;
        let len = rows.checked_mul(columns).ok_or(too_large.clone())?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large)?;
        cells.resize(len, false);

        Ok(Self {
            range,
            rows,
            columns,
            cells,
        })
    }

    pub fn range(&self) -> SumRange {
        self.range
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Resets every cell to unreachable
    pub fn clear(&mut self) {
        self.cells.par_iter_mut().for_each(|cell| *cell = false);
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize) {
        let i = self.index(row, col);
        self.cells[i] = true;
    }

    pub fn row(&self, row: usize) -> &[bool] {
        assert!(row < self.rows, "row {row} out of bounds ({} rows)", self.rows);
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Splits out row `row - 1` for reading and row `row` for writing
    pub(crate) fn prev_and_row_mut(&mut self, row: usize) -> (&[bool], &mut [bool]) {
        assert!(
            (1..self.rows).contains(&row),
            "row {row} has no predecessor in a table of {} rows",
            self.rows
        );
        let start = row * self.columns;
        let (head, tail) = self.cells.split_at_mut(start);
        (&head[start - self.columns..], &mut tail[..self.columns])
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.columns,
            "cell ({row}, {col}) out of bounds ({} x {})",
            self.rows,
            self.columns
        );
        row * self.columns + col
    }
}
