use serde::Serialize;

use super::error::{Result, SubsetError};

/// Maps reachable sums onto table columns: column = sum - offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SumRange {
    pub offset: i64,
    pub columns: i64,
}

impl SumRange {
    /// Column holding `sum`, if it falls inside the range
    pub fn column_of(&self, sum: i64) -> Option<usize> {
        let col = sum.checked_sub(self.offset)?;
        if (0..self.columns).contains(&col) {
            usize::try_from(col).ok()
        } else {
            None
        }
    }

    /// Largest sum with a column
    pub fn last(&self) -> i64 {
        self.offset.saturating_add(self.columns.saturating_sub(1))
    }
}

/// Derives offset and column count from the negative and positive sums of
/// a sorted sequence.
///
/// When the sequence has no negatives and no zero, the offset is the first
/// element but the column count is the positive sum alone, which leaves
/// `sequence[0] - 1` trailing columns that no subset can reach.
pub fn compute_range(sequence: &[i64]) -> Result<SumRange> {
    let first = *sequence.first().ok_or(SubsetError::EmptySequence)?;

    let mut min_sum: i64 = 0;
    let mut max_sum: i64 = 0;
    let mut has_zero = false;

    for &value in sequence {
        if value < 0 {
            min_sum = min_sum.checked_add(value).ok_or(SubsetError::SumOverflow)?;
        } else if value > 0 {
            max_sum = max_sum.checked_add(value).ok_or(SubsetError::SumOverflow)?;
        } else {
            has_zero = true;
        }
    }

    if min_sum == 0 {
        let offset = if has_zero { 0 } else { first };
        let columns = max_sum
            .checked_add(has_zero as i64)
            .ok_or(SubsetError::SumOverflow)?;
        return Ok(SumRange { offset, columns });
    }

    // negatives and positives together always cross zero
    if max_sum != 0 {
        has_zero = true;
    }

    let columns = min_sum
        .checked_neg()
        .and_then(|n| n.checked_add(max_sum))
        .and_then(|n| n.checked_add(has_zero as i64))
        .ok_or(SubsetError::SumOverflow)?;

    Ok(SumRange {
        offset: min_sum,
        columns,
    })
}
