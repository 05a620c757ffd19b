use super::table::ReachabilityTable;
use super::Sequence;

/// Walks a filled table backward from `target` and returns the chosen
/// elements, latest row first.
///
/// Among rows reaching the same sum the earliest one is used, so the
/// witness is deterministic for a given table.
///
/// # Panics
///
/// If the last `solve` on `table` did not succeed for `target`.
pub fn reconstruct(sequence: &Sequence, table: &ReachabilityTable, target: i64) -> Vec<i64> {
    let range = table.range();
    let mut col = range
        .column_of(target)
        .unwrap_or_else(|| panic!("target {target} was never solved on this table"));

    let mut row = (0..table.rows())
        .rev()
        .find(|&row| table.get(row, col))
        .unwrap_or_else(|| panic!("target {target} is not reachable in this table"));

    if sequence[row] == target {
        return vec![sequence[row]];
    }

    let mut witness = Vec::new();
    let mut sum: i64 = 0;
    loop {
        while row > 0 && table.get(row - 1, col) {
            row -= 1;
        }

        let value = sequence[row];
        witness.push(value);
        sum += value;
        if sum == target {
            return witness;
        }

        // the rest of the sum must come from earlier rows
        let rest = target - sum;
        col = match range.column_of(rest) {
            Some(c) if row > 0 && table.get(row - 1, c) => c,
            _ => panic!(
                "table does not reach {rest} before row {row}, was it solved for {target}?"
            ),
        };
        row -= 1;
    }
}
