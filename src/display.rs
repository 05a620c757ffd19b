use std::fmt;

use subset_sum::subset::{ReachabilityTable, Sequence};

const CELL_WIDTH: usize = 4;

/// Table with sums as column headers and elements as row headers
pub struct TableView<'a> {
    sequence: &'a Sequence,
    table: &'a ReachabilityTable,
}

impl fmt::Display for TableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = self.table.range().offset;

        write!(f, "{:w$}", "", w = CELL_WIDTH)?;
        for col in 0..self.table.columns() {
            write!(f, "{:>w$}", col as i64 + offset, w = CELL_WIDTH)?;
        }
        writeln!(f)?;

        for row in 0..self.table.rows() {
            write!(f, "{:>w$}", self.sequence[row], w = CELL_WIDTH)?;
            for &cell in self.table.row(row) {
                write!(f, "{:>w$}", cell as u8, w = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

pub fn render_table(sequence: &Sequence, table: &ReachabilityTable) -> String {
    TableView { sequence, table }.to_string()
}
