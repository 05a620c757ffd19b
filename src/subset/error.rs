use thiserror::Error;

pub type Result<T> = std::result::Result<T, SubsetError>;

/// Malformed input detected before a table is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsetError {
    #[error("sequence is empty")]
    EmptySequence,

    #[error("sequence is not sorted: {previous} is followed by {next} at index {index}")]
    Unsorted {
        index: usize,
        previous: i64,
        next: i64,
    },

    #[error("sum of sequence elements overflows a 64-bit integer")]
    SumOverflow,

    #[error("non-positive column count: {columns}")]
    NonPositiveColumns { columns: i64 },

    #[error("reachability table of {rows} x {columns} cells is too large")]
    TableTooLarge { rows: usize, columns: i64 },
}
