//! Subset-sum decision and witness reconstruction over a reachable-sum table.

pub mod engine;
pub mod error;
pub mod range;
pub mod reconstruct;
pub mod table;

pub use engine::{ScanMode, Solver, solve, solve_with};
pub use error::{Result, SubsetError};
pub use range::{SumRange, compute_range};
pub use reconstruct::reconstruct;
pub use table::ReachabilityTable;

/// Non-empty sequence of integers in ascending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<i64>);

impl Sequence {
    pub fn new(values: Vec<i64>) -> Result<Self> {
        if values.is_empty() {
            return Err(SubsetError::EmptySequence);
        }

        if let Some(index) = values.windows(2).position(|w| w[0] > w[1]) {
            return Err(SubsetError::Unsorted {
                index: index + 1,
                previous: values[index],
                next: values[index + 1],
            });
        }

        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a `Sequence` cannot be built empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Index<usize> for Sequence {
    type Output = i64;

    fn index(&self, index: usize) -> &i64 {
        &self.0[index]
    }
}
