use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use subset_sum::subset::{Solver, SumRange};

pub const DEFAULT_BATCH_SIZE: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    pub target: i64,
    /// Chosen elements, absent when no subset reaches the target
    pub witness: Option<Vec<i64>>,
    #[serde(skip)]
    pub elapsed: Duration,
}

#[derive(Debug, Serialize)]
pub struct BatchReport {
    pub sequence_len: usize,
    pub range: SumRange,
    pub outcomes: Vec<QueryOutcome>,
    pub elapsed_secs: f64,
}

/// Evaluates up to `batch_size` targets one after another against the
/// solver's sequence. `on_solved` sees the solver right after every
/// successful solve, before the next target clears the table.
///
/// The batch time is the sum of the `solve` calls only; reconstruction and
/// `on_solved` are not counted.
pub fn run_batch(
    solver: &mut Solver,
    targets: &[i64],
    batch_size: usize,
    mut on_solved: impl FnMut(&Solver, i64),
) -> BatchReport {
    let mut solving = Duration::ZERO;
    let mut outcomes = Vec::with_capacity(batch_size.min(targets.len()));

    for &target in targets.iter().take(batch_size) {
        let query_start = Instant::now();
        let found = solver.solve(target);
        let elapsed = query_start.elapsed();
        solving += elapsed;

        let witness = if found {
            on_solved(solver, target);
            Some(solver.reconstruct(target))
        } else {
            None
        };

        debug!(target_sum = target, found, ?elapsed, "query finished");
        outcomes.push(QueryOutcome {
            target,
            witness,
            elapsed,
        });
    }

    info!(queries = outcomes.len(), elapsed = ?solving, "batch finished");

    BatchReport {
        sequence_len: solver.sequence().len(),
        range: solver.range(),
        outcomes,
        elapsed_secs: solving.as_secs_f64(),
    }
}

impl QueryOutcome {
    pub fn describe(&self) -> String {
        match &self.witness {
            Some(witness) => {
                let values = witness
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("target {}: {}", self.target, values)
            }
            None => format!("target {}: no solution exists", self.target),
        }
    }
}
