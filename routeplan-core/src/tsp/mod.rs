pub mod branch_and_bound;
pub mod brute_force;

use crate::error::Result;

pub use branch_and_bound::BranchAndBoundSolver;
pub use brute_force::BruteForceSolver;

/// Which TSP strategy to run. Both are exact; branch-and-bound is faster
/// in practice, brute force is used as ground truth for small instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    BruteForce,
    BranchAndBound,
}

/// `solve(distance_matrix, start_index) -> (tour, length)`. `tour` begins
/// and ends with `start_index` and visits every other vertex exactly once.
/// Implementations treat the sentinel `-1.0` in the input matrix as an
/// alias for `f64::INFINITY`.
pub trait TspSolver {
    fn solve(&self, distance_matrix: &[Vec<f64>], start_index: usize) -> Result<(Vec<usize>, f64)>;
}

/// Normalizes the legacy `-1` sentinel to `f64::INFINITY`.
pub(crate) fn normalize_sentinel(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|&w| if w == -1.0 { f64::INFINITY } else { w })
                .collect()
        })
        .collect()
}

pub fn solve(choice: AlgorithmChoice, distance_matrix: &[Vec<f64>], start_index: usize) -> Result<(Vec<usize>, f64)> {
    match choice {
        AlgorithmChoice::BruteForce => BruteForceSolver.solve(distance_matrix, start_index),
        AlgorithmChoice::BranchAndBound => BranchAndBoundSolver.solve(distance_matrix, start_index),
    }
}
