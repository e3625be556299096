use itertools::Itertools;

use super::{normalize_sentinel, TspSolver};
use crate::error::{Error, Result};

/// Exhaustive enumeration over permutations of the non-start vertices.
/// Ground truth for small instances; `O((N-1)! * N)`.
pub struct BruteForceSolver;

impl TspSolver for BruteForceSolver {
    fn solve(&self, distance_matrix: &[Vec<f64>], start_index: usize) -> Result<(Vec<usize>, f64)> {
        let matrix = normalize_sentinel(distance_matrix);
        let n = matrix.len();
        let others: Vec<usize> = (0..n).filter(|&i| i != start_index).collect();

        if others.is_empty() {
            return Ok((vec![start_index, start_index], 0.0));
        }

        let mut best_length = f64::INFINITY;
        let mut best_perm: Vec<usize> = Vec::new();

        for perm in others.iter().copied().permutations(others.len()) {
            let mut length = 0.0;
            let mut prev = start_index;
            for &v in &perm {
                length += matrix[prev][v];
                prev = v;
            }
            length += matrix[prev][start_index];
            if length < best_length {
                best_length = length;
                best_perm = perm;
            }
        }

        if !best_length.is_finite() {
            return Err(Error::internal(
                "brute force found no finite tour; the connectivity check should have caught this",
            ));
        }

        let mut tour = Vec::with_capacity(n + 1);
        tour.push(start_index);
        tour.extend(best_perm);
        tour.push(start_index);
        Ok((tour, best_length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_tour_visits_all_corners() {
        let matrix = vec![
            vec![0.0, 10.0, 14.142135623730951, 10.0],
            vec![10.0, 0.0, 10.0, 14.142135623730951],
            vec![14.142135623730951, 10.0, 0.0, 10.0],
            vec![10.0, 14.142135623730951, 10.0, 0.0],
        ];
        let solver = BruteForceSolver;
        let (tour, length) = solver.solve(&matrix, 0).unwrap();
        assert_eq!(tour.first(), Some(&0));
        assert_eq!(tour.last(), Some(&0));
        assert_eq!(tour.len(), 5);
        assert!((length - 40.0).abs() < 1e-6);
    }

    #[test]
    fn single_control_point_is_trivial() {
        let matrix = vec![vec![0.0, 5.0], vec![5.0, 0.0]];
        let solver = BruteForceSolver;
        let (tour, length) = solver.solve(&matrix, 0).unwrap();
        assert_eq!(tour, vec![0, 1, 0]);
        assert!((length - 10.0).abs() < 1e-9);
    }
}
