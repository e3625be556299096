/// Pure matrix transform for splitting one TSP run across `vehicle_count`
/// vehicles sharing the same start. Exercised by the scene editor, not by
/// the single-vehicle core tour search; does not change the TSP solver
/// contract. See [`demultiplex_tour`] for the inverse operation.
///
/// Expands an `n x n` matrix to `(n + vehicle_count - 1) x (n + vehicle_count - 1)`
/// by replicating the start row and start column `vehicle_count - 1` times,
/// so a single TSP run can place `vehicle_count` virtual starts.
pub fn expand_for_vehicles(matrix: &[Vec<f64>], vehicle_count: usize) -> Vec<Vec<f64>> {
    let n = matrix.len();
    if vehicle_count <= 1 {
        return matrix.to_vec();
    }
    let new_n = n + (vehicle_count - 1);
    let mut expanded = vec![vec![0.0; new_n]; new_n];
    for (i, row) in expanded.iter_mut().enumerate() {
        let oi = if i < n { i } else { 0 };
        for (j, cell) in row.iter_mut().enumerate() {
            if i == j {
                *cell = 0.0;
                continue;
            }
            let oj = if j < n { j } else { 0 };
            *cell = matrix[oi][oj];
        }
    }
    expanded
}

/// Splits a closed tour over the expanded matrix back into one subtour per
/// vehicle, each beginning and ending at the real start (index 0). A node
/// index is a "start occurrence" if it is the real start or one of the
/// `original_n..` replica indices.
pub fn demultiplex_tour(tour: &[usize], original_n: usize) -> Vec<Vec<usize>> {
    let is_start_occurrence = |idx: usize| idx == 0 || idx >= original_n;
    let mut subtours = Vec::new();
    let mut current = vec![0usize];
    for &node in tour.iter().skip(1) {
        if is_start_occurrence(node) {
            current.push(0);
            subtours.push(current.clone());
            current = vec![0];
        } else {
            current.push(node);
        }
    }
    subtours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_replicates_start_row_and_column() {
        let matrix = vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ];
        let expanded = expand_for_vehicles(&matrix, 3);
        assert_eq!(expanded.len(), 5);
        assert_eq!(expanded[3][1], matrix[0][1]);
        assert_eq!(expanded[1][4], matrix[1][0]);
        assert_eq!(expanded[3][4], 0.0);
    }

    #[test]
    fn single_vehicle_is_identity() {
        let matrix = vec![vec![0.0, 1.0], vec![1.0, 0.0]];
        assert_eq!(expand_for_vehicles(&matrix, 1), matrix);
    }

    #[test]
    fn demultiplex_splits_at_start_occurrences() {
        // original_n = 3 (start=0, two control points 1,2); one replica
        // start at index 3 for a second vehicle.
        let tour = vec![0, 1, 3, 2, 0];
        let subtours = demultiplex_tour(&tour, 3);
        assert_eq!(subtours, vec![vec![0, 1, 0], vec![0, 2, 0]]);
    }
}
