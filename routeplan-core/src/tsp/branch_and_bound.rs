use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::{normalize_sentinel, TspSolver};
use crate::error::{Error, Result};

const ZERO_TOLERANCE: f64 = 1e-9;

/// A live search-tree node: a reduced cost matrix, its lower bound, and the
/// directed edges committed on the path from the root.
struct Node {
    matrix: Vec<Vec<f64>>,
    lower_bound: f64,
    edges: Vec<(usize, usize)>,
}

/// Ordered by `lower_bound` ascending so `BinaryHeap` (a max-heap) acts as
/// a min-heap for best-first search.
struct NodeOrd(Node);

impl PartialEq for NodeOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.lower_bound == other.0.lower_bound
    }
}
impl Eq for NodeOrd {}
impl PartialOrd for NodeOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for NodeOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.lower_bound.partial_cmp(&self.0.lower_bound).unwrap_or(Ordering::Equal)
    }
}

fn row_min_excluding(matrix: &[Vec<f64>], r: usize, exclude_col: usize) -> f64 {
    let n = matrix.len();
    (0..n)
        .filter(|&j| j != exclude_col)
        .map(|j| matrix[r][j])
        .fold(f64::INFINITY, f64::min)
}

fn col_min_excluding(matrix: &[Vec<f64>], c: usize, exclude_row: usize) -> f64 {
    let n = matrix.len();
    (0..n)
        .filter(|&i| i != exclude_row)
        .map(|i| matrix[i][c])
        .fold(f64::INFINITY, f64::min)
}

/// Subtracts the row minimum from every finite entry of row `r`. Returns
/// the amount subtracted (0 if the row was already reduced or empty).
fn reduce_row(matrix: &mut [Vec<f64>], r: usize) -> f64 {
    let n = matrix.len();
    let row_min = matrix[r].iter().copied().filter(|v| v.is_finite()).fold(f64::INFINITY, f64::min);
    if row_min.is_finite() && row_min > 0.0 {
        for j in 0..n {
            if matrix[r][j].is_finite() {
                matrix[r][j] -= row_min;
            }
        }
        row_min
    } else {
        0.0
    }
}

fn reduce_col(matrix: &mut [Vec<f64>], c: usize) -> f64 {
    let n = matrix.len();
    let col_min = (0..n).map(|i| matrix[i][c]).filter(|v| v.is_finite()).fold(f64::INFINITY, f64::min);
    if col_min.is_finite() && col_min > 0.0 {
        for i in 0..n {
            if matrix[i][c].is_finite() {
                matrix[i][c] -= col_min;
            }
        }
        col_min
    } else {
        0.0
    }
}

/// Full row-then-column reduction. Returns the total reduction value.
fn reduce_full(matrix: &mut [Vec<f64>]) -> f64 {
    let n = matrix.len();
    let mut total = 0.0;
    for r in 0..n {
        total += reduce_row(matrix, r);
    }
    for c in 0..n {
        total += reduce_col(matrix, c);
    }
    total
}

/// The zero cell with the largest penalty `min(row \ {c}) + min(col \ {r})`.
/// Ties keep the first cell found in row-major scan order.
fn best_branch_cell(matrix: &[Vec<f64>]) -> Option<(usize, usize)> {
    let n = matrix.len();
    let mut best: Option<(usize, usize, f64)> = None;
    for r in 0..n {
        for c in 0..n {
            if matrix[r][c].abs() < ZERO_TOLERANCE {
                let penalty = row_min_excluding(matrix, r, c) + col_min_excluding(matrix, c, r);
                let is_better = match best {
                    None => true,
                    Some((_, _, best_penalty)) => penalty > best_penalty,
                };
                if is_better {
                    best = Some((r, c, penalty));
                }
            }
        }
    }
    best.map(|(r, c, _)| (r, c))
}

/// For every maximal chain of committed directed edges, forbids the edge
/// that would close that chain into a cycle shorter than the full tour.
fn forbid_premature_cycles(matrix: &mut [Vec<f64>], edges: &[(usize, usize)]) {
    let mut next: HashMap<usize, usize> = HashMap::new();
    let mut has_incoming: HashSet<usize> = HashSet::new();
    for &(u, v) in edges {
        next.insert(u, v);
        has_incoming.insert(v);
    }
    let heads: Vec<usize> = next.keys().copied().filter(|u| !has_incoming.contains(u)).collect();
    for head in heads {
        let mut tail = head;
        while let Some(&nxt) = next.get(&tail) {
            tail = nxt;
        }
        matrix[tail][head] = f64::INFINITY;
    }
}

/// With `n - 1` committed edges forming a single chain spanning all `n`
/// nodes, returns `(head, tail)`: the node with no incoming edge and the
/// node with no outgoing edge.
fn chain_endpoints(edges: &[(usize, usize)], n: usize) -> (usize, usize) {
    let mut has_incoming = vec![false; n];
    let mut has_outgoing = vec![false; n];
    for &(u, v) in edges {
        has_outgoing[u] = true;
        has_incoming[v] = true;
    }
    let head = (0..n).find(|&i| !has_incoming[i]).expect("chain must have a head");
    let tail = (0..n).find(|&i| !has_outgoing[i]).expect("chain must have a tail");
    (head, tail)
}

fn tour_from_edges(edges: &[(usize, usize)], start_index: usize) -> Vec<usize> {
    let next: HashMap<usize, usize> = edges.iter().copied().collect();
    let mut tour = vec![start_index];
    let mut current = start_index;
    for _ in 0..edges.len() {
        current = next[&current];
        tour.push(current);
    }
    tour
}

/// Branch-and-bound by matrix reduction (Little's method): row/column
/// reduction for the bound, penalty-based branching on zero entries, and
/// premature-cycle forbidding so only Hamiltonian tours reach the
/// `n - 1`-edge terminal state. Best-first search via a min-heap on the
/// lower bound.
pub struct BranchAndBoundSolver;

impl TspSolver for BranchAndBoundSolver {
    fn solve(&self, distance_matrix: &[Vec<f64>], start_index: usize) -> Result<(Vec<usize>, f64)> {
        let n = distance_matrix.len();
        if n <= 1 {
            return Ok((vec![start_index, start_index], 0.0));
        }

        let original = normalize_sentinel(distance_matrix);
        let mut initial_matrix = original.clone();
        for row in initial_matrix.iter_mut().enumerate() {
            row.1[row.0] = f64::INFINITY;
        }

        let initial_bound = reduce_full(&mut initial_matrix);
        let root = Node {
            matrix: initial_matrix,
            lower_bound: initial_bound,
            edges: Vec::new(),
        };

        let mut heap = BinaryHeap::new();
        heap.push(NodeOrd(root));

        let mut incumbent_length = f64::INFINITY;
        let mut incumbent_edges: Vec<(usize, usize)> = Vec::new();

        while let Some(NodeOrd(node)) = heap.pop() {
            if node.lower_bound >= incumbent_length {
                continue;
            }

            if node.edges.len() == n - 1 {
                let (head, tail) = chain_endpoints(&node.edges, n);
                let closing_weight = original[tail][head];
                if !closing_weight.is_finite() {
                    return Err(Error::internal(
                        "branch-and-bound node with n-1 edges has an unreachable implied closing edge",
                    ));
                }
                let length: f64 = node.edges.iter().map(|&(u, v)| original[u][v]).sum::<f64>() + closing_weight;
                if length < incumbent_length {
                    incumbent_length = length;
                    let mut edges = node.edges.clone();
                    edges.push((tail, head));
                    incumbent_edges = edges;
                }
                continue;
            }

            let Some((r, c)) = best_branch_cell(&node.matrix) else {
                return Err(Error::internal(
                    "branch-and-bound found no branchable zero cell before n-1 edges were committed",
                ));
            };

            let mut left_matrix = node.matrix.clone();
            left_matrix[r][c] = f64::INFINITY;
            let left_incr = reduce_row(&mut left_matrix, r) + reduce_col(&mut left_matrix, c);
            let left_bound = node.lower_bound + left_incr;
            if left_bound < incumbent_length {
                heap.push(NodeOrd(Node {
                    matrix: left_matrix,
                    lower_bound: left_bound,
                    edges: node.edges.clone(),
                }));
            }

            let mut right_matrix = node.matrix.clone();
            for j in 0..n {
                right_matrix[r][j] = f64::INFINITY;
            }
            for i in 0..n {
                right_matrix[i][c] = f64::INFINITY;
            }
            right_matrix[c][r] = f64::INFINITY;
            let mut right_edges = node.edges.clone();
            right_edges.push((r, c));
            forbid_premature_cycles(&mut right_matrix, &right_edges);
            let right_incr = reduce_full(&mut right_matrix);
            let right_bound = node.lower_bound + right_incr;
            if right_bound < incumbent_length {
                heap.push(NodeOrd(Node {
                    matrix: right_matrix,
                    lower_bound: right_bound,
                    edges: right_edges,
                }));
            }
        }

        if incumbent_edges.is_empty() {
            return Err(Error::internal("branch-and-bound found no complete tour"));
        }

        let tour = tour_from_edges(&incumbent_edges, start_index);
        Ok((tour, incumbent_length))
    }
}
