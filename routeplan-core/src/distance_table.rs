use rayon::prelude::*;

use crate::config::PlanningConfig;
use crate::error::Result;
use crate::geometry::{Arc, Obstacle, Point, Segment};
use crate::route::{Route, RouteAtom};
use crate::shortest_path::shortest_path;
use crate::visibility::build_visibility_graph;

/// The N×N distance matrix and matching N×N route table built from a
/// scene's points. Index 0 is always the scene's start.
pub struct DistanceTable {
    pub distances: Vec<Vec<f64>>,
    pub routes: Vec<Vec<Route>>,
}

/// Builds the pairwise route table for `points` against `obstacles`. The
/// N² pairwise shortest-path computations are independent, so off-diagonal
/// rows are filled in parallel; this cannot change the reported `length`
/// for any pair.
pub fn build_distance_table(points: &[Point], obstacles: &[Obstacle], config: &PlanningConfig) -> Result<DistanceTable> {
    let n = points.len();
    let rows: Vec<Result<(Vec<f64>, Vec<Route>)>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let mut distance_row = vec![0.0; n];
            let mut route_row = Vec::with_capacity(n);
            for j in 0..n {
                if i == j {
                    route_row.push(Route::empty());
                    continue;
                }
                let (route, length) = pairwise_route(points[i], points[j], obstacles, config)?;
                distance_row[j] = length;
                route_row.push(route);
            }
            Ok((distance_row, route_row))
        })
        .collect();

    let mut distances = Vec::with_capacity(n);
    let mut routes = Vec::with_capacity(n);
    for row in rows {
        let (d, r) = row?;
        distances.push(d);
        routes.push(r);
    }

    Ok(DistanceTable { distances, routes })
}

fn pairwise_route(a: Point, b: Point, obstacles: &[Obstacle], config: &PlanningConfig) -> Result<(Route, f64)> {
    let graph = build_visibility_graph(a, b, obstacles, config);
    let (node_sequence, length) = shortest_path(&graph.weights, 0, 1);
    if !length.is_finite() {
        return Ok((Route::unreachable(), f64::INFINITY));
    }

    let mut atoms = Vec::with_capacity(node_sequence.len().saturating_sub(1));
    for pair in node_sequence.windows(2) {
        let (k0, k1) = (pair[0], pair[1]);
        let node_a = graph.nodes[k0];
        let node_b = graph.nodes[k1];
        let atom = match (node_a.disk, node_b.disk) {
            (Some(da), Some(db)) if da == db => {
                let disk = match &obstacles[da] {
                    Obstacle::Disk(d) => d,
                    _ => unreachable!("DiskId must index a Disk obstacle"),
                };
                RouteAtom::Arc(Arc::new(disk.center, disk.radius, node_a.point, node_b.point, config.epsilon_point)?)
            }
            _ => RouteAtom::Segment(Segment::new(node_a.point, node_b.point)),
        };
        atoms.push(atom);
    }

    Ok((Route::from_atoms(atoms), length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_with_no_obstacles() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let table = build_distance_table(&points, &[], &PlanningConfig::default()).unwrap();
        assert!((table.distances[0][1] - 10.0).abs() < 1e-9);
        assert!((table.distances[1][2] - 10.0).abs() < 1e-9);
        assert_eq!(table.distances[0][0], 0.0);
    }

    #[test]
    fn unreachable_pair_has_infinite_distance() {
        let enclosing = Obstacle::Polygon(
            crate::geometry::Polygon::new(
                vec![
                    Point::new(5.0, -5.0),
                    Point::new(15.0, -5.0),
                    Point::new(15.0, 5.0),
                    Point::new(5.0, 5.0),
                ],
                1e-5,
                true,
            )
            .unwrap(),
        );
        let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let table = build_distance_table(&points, &[enclosing], &PlanningConfig::default()).unwrap();
        assert!(table.distances[0][1].is_infinite());
        assert!(!table.routes[0][1].is_reachable());
    }
}
