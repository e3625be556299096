use tracing::{debug, info_span};

use crate::config::PlanningConfig;
use crate::connectivity::check_strongly_connected;
use crate::distance_table::build_distance_table;
use crate::error::Result;
use crate::route::Route;
use crate::scene::Scene;
use crate::tsp::{self, AlgorithmChoice};

/// The outcome of a successful planning call.
pub struct PlanResult {
    /// Begins and ends at index 0 (the scene start); a permutation of
    /// `1..control_points.len()` in between.
    pub tour_indices: Vec<usize>,
    pub total_length: f64,
    pub route: Route,
}

/// Plans a closed, obstacle-avoiding tour over `scene`'s control points.
/// Single synchronous call: no I/O, no cancellation, no retries.
pub fn plan_tour(scene: &Scene, algorithm: AlgorithmChoice, config: &PlanningConfig) -> Result<PlanResult> {
    let n = scene.control_points.len() + 1;
    let span = info_span!("plan_tour", control_points = n, algorithm = ?algorithm);
    let _guard = span.enter();

    let points = scene.all_points();
    let table = build_distance_table(&points, &scene.obstacles, config)?;
    debug!(nodes = n, "distance table built");

    check_strongly_connected(&table.distances, 0)?;

    let (tour_indices, total_length) = tsp::solve(algorithm, &table.distances, 0)?;
    debug!(tour_len = tour_indices.len(), total_length, "tour found");

    let mut route = Route::empty();
    for pair in tour_indices.windows(2) {
        route.extend(&table.routes[pair[0]][pair[1]]);
    }

    Ok(PlanResult {
        tour_indices,
        total_length,
        route,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Disk, Obstacle, Point, Polygon, Segment};

    #[test]
    fn s1_square_no_obstacles() {
        let scene = Scene::new(
            Point::new(0.0, 0.0),
            vec![Point::new(10.0, 0.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)],
            vec![],
        );
        let result = plan_tour(&scene, AlgorithmChoice::BranchAndBound, &PlanningConfig::default()).unwrap();
        assert!((result.total_length - 40.0).abs() < 1e-6);
        assert_eq!(result.tour_indices.first(), Some(&0));
        assert_eq!(result.tour_indices.last(), Some(&0));
    }

    #[test]
    fn s2_single_wall_detour() {
        let wall = Obstacle::Segment(Segment::new(Point::new(50.0, 0.0), Point::new(50.0, 100.0)));
        let scene = Scene::new(Point::new(0.0, 50.0), vec![Point::new(100.0, 50.0)], vec![wall]);
        let result = plan_tour(&scene, AlgorithmChoice::BranchAndBound, &PlanningConfig::default()).unwrap();
        let expected = 2.0 * (50f64 * 50.0 + 50.0 * 50.0).sqrt();
        assert!((result.total_length - expected).abs() < 1e-3);
    }

    #[test]
    fn s5_unreachable_control_point_errors_before_tsp() {
        let enclosing = Polygon::new(
            vec![
                Point::new(5.0, -5.0),
                Point::new(15.0, -5.0),
                Point::new(15.0, 5.0),
                Point::new(5.0, 5.0),
            ],
            1e-5,
            true,
        )
        .unwrap();
        let scene = Scene::new(
            Point::new(0.0, 0.0),
            vec![Point::new(10.0, 0.0)],
            vec![Obstacle::Polygon(enclosing)],
        );
        let err = plan_tour(&scene, AlgorithmChoice::BranchAndBound, &PlanningConfig::default()).unwrap_err();
        match err {
            crate::error::Error::UnreachableVertices { indices } => assert_eq!(indices, vec![1]),
            other => panic!("expected UnreachableVertices, got {other:?}"),
        }
    }

    #[test]
    fn s7_empty_obstacles_degenerates_to_euclidean_tsp() {
        let scene = Scene::new(
            Point::new(0.0, 0.0),
            vec![Point::new(1.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 1.0)],
            vec![],
        );
        let bb = plan_tour(&scene, AlgorithmChoice::BranchAndBound, &PlanningConfig::default()).unwrap();
        let bf = plan_tour(&scene, AlgorithmChoice::BruteForce, &PlanningConfig::default()).unwrap();
        assert!((bb.total_length - bf.total_length).abs() < 1e-6);
        assert!((bb.total_length - 4.0).abs() < 1e-6);
    }

    #[test]
    fn idempotent_on_repeated_calls() {
        let scene = Scene::new(
            Point::new(0.0, 0.0),
            vec![Point::new(10.0, 0.0), Point::new(10.0, 10.0)],
            vec![Obstacle::Disk(Disk::new(Point::new(5.0, 5.0), 1.0).unwrap())],
        );
        let config = PlanningConfig::default();
        let first = plan_tour(&scene, AlgorithmChoice::BranchAndBound, &config).unwrap();
        let second = plan_tour(&scene, AlgorithmChoice::BranchAndBound, &config).unwrap();
        assert_eq!(first.total_length, second.total_length);
    }
}
