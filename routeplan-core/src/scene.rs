use serde::{Deserialize, Serialize};

use crate::geometry::{Obstacle, Point};

/// A start point, a set of control points to visit, and the static
/// obstacles in between. Geometry primitives inside a `Scene` are value
/// objects: constructed once and never mutated during planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub start: Point,
    pub control_points: Vec<Point>,
    pub obstacles: Vec<Obstacle>,
}

impl Scene {
    pub fn new(start: Point, control_points: Vec<Point>, obstacles: Vec<Obstacle>) -> Self {
        Scene {
            start,
            control_points,
            obstacles,
        }
    }

    /// All points the tour must visit, with the start at index 0.
    pub fn all_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.control_points.len() + 1);
        points.push(self.start);
        points.extend_from_slice(&self.control_points);
        points
    }
}
