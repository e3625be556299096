use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A 2-D location. Equality is tolerance-based (see [`Point::approx_eq`]),
/// never bitwise — use [`distance`] rather than `==` anywhere scene geometry
/// is involved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn to_nalgebra(self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: Point2<f64>) -> Self {
        Point::new(p.x, p.y)
    }

    pub fn vector_to(self, other: Point) -> Vector2<f64> {
        other.to_nalgebra() - self.to_nalgebra()
    }

    /// Coordinate-wise equality within `epsilon`.
    pub fn approx_eq(self, other: Point, epsilon: f64) -> bool {
        distance(self, other) <= epsilon
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}
