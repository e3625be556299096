use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::error::{Error, Result};

/// An ordered sequence of at least three points describing a closed, convex
/// boundary. The closing edge from the last point back to the first is
/// implicit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    /// Builds a polygon, rejecting fewer than three distinct vertices.
    /// Convexity is checked when `check_convex` is set; the scene validator
    /// may disable it for obstacles that are trusted to already be convex.
    pub fn new(vertices: Vec<Point>, epsilon_point: f64, check_convex: bool) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::invalid_geometry(format!(
                "polygon needs at least three vertices, got {}",
                vertices.len()
            )));
        }
        for i in 0..vertices.len() {
            for j in (i + 1)..vertices.len() {
                if vertices[i].approx_eq(vertices[j], epsilon_point) {
                    return Err(Error::invalid_geometry(
                        "polygon has duplicate vertices".to_string(),
                    ));
                }
            }
        }
        let polygon = Polygon { vertices };
        if check_convex && !polygon.is_convex() {
            return Err(Error::invalid_geometry("polygon is not convex".to_string()));
        }
        Ok(polygon)
    }

    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Convexity via the sign of consecutive cross products; all turns must
    /// agree in sign.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut sign = 0i32;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            if cross.abs() < 1e-12 {
                continue;
            }
            let this_sign = if cross > 0.0 { 1 } else { -1 };
            if sign == 0 {
                sign = this_sign;
            } else if sign != this_sign {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn rejects_too_few_vertices() {
        let v = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        assert!(Polygon::new(v, 1e-5, true).is_err());
    }

    #[test]
    fn accepts_convex_square() {
        assert!(Polygon::new(square(), 1e-5, true).is_ok());
    }

    #[test]
    fn rejects_nonconvex_polygon() {
        let v = vec![
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 2.0),
        ];
        assert!(Polygon::new(v, 1e-5, true).is_err());
    }
}
