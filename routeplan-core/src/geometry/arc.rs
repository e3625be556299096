use serde::{Deserialize, Serialize};

use super::point::{distance, Point};
use super::predicates::shorter_arc_length;
use crate::error::{Error, Result};

/// A circular arc between two boundary points of a disk, always taken along
/// the shorter angular sweep (see `shorter_arc_length`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub p_start: Point,
    pub p_end: Point,
}

impl Arc {
    /// Builds an arc, checking that both endpoints lie on the circle of
    /// `radius` around `center` within `epsilon_point`.
    pub fn new(center: Point, radius: f64, p_start: Point, p_end: Point, epsilon_point: f64) -> Result<Self> {
        if !(radius > 0.0) {
            return Err(Error::invalid_geometry(format!(
                "arc radius must be positive, got {radius}"
            )));
        }
        for (label, p) in [("p_start", p_start), ("p_end", p_end)] {
            let d = distance(center, p);
            if (d - radius).abs() > epsilon_point {
                return Err(Error::invalid_geometry(format!(
                    "arc {label} is not on the circle: |center - {label}| = {d}, radius = {radius}"
                )));
            }
        }
        Ok(Arc {
            center,
            radius,
            p_start,
            p_end,
        })
    }

    /// Length along the shorter angular sweep between `p_start` and `p_end`.
    pub fn length(&self) -> f64 {
        shorter_arc_length(self.center, self.radius, self.p_start, self.p_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_off_circle_endpoints() {
        let center = Point::new(0.0, 0.0);
        let on_circle = Point::new(1.0, 0.0);
        let off_circle = Point::new(2.0, 0.0);
        assert!(Arc::new(center, 1.0, on_circle, off_circle, 1e-5).is_err());
    }

    #[test]
    fn quarter_circle_length() {
        let center = Point::new(0.0, 0.0);
        let p0 = Point::new(1.0, 0.0);
        let p1 = Point::new(0.0, 1.0);
        let arc = Arc::new(center, 1.0, p0, p1, 1e-5).unwrap();
        assert!((arc.length() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);
    }
}
