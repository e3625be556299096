use serde::{Deserialize, Serialize};

use super::point::{distance, Point};

/// An ordered pair of points. Orientation matters for some predicates, but
/// visibility blocking is symmetric in `start`/`end`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Segment { start, end }
    }

    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }
}
