pub mod arc;
pub mod disk;
pub mod point;
pub mod polygon;
pub mod predicates;
pub mod segment;

pub use arc::Arc;
pub use disk::{Disk, DiskId};
pub use point::{distance, Point};
pub use polygon::Polygon;
pub use predicates::{segment_clears_disk, segment_intersects_segment, shorter_arc_length, tangent_points};
pub use segment::Segment;

/// A single static obstacle in a scene.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Obstacle {
    Segment(Segment),
    Disk(Disk),
    Polygon(Polygon),
}
