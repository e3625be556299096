use super::disk::Disk;
use super::point::{distance, Point};
use super::segment::Segment;

/// Angle between the radii to `p1` and `p2`, reduced to `[0, π]`, times
/// `radius`. Used both as the length of an `Arc` and as the edge weight
/// between two tangent points on the same disk.
pub fn shorter_arc_length(center: Point, radius: f64, p1: Point, p2: Point) -> f64 {
    let a1 = (p1.y - center.y).atan2(p1.x - center.x);
    let a2 = (p2.y - center.y).atan2(p2.x - center.x);
    let mut delta = (a2 - a1).abs() % (2.0 * std::f64::consts::PI);
    if delta > std::f64::consts::PI {
        delta = 2.0 * std::f64::consts::PI - delta;
    }
    radius * delta
}

/// The two tangent touch points on `disk` as seen from `external_point`.
///
/// Returns `None` if the point lies strictly inside the disk. Returns a
/// single degenerate point (both entries equal) if the point lies on the
/// boundary.
pub fn tangent_points(external_point: Point, disk: &Disk, epsilon_clear: f64) -> Option<(Point, Point)> {
    let d = distance(external_point, disk.center);
    if d < disk.radius - epsilon_clear {
        return None;
    }
    if (d - disk.radius).abs() <= epsilon_clear {
        return Some((external_point, external_point));
    }
    let phi = (external_point.y - disk.center.y).atan2(external_point.x - disk.center.x);
    let cos_arg = (disk.radius / d).clamp(-1.0, 1.0);
    let offset = cos_arg.acos();
    let theta1 = phi + offset;
    let theta2 = phi - offset;
    let t1 = Point::new(
        disk.center.x + disk.radius * theta1.cos(),
        disk.center.y + disk.radius * theta1.sin(),
    );
    let t2 = Point::new(
        disk.center.x + disk.radius * theta2.cos(),
        disk.center.y + disk.radius * theta2.sin(),
    );
    Some((t1, t2))
}

fn ccw(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Strict proper intersection: endpoints touching is not an intersection.
/// Implemented via the four-CCW test — the segments cross iff each
/// segment's endpoints lie on strictly opposite sides of the other.
pub fn segment_intersects_segment(s1: &Segment, s2: &Segment) -> bool {
    let d1 = ccw(s2.start, s2.end, s1.start);
    let d2 = ccw(s2.start, s2.end, s1.end);
    let d3 = ccw(s1.start, s1.end, s2.start);
    let d4 = ccw(s1.start, s1.end, s2.end);
    (d1 > 0.0 && d2 < 0.0 || d1 < 0.0 && d2 > 0.0) && (d3 > 0.0 && d4 < 0.0 || d3 < 0.0 && d4 > 0.0)
}

/// Shortest distance from `disk.center` to `segment`, as a finite segment
/// (projection clamped to `[0, 1]`).
fn distance_point_to_segment(p: Point, s: &Segment) -> f64 {
    let vx = s.end.x - s.start.x;
    let vy = s.end.y - s.start.y;
    let len_sq = vx * vx + vy * vy;
    if len_sq <= 0.0 {
        return distance(p, s.start);
    }
    let t = ((p.x - s.start.x) * vx + (p.y - s.start.y) * vy) / len_sq;
    let t = t.clamp(0.0, 1.0);
    let proj = Point::new(s.start.x + t * vx, s.start.y + t * vy);
    distance(p, proj)
}

/// True iff the shortest distance from `disk.center` to `segment` is at
/// least `disk.radius - slack`.
pub fn segment_clears_disk(segment: &Segment, disk: &Disk, slack: f64) -> bool {
    distance_point_to_segment(disk.center, segment) >= disk.radius - slack
}
