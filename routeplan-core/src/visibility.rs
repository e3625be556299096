use crate::config::PlanningConfig;
use crate::geometry::{
    distance, segment_clears_disk, segment_intersects_segment, shorter_arc_length, tangent_points, Disk, DiskId,
    Obstacle, Point, Segment,
};

/// A node in a pairwise visibility graph: a point, and — if it sits on a
/// disk boundary as a tangent touch point — the identity of that disk.
/// This annotation is what lets the pairwise route table decide whether a
/// hop is a straight segment or an arc.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityNode {
    pub point: Point,
    pub disk: Option<DiskId>,
}

/// The finite weighted graph built for one (start, end) pair: a node list
/// in deterministic order (index 0 is the pair's start, index 1 its end)
/// and a dense weight matrix, `f64::INFINITY` marking "no edge."
pub struct VisibilityGraph {
    pub nodes: Vec<VisibilityNode>,
    pub weights: Vec<Vec<f64>>,
}

fn point_on_disk_boundary(point: Point, disk: &Disk, epsilon_point: f64) -> bool {
    (distance(point, disk.center) - disk.radius).abs() <= epsilon_point
}

fn disk_at(obstacles: &[Obstacle], id: DiskId) -> &Disk {
    match &obstacles[id] {
        Obstacle::Disk(d) => d,
        _ => unreachable!("DiskId must index a Disk obstacle"),
    }
}

/// Builds the visibility graph between `pair_start` and `pair_end` against
/// the full obstacle set.
pub fn build_visibility_graph(
    pair_start: Point,
    pair_end: Point,
    obstacles: &[Obstacle],
    config: &PlanningConfig,
) -> VisibilityGraph {
    let mut nodes: Vec<VisibilityNode> = vec![
        VisibilityNode {
            point: pair_start,
            disk: None,
        },
        VisibilityNode {
            point: pair_end,
            disk: None,
        },
    ];

    for obstacle in obstacles {
        if let Obstacle::Segment(s) = obstacle {
            nodes.push(VisibilityNode {
                point: s.start,
                disk: None,
            });
            nodes.push(VisibilityNode {
                point: s.end,
                disk: None,
            });
        }
    }
    for obstacle in obstacles {
        if let Obstacle::Polygon(p) = obstacle {
            for &v in &p.vertices {
                nodes.push(VisibilityNode { point: v, disk: None });
            }
        }
    }

    // Snapshot the non-disk nodes before appending any tangent points, so
    // that tangents are only ever built from genuine external nodes.
    let non_disk_points: Vec<Point> = nodes.iter().map(|n| n.point).collect();

    for (disk_id, obstacle) in obstacles.iter().enumerate() {
        let disk = match obstacle {
            Obstacle::Disk(d) => d,
            _ => continue,
        };
        for &external in &non_disk_points {
            if let Some((t1, t2)) = tangent_points(external, disk, config.epsilon_clear) {
                if t1.approx_eq(t2, config.epsilon_point) {
                    nodes.push(VisibilityNode {
                        point: t1,
                        disk: Some(disk_id),
                    });
                } else {
                    nodes.push(VisibilityNode {
                        point: t1,
                        disk: Some(disk_id),
                    });
                    nodes.push(VisibilityNode {
                        point: t2,
                        disk: Some(disk_id),
                    });
                }
            }
        }
    }

    let n = nodes.len();
    let mut weights = vec![vec![f64::INFINITY; n]; n];
    for i in 0..n {
        weights[i][i] = 0.0;
    }

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let a = nodes[i];
            let b = nodes[j];
            let weight = if let (Some(da), Some(db)) = (a.disk, b.disk) {
                if da == db {
                    let disk = disk_at(obstacles, da);
                    Some(shorter_arc_length(disk.center, disk.radius, a.point, b.point))
                } else {
                    edge_weight_if_clear(a.point, b.point, obstacles, config)
                }
            } else {
                edge_weight_if_clear(a.point, b.point, obstacles, config)
            };
            if let Some(w) = weight {
                weights[i][j] = w;
            }
        }
    }

    VisibilityGraph { nodes, weights }
}

fn edge_weight_if_clear(a: Point, b: Point, obstacles: &[Obstacle], config: &PlanningConfig) -> Option<f64> {
    let candidate = Segment::new(a, b);
    for obstacle in obstacles {
        match obstacle {
            Obstacle::Segment(s) => {
                if segment_intersects_segment(&candidate, s) {
                    return None;
                }
            }
            Obstacle::Polygon(p) => {
                for (v0, v1) in p.edges() {
                    if segment_intersects_segment(&candidate, &Segment::new(v0, v1)) {
                        return None;
                    }
                }
            }
            Obstacle::Disk(d) => {
                let both_on_boundary =
                    point_on_disk_boundary(a, d, config.epsilon_point) && point_on_disk_boundary(b, d, config.epsilon_point);
                if both_on_boundary {
                    continue;
                }
                if !segment_clears_disk(&candidate, d, config.epsilon_clear) {
                    return None;
                }
            }
        }
    }
    Some(distance(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Disk as DiskGeom;

    #[test]
    fn empty_obstacle_set_is_direct_line() {
        let graph = build_visibility_graph(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            &[],
            &PlanningConfig::default(),
        );
        assert_eq!(graph.nodes.len(), 2);
        assert!((graph.weights[0][1] - 10.0).abs() < 1e-9);
    }

    #[test]
    fn wall_blocks_direct_edge() {
        let wall = Obstacle::Segment(Segment::new(Point::new(50.0, 0.0), Point::new(50.0, 100.0)));
        let graph = build_visibility_graph(
            Point::new(0.0, 50.0),
            Point::new(100.0, 50.0),
            &[wall],
            &PlanningConfig::default(),
        );
        assert!(graph.weights[0][1].is_infinite());
    }

    #[test]
    fn disk_adds_tangent_nodes() {
        let disk = Obstacle::Disk(DiskGeom::new(Point::new(5.0, 0.0), 1.0).unwrap());
        let graph = build_visibility_graph(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &[disk], &PlanningConfig::default());
        assert!(graph.nodes.len() > 2);
        assert!(graph.nodes.iter().any(|n| n.disk.is_some()));
    }
}
