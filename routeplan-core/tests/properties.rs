use proptest::prelude::*;
use routeplan_core::geometry::{distance, segment_clears_disk, shorter_arc_length, tangent_points, Disk, Point, Segment};

fn finite_coord() -> impl Strategy<Value = f64> {
    -500.0f64..500.0
}

proptest! {
    #[test]
    fn distance_is_symmetric(ax in finite_coord(), ay in finite_coord(), bx in finite_coord(), by in finite_coord()) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert!((distance(a, b) - distance(b, a)).abs() < 1e-9);
    }

    #[test]
    fn distance_respects_triangle_inequality(
        ax in finite_coord(), ay in finite_coord(),
        bx in finite_coord(), by in finite_coord(),
        cx in finite_coord(), cy in finite_coord(),
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        let c = Point::new(cx, cy);
        prop_assert!(distance(a, c) <= distance(a, b) + distance(b, c) + 1e-9);
    }

    #[test]
    fn tangent_points_always_land_on_the_boundary(
        cx in finite_coord(), cy in finite_coord(), radius in 0.1f64..50.0,
        ex in finite_coord(), ey in finite_coord(),
    ) {
        let disk = Disk::new(Point::new(cx, cy), radius).unwrap();
        let external = Point::new(ex, ey);
        if let Some((t1, t2)) = tangent_points(external, &disk, 1e-4) {
            prop_assert!((distance(t1, disk.center) - radius).abs() < 1e-6);
            prop_assert!((distance(t2, disk.center) - radius).abs() < 1e-6);

            // The defining property of a tangent, not just a boundary point:
            // the line from `external` to the touch point must not cut
            // through the disk's interior. A point reflected through the
            // center still lies on the boundary but fails this check.
            prop_assert!(segment_clears_disk(&Segment::new(external, t1), &disk, 1e-4));
            prop_assert!(segment_clears_disk(&Segment::new(external, t2), &disk, 1e-4));
        }
    }

    #[test]
    fn shorter_arc_length_never_exceeds_half_circumference(
        cx in finite_coord(), cy in finite_coord(), radius in 0.1f64..50.0,
        a1 in 0.0f64..std::f64::consts::TAU, a2 in 0.0f64..std::f64::consts::TAU,
    ) {
        let center = Point::new(cx, cy);
        let p1 = Point::new(center.x + radius * a1.cos(), center.y + radius * a1.sin());
        let p2 = Point::new(center.x + radius * a2.cos(), center.y + radius * a2.sin());
        let len = shorter_arc_length(center, radius, p1, p2);
        prop_assert!(len <= std::f64::consts::PI * radius + 1e-6);
        prop_assert!(len >= 0.0);
    }
}
