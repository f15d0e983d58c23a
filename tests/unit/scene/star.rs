use super::*;
use kurbo::PathEl;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn five_point_star_has_ten_vertices_starting_at_top() {
    let c = Point::new(50.0, 50.0);
    let v = star_vertices(c, 20.0, 5).unwrap();
    assert_eq!(v.len(), 10);
    assert!(close(v[0].x, 50.0));
    assert!(close(v[0].y, 30.0));
}

#[test]
fn radii_alternate_between_outer_and_half() {
    let c = Point::new(0.0, 0.0);
    let v = star_vertices(c, 10.0, 6).unwrap();
    for (i, p) in v.iter().enumerate() {
        let r = p.distance(c);
        let want = if i % 2 == 0 { 10.0 } else { 5.0 };
        assert!(close(r, want), "vertex {i}: r={r}");
    }
}

#[test]
fn angular_step_is_pi_over_points() {
    let c = Point::new(0.0, 0.0);
    let v = star_vertices(c, 1.0, 4).unwrap();
    for pair in v.windows(2) {
        let a0 = pair[0].y.atan2(pair[0].x);
        let a1 = pair[1].y.atan2(pair[1].x);
        let mut d = a1 - a0;
        if d < 0.0 {
            d += 2.0 * std::f64::consts::PI;
        }
        assert!(close(d, std::f64::consts::PI / 4.0));
    }
}

#[test]
fn degenerate_inputs_are_rejected() {
    let c = Point::new(0.0, 0.0);
    assert!(star_vertices(c, 10.0, 1).is_err());
    assert!(star_vertices(c, -1.0, 5).is_err());
    assert!(star_vertices(c, f64::NAN, 5).is_err());
}

#[test]
fn path_is_closed_polygon_inside_bounds() {
    let bounds = Rect::new(10.0, 10.0, 70.0, 70.0);
    let path = star_path(bounds, 5).unwrap();
    let els: Vec<PathEl> = path.elements().to_vec();
    assert_eq!(els.len(), 11);
    assert!(matches!(els[0], PathEl::MoveTo(_)));
    assert!(matches!(els[10], PathEl::ClosePath));
    assert!(els[1..10].iter().all(|e| matches!(e, PathEl::LineTo(_))));

    let bb = kurbo::Shape::bounding_box(&path);
    assert!(bb.x0 >= bounds.x0 - 1e-9 && bb.x1 <= bounds.x1 + 1e-9);
    assert!(bb.y0 >= bounds.y0 - 1e-9 && bb.y1 <= bounds.y1 + 1e-9);
}
