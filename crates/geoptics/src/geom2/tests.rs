use super::*;
use crate::error::GeomError;
use nalgebra::{point, vector};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12 * (1.0 + a.abs().max(b.abs()))
}

fn close_v(a: Vector, b: Vector) -> bool {
    close(a.x, b.x) && close(a.y, b.y)
}

#[test]
fn vector_normal_and_colinearity() {
    let v = vector![3.0, 4.0];
    assert_eq!(v.normal(false), vector![4.0, -3.0]);
    assert!(close_v(v.normal(true), vector![0.8, -0.6]));
    assert!(v.is_colinear(&vector![-6.0, -8.0]));
    assert!(!v.is_colinear(&vector![4.0, 3.0]));
    assert!(close(vector![0.0, 2.0].theta_x(), std::f64::consts::FRAC_PI_2));
}

#[test]
fn reach_filters_by_sign() {
    assert!(Reach::Both.accepts_strict(-1.0));
    assert!(!Reach::Both.accepts_strict(0.0));
    assert!(Reach::Ahead.accepts_strict(2.0));
    assert!(!Reach::Ahead.accepts_strict(0.0));
    assert!(Reach::Behind.accepts_strict(-2.0));
    assert!(Reach::Ahead.accepts_closed(0.0));
    assert!(!Reach::Ahead.accepts_closed(-1e-300));
}

#[test]
fn line_intersection_reports_s_on_the_query_line() {
    let x_axis = Line::new(point![0.0, 0.0], vector![1.0, 0.0]);
    let query = Line::new(point![5.0, -5.0], vector![0.0, 1.0]);
    let hits = x_axis.intersection(&query, Reach::Ahead);
    assert_eq!(hits.len(), 1);
    let hit = hits[0];
    assert_eq!(hit.p, point![5.0, 0.0]);
    assert_eq!(hit.s, 5.0);
    assert_eq!(hit.e_n, vector![0.0, -1.0]);
    assert_eq!(hit.e_t, vector![1.0, 0.0]);

    let above = Line::new(point![5.0, 5.0], vector![0.0, 1.0]);
    assert!(x_axis.intersection(&above, Reach::Ahead).is_empty());
    let behind = x_axis.intersection(&above, Reach::Behind);
    assert_eq!(behind.len(), 1);
    assert_eq!(behind[0].s, -5.0);
}

#[test]
fn parallel_lines_do_not_intersect() {
    let a = Line::new(point![0.0, 0.0], vector![1.0, 1.0]);
    let b = Line::new(point![0.0, 1.0], vector![-2.0, -2.0]);
    assert!(a.intersection(&b, Reach::Both).is_empty());
    // Identical lines are colinear too.
    assert!(a.intersection(&a, Reach::Both).is_empty());
}

#[test]
fn line_interpolation_turns_counter_clockwise() {
    let up = Line::new(point![0.0, 0.0], vector![0.0, 1.0]);
    let right = Line::new(point![10.0, 20.0], vector![1.0, 0.0]);

    let mid = Line::interpolate(&right, &up, 0.5);
    assert_eq!(mid.p, point![5.0, 10.0]);
    assert!(close_v(mid.u, vector![0.7071067811865476, 0.7071067811865475]));

    // From +90° to 0° the sweep goes the long way round (through 225°).
    let wrapped = Line::interpolate(&up, &right, 0.5);
    assert!(close_v(wrapped.u, vector![-0.7071067811865477, -0.7071067811865475]));

    let start = Line::interpolate(&up, &right, 0.0);
    assert_eq!(start.p, up.p);
}

#[test]
fn segment_bounds_include_end_points() {
    let seg = Segment::new(point![0.0, 0.0], point![10.0, 0.0]);
    let through_end = Line::new(point![10.0, -1.0], vector![0.0, 1.0]);
    assert_eq!(seg.intersection(&through_end, Reach::Ahead).len(), 1);
    let past_end = Line::new(point![10.5, -1.0], vector![0.0, 1.0]);
    assert!(seg.intersection(&past_end, Reach::Ahead).is_empty());
    assert_eq!(seg.middle(), point![5.0, 0.0]);
    assert_eq!(seg.normal(true), vector![0.0, -1.0]);
}

#[test]
fn near_vertical_segment_is_checked_on_y() {
    let seg = Segment::new(point![70.0, 60.0], point![70.0, 190.0]);
    let hits = seg.intersection(&Line::new(point![0.0, 100.0], vector![1.0, 0.0]), Reach::Ahead);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].p, point![70.0, 100.0]);
    assert_eq!(hits[0].s, 70.0);
    let miss = seg.intersection(&Line::new(point![0.0, 200.0], vector![1.0, 0.0]), Reach::Ahead);
    assert!(miss.is_empty());
}

#[test]
fn arc_center_radius_and_orientation() {
    let arc = Arc::new(point![110.0, 190.0], point![110.0, 60.0], vector![10.0, -20.0]).unwrap();
    assert!(close(arc.center().x, -20.0));
    assert!(close(arc.center().y, 125.0));
    assert!(close(arc.radius(), 145.34441853748632));
    assert!(!arc.is_ccw());
    assert!(close(arc.theta1(), 0.4636476090008061));
    assert!(close(arc.theta2(), -0.4636476090008061));

    let skewed = Arc::new(point![110.0, 190.0], point![120.0, 60.0], vector![10.0, -20.0]).unwrap();
    assert!(close(skewed.center().x, -44.54545454545456));
    assert!(close(skewed.center().y, 112.72727272727272));

    let small = Arc::new(point![10.0, 20.0], point![50.0, 30.0], vector![10.0, 20.0]).unwrap();
    assert!(close(small.center().x, 34.285714285714285));
    assert!(close(small.center().y, 7.857142857142858));
    assert!(close(small.radius(), 27.152254012497444));
}

#[test]
fn arc_orientation_cases_each_hit_once() {
    let cases = [
        ((10.0, 20.0), (50.0, 30.0), (10.0, 20.0), false, (30.0, 10.0), (10.0, 30.0)),
        ((50.0, 30.0), (10.0, 20.0), (-10.0, 20.0), true, (30.0, 10.0), (10.0, 30.0)),
        ((10.0, 20.0), (50.0, 30.0), (10.0, -20.0), true, (30.0, 10.0), (10.0, -30.0)),
        ((50.0, 30.0), (10.0, 20.0), (-10.0, -20.0), false, (30.0, 20.0), (10.0, -30.0)),
    ];
    for (m1, m2, t, ccw, p, u) in cases {
        let arc = Arc::new(point![m1.0, m1.1], point![m2.0, m2.1], vector![t.0, t.1]).unwrap();
        assert_eq!(arc.is_ccw(), ccw, "orientation of {m1:?} -> {m2:?}");
        let line = Line::new(point![p.0, p.1], vector![u.0, u.1]);
        let hits = arc.intersection(&line, Reach::Ahead);
        assert_eq!(hits.len(), 1, "hits of {m1:?} -> {m2:?} with {t:?}");
        let hit = hits[0];
        assert!(close((hit.p - arc.center()).norm(), arc.radius()));
        assert!(close((hit.e_n.dot(&hit.e_t)).abs() + 1.0, 1.0));
    }
}

#[test]
fn arc_normal_points_away_from_center() {
    let arc = Arc::new(point![110.0, 190.0], point![110.0, 60.0], vector![10.0, -20.0]).unwrap();
    let hits = arc.intersection(&Line::new(point![0.0, 125.0], vector![1.0, 0.0]), Reach::Ahead);
    assert_eq!(hits.len(), 1);
    assert!(close(hits[0].p.x, -20.0 + 145.34441853748632));
    assert!(close_v(hits[0].e_n, vector![1.0, 0.0]));
    assert!(close_v(hits[0].e_t, vector![0.0, -1.0]));
}

#[test]
fn degenerate_arc_is_rejected() {
    let err = Arc::new(point![0.0, 0.0], point![10.0, 0.0], vector![1.0, 0.0]).unwrap_err();
    assert_eq!(err, GeomError::DegenerateArc);
}

#[test]
fn translating_an_arc_moves_its_center() {
    let mut arc = Arc::new(point![110.0, 190.0], point![110.0, 60.0], vector![10.0, -20.0]).unwrap();
    arc.translate_xy(10.0, 20.0);
    assert!(close(arc.center().x, -10.0));
    assert!(close(arc.center().y, 145.0));
    assert_eq!(arc.m1(), point![120.0, 210.0]);
    assert_eq!(arc.tangent(), vector![10.0, -20.0]);
}

#[test]
fn dispatch_rejects_curve_queries() {
    let seg = Segment::new(point![0.0, 0.0], point![1.0, 1.0]);
    let arc = Arc::new(point![0.0, 0.0], point![2.0, 0.0], vector![0.0, 1.0]).unwrap();
    let err = intersect(Shape::Arc(&arc), Shape::Segment(&seg), Reach::Both).unwrap_err();
    assert_eq!(
        err,
        GeomError::NotImplemented {
            left: "Arc",
            right: "Segment"
        }
    );
    let line = Line::new(point![0.5, -1.0], vector![0.0, 1.0]);
    let hits = intersect(Shape::Segment(&seg), Shape::Line(&line), Reach::Ahead).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].p, point![0.5, 0.5]);
}

#[test]
fn convex_hull_drops_interior_points() {
    let pts = [
        point![0.0, 0.0],
        point![2.0, 0.0],
        point![1.0, 0.5],
        point![2.0, 2.0],
        point![0.0, 2.0],
        point![1.0, 1.0],
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.len(), 4);
    assert_eq!(centroid(&hull), Some(point![1.0, 1.0]));
    assert!(convex_hull(&pts[..2]).is_none());
}
