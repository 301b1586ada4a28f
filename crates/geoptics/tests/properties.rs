//! Property tests for the tracer.

use geoptics::api::*;
use proptest::prelude::*;

fn lens_at(cx: f64, cy: f64) -> Polycurve {
    Polycurve::builder(1.5, Point::new(cx - 20.0, cy - 65.0))
        .add_line(Point::new(cx - 20.0, cy + 65.0))
        .add_line(Point::new(cx + 20.0, cy + 65.0))
        .add_arc(Point::new(cx + 20.0, cy - 65.0), Vector::new(10.0, -20.0))
        .expect("arc")
        .close()
        .build()
}

fn assert_contiguous(ray: &Ray) {
    for pair in ray.parts().windows(2) {
        let end = pair[0].line.point(pair[0].s);
        let start = pair[1].line.p;
        assert!((end - start).norm() < 1e-9, "{end:?} vs {start:?}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn traced_rays_are_contiguous_and_bounded(
        y in 65.0f64..185.0,
        uy in -0.5f64..0.5,
        max_parts in 1usize..12,
    ) {
        let mut scene = Scene::new();
        scene.add(lens_at(90.0, 125.0)).unwrap();
        scene.add(SingleRay::new(Line::new(Point::new(0.0, y), Vector::new(1.0, uy)), 10.0)).unwrap();
        let cfg = TraceCfg { max_parts, ..TraceCfg::default() };
        scene.propagate_with(&cfg, &mut NoopObserver);

        let ray = &scene.sources()[0].rays()[0];
        prop_assert!(ray.parts().len() <= max_parts);
        prop_assert!(ray.parts().iter().all(|p| p.n.is_some()));
        prop_assert!(ray.parts()[..ray.parts().len() - 1].iter().all(|p| p.s.is_finite() && p.s > 0.0));
        assert_contiguous(ray);
    }

    #[test]
    fn translation_commutes_with_propagation(
        dx in -50i32..50,
        dy in -50i32..50,
        y in 70i32..180,
    ) {
        let (dx, dy) = (dx as f64, dy as f64);
        let ray = SingleRay::new(Line::new(Point::new(0.0, y as f64), Vector::new(1.0, 0.25)), 10.0);

        let mut scene = Scene::new();
        scene.add(lens_at(90.0, 125.0)).unwrap();
        scene.add(ray.clone()).unwrap();
        scene.propagate();

        let mut moved_ray = Source::from(SingleRay::new(ray.ray().first_part().line, 10.0));
        moved_ray.translate_xy(dx, dy);
        let mut moved = Scene::new();
        moved.add(lens_at(90.0 + dx, 125.0 + dy)).unwrap();
        moved.add(moved_ray).unwrap();
        moved.propagate();

        let a = scene.sources()[0].rays()[0].parts();
        let b = moved.sources()[0].rays()[0].parts();
        prop_assert_eq!(a.len(), b.len());
        for (pa, pb) in a.iter().zip(b) {
            prop_assert!((pa.line.p.x + dx - pb.line.p.x).abs() < 1e-6);
            prop_assert!((pa.line.p.y + dy - pb.line.p.y).abs() < 1e-6);
            prop_assert!((pa.line.u - pb.line.u).norm() < 1e-6);
            prop_assert_eq!(pa.n, pb.n);
        }
    }

    #[test]
    fn beam_size_follows_n_inter(n_inter in 0usize..20, grow in 0usize..20) {
        let mut beam = Beam::new(
            Line::new(Point::new(0.0, 0.0), Vector::new(1.0, 0.0)),
            10.0,
            Line::new(Point::new(0.0, 40.0), Vector::new(1.0, 1.0)),
            30.0,
            n_inter,
        );
        prop_assert_eq!(beam.rays().len(), n_inter + 2);
        let last_u = beam.rays()[n_inter + 1].first_part().line.u;
        beam.set(BeamParams { n_inter: Some(grow), ..BeamParams::default() });
        prop_assert_eq!(beam.rays().len(), grow + 2);
        prop_assert_eq!(beam.rays()[0].first_part().line.p, Point::new(0.0, 0.0));
        prop_assert!((beam.rays()[grow + 1].first_part().line.u - last_u).norm() < 1e-12);
        prop_assert!((beam.rays()[grow + 1].first_part().s - 30.0).abs() < 1e-12);
    }
}
