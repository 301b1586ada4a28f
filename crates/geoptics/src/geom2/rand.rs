//! Seeded convex lenses for tests and benches.
//!
//! A lens is the convex hull of `sides` points placed around `center`: one
//! point per equal angular slot, shifted inside its slot by up to `wobble`
//! of the slot width and pushed in or out by up to `roughness * radius`.
//! The outline is closed with segments. The same seed gives the same lens.
//!
//! Code cross-refs: `convex_hull`, `Polycurve::builder`.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, Vector};
use super::util::convex_hull;
use crate::optics::Polycurve;

/// Shape of a random lens.
#[derive(Clone, Copy, Debug)]
pub struct LensCfg {
    /// Number of hull candidates, drawn in `min_sides..=max_sides` (at least 3).
    pub min_sides: usize,
    pub max_sides: usize,
    /// Angular shift inside a slot, as a fraction of the slot width (at most 0.49).
    pub wobble: f64,
    /// Relative radial spread.
    pub roughness: f64,
    pub radius: f64,
    pub center: Point,
    /// Refractive index of the lens.
    pub n: f64,
}

impl Default for LensCfg {
    fn default() -> Self {
        Self {
            min_sides: 12,
            max_sides: 12,
            wobble: 0.3,
            roughness: 0.25,
            radius: 50.0,
            center: Point::origin(),
            n: 1.5,
        }
    }
}

/// Hull vertices (CCW) of a random lens outline.
pub fn draw_lens_vertices(cfg: &LensCfg, seed: u64) -> Option<Vec<Point>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let min_sides = cfg.min_sides.max(3);
    let sides = rng.gen_range(min_sides..=cfg.max_sides.max(min_sides));
    let slot = TAU / sides as f64;
    let wobble = cfg.wobble.clamp(0.0, 0.49) * slot;
    let roughness = cfg.roughness.max(0.0);
    let offset = rng.gen_range(0.0..TAU);
    let candidates: Vec<Point> = (0..sides)
        .map(|k| {
            let angle = offset + k as f64 * slot + rng.gen_range(-1.0..=1.0) * wobble;
            let r = cfg.radius * (1.0 + rng.gen_range(-1.0..=1.0) * roughness).max(1e-6);
            cfg.center + Vector::new(angle.cos(), angle.sin()) * r
        })
        .collect();
    convex_hull(&candidates)
}

/// Random convex lens region; `None` if the hull degenerates.
pub fn draw_polycurve_radial(cfg: &LensCfg, seed: u64) -> Option<Polycurve> {
    let hull = draw_lens_vertices(cfg, seed)?;
    let outline = hull[1..]
        .iter()
        .fold(Polycurve::builder(cfg.n, hull[0]), |b, m| b.add_line(*m));
    Some(outline.close().build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::Region;

    #[test]
    fn same_seed_same_lens() {
        let cfg = LensCfg {
            min_sides: 10,
            max_sides: 10,
            ..LensCfg::default()
        };
        let a = draw_lens_vertices(&cfg, 42).expect("hull");
        let b = draw_lens_vertices(&cfg, 42).expect("hull");
        assert_eq!(a, b);
        assert!(a.len() >= 3 && a.len() <= 10);
    }

    #[test]
    fn lens_contains_its_center() {
        let cfg = LensCfg {
            min_sides: 5,
            max_sides: 9,
            roughness: 0.2,
            center: Point::new(100.0, -40.0),
            ..LensCfg::default()
        };
        for seed in 0..16 {
            let lens = draw_polycurve_radial(&cfg, seed).expect("lens");
            assert_eq!(lens.curves().len(), lens.vertices().len() - 1);
            assert_eq!(lens.vertices().first(), lens.vertices().last());
            assert!(lens.contains_point(cfg.center, Vector::new(1.0, 0.1)));
            assert!(!lens.contains_point(Point::new(300.0, 0.0), Vector::new(1.0, 0.1)));
        }
    }
}
