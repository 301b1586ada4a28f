//! Ray propagation through piecewise-curved regions.
//!
//! Per ray, starting from `parts[0]`:
//! 1. Locate the starting region with the first line (its direction settles
//!    points lying on a boundary); reset the ray to that first part.
//! 2. Intersect the last part's forward half-line with every region boundary
//!    and sort the hits by `s`.
//! 3. The first hit whose just-past point (`s + margin`) lies in a medium of a
//!    different index is the diopter; grazes and crossings into an equal
//!    index are skipped.
//! 4. Truncate the last part there. Unless the part budget is spent, append
//!    the refracted part (vector Snell's law), or the reflected one when
//!    `u2N² < 0` (total internal reflection keeps the current medium).
//!
//! The loop ends when no boundary is ahead, when no hit changes the medium,
//! or when `max_parts` diopters have been consumed; in the last case the
//! final part is bounded.
//!
//! Code cross-refs: `Media::region_at`, `Region::intersection`, `Ray::add_part`.

use crate::geom2::{Intersection, Line, Reach, Vector};

use super::ray::Ray;
use super::region::Region;
use super::scene::Media;

/// Tracer settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceCfg {
    /// Maximum number of diopters per ray (and of parts in a traced ray).
    pub max_parts: usize,
    /// Step past an intersection before probing the downstream medium.
    pub margin: f64,
}

impl Default for TraceCfg {
    fn default() -> Self {
        Self {
            max_parts: 20,
            margin: f64::EPSILON * 1000.0,
        }
    }
}

/// Why a ray stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// No boundary ahead: the last part runs to infinity.
    Escaped,
    /// Boundaries ahead, but none changes the refractive index.
    NoDiopter,
    /// Part budget exhausted; the last part ends on its diopter.
    Capped,
}

/// Hook for listeners (e.g. a renderer) that follow propagation.
pub trait TraceObserver {
    /// Called after each appended part.
    fn on_part(&mut self, _ray: &Ray) {}
    /// Called once when the ray stops.
    fn on_finish(&mut self, _ray: &Ray, _termination: Termination) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TraceObserver for NoopObserver {}

/// Direction after crossing (or reflecting on) a diopter.
///
/// `u1` is the incoming direction (any norm), `e_n`/`e_t` the unit normal and
/// tangent of the boundary, `n1`/`n2` the indices before/after. Returns the
/// unit outgoing direction and whether the ray was refracted (`false` means
/// total internal reflection).
pub fn refract(u1: &Vector, e_n: &Vector, e_t: &Vector, n1: f64, n2: f64) -> (Vector, bool) {
    // Plain sums keep the sign of a zero component (`-0.0 + -0.0`), which
    // decides the side of a grazing ray through `copysign`.
    let u1n = u1.x * e_n.x + u1.y * e_n.y;
    let u1t = u1.x * e_t.x + u1.y * e_t.y;
    let ratio2 = (n2 / n1) * (n2 / n1);
    let u2n2 = (ratio2 - 1.0) * (u1t * u1t) + ratio2 * (u1n * u1n);
    let (u2n, refracted) = if u2n2 >= 0.0 {
        (u2n2.sqrt().copysign(u1n), true)
    } else {
        (-u1n, false)
    };
    ((e_t * u1t + e_n * u2n).normalize(), refracted)
}

impl Ray {
    /// Propagate with default settings and no observer.
    pub fn propagate(&mut self, media: &Media) -> Termination {
        self.propagate_with(media, &TraceCfg::default(), &mut NoopObserver)
    }

    /// Recompute every part after the first one.
    pub fn propagate_with(
        &mut self,
        media: &Media,
        cfg: &TraceCfg,
        observer: &mut dyn TraceObserver,
    ) -> Termination {
        let mut part0 = self.parts[0];
        let mut current: &dyn Region = media.region_at(&part0.line);
        part0.n = Some(current.n());
        self.parts.clear();
        self.parts.push(part0);

        let mut budget = cfg.max_parts;
        let termination = loop {
            if budget == 0 {
                break Termination::Capped;
            }
            let last = *self.last_part();
            let mut hits: Vec<Intersection> = media
                .regions()
                .iter()
                .flat_map(|region| region.intersection(&last.line, Reach::Ahead))
                .collect();
            if hits.is_empty() {
                break Termination::Escaped;
            }
            hits.sort_by(|a, b| a.s.total_cmp(&b.s));

            let diopter = hits.iter().find_map(|hit| {
                let ahead = last.line.point(hit.s + cfg.margin);
                let downstream = media.region_at(&Line::new(ahead, Vector::new(1.0, 0.0)));
                (downstream.n() != current.n()).then_some((*hit, downstream))
            });
            let Some((hit, downstream)) = diopter else {
                break Termination::NoDiopter;
            };

            self.truncate_last(hit.s);
            budget -= 1;
            if budget == 0 {
                break Termination::Capped;
            }

            let n1 = last.n.unwrap_or_else(|| current.n());
            let n2 = downstream.n();
            let (u_next, refracted) = refract(&last.line.u, &hit.e_n, &hit.e_t, n1, n2);
            let n_next = if refracted {
                current = downstream;
                n2
            } else {
                n1
            };
            self.add_part(u_next, f64::INFINITY, Some(n_next));
            observer.on_part(self);
        };

        if termination == Termination::Capped {
            tracing::debug!(parts = self.parts.len(), "ray reached the part budget");
        }
        tracing::trace!(parts = self.parts.len(), ?termination, "ray propagated");
        observer.on_finish(self, termination);
        termination
    }
}
