//! Circular arc from `M1` to `M2`, given by its tangent at `M1`.
//!
//! Derived data
//! - Center `C`: intersection of the chord's perpendicular bisector with the
//!   line through `M1` normal to the tangent (tangent ⟂ radius).
//! - `r = |C - M1|`; `theta1`/`theta2`: angles of `M1`/`M2` seen from `C`.
//! - `ccw`: traversal `M1 -> M2` is counter-clockwise iff `CM1 × tangent > 0`.
//!
//! The derived fields are kept private so they cannot drift from the defining
//! points; `translate` moves the center along with the end points.

use super::line::Line;
use super::types::{lerp_points, Intersection, Point, Reach, Translate, Vector, VectorExt};
use crate::error::GeomError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc {
    m1: Point,
    m2: Point,
    tangent: Vector,
    c: Point,
    r: f64,
    theta1: f64,
    theta2: f64,
    ccw: bool,
}

impl Arc {
    /// Build the arc; fails when the center is undefined (tangent parallel to
    /// the chord, or coincident end points).
    pub fn new(m1: Point, m2: Point, tangent: Vector) -> Result<Self, GeomError> {
        let c = center(&m1, &m2, &tangent).ok_or(GeomError::DegenerateArc)?;
        let cm1 = m1 - c;
        Ok(Self {
            m1,
            m2,
            tangent,
            c,
            r: cm1.norm(),
            theta1: cm1.theta_x(),
            theta2: (m2 - c).theta_x(),
            ccw: cm1.x * tangent.y - cm1.y * tangent.x > 0.0,
        })
    }

    #[inline]
    pub fn m1(&self) -> Point {
        self.m1
    }
    #[inline]
    pub fn m2(&self) -> Point {
        self.m2
    }
    #[inline]
    pub fn tangent(&self) -> Vector {
        self.tangent
    }
    #[inline]
    pub fn center(&self) -> Point {
        self.c
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.r
    }
    #[inline]
    pub fn theta1(&self) -> f64 {
        self.theta1
    }
    #[inline]
    pub fn theta2(&self) -> f64 {
        self.theta2
    }
    #[inline]
    pub fn is_ccw(&self) -> bool {
        self.ccw
    }

    /// Whether `m` lies in the angular sector of the arc (distance to `C` is
    /// not checked). Angles exactly equal to `theta1`/`theta2` are outside.
    pub fn contains(&self, m: &Point) -> bool {
        let theta_i = (m - self.c).theta_x();
        if self.theta2 < self.theta1 {
            if self.theta2 < theta_i && theta_i < self.theta1 {
                !self.ccw
            } else {
                self.ccw
            }
        } else if self.theta1 < theta_i && theta_i < self.theta2 {
            self.ccw
        } else {
            !self.ccw
        }
    }

    /// Intersections of the arc with the query line `other`.
    ///
    /// Solves `|other.p + s * other.u - C|² = r²` with the reduced discriminant
    /// and the cancellation-free root pair (`q / a`, `c / q`). Roots whose point
    /// falls outside the sector, or whose `s` has the wrong sign for `reach`,
    /// are dropped. `e_n` points away from the center.
    pub fn intersection(&self, other: &Line, reach: Reach) -> Vec<Intersection> {
        let mut roots: Vec<f64> = Vec::with_capacity(2);
        let a = other.u.x * other.u.x + other.u.y * other.u.y;
        if a != 0.0 {
            let dx = other.p.x - self.c.x;
            let dy = other.p.y - self.c.y;
            let b = other.u.x * dx + other.u.y * dy;
            let c = dx * dx + dy * dy - self.r * self.r;
            let delta = b * b - a * c;
            if delta > 0.0 {
                let q = if b >= 0.0 {
                    -b - delta.sqrt()
                } else {
                    -b + delta.sqrt()
                };
                roots.push(q / a);
                roots.push(c / q);
            } else if delta == 0.0 {
                roots.push(-b / a);
            }
        }
        roots
            .into_iter()
            .filter_map(|s| {
                let m = other.point(s);
                if !(self.contains(&m) && reach.accepts_closed(s)) {
                    return None;
                }
                let e_n = (m - self.c).normalize();
                Some(Intersection {
                    p: m,
                    s,
                    e_n,
                    e_t: e_n.normal(true),
                })
            })
            .collect()
    }
}

fn center(m1: &Point, m2: &Point, tangent: &Vector) -> Option<Point> {
    let middle = lerp_points(m1, m2, 0.5);
    let bisector = Line::new(middle, (m2 - m1).normal(false));
    let radial = Line::new(*m1, tangent.normal(false));
    bisector
        .intersection(&radial, Reach::Both)
        .first()
        .map(|hit| hit.p)
}

impl Translate for Arc {
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        self.m1.translate(dv);
        self.m2.translate(dv);
        self.c.translate(dv);
        self
    }
}
