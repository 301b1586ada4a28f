//! Lines `p + s * u` and line–line intersection.

use std::f64::consts::PI;
use std::fmt;

use super::types::{lerp_points, Intersection, Point, Reach, Translate, Vector, VectorExt};

/// Line through `p` with direction `u`; `s` spans all reals unless a `Reach`
/// is imposed by the caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p: Point,
    pub u: Vector,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            p: Point::origin(),
            u: Vector::new(1.0, 0.0),
        }
    }
}

impl Line {
    #[inline]
    pub fn new(p: Point, u: Vector) -> Self {
        Self { p, u }
    }

    /// Point at `p + s * u`.
    #[inline]
    pub fn point(&self, s: f64) -> Point {
        Point::new(self.p.x + s * self.u.x, self.p.y + s * self.u.y)
    }

    #[inline]
    pub fn normal(&self, normalized: bool) -> Vector {
        self.u.normal(normalized)
    }

    #[inline]
    pub fn tangent(&self, normalized: bool) -> Vector {
        if normalized {
            self.u.normalize()
        } else {
            self.u
        }
    }

    /// Intersections of `self` with `other`.
    ///
    /// The returned `s` is the parameter along `other`, and `reach` is applied
    /// to it: `Both` accepts any `s != 0`, a half-line keeps matching signs only.
    /// `e_n`/`e_t` are the unit normal and tangent of `self`.
    ///
    /// Colinear directions (parallel or identical lines) give no intersection.
    /// At most one element is returned; a list keeps the curve contract uniform.
    pub fn intersection(&self, other: &Line, reach: Reach) -> Vec<Intersection> {
        if other.u.is_colinear(&self.u) {
            return Vec::new();
        }
        let s = ((self.p.x - other.p.x) * self.u.y - (self.p.y - other.p.y) * self.u.x)
            / (other.u.x * self.u.y - other.u.y * self.u.x);
        if !reach.accepts_strict(s) {
            return Vec::new();
        }
        vec![Intersection {
            p: other.point(s),
            s,
            e_n: self.normal(true),
            e_t: self.tangent(true),
        }]
    }

    /// Line interpolated between `start` (x = 0) and `end` (x = 1).
    ///
    /// Points are interpolated linearly. Directions are interpolated on their
    /// angle, always sweeping counter-clockwise from `start` to `end`: when the
    /// end angle is smaller, 2π is added to it first. `x` is not clamped.
    pub fn interpolate(start: &Line, end: &Line, x: f64) -> Line {
        let p = lerp_points(&start.p, &end.p, x);
        let angle_start = start.u.theta_x();
        let mut angle_end = end.u.theta_x();
        if angle_end < angle_start {
            angle_end += 2.0 * PI;
        }
        let angle = (1.0 - x) * angle_start + x * angle_end;
        Line::new(p, Vector::new(angle.cos(), angle.sin()))
    }
}

impl Translate for Line {
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        self.p.translate(dv);
        self
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line(Point({}, {}), Vector({}, {}))",
            self.p.x, self.p.y, self.u.x, self.u.y
        )
    }
}
