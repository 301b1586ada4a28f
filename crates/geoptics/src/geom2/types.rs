//! Basic 2D types shared by lines, curves and regions.
//!
//! - `Point`, `Vector`: nalgebra aliases; the optics-specific helpers live on
//!   `VectorExt` (left normal, exact colinearity, angle to the x axis).
//! - `Reach`: half-line selector applied to the `s` parameter of a query line.
//! - `Intersection`: hit point, `s` along the query line, unit normal/tangent
//!   of the element that was hit.
//! - `Translate`: in-place displacement, implemented by every movable entity.
//!
//! Conventions
//! - Colinearity is an exact zero cross product. No tolerance is applied, so
//!   nearly parallel directions do intersect (far away).
//! - Normalizing a zero vector yields NaN components; callers keep directions
//!   non-degenerate.

use nalgebra::{Point2, Vector2};

/// Plain coordinate in the scene plane.
pub type Point = Point2<f64>;
/// Direction or displacement.
pub type Vector = Vector2<f64>;

/// Optics helpers on top of nalgebra vectors.
pub trait VectorExt {
    /// Left normal `(x, y) -> (y, -x)`, optionally normalized.
    fn normal(&self, normalized: bool) -> Vector;
    /// Exact colinearity test: `x1*y2 - y1*x2 == 0`.
    fn is_colinear(&self, other: &Vector) -> bool;
    /// Inclination over the x axis, in `(-π, π]`.
    fn theta_x(&self) -> f64;
}

impl VectorExt for Vector {
    #[inline]
    fn normal(&self, normalized: bool) -> Vector {
        let n = Vector::new(self.y, -self.x);
        if normalized {
            n.normalize()
        } else {
            n
        }
    }
    #[inline]
    fn is_colinear(&self, other: &Vector) -> bool {
        self.x * other.y - self.y * other.x == 0.0
    }
    #[inline]
    fn theta_x(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Affine combination `(1 - x) * a + x * b`.
///
/// Computed coordinate-wise so that `x = 0` and `x = 1` return the end points
/// exactly.
#[inline]
pub fn lerp_points(a: &Point, b: &Point, x: f64) -> Point {
    Point::from(a.coords * (1.0 - x) + b.coords * x)
}

/// Half-line constraint on the `s` parameter of a query line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reach {
    /// Whole line (`sign_of_s == 0`).
    #[default]
    Both,
    /// Only `s > 0` (or `s >= 0` for arcs).
    Ahead,
    /// Only `s < 0` (or `s <= 0` for arcs).
    Behind,
}

impl Reach {
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Reach::Both => 0.0,
            Reach::Ahead => 1.0,
            Reach::Behind => -1.0,
        }
    }
    /// Strict acceptance used by straight elements: `s == 0` is never a hit on
    /// the whole line, and the sign must match on a half-line.
    #[inline]
    pub fn accepts_strict(self, s: f64) -> bool {
        match self {
            Reach::Both => s != 0.0,
            _ => s * self.sign() > 0.0,
        }
    }
    /// Closed acceptance used by arcs: `s * sign >= 0`.
    #[inline]
    pub fn accepts_closed(self, s: f64) -> bool {
        s * self.sign() >= 0.0
    }
}

/// Intersection between a query line and another element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// Point of intersection.
    pub p: Point,
    /// Parameter along the query line: `p = line.p + s * line.u`.
    pub s: f64,
    /// Unit normal of the other element at `p`.
    pub e_n: Vector,
    /// Unit tangent of the other element at `p`.
    pub e_t: Vector,
}

/// In-place translation. Returns `self` for chaining.
pub trait Translate {
    fn translate(&mut self, dv: &Vector) -> &mut Self;

    fn translate_xy(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.translate(&Vector::new(dx, dy))
    }
}

impl Translate for Point {
    #[inline]
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        self.x += dv.x;
        self.y += dv.y;
        self
    }
}
