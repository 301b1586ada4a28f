//! Straight boundary piece `[M1, M2]`.

use super::line::Line;
use super::types::{Intersection, Point, Reach, Translate, Vector, VectorExt};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub m1: Point,
    pub m2: Point,
}

impl Segment {
    #[inline]
    pub fn new(m1: Point, m2: Point) -> Self {
        Self { m1, m2 }
    }

    /// Support line anchored at `M1`, directed `M1 -> M2`.
    #[inline]
    pub fn line(&self) -> Line {
        Line::new(self.m1, self.m2 - self.m1)
    }

    #[inline]
    pub fn normal(&self, normalized: bool) -> Vector {
        (self.m2 - self.m1).normal(normalized)
    }

    #[inline]
    pub fn middle(&self) -> Point {
        Point::from((self.m1.coords + self.m2.coords) * 0.5)
    }

    /// Intersections of the segment with the query line `other`.
    ///
    /// The support line is intersected first; the hit is then bounds-checked on
    /// the axis where the segment spans more, to keep the comparison well
    /// conditioned for near-vertical or near-horizontal segments. End points
    /// are included.
    pub fn intersection(&self, other: &Line, reach: Reach) -> Vec<Intersection> {
        let result = self.line().intersection(other, reach);
        match result.first() {
            Some(hit) if self.spans(&hit.p) => result,
            _ => Vec::new(),
        }
    }

    fn spans(&self, m: &Point) -> bool {
        let (a, b, v) = if (self.m2.x - self.m1.x).abs() > (self.m2.y - self.m1.y).abs() {
            (self.m1.x, self.m2.x, m.x)
        } else {
            (self.m1.y, self.m2.y, m.y)
        };
        let (lo, hi) = if b > a { (a, b) } else { (b, a) };
        !(v < lo || v > hi)
    }
}

impl Translate for Segment {
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        self.m1.translate(dv);
        self.m2.translate(dv);
        self
    }
}
