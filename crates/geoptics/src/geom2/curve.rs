//! Boundary pieces (`Curve`) and the line-vs-element intersection dispatch.

use super::arc::Arc;
use super::line::Line;
use super::segment::Segment;
use super::types::{Intersection, Point, Reach, Translate, Vector};
use crate::error::GeomError;

/// Closed set of boundary pieces a region outline is built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Curve {
    Segment(Segment),
    Arc(Arc),
}

impl Curve {
    #[inline]
    pub fn m1(&self) -> Point {
        match self {
            Curve::Segment(seg) => seg.m1,
            Curve::Arc(arc) => arc.m1(),
        }
    }
    #[inline]
    pub fn m2(&self) -> Point {
        match self {
            Curve::Segment(seg) => seg.m2,
            Curve::Arc(arc) => arc.m2(),
        }
    }
    pub fn intersection(&self, other: &Line, reach: Reach) -> Vec<Intersection> {
        match self {
            Curve::Segment(seg) => seg.intersection(other, reach),
            Curve::Arc(arc) => arc.intersection(other, reach),
        }
    }
}

impl Translate for Curve {
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        match self {
            Curve::Segment(seg) => {
                seg.translate(dv);
            }
            Curve::Arc(arc) => {
                arc.translate(dv);
            }
        }
        self
    }
}

impl From<Segment> for Curve {
    fn from(seg: Segment) -> Self {
        Curve::Segment(seg)
    }
}

impl From<Arc> for Curve {
    fn from(arc: Arc) -> Self {
        Curve::Arc(arc)
    }
}

/// Borrowed geometric element, for callers that hold heterogeneous shapes.
#[derive(Clone, Copy, Debug)]
pub enum Shape<'a> {
    Line(&'a Line),
    Segment(&'a Segment),
    Arc(&'a Arc),
}

impl Shape<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "Line",
            Shape::Segment(_) => "Segment",
            Shape::Arc(_) => "Arc",
        }
    }
}

/// Intersections of `element` with `other`.
///
/// Only queries by a line are supported; curve-vs-curve pairs are rejected.
pub fn intersect(
    element: Shape<'_>,
    other: Shape<'_>,
    reach: Reach,
) -> Result<Vec<Intersection>, GeomError> {
    let Shape::Line(line) = other else {
        return Err(GeomError::NotImplemented {
            left: element.kind(),
            right: other.kind(),
        });
    };
    Ok(match element {
        Shape::Line(l) => l.intersection(line, reach),
        Shape::Segment(seg) => seg.intersection(line, reach),
        Shape::Arc(arc) => arc.intersection(line, reach),
    })
}
