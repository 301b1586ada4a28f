//! Planar geometry for ray tracing: lines, segments, circular arcs.
//!
//! Purpose
//! - Provide the few primitives the tracer needs (`Line`, `Segment`, `Arc`)
//!   with one intersection routine per primitive against a parametric line.
//! - Report every hit with its parameter `s` along the query line and the
//!   unit normal/tangent of the hit element, ready for Snell's law.
//!
//! Conventions
//! - `Point`/`Vector` are nalgebra `Point2<f64>`/`Vector2<f64>`.
//! - A line is `p + s·u`; `u` need not be unit length and `s` is measured in
//!   units of `|u|`.
//! - `Reach` filters hits by the sign of `s` (strict for lines and segments,
//!   closed for arcs).
//! - No epsilon handling: colinear or tangent configurations simply produce
//!   no intersection.
//!
//! Code cross-refs: `Curve`, `intersect`, `Reach`, `Intersection`.

mod arc;
mod curve;
mod line;
pub mod rand;
mod segment;
mod types;
mod util;

pub use arc::Arc;
pub use curve::{intersect, Curve, Shape};
pub use line::Line;
pub use segment::Segment;
pub use types::{lerp_points, Intersection, Point, Reach, Translate, Vector, VectorExt};
pub use util::{centroid, convex_hull};

#[cfg(test)]
mod tests;
