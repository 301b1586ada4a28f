//! 2D geometrical optics: rays of light traced through regions of constant
//! refractive index bounded by segments and circular arcs.
//!
//! Layout
//! - `geom2`: points, vectors, lines, segments, arcs and their intersections.
//! - `optics`: regions, sources, rays, the scene and the tracer.
//! - `config`: serde data model for saving and loading scenes.
//! - `error`: error enums shared by the modules above.
//!
//! API Policy
//! - `api` re-exports the types most callers need; module paths may move.

pub mod api;
pub mod config;
pub mod error;
pub mod geom2;
pub mod optics;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{Arc, Line, Point, Reach, Segment, Translate, Vector, VectorExt};
    pub use crate::optics::{
        Beam, BeamParams, Polycurve, Region, Scene, SingleRay, Source, TraceCfg,
    };
    pub use nalgebra::{point, vector};
}
