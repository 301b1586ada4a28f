//! Curated API surface.
//!
//! Prefer these re-exports in binaries, benches and demos; internal module
//! paths are free to change.

// Geometry
pub use crate::geom2::rand::{draw_lens_vertices, draw_polycurve_radial, LensCfg};
pub use crate::geom2::{
    intersect, Arc, Curve, Intersection, Line, Point, Reach, Segment, Shape, Translate, Vector,
    VectorExt,
};
// Optics
pub use crate::optics::{
    refract, Background, Beam, BeamParams, Element, ElementKey, Media, NoopObserver, Part,
    Polycurve, PolycurveBuilder, Ray, RayKey, Region, RegionId, RegionKind, Removed, Scene,
    SingleRay, Source, SourceId, Termination, TraceCfg, TraceObserver,
};
// Configuration and errors
pub use crate::config::{
    ConfigDoc, CurveConfig, PartConfig, PolycurveConfig, RayConfig, RegionConfig, SceneConfig,
    SourceConfig,
};
pub use crate::error::{ConfigError, GeomError, SceneError};
