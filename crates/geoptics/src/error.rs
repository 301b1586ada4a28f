//! Error taxonomy.
//!
//! Degenerate geometry (colinear lines, tangent grazes, zero vectors) is not an
//! error: it yields empty intersection lists or NaN values. Errors cover
//! unsupported operations, malformed configuration, and scene invariants.

use thiserror::Error;

use crate::optics::{RayKey, RegionId, SourceId};

/// Geometry construction and dispatch errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    #[error("intersection between {left} and {right} is not implemented")]
    NotImplemented {
        left: &'static str,
        right: &'static str,
    },

    #[error("degenerate arc: no center (tangent at M1 parallel to the chord, or M1 == M2)")]
    DegenerateArc,
}

/// Errors raised while turning configuration data into scene entities.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{class} class not found in {category}")]
    ClassNotFound {
        category: &'static str,
        class: String,
    },

    #[error("neither 'Regions', 'Sources', nor 'Class' found")]
    MissingClass,

    #[error("polycurve has no curves")]
    EmptyCurves,

    #[error("curve {index} does not start where curve {} ends", .index - 1)]
    DisjointCurves { index: usize },

    #[error("ray has no parts")]
    EmptyParts,

    #[error("{class} source has no rays")]
    NoRays { class: &'static str },

    #[error("beam needs at least two rays, found {found}")]
    BeamRays { found: usize },

    #[error(transparent)]
    Geom(#[from] GeomError),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Scene invariant violations.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("{0} already in scene")]
    DuplicateRegion(RegionId),

    #[error("{0} already in scene")]
    DuplicateSource(SourceId),

    #[error("{0}")]
    WrongKind(&'static str),

    #[error("{0} not in scene")]
    RegionNotFound(RegionId),

    #[error("{0} not in scene")]
    SourceNotFound(SourceId),

    #[error("ray {} of {} not found", .0.index, .0.source)]
    RayNotFound(RayKey),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
