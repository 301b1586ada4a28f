//! Geometrical optics: regions of constant index, light sources, and the
//! scene that propagates rays through them.
//!
//! Code cross-refs: `Scene`, `Region`, `Polycurve`, `Source`, `Ray`,
//! `TraceCfg`.

mod polycurve;
mod ray;
mod region;
mod scene;
mod source;
mod trace;
mod types;

pub use polycurve::{Polycurve, PolycurveBuilder};
pub use ray::{Part, Ray, DEFAULT_S0};
pub use region::{Background, Region, RegionKind, BACKGROUND_INDEX};
pub use scene::{Element, ElementKey, Media, Removed, Scene};
pub use source::{Beam, BeamParams, SingleRay, Source};
pub use trace::{refract, NoopObserver, Termination, TraceCfg, TraceObserver};
pub use types::{RayKey, RegionId, SourceId};
