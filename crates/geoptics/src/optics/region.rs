//! Regions of constant refractive index.
//!
//! - `Region`: refractive index plus boundary intersections; containment is
//!   the parity of forward crossings of a half-line (ray casting generalized
//!   to curved boundaries).
//! - `Background`: no boundary, never contains anything; fallback medium.
//! - `RegionKind`: closed set of region classes a scene can hold.
//!
//! A point exactly on a boundary, or a search direction tangent to a boundary
//! curve, is not disambiguated: the parity is whatever the crossings say.

use crate::config::RegionConfig;
use crate::error::ConfigError;
use crate::geom2::{Intersection, Line, Point, Reach, Translate, Vector};

use super::polycurve::Polycurve;
use super::types::RegionId;

/// Refractive index of the background medium.
pub const BACKGROUND_INDEX: f64 = 1.0;

pub trait Region {
    /// Refractive index, strictly positive.
    fn n(&self) -> f64;

    /// Boundary intersections with the query line.
    fn intersection(&self, line: &Line, reach: Reach) -> Vec<Intersection>;

    /// Is `line.p` inside, searching along `line.u`?
    fn contains(&self, line: &Line) -> bool {
        self.intersection(line, Reach::Ahead).len() % 2 == 1
    }

    fn contains_point(&self, point: Point, u: Vector) -> bool {
        self.contains(&Line::new(point, u))
    }
}

/// Medium filling everything not enclosed by an explicit region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Background {
    n: f64,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            n: BACKGROUND_INDEX,
        }
    }
}

impl Region for Background {
    fn n(&self) -> f64 {
        self.n
    }
    fn intersection(&self, _line: &Line, _reach: Reach) -> Vec<Intersection> {
        Vec::new()
    }
}

/// Region classes a scene can hold.
#[derive(Clone, Debug)]
pub enum RegionKind {
    Polycurve(Polycurve),
}

impl RegionKind {
    pub fn id(&self) -> RegionId {
        match self {
            RegionKind::Polycurve(p) => p.id(),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            RegionKind::Polycurve(p) => p.tag.as_deref(),
        }
    }

    pub fn as_polycurve(&self) -> Option<&Polycurve> {
        match self {
            RegionKind::Polycurve(p) => Some(p),
        }
    }

    pub fn config(&self) -> RegionConfig {
        match self {
            RegionKind::Polycurve(p) => RegionConfig::Polycurve(p.config()),
        }
    }

    pub fn from_config(cfg: &RegionConfig) -> Result<Self, ConfigError> {
        match cfg {
            RegionConfig::Polycurve(body) => Ok(RegionKind::Polycurve(Polycurve::from_config(body)?)),
        }
    }
}

impl Region for RegionKind {
    fn n(&self) -> f64 {
        match self {
            RegionKind::Polycurve(p) => p.n(),
        }
    }
    fn intersection(&self, line: &Line, reach: Reach) -> Vec<Intersection> {
        match self {
            RegionKind::Polycurve(p) => p.intersection(line, reach),
        }
    }
}

impl Translate for RegionKind {
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        match self {
            RegionKind::Polycurve(p) => {
                p.translate(dv);
            }
        }
        self
    }
}

impl From<Polycurve> for RegionKind {
    fn from(p: Polycurve) -> Self {
        RegionKind::Polycurve(p)
    }
}
