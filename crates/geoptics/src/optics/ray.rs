//! Rays of light as chains of straight parts.
//!
//! A ray is owned by exactly one source; end users obtain rays through a
//! `SingleRay` or a `Beam`, never by constructing them directly. `parts[0]`
//! is the starting state; propagation rebuilds everything after it.

use std::fmt;

use crate::config::{PartConfig, RayConfig};
use crate::error::ConfigError;
use crate::geom2::{Line, Translate, Vector};

use super::types::SourceId;

/// Initial length of a ray that was created without one.
pub const DEFAULT_S0: f64 = 100.0;

/// Straight part of a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    /// Starting point and direction.
    pub line: Line,
    /// Length along `line.u` (in units of `|u|`); +∞ for an unbounded last part.
    pub s: f64,
    /// Refractive index of the medium the part travels through, once known.
    pub n: Option<f64>,
}

impl Part {
    pub fn new(line: Line, s: f64, n: Option<f64>) -> Self {
        Self { line, s, n }
    }

    pub fn config(&self) -> PartConfig {
        PartConfig {
            line: (&self.line).into(),
            s: self.s,
            n: self.n,
        }
    }

    pub fn from_config(cfg: &PartConfig) -> Self {
        Self::new(cfg.line.line(), cfg.s, cfg.n)
    }
}

impl Translate for Part {
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        self.line.translate(dv);
        self
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part({}, s={}, n={:?})", self.line, self.s, self.n)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub(crate) parts: Vec<Part>,
    pub(crate) source: Option<SourceId>,
    pub tag: Option<String>,
}

impl Ray {
    pub(crate) fn new(line0: Line, s0: f64, source: Option<SourceId>) -> Self {
        Self {
            parts: vec![Part::new(line0, s0, None)],
            source,
            tag: None,
        }
    }

    pub(crate) fn from_config(
        cfg: &RayConfig,
        source: Option<SourceId>,
        tag: Option<String>,
    ) -> Result<Self, ConfigError> {
        if cfg.parts.is_empty() {
            return Err(ConfigError::EmptyParts);
        }
        Ok(Self {
            parts: cfg.parts.iter().map(Part::from_config).collect(),
            source,
            tag: tag.or_else(|| cfg.tag.clone()),
        })
    }

    pub fn config(&self) -> RayConfig {
        RayConfig {
            parts: self.parts.iter().map(Part::config).collect(),
            tag: self.tag.clone(),
        }
    }

    #[inline]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    #[inline]
    pub fn first_part(&self) -> &Part {
        &self.parts[0]
    }

    #[inline]
    pub fn last_part(&self) -> &Part {
        &self.parts[self.parts.len() - 1]
    }

    /// Owning source, if the ray has been attached to one.
    #[inline]
    pub fn source(&self) -> Option<SourceId> {
        self.source
    }

    /// Append a part starting where the last part ends.
    pub fn add_part(&mut self, u: Vector, s: f64, n: Option<f64>) {
        let last = self.last_part();
        let p = last.line.point(last.s);
        self.parts.push(Part::new(Line::new(p, u), s, n));
    }

    /// Change the length of one part; out-of-range indices are ignored.
    pub fn change_s(&mut self, index: usize, s: f64) {
        if let Some(part) = self.parts.get_mut(index) {
            part.s = s;
        }
    }

    /// Translate the starting point, keeping the direction.
    pub fn move_p0(&mut self, dx: f64, dy: f64) {
        self.parts[0].line.p.translate_xy(dx, dy);
    }

    pub fn change_line_0(&mut self, line: Line) {
        self.parts[0].line = line;
    }

    pub(crate) fn truncate_last(&mut self, s: f64) {
        let last = self.parts.len() - 1;
        self.parts[last].s = s;
    }
}

impl Translate for Ray {
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        for part in &mut self.parts {
            part.translate(dv);
        }
        self
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let part0 = self.first_part();
        write!(
            f,
            "Ray(line0={}, s={}, n={:?}, tag={:?})",
            part0.line, part0.s, part0.n, self.tag
        )
    }
}
