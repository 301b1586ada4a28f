//! Region enclosed by a loop of segments and arcs.
//!
//! Built with `PolycurveBuilder` (`start`, `add_line`, `add_arc`, `close`),
//! then frozen into a `Polycurve`. Self-intersection of the loop is not
//! checked.

use crate::config::{CurveConfig, PolycurveConfig};
use crate::error::{ConfigError, GeomError};
use crate::geom2::{Arc, Curve, Intersection, Line, Point, Reach, Segment, Translate, Vector};

use super::region::Region;
use super::types::RegionId;

#[derive(Clone, Debug)]
pub struct Polycurve {
    id: RegionId,
    pub n: f64,
    pub tag: Option<String>,
    vertices: Vec<Point>,
    curves: Vec<Curve>,
}

impl Polycurve {
    /// Start an outline at `m0` for a region of index `n`.
    pub fn builder(n: f64, m0: Point) -> PolycurveBuilder {
        PolycurveBuilder {
            n,
            tag: None,
            vertices: vec![m0],
            curves: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> RegionId {
        self.id
    }
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn config(&self) -> PolycurveConfig {
        PolycurveConfig {
            tag: self.tag.clone(),
            n: self.n,
            curves: self.curves.iter().map(curve_config).collect(),
        }
    }

    /// Rebuild from configuration, starting at the first curve's `M1`.
    ///
    /// Stored outlines are already closed, so no closing segment is added.
    /// Every curve must start exactly where the previous one ends.
    pub fn from_config(cfg: &PolycurveConfig) -> Result<Self, ConfigError> {
        let first = cfg.curves.first().ok_or(ConfigError::EmptyCurves)?;
        if let Some(index) = cfg
            .curves
            .windows(2)
            .position(|pair| pair[0].m2() != pair[1].m1())
        {
            return Err(ConfigError::DisjointCurves { index: index + 1 });
        }
        let mut builder = Polycurve::builder(cfg.n, first.m1().point()).tag(cfg.tag.clone());
        for curve in &cfg.curves {
            builder = match curve {
                CurveConfig::Segment { m2, .. } => builder.add_line(m2.point()),
                CurveConfig::Arc { m2, tangent, .. } => {
                    builder.add_arc(m2.point(), tangent.vector())?
                }
            };
        }
        Ok(builder.build())
    }
}

fn curve_config(curve: &Curve) -> CurveConfig {
    match curve {
        Curve::Segment(seg) => CurveConfig::Segment {
            m1: seg.m1.into(),
            m2: seg.m2.into(),
        },
        Curve::Arc(arc) => CurveConfig::Arc {
            m1: arc.m1().into(),
            m2: arc.m2().into(),
            tangent: arc.tangent().into(),
        },
    }
}

impl Region for Polycurve {
    fn n(&self) -> f64 {
        self.n
    }

    fn intersection(&self, line: &Line, reach: Reach) -> Vec<Intersection> {
        self.curves
            .iter()
            .flat_map(|curve| curve.intersection(line, reach))
            .collect()
    }
}

impl Translate for Polycurve {
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        for m in &mut self.vertices {
            m.translate(dv);
        }
        for curve in &mut self.curves {
            curve.translate(dv);
        }
        self
    }
}

/// Incremental outline builder. Each added curve starts at the last vertex.
#[derive(Clone, Debug)]
pub struct PolycurveBuilder {
    n: f64,
    tag: Option<String>,
    vertices: Vec<Point>,
    curves: Vec<Curve>,
}

impl PolycurveBuilder {
    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    /// Reset the outline to the single vertex `m0`.
    pub fn start(mut self, m0: Point) -> Self {
        self.vertices = vec![m0];
        self.curves.clear();
        self
    }

    /// Append a segment from the last vertex to `m_next`.
    pub fn add_line(mut self, m_next: Point) -> Self {
        let last = self.last();
        self.curves.push(Segment::new(last, m_next).into());
        self.vertices.push(m_next);
        self
    }

    /// Append an arc from the last vertex to `m_next`, with `tangent` at the
    /// last vertex.
    pub fn add_arc(mut self, m_next: Point, tangent: Vector) -> Result<Self, GeomError> {
        let last = self.last();
        self.curves.push(Arc::new(last, m_next, tangent)?.into());
        self.vertices.push(m_next);
        Ok(self)
    }

    /// Join the last vertex back to the first one with a segment.
    pub fn close(self) -> Self {
        let first = self.vertices[0];
        self.add_line(first)
    }

    pub fn build(self) -> Polycurve {
        Polycurve {
            id: RegionId::fresh(),
            n: self.n,
            tag: self.tag,
            vertices: self.vertices,
            curves: self.curves,
        }
    }

    fn last(&self) -> Point {
        // `vertices` is never empty: it is seeded by `builder()` and `start()`.
        self.vertices[self.vertices.len() - 1]
    }
}
