//! Sources: the only way rays come into existence.
//!
//! - `SingleRay`: one ray.
//! - `Beam`: `n_inter + 2` rays whose starting lines are interpolated between
//!   a first and a last line (points linearly, directions counter-clockwise
//!   on their angle). Parallel, diverging and focused beams are all covered.

use crate::config::{RaysConfig, SourceConfig};
use crate::error::ConfigError;
use crate::geom2::{Line, Translate, Vector};

use super::ray::{Ray, DEFAULT_S0};
use super::types::SourceId;

#[derive(Clone, Debug)]
pub enum Source {
    SingleRay(SingleRay),
    Beam(Beam),
}

impl Source {
    pub fn id(&self) -> SourceId {
        match self {
            Source::SingleRay(s) => s.id,
            Source::Beam(b) => b.id,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Source::SingleRay(_) => "SingleRay",
            Source::Beam(_) => "Beam",
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Source::SingleRay(s) => s.tag.as_deref(),
            Source::Beam(b) => b.tag.as_deref(),
        }
    }

    pub fn rays(&self) -> &[Ray] {
        match self {
            Source::SingleRay(s) => &s.rays,
            Source::Beam(b) => &b.rays,
        }
    }

    pub(crate) fn rays_mut(&mut self) -> &mut [Ray] {
        match self {
            Source::SingleRay(s) => &mut s.rays,
            Source::Beam(b) => &mut b.rays,
        }
    }

    pub fn config(&self) -> SourceConfig {
        let body = RaysConfig {
            tag: self.tag().map(str::to_string),
            rays: self.rays().iter().map(Ray::config).collect(),
        };
        match self {
            Source::SingleRay(_) => SourceConfig::SingleRay(body),
            Source::Beam(_) => SourceConfig::Beam(body),
        }
    }

    pub fn from_config(cfg: &SourceConfig) -> Result<Self, ConfigError> {
        Ok(match cfg {
            SourceConfig::SingleRay(body) => Source::SingleRay(SingleRay::from_config(body)?),
            SourceConfig::Beam(body) => Source::Beam(Beam::from_config(body)?),
        })
    }
}

impl Translate for Source {
    fn translate(&mut self, dv: &Vector) -> &mut Self {
        for ray in self.rays_mut() {
            ray.translate(dv);
        }
        self
    }
}

impl From<SingleRay> for Source {
    fn from(s: SingleRay) -> Self {
        Source::SingleRay(s)
    }
}

impl From<Beam> for Source {
    fn from(b: Beam) -> Self {
        Source::Beam(b)
    }
}

/// Rebuild the rays of a source body, attaching them to `id`.
///
/// A source tag, when set, is inherited by every ray.
fn rays_from_config(body: &RaysConfig, id: SourceId) -> Result<Vec<Ray>, ConfigError> {
    body.rays
        .iter()
        .map(|ray| Ray::from_config(ray, Some(id), body.tag.clone()))
        .collect()
}

#[derive(Clone, Debug)]
pub struct SingleRay {
    id: SourceId,
    pub tag: Option<String>,
    rays: Vec<Ray>,
}

impl SingleRay {
    pub fn new(line0: Line, s0: f64) -> Self {
        let id = SourceId::fresh();
        Self {
            id,
            tag: None,
            rays: vec![Ray::new(line0, s0, Some(id))],
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        for ray in &mut self.rays {
            ray.tag = Some(tag.clone());
        }
        self.tag = Some(tag);
        self
    }

    #[inline]
    pub fn id(&self) -> SourceId {
        self.id
    }

    #[inline]
    pub fn ray(&self) -> &Ray {
        &self.rays[0]
    }

    pub fn move_p0(&mut self, dx: f64, dy: f64) {
        self.rays[0].move_p0(dx, dy);
    }

    pub fn change_line_0(&mut self, line: Line) {
        self.rays[0].change_line_0(line);
    }

    fn from_config(body: &RaysConfig) -> Result<Self, ConfigError> {
        let id = SourceId::fresh();
        let rays = rays_from_config(body, id)?;
        if rays.is_empty() {
            return Err(ConfigError::NoRays { class: "SingleRay" });
        }
        Ok(Self {
            id,
            tag: body.tag.clone(),
            rays,
        })
    }
}

/// Beam settings; absent fields are taken from the current first/last rays.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BeamParams {
    pub line_start: Option<Line>,
    pub line_end: Option<Line>,
    pub s_start: Option<f64>,
    pub s_end: Option<f64>,
    pub n_inter: Option<usize>,
}

#[derive(Clone, Debug)]
pub struct Beam {
    id: SourceId,
    pub tag: Option<String>,
    rays: Vec<Ray>,
    n_inter: usize,
}

impl Beam {
    /// Beam of `n_inter + 2` rays from `line_start` to `line_end`.
    pub fn new(line_start: Line, s_start: f64, line_end: Line, s_end: f64, n_inter: usize) -> Self {
        let id = SourceId::fresh();
        let mut beam = Self {
            id,
            tag: None,
            rays: (0..n_inter + 2)
                .map(|_| Ray::new(Line::default(), DEFAULT_S0, Some(id)))
                .collect(),
            n_inter,
        };
        beam.set(BeamParams {
            line_start: Some(line_start),
            line_end: Some(line_end),
            s_start: Some(s_start),
            s_end: Some(s_end),
            n_inter: Some(n_inter),
        });
        beam
    }

    #[inline]
    pub fn id(&self) -> SourceId {
        self.id
    }

    #[inline]
    pub fn n_inter(&self) -> usize {
        self.n_inter
    }

    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Resize to `n_inter + 2` rays (the last ray stays last) and re-interpolate
    /// the starting lines and starting lengths of the interior rays.
    ///
    /// The first and last rays take `line_start`/`s_start` and
    /// `line_end`/`s_end` verbatim, so reloading a saved beam reproduces it.
    pub fn set(&mut self, params: BeamParams) {
        let first = self.rays[0].first_part();
        let last = self.rays[self.rays.len() - 1].first_part();
        let line_start = params.line_start.unwrap_or(first.line);
        let line_end = params.line_end.unwrap_or(last.line);
        let s_start = params.s_start.unwrap_or(first.s);
        let s_end = params.s_end.unwrap_or(last.s);
        self.n_inter = params.n_inter.unwrap_or(self.rays.len() - 2);

        let total = self.n_inter + 2;
        let len = self.rays.len();
        if total > len {
            let id = self.id;
            let last_ray = self.rays.pop();
            self.rays
                .extend((0..total - len).map(|_| Ray::new(Line::default(), DEFAULT_S0, Some(id))));
            self.rays.extend(last_ray);
        } else if total < len {
            let remove = len - total;
            self.rays.drain(len - 1 - remove..len - 1);
        }

        let last_index = total - 1;
        for (i, ray) in self.rays.iter_mut().enumerate() {
            let (line, s) = if i == 0 {
                (line_start, s_start)
            } else if i == last_index {
                (line_end, s_end)
            } else {
                let x = i as f64 / last_index as f64;
                (
                    Line::interpolate(&line_start, &line_end, x),
                    (1.0 - x) * s_start + x * s_end,
                )
            };
            ray.change_line_0(line);
            ray.change_s(0, s);
        }
    }

    /// Interior starting lines are recomputed from the first and last rays.
    fn from_config(body: &RaysConfig) -> Result<Self, ConfigError> {
        let id = SourceId::fresh();
        let rays = rays_from_config(body, id)?;
        if rays.len() < 2 {
            return Err(ConfigError::BeamRays { found: rays.len() });
        }
        let mut beam = Self {
            id,
            tag: body.tag.clone(),
            n_inter: rays.len() - 2,
            rays,
        };
        beam.set(BeamParams::default());
        Ok(beam)
    }
}
