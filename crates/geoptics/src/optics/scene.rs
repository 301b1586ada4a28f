//! Scene: regions, sources, and propagation of every ray.
//!
//! Ownership
//! - `Scene` owns its `Media` (background + regions) and its sources; sources
//!   own their rays. Rays refer back to their source by `SourceId` only.
//! - Propagation borrows the media immutably while rays are mutated, so the
//!   geometry cannot change while a trace is in flight.
//!
//! Invariants
//! - A region or source id appears at most once (duplicate adds fail).
//! - The background is never part of `regions`.
//! - Configuration merges are all-or-nothing: every item is built before the
//!   scene is touched.

use crate::config::{ConfigDoc, SceneConfig};
use crate::error::{ConfigError, SceneError};
use crate::geom2::{Line, Point, Vector};

use super::polycurve::Polycurve;
use super::ray::Ray;
use super::region::{Background, Region, RegionKind};
use super::source::{Beam, SingleRay, Source};
use super::trace::{NoopObserver, Termination, TraceCfg, TraceObserver};
use super::types::{RayKey, RegionId, SourceId};

/// Everything a ray can travel through.
#[derive(Clone, Debug, Default)]
pub struct Media {
    background: Background,
    regions: Vec<RegionKind>,
}

impl Media {
    #[inline]
    pub fn background(&self) -> &Background {
        &self.background
    }

    #[inline]
    pub fn regions(&self) -> &[RegionKind] {
        &self.regions
    }

    /// Region containing `line.p` (searching along `line.u`).
    ///
    /// Regions are scanned in insertion order and the first match wins, so
    /// overlaps resolve to the earliest added region. Falls back to the
    /// background.
    pub fn region_at(&self, line: &Line) -> &dyn Region {
        self.regions
            .iter()
            .find(|region| region.contains(line))
            .map(|region| region as &dyn Region)
            .unwrap_or(&self.background as &dyn Region)
    }
}

/// Item handed to `Scene::add`.
#[derive(Clone, Debug)]
pub enum Element {
    Region(RegionKind),
    Source(Source),
    /// Rejected: rays are managed through their source.
    Ray(Ray),
    Config(ConfigDoc),
}

impl From<RegionKind> for Element {
    fn from(region: RegionKind) -> Self {
        Element::Region(region)
    }
}

impl From<Polycurve> for Element {
    fn from(polycurve: Polycurve) -> Self {
        Element::Region(polycurve.into())
    }
}

impl From<SingleRay> for Element {
    fn from(source: SingleRay) -> Self {
        Element::Source(source.into())
    }
}

impl From<Beam> for Element {
    fn from(source: Beam) -> Self {
        Element::Source(source.into())
    }
}

impl From<Source> for Element {
    fn from(source: Source) -> Self {
        Element::Source(source)
    }
}

impl From<Ray> for Element {
    fn from(ray: Ray) -> Self {
        Element::Ray(ray)
    }
}

impl From<ConfigDoc> for Element {
    fn from(doc: ConfigDoc) -> Self {
        Element::Config(doc)
    }
}

impl From<SceneConfig> for Element {
    fn from(cfg: SceneConfig) -> Self {
        Element::Config(ConfigDoc::Scene(cfg))
    }
}

/// Item handed to `Scene::remove`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKey {
    Region(RegionId),
    Source(SourceId),
    /// Rejected: rays are removed through their source.
    Ray(RayKey),
}

/// Element taken out of a scene.
#[derive(Clone, Debug)]
pub enum Removed {
    Region(RegionKind),
    Source(Source),
}

const RAY_ADD: &str = "always use a source to create a ray (for instance SingleRay)";
const RAY_REMOVE: &str = "rays should be removed only from their source";

#[derive(Clone, Debug, Default)]
pub struct Scene {
    media: Media,
    sources: Vec<Source>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &SceneConfig) -> Result<Self, SceneError> {
        let (regions, sources) = build_scene(cfg)?;
        Ok(Self {
            media: Media {
                background: Background::default(),
                regions,
            },
            sources,
        })
    }

    #[inline]
    pub fn media(&self) -> &Media {
        &self.media
    }
    #[inline]
    pub fn background(&self) -> &Background {
        self.media.background()
    }
    #[inline]
    pub fn regions(&self) -> &[RegionKind] {
        self.media.regions()
    }
    #[inline]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn region(&self, id: RegionId) -> Option<&RegionKind> {
        self.media.regions.iter().find(|r| r.id() == id)
    }

    pub fn region_mut(&mut self, id: RegionId) -> Option<&mut RegionKind> {
        self.media.regions.iter_mut().find(|r| r.id() == id)
    }

    pub fn source(&self, id: SourceId) -> Option<&Source> {
        self.sources.iter().find(|s| s.id() == id)
    }

    pub fn source_mut(&mut self, id: SourceId) -> Option<&mut Source> {
        self.sources.iter_mut().find(|s| s.id() == id)
    }

    /// Add a region, a source, or a configuration document.
    pub fn add(&mut self, element: impl Into<Element>) -> Result<(), SceneError> {
        match element.into() {
            Element::Ray(_) => Err(SceneError::WrongKind(RAY_ADD)),
            Element::Region(region) => {
                let id = region.id();
                if self.region(id).is_some() {
                    return Err(SceneError::DuplicateRegion(id));
                }
                tracing::debug!(%id, "region added");
                self.media.regions.push(region);
                Ok(())
            }
            Element::Source(source) => {
                let id = source.id();
                if self.source(id).is_some() {
                    return Err(SceneError::DuplicateSource(id));
                }
                tracing::debug!(%id, rays = source.rays().len(), "source added");
                self.sources.push(source);
                Ok(())
            }
            Element::Config(doc) => self.add_config(&doc),
        }
    }

    /// Merge regions and sources described by `doc`.
    ///
    /// All items are built first; on any failure the scene is left untouched.
    pub fn add_config(&mut self, doc: &ConfigDoc) -> Result<(), SceneError> {
        let (regions, sources) = match doc {
            ConfigDoc::Scene(cfg) => build_scene(cfg)?,
            ConfigDoc::Region(cfg) => (vec![RegionKind::from_config(cfg)?], Vec::new()),
            ConfigDoc::Source(cfg) => (Vec::new(), vec![Source::from_config(cfg)?]),
        };
        tracing::debug!(
            regions = regions.len(),
            sources = sources.len(),
            "configuration merged"
        );
        self.media.regions.extend(regions);
        self.sources.extend(sources);
        Ok(())
    }

    pub fn remove(&mut self, key: ElementKey) -> Result<Removed, SceneError> {
        match key {
            ElementKey::Ray(_) => Err(SceneError::WrongKind(RAY_REMOVE)),
            ElementKey::Region(id) => {
                let idx = self
                    .media
                    .regions
                    .iter()
                    .position(|r| r.id() == id)
                    .ok_or(SceneError::RegionNotFound(id))?;
                tracing::debug!(%id, "region removed");
                Ok(Removed::Region(self.media.regions.remove(idx)))
            }
            ElementKey::Source(id) => {
                let idx = self
                    .sources
                    .iter()
                    .position(|s| s.id() == id)
                    .ok_or(SceneError::SourceNotFound(id))?;
                tracing::debug!(%id, "source removed");
                Ok(Removed::Source(self.sources.remove(idx)))
            }
        }
    }

    /// Remove all regions, then all sources, last added first.
    pub fn clear(&mut self) {
        while let Some(region) = self.media.regions.pop() {
            tracing::trace!(id = %region.id(), "region removed");
        }
        while let Some(source) = self.sources.pop() {
            tracing::trace!(id = %source.id(), "source removed");
        }
        tracing::debug!("scene cleared");
    }

    pub fn config(&self) -> SceneConfig {
        SceneConfig {
            regions: self.media.regions.iter().map(RegionKind::config).collect(),
            sources: self.sources.iter().map(Source::config).collect(),
        }
    }

    /// Replace the content with `cfg`; on failure the scene is unchanged.
    pub fn set_config(&mut self, cfg: &SceneConfig) -> Result<(), SceneError> {
        let fresh = Self::from_config(cfg)?;
        *self = fresh;
        tracing::debug!("config set");
        Ok(())
    }

    pub fn region_at(&self, line: &Line) -> &dyn Region {
        self.media.region_at(line)
    }

    pub fn region_at_point(&self, point: Point, u: Vector) -> &dyn Region {
        self.media.region_at(&Line::new(point, u))
    }

    /// Propagate every ray of every source (source order, then ray order).
    pub fn propagate(&mut self) {
        self.propagate_with(&TraceCfg::default(), &mut NoopObserver);
    }

    pub fn propagate_with(&mut self, cfg: &TraceCfg, observer: &mut dyn TraceObserver) {
        let media = &self.media;
        let mut capped = 0usize;
        for source in &mut self.sources {
            for ray in source.rays_mut() {
                if ray.propagate_with(media, cfg, observer) == Termination::Capped {
                    capped += 1;
                }
            }
        }
        if capped > 0 {
            tracing::debug!(capped, "rays stopped at the part budget");
        }
    }

    /// Propagate a selection of rays, in the given order.
    ///
    /// Every key is checked before any ray is traced.
    pub fn propagate_rays(
        &mut self,
        keys: &[RayKey],
        cfg: &TraceCfg,
        observer: &mut dyn TraceObserver,
    ) -> Result<(), SceneError> {
        for key in keys {
            let source = self
                .source(key.source)
                .ok_or(SceneError::SourceNotFound(key.source))?;
            if key.index >= source.rays().len() {
                return Err(SceneError::RayNotFound(*key));
            }
        }
        let media = &self.media;
        for key in keys {
            if let Some(source) = self.sources.iter_mut().find(|s| s.id() == key.source) {
                source.rays_mut()[key.index].propagate_with(media, cfg, observer);
            }
        }
        Ok(())
    }

    /// Keys of every ray, in propagation order.
    pub fn ray_keys(&self) -> Vec<RayKey> {
        self.sources
            .iter()
            .flat_map(|source| {
                (0..source.rays().len()).map(move |index| RayKey {
                    source: source.id(),
                    index,
                })
            })
            .collect()
    }
}

fn build_scene(cfg: &SceneConfig) -> Result<(Vec<RegionKind>, Vec<Source>), ConfigError> {
    let regions = cfg
        .regions
        .iter()
        .map(RegionKind::from_config)
        .collect::<Result<Vec<_>, _>>()?;
    let sources = cfg
        .sources
        .iter()
        .map(Source::from_config)
        .collect::<Result<Vec<_>, _>>()?;
    Ok((regions, sources))
}
