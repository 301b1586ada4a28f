use anyhow::{bail, Context, Result};
use geoptics::api::{ConfigDoc, Scene, SceneConfig};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read a scene document; a single region or source file becomes a one-item
/// scene.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = ConfigDoc::from_json_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    let mut scene = Scene::new();
    scene
        .add(doc)
        .with_context(|| format!("building scene from {}", path.display()))?;
    Ok(scene)
}

/// Write `cfg` as pretty JSON, creating parent directories.
pub fn write_scene<P: AsRef<Path>>(path: P, cfg: SceneConfig) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let text = ConfigDoc::Scene(cfg).to_json_pretty()?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct RaySummary {
    pub source: u64,
    pub index: usize,
    pub parts: usize,
    pub final_n: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub rays: Vec<RaySummary>,
}

impl Summary {
    pub fn of(scene: &Scene) -> Self {
        let rays = scene
            .sources()
            .iter()
            .flat_map(|source| {
                source.rays().iter().enumerate().map(move |(index, ray)| RaySummary {
                    source: source.id().0,
                    index,
                    parts: ray.parts().len(),
                    final_n: ray.last_part().n,
                })
            })
            .collect();
        Self { rays }
    }
}

/// Reject scenes that cannot produce any trace.
pub fn ensure_traceable(scene: &Scene) -> Result<()> {
    if scene.sources().is_empty() {
        bail!("scene has no sources");
    }
    Ok(())
}
