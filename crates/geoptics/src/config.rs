//! Plain configuration data model for scenes, regions, sources and rays.
//!
//! Purpose
//! - Give every entity a format-independent description (`config()` /
//!   `from_config()`), with the exact key names used by saved scenes
//!   (`Class`, `M1`, `M2`, `tangent`, `Regions`, `Sources`, ...).
//! - `Class` is the serde tag of closed enums (`CurveConfig`, `RegionConfig`,
//!   `SourceConfig`); unknown names are rejected up front with
//!   `ConfigError::ClassNotFound`.
//!
//! Conventions
//! - Part lengths serialize as numbers, or the string `"inf"` for +∞.
//! - `n` is `null` until a ray has been propagated.
//! - JSON (`serde_json`) is the only concrete text format provided here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ConfigError;
use crate::geom2::{Line, Point, Vector};

/// `{x, y}` pair used for both points and vectors.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct XyConfig {
    pub x: f64,
    pub y: f64,
}

pub type PointConfig = XyConfig;
pub type VectorConfig = XyConfig;

impl XyConfig {
    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
    #[inline]
    pub fn vector(&self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

impl From<Point> for XyConfig {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Vector> for XyConfig {
    fn from(v: Vector) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    pub p: PointConfig,
    pub u: VectorConfig,
}

impl From<&Line> for LineConfig {
    fn from(line: &Line) -> Self {
        Self {
            p: line.p.into(),
            u: line.u.into(),
        }
    }
}

impl LineConfig {
    pub fn line(&self) -> Line {
        Line::new(self.p.point(), self.u.vector())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartConfig {
    pub line: LineConfig,
    #[serde(with = "length")]
    pub s: f64,
    pub n: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayConfig {
    pub parts: Vec<PartConfig>,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Class")]
pub enum CurveConfig {
    Segment {
        #[serde(rename = "M1")]
        m1: PointConfig,
        #[serde(rename = "M2")]
        m2: PointConfig,
    },
    Arc {
        #[serde(rename = "M1")]
        m1: PointConfig,
        #[serde(rename = "M2")]
        m2: PointConfig,
        tangent: VectorConfig,
    },
}

impl CurveConfig {
    pub const CLASSES: &'static [&'static str] = &["Segment", "Arc"];

    pub fn m1(&self) -> PointConfig {
        match self {
            CurveConfig::Segment { m1, .. } | CurveConfig::Arc { m1, .. } => *m1,
        }
    }

    pub fn m2(&self) -> PointConfig {
        match self {
            CurveConfig::Segment { m2, .. } | CurveConfig::Arc { m2, .. } => *m2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolycurveConfig {
    #[serde(default)]
    pub tag: Option<String>,
    pub n: f64,
    pub curves: Vec<CurveConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Class")]
pub enum RegionConfig {
    Polycurve(PolycurveConfig),
}

impl RegionConfig {
    pub const CLASSES: &'static [&'static str] = &["Polycurve"];
}

/// Body shared by every source class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RaysConfig {
    #[serde(default)]
    pub tag: Option<String>,
    pub rays: Vec<RayConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Class")]
pub enum SourceConfig {
    SingleRay(RaysConfig),
    Beam(RaysConfig),
}

impl SourceConfig {
    pub const CLASSES: &'static [&'static str] = &["SingleRay", "Beam"];

    pub fn body(&self) -> &RaysConfig {
        match self {
            SourceConfig::SingleRay(body) | SourceConfig::Beam(body) => body,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(rename = "Regions", default)]
    pub regions: Vec<RegionConfig>,
    #[serde(rename = "Sources", default)]
    pub sources: Vec<SourceConfig>,
}

/// Anything that can be merged into a scene: a whole scene, or one item.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigDoc {
    Scene(SceneConfig),
    Region(RegionConfig),
    Source(SourceConfig),
}

impl ConfigDoc {
    /// Classify and decode a JSON document.
    ///
    /// A document with `Regions` or `Sources` is a scene; otherwise a `Class`
    /// key selects a region class, then a source class. Class names are all
    /// checked before decoding, so an unknown name surfaces as
    /// `ClassNotFound` rather than a generic decoding error.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        if value.get("Regions").is_some() || value.get("Sources").is_some() {
            for region in list(&value, "Regions") {
                check_region(region)?;
            }
            for source in list(&value, "Sources") {
                check_class(source, "Sources", SourceConfig::CLASSES)?;
            }
            return Ok(ConfigDoc::Scene(serde_json::from_value(value)?));
        }
        let Some(name) = value.get("Class").and_then(Value::as_str) else {
            tracing::debug!("neither 'Regions', 'Sources', nor 'Class' found");
            return Err(ConfigError::MissingClass);
        };
        if RegionConfig::CLASSES.contains(&name) {
            check_region(&value)?;
            Ok(ConfigDoc::Region(serde_json::from_value(value)?))
        } else if SourceConfig::CLASSES.contains(&name) {
            Ok(ConfigDoc::Source(serde_json::from_value(value)?))
        } else {
            tracing::debug!(class = name, "class not found");
            Err(ConfigError::ClassNotFound {
                category: "Regions/Sources",
                class: name.to_string(),
            })
        }
    }

    pub fn to_value(&self) -> Result<Value, ConfigError> {
        Ok(match self {
            ConfigDoc::Scene(cfg) => serde_json::to_value(cfg)?,
            ConfigDoc::Region(cfg) => serde_json::to_value(cfg)?,
            ConfigDoc::Source(cfg) => serde_json::to_value(cfg)?,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }
}

impl From<SceneConfig> for ConfigDoc {
    fn from(cfg: SceneConfig) -> Self {
        ConfigDoc::Scene(cfg)
    }
}

impl From<RegionConfig> for ConfigDoc {
    fn from(cfg: RegionConfig) -> Self {
        ConfigDoc::Region(cfg)
    }
}

impl From<SourceConfig> for ConfigDoc {
    fn from(cfg: SourceConfig) -> Self {
        ConfigDoc::Source(cfg)
    }
}

fn list<'a>(value: &'a Value, key: &str) -> impl Iterator<Item = &'a Value> {
    value
        .get(key)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
}

fn check_region(region: &Value) -> Result<(), ConfigError> {
    check_class(region, "Regions", RegionConfig::CLASSES)?;
    for curve in list(region, "curves") {
        check_class(curve, "Curves", CurveConfig::CLASSES)?;
    }
    Ok(())
}

fn check_class(
    item: &Value,
    category: &'static str,
    known: &[&str],
) -> Result<(), ConfigError> {
    match item.get("Class").and_then(Value::as_str) {
        Some(name) if known.contains(&name) => Ok(()),
        Some(name) => {
            tracing::debug!(class = name, category, "class not found");
            Err(ConfigError::ClassNotFound {
                category,
                class: name.to_string(),
            })
        }
        None => Err(ConfigError::MissingClass),
    }
}

/// Serde adapter: finite lengths as numbers, +∞ as `"inf"`.
mod length {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(s: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if *s == f64::INFINITY {
            serializer.serialize_str("inf")
        } else if *s == f64::NEG_INFINITY {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_f64(*s)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(s) => Ok(s),
            Repr::Text(text) => match text.as_str() {
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!("invalid length {other:?}"))),
            },
        }
    }
}
