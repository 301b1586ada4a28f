//! Scenes assembled from saved configuration documents.

use std::path::PathBuf;

use geoptics::api::*;

fn data(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
}

fn doc(name: &str) -> ConfigDoc {
    ConfigDoc::from_json_str(&data(name)).expect("valid document")
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

fn lens_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add(doc("region_polycurve_1.json")).unwrap();
    scene.add(doc("source_singleray_1.json")).unwrap();
    scene.add(doc("source_beam_1.json")).unwrap();
    scene
}

#[test]
fn documents_are_classified_by_class() {
    assert!(matches!(
        doc("region_polycurve_1.json"),
        ConfigDoc::Region(RegionConfig::Polycurve(_))
    ));
    assert!(matches!(
        doc("source_singleray_1.json"),
        ConfigDoc::Source(SourceConfig::SingleRay(_))
    ));
    assert!(matches!(
        doc("source_beam_1.json"),
        ConfigDoc::Source(SourceConfig::Beam(_))
    ));
}

#[test]
fn loaded_region_matches_the_file() {
    let scene = lens_scene();
    assert_eq!(scene.regions().len(), 1);
    assert_eq!(scene.sources().len(), 2);
    let ConfigDoc::Region(region) = doc("region_polycurve_1.json") else {
        panic!("region document");
    };
    assert_eq!(scene.regions()[0].config(), region);
    let poly = scene.regions()[0].as_polycurve().unwrap();
    let Curve::Arc(arc) = poly.curves()[2] else {
        panic!("arc expected");
    };
    assert!(close(arc.center().x, -20.0));
    assert!(close(arc.center().y, 125.0));
    assert!(!arc.is_ccw());
}

#[test]
fn propagation_from_files() {
    let mut scene = lens_scene();
    scene.propagate();

    let single = scene.sources()[0].rays()[0].parts();
    assert_eq!(single.len(), 4);
    assert!(close(single[1].s, 100.54561167730583));
    assert!(close(single[3].line.p.x, 99.8199527895259));
    assert_eq!(single[3].n, Some(1.0));

    let beam = &scene.sources()[1];
    assert_eq!(beam.class(), "Beam");
    assert_eq!(beam.rays().len(), 5);
    for ray in beam.rays() {
        assert_eq!(ray.parts().len(), 3);
        assert_eq!(ray.last_part().n, Some(1.0));
    }
}

#[test]
fn saved_scene_reloads_identically() {
    let mut scene = lens_scene();
    scene.propagate();
    let text = ConfigDoc::Scene(scene.config()).to_json_pretty().unwrap();
    assert!(text.contains("\"inf\""));

    let ConfigDoc::Scene(cfg) = ConfigDoc::from_json_str(&text).unwrap() else {
        panic!("scene document");
    };
    assert_eq!(cfg, scene.config());

    let mut reloaded = Scene::from_config(&cfg).unwrap();
    reloaded.propagate();
    assert_eq!(reloaded.config(), scene.config());
}

#[test]
fn scene_merges_its_own_config() {
    let mut scene = lens_scene();
    let cfg = scene.config();
    scene.add(cfg).unwrap();
    assert_eq!(scene.regions().len(), 2);
    assert_eq!(scene.sources().len(), 4);
}

#[test]
fn unknown_source_class_is_rejected_before_merge() {
    let mut scene = lens_scene();
    let before = scene.config();
    let text = data("source_beam_1.json").replace("\"Beam\"", "\"Laser\"");
    let err = ConfigDoc::from_json_str(&text).unwrap_err();
    assert!(matches!(err, ConfigError::ClassNotFound { ref class, .. } if class == "Laser"));
    assert_eq!(scene.config(), before);

    let degenerate = data("region_polycurve_1.json").replace("\"x\": 10.0", "\"x\": 0.0");
    let err = scene
        .add(ConfigDoc::from_json_str(&degenerate).unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        SceneError::Config(ConfigError::Geom(GeomError::DegenerateArc))
    ));
    assert_eq!(scene.config(), before);
}
