// Host-side tests for name-pattern classification.

use glam::Vec3;
use vignette_core::classify::{ClassifyRules, Classifier, SceneNode, DEFAULT_RULES};
use vignette_core::constants::ROTATION_SPEED;

fn node(name: &str, material: Option<&str>) -> SceneNode {
    SceneNode {
        name: name.to_owned(),
        position: Vec3::ZERO,
        scale: Vec3::ONE,
        material: material.map(str::to_owned),
    }
}

fn sample_nodes() -> Vec<SceneNode> {
    vec![
        node("clock_raycast", Some("black")),
        node("Clock_Hands", Some("red")),
        node("plotter_raycast", Some("grey")),
        node("monitor_raycast.001", Some("black")),
        node("pen_raycast", Some("green")),
        node("face_pointer", Some("red")),
        node("line_pointer", Some("red")),
        node("desk", Some("beige")),
        node("mug", None),
    ]
}

#[test]
fn raycast_names_become_hoverable() {
    let c = Classifier::new().unwrap();
    let entities = c.classify(&sample_nodes());
    let hoverable: Vec<&str> = entities
        .entities()
        .iter()
        .filter(|e| e.hoverable)
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(
        hoverable,
        [
            "clock_raycast",
            "plotter_raycast",
            "monitor_raycast.001",
            "pen_raycast"
        ]
    );
}

#[test]
fn group_keys_match_case_insensitively() {
    let c = Classifier::new().unwrap();
    let entities = c.classify(&sample_nodes());
    let clock = entities.group_by_key("clock").expect("clock group");
    let members: Vec<&str> = entities
        .entities()
        .iter()
        .filter(|e| e.group == Some(clock))
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(members, ["clock_raycast", "Clock_Hands"]);
}

#[test]
fn pointer_names_are_bloom_targets_with_emission() {
    let c = Classifier::new().unwrap();
    let entities = c.classify(&sample_nodes());
    for e in entities.entities() {
        let expect_bloom = e.name.contains("pointer");
        assert_eq!(e.bloom_target, expect_bloom, "name {}", e.name);
        if expect_bloom {
            assert!(e.emissive_intensity > 0.0);
        }
    }
}

#[test]
fn face_and_line_names_rotate() {
    let c = Classifier::new().unwrap();
    let entities = c.classify(&sample_nodes());
    for e in entities.entities() {
        let expect_spin = e.name.contains("face") || e.name.contains("line");
        let speed = if expect_spin { ROTATION_SPEED } else { 0.0 };
        assert_eq!(e.rotation_speed, speed, "name {}", e.name);
    }
}

#[test]
fn unmatched_nodes_stay_inert_but_present() {
    let c = Classifier::new().unwrap();
    let entities = c.classify(&sample_nodes());
    let desk = entities
        .entities()
        .iter()
        .find(|e| e.name == "desk")
        .expect("desk entity");
    assert!(!desk.hoverable);
    assert!(desk.group.is_none());
    assert_eq!(desk.rotation_speed, 0.0);
    assert!(!desk.bloom_target);
    // Still classified, still renderable
    assert_eq!(entities.len(), sample_nodes().len());
}

#[test]
fn material_colors_come_from_the_table() {
    let c = Classifier::new().unwrap();
    let entities = c.classify(&sample_nodes());
    let desk = entities
        .entities()
        .iter()
        .find(|e| e.name == "desk")
        .expect("desk entity");
    assert_eq!(desk.color, [0.827, 0.827, 0.827]);
    // Unknown material falls back to the neutral color
    let mug = entities
        .entities()
        .iter()
        .find(|e| e.name == "mug")
        .expect("mug entity");
    assert_eq!(mug.color, [0.7, 0.7, 0.7]);
}

#[test]
fn invalid_custom_pattern_is_a_typed_error() {
    let rules = ClassifyRules {
        hoverable: "raycast(",
        ..DEFAULT_RULES
    };
    let err = Classifier::with_rules(&rules);
    assert!(err.is_err());
    let msg = err.err().map(|e| e.to_string()).unwrap_or_default();
    assert!(msg.contains("raycast("), "message was {msg:?}");
}

#[test]
fn classification_preserves_load_order() {
    let c = Classifier::new().unwrap();
    let nodes = sample_nodes();
    let entities = c.classify(&nodes);
    for (node, e) in nodes.iter().zip(entities.entities()) {
        assert_eq!(node.name, e.name);
    }
}
