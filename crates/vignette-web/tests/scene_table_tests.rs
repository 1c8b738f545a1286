// Host-side tests for the embedded node table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use vignette_core::Classifier;

#[test]
fn node_table_fits_the_instance_buffer() {
    assert!(!constants::SCENE_NODES.is_empty());
    assert!(constants::SCENE_NODES.len() <= constants::MAX_SPRITES);
}

#[test]
fn node_names_are_unique() {
    let mut names: Vec<&str> = constants::SCENE_NODES.iter().map(|n| n.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), constants::SCENE_NODES.len());
}

#[test]
fn table_classifies_into_every_expected_group() {
    let classifier = Classifier::new().unwrap();
    let entities = classifier.classify(&constants::scene_nodes());
    for key in ["clock", "plotter", "2dprinter", "3dprinter", "monitor", "pen"] {
        assert!(entities.group_by_key(key).is_some(), "missing group {key}");
    }
}

#[test]
fn table_yields_hoverable_rotating_and_bloom_entities() {
    let classifier = Classifier::new().unwrap();
    let entities = classifier.classify(&constants::scene_nodes());
    assert!(entities.entities().iter().any(|e| e.hoverable));
    assert!(entities.entities().iter().any(|e| e.rotation_speed > 0.0));
    assert!(entities.entities().iter().any(|e| e.bloom_target));
    // Inert scenery exists too: present, but neither hoverable nor grouped
    assert!(entities
        .entities()
        .iter()
        .any(|e| !e.hoverable && e.group.is_none()));
}
