// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pointer_ndc_maps_center_to_origin() {
    let ndc = pointer_ndc(400.0, 300.0, 800.0, 600.0).unwrap();
    assert!(ndc[0].abs() < 1e-6);
    assert!(ndc[1].abs() < 1e-6);
}

#[test]
fn pointer_ndc_maps_corners_with_y_up() {
    // Top-left in CSS space is (-1, +1) in NDC
    let tl = pointer_ndc(0.0, 0.0, 800.0, 600.0).unwrap();
    assert_eq!(tl, [-1.0, 1.0]);
    // Bottom-right is (+1, -1)
    let br = pointer_ndc(800.0, 600.0, 800.0, 600.0).unwrap();
    assert_eq!(br, [1.0, -1.0]);
}

#[test]
fn pointer_ndc_rejects_degenerate_canvas() {
    assert!(pointer_ndc(10.0, 10.0, 0.0, 600.0).is_none());
    assert!(pointer_ndc(10.0, 10.0, 800.0, 0.0).is_none());
    assert!(pointer_ndc(10.0, 10.0, -800.0, 600.0).is_none());
}

#[test]
fn pointer_ndc_is_unclamped_outside_the_canvas() {
    // Events arriving from outside the canvas rect resolve past [-1, 1] and
    // simply miss everything during picking
    let out = pointer_ndc(1600.0, -300.0, 800.0, 600.0).unwrap();
    assert!(out[0] > 1.0);
    assert!(out[1] > 1.0);
}

#[test]
fn canvas_aspect_guards_zero_dimensions() {
    assert_eq!(canvas_aspect(800, 600), 800.0 / 600.0);
    assert_eq!(canvas_aspect(0, 600), 1.0 / 600.0);
    assert_eq!(canvas_aspect(800, 0), 800.0);
}
