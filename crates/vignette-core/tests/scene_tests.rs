// Host-side tests driving the whole scene state without a rendering context.

use glam::Vec3;
use vignette_core::constants::{HOVER_SCALE_GROUP, HOVER_SCALE_SINGLE, SCALE_SMOOTHING};
use vignette_core::entity::{GroupId, SceneEntities, SceneEntity};
use vignette_core::hover::HoverTarget;
use vignette_core::scene::SceneState;
use vignette_core::state::Camera;

fn entity(name: &str, position: Vec3, hoverable: bool) -> SceneEntity {
    SceneEntity {
        name: name.to_owned(),
        position,
        rest_scale: Vec3::ONE,
        scale: Vec3::ONE,
        rotation_y: 0.0,
        rotation_speed: 0.0,
        color: [0.5, 0.5, 0.5],
        emissive_intensity: 0.0,
        hoverable,
        hovered: false,
        bloom_target: false,
        group: None,
        pick_radius: 0.5,
    }
}

fn grouped(name: &str, position: Vec3, group: GroupId) -> SceneEntity {
    SceneEntity {
        group: Some(group),
        ..entity(name, position, false)
    }
}

/// Camera looking straight down -Z at the origin, so NDC (0, 0) pierces it.
fn test_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 10.0),
        target: Vec3::ZERO,
        aspect: 1.0,
        ..Camera::default()
    }
}

#[test]
fn pointer_over_an_entity_starts_hovering() {
    let mut entities = SceneEntities::new();
    let a = entities.push(entity("pen_raycast", Vec3::ZERO, true));
    let mut scene = SceneState::new(entities, test_camera());

    scene.on_pointer_move(0.0, 0.0);
    assert_eq!(scene.hovering(), Some(HoverTarget::Entity(a)));

    // Pointer far off to the side leaves the hover state
    scene.on_pointer_move(0.95, 0.95);
    assert_eq!(scene.hovering(), None);
}

#[test]
fn empty_scene_tolerates_pointer_and_tick() {
    let mut scene = SceneState::new(SceneEntities::new(), test_camera());
    scene.on_pointer_move(0.0, 0.0);
    assert_eq!(scene.hovering(), None);
    scene.tick(1.0 / 60.0);
    scene.tick(-1.0);
    assert!(scene.bloom_radius() >= 0.0);
}

#[test]
fn smoothing_converges_geometrically_without_overshoot() {
    let mut entities = SceneEntities::new();
    let a = entities.push(entity("pen_raycast", Vec3::ZERO, true));
    let mut scene = SceneState::new(entities, test_camera());
    scene.on_pointer_move(0.0, 0.0);
    assert_eq!(scene.hovering(), Some(HoverTarget::Entity(a)));

    let target = HOVER_SCALE_SINGLE;
    let initial_gap = target - 1.0;
    let dt = 1.0 / 60.0;
    let frames = 24;
    for n in 1..=frames {
        scene.tick(dt);
        let s = scene.entities.entity(a).scale.x;
        assert!(s <= target + 1e-6, "overshoot at frame {n}: {s}");
        let expected_gap = initial_gap * (1.0 - SCALE_SMOOTHING).powi(n);
        assert!(
            ((target - s) - expected_gap).abs() < 1e-4,
            "frame {n}: gap {} expected {}",
            target - s,
            expected_gap
        );
    }
}

#[test]
fn hovering_any_group_member_scales_all_members() {
    let mut entities = SceneEntities::new();
    let g = entities.ensure_group("clock", Vec3::ONE);
    let m0 = entities.push(grouped("clock_face", Vec3::ZERO, g));
    let m1 = entities.push(grouped("clock_hands", Vec3::new(0.1, 0.0, 0.0), g));
    let m2 = entities.push(grouped("clock_frame", Vec3::new(-0.1, 0.0, 0.0), g));
    let mut scene = SceneState::new(entities, test_camera());

    // Hover whichever member the ray hits first; the whole group is flagged
    scene.on_pointer_move(0.0, 0.0);
    assert_eq!(scene.hovering(), Some(HoverTarget::Group(g)));

    let dt = 1.0 / 60.0;
    for _ in 0..240 {
        scene.tick(dt);
    }
    let target = HOVER_SCALE_GROUP;
    for id in [m0, m1, m2] {
        let s = scene.entities.entity(id).scale;
        assert!((s.x - target).abs() < 1e-3, "member scale {}", s.x);
        assert!((s.y - target).abs() < 1e-3);
        assert!((s.z - target).abs() < 1e-3);
    }

    // Un-hover: all three revert together
    scene.on_pointer_move(0.95, 0.95);
    assert_eq!(scene.hovering(), None);
    for _ in 0..240 {
        scene.tick(dt);
    }
    for id in [m0, m1, m2] {
        let s = scene.entities.entity(id).scale;
        assert!((s.x - 1.0).abs() < 1e-3, "member scale {}", s.x);
    }
}

#[test]
fn rotating_entities_advance_with_dt() {
    let mut entities = SceneEntities::new();
    let spinner = entities.push(SceneEntity {
        rotation_speed: 2.4,
        ..entity("face_pointer", Vec3::new(5.0, 0.0, 0.0), false)
    });
    let fixed = entities.push(entity("desk", Vec3::ZERO, false));
    let mut scene = SceneState::new(entities, test_camera());

    scene.tick(0.5);
    assert!((scene.entities.entity(spinner).rotation_y - 1.2).abs() < 1e-5);
    assert_eq!(scene.entities.entity(fixed).rotation_y, 0.0);
}

#[test]
fn tick_drives_the_bloom_radius() {
    let mut scene = SceneState::new(SceneEntities::new(), test_camera());
    // Walk to the middle of the rise phase of the default pulse
    scene.tick(1.5);
    scene.tick(0.2);
    let mid_rise = scene.bloom_radius();
    assert!((mid_rise - 0.0625).abs() < 1e-4, "radius {mid_rise}");
    // Peak
    scene.tick(0.2);
    assert!((scene.bloom_radius() - 0.5).abs() < 1e-4);
}
