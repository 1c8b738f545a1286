//! Per-frame scene state.
//!
//! One explicit struct owns everything the render loop mutates: the entity
//! registry, the selection tracker, the pulsation driver and the camera.
//! Pointer events and `tick` are plain method calls, so the whole scene can
//! be driven deterministically without a live rendering context.

use crate::entity::SceneEntities;
use crate::hover::{HoverTarget, SelectionTracker};
use crate::pulse::BloomPulse;
use crate::state::Camera;

pub struct SceneState {
    pub entities: SceneEntities,
    pub tracker: SelectionTracker,
    pub pulse: BloomPulse,
    pub camera: Camera,
    bloom_radius: f32,
}

impl SceneState {
    pub fn new(entities: SceneEntities, camera: Camera) -> Self {
        let pulse = BloomPulse::default();
        let bloom_radius = pulse.radius_at(0.0);
        Self {
            entities,
            tracker: SelectionTracker::new(),
            pulse,
            camera,
            bloom_radius,
        }
    }

    /// Latest bloom radius computed by `tick`, fed to the post-process pass.
    pub fn bloom_radius(&self) -> f32 {
        self.bloom_radius
    }

    pub fn hovering(&self) -> Option<HoverTarget> {
        self.tracker.current()
    }

    /// Pointer moved: record the NDC position, re-cast against the current
    /// camera and apply the hover transition. Safe on an empty scene.
    pub fn on_pointer_move(&mut self, ndc_x: f32, ndc_y: f32) {
        self.tracker.update_pointer(ndc_x, ndc_y);
        let ray = self.camera.ndc_ray(ndc_x, ndc_y);
        let next = self.tracker.resolve_hover(&self.entities, ray);
        self.tracker.apply_hover_transition(&mut self.entities, next);
    }

    /// Advance one frame: pulsation timer, rotation angles, scale smoothing.
    /// Degenerate deltas clamp to zero effect.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.bloom_radius = self.pulse.advance(dt);
        for e in self.entities.entities_mut() {
            if e.rotation_speed != 0.0 {
                e.rotation_y += e.rotation_speed * dt;
            }
        }
        self.entities.apply_hover_scales();
    }
}
