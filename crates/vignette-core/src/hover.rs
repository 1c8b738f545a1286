//! Hover selection state machine.
//!
//! Two states: idle, or hovering exactly one entity-or-group. Transitions
//! happen only when a pointer event reports a changed nearest hit; leaving
//! the hovering state always clears the old flag before the next one is set,
//! so at most one flag is raised at any time. Hover holds until the pointer
//! moves away; there is no timeout-based exit.

use crate::entity::{EntityId, GroupId, SceneEntities};
use crate::pick::{self, Ray};

/// What the pointer currently rests on. Grouped entities resolve to their
/// group, so all members highlight together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverTarget {
    Entity(EntityId),
    Group(GroupId),
}

#[derive(Default)]
pub struct SelectionTracker {
    pointer_ndc: Option<[f32; 2]>,
    current: Option<HoverTarget>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest normalized pointer position. Side effect only; hover
    /// state is recomputed separately so stale pointers stay valid.
    pub fn update_pointer(&mut self, ndc_x: f32, ndc_y: f32) {
        self.pointer_ndc = Some([ndc_x, ndc_y]);
    }

    pub fn pointer_ndc(&self) -> Option<[f32; 2]> {
        self.pointer_ndc
    }

    pub fn current(&self) -> Option<HoverTarget> {
        self.current
    }

    /// Cast the ray and map the nearest hit to its hover target. An empty
    /// candidate set (asset not loaded yet included) resolves to `None`.
    pub fn resolve_hover(&self, entities: &SceneEntities, ray: Ray) -> Option<HoverTarget> {
        pick::nearest_hit(ray, entities).map(|hit| match entities.entity(hit.entity).group {
            Some(g) => HoverTarget::Group(g),
            None => HoverTarget::Entity(hit.entity),
        })
    }

    /// Move to a new hover target, updating flags in the registry. No-op when
    /// the target is unchanged; repeated calls with the same pair never alter
    /// flag state.
    pub fn apply_hover_transition(
        &mut self,
        entities: &mut SceneEntities,
        new: Option<HoverTarget>,
    ) {
        if self.current == new {
            return;
        }
        if let Some(prev) = self.current.take() {
            set_flag(entities, prev, false);
        }
        if let Some(next) = new {
            set_flag(entities, next, true);
            log::debug!("[hover] enter {}", target_name(entities, next));
        } else {
            log::debug!("[hover] leave");
        }
        self.current = new;
    }
}

fn set_flag(entities: &mut SceneEntities, target: HoverTarget, value: bool) {
    match target {
        HoverTarget::Entity(id) => entities.entity_mut(id).hovered = value,
        HoverTarget::Group(id) => entities.group_mut(id).hovered = value,
    }
}

fn target_name<'a>(entities: &'a SceneEntities, target: HoverTarget) -> &'a str {
    match target {
        HoverTarget::Entity(id) => &entities.entity(id).name,
        HoverTarget::Group(id) => &entities.group(id).key,
    }
}
