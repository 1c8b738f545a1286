//! Entity registry for the loaded scene.
//!
//! Entities live in a flat arena in asset load order and are addressed by
//! index. Hover state for grouped entities is stored once per group, never
//! per member, so a whole group scales as one unit.

use fnv::FnvHashMap;
use glam::Vec3;

use crate::constants::{HOVER_SCALE_GROUP, HOVER_SCALE_SINGLE, SCALE_SMOOTHING};

/// Index of an entity in the registry arena. Stable for the scene lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityId(pub usize);

/// Index of a hover group in the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

/// One classified scene object.
#[derive(Clone, Debug)]
pub struct SceneEntity {
    pub name: String,
    pub position: Vec3,
    /// Scale as authored in the source asset, before any hover adjustment.
    pub rest_scale: Vec3,
    /// Current displayed scale, smoothed toward the hover target each frame.
    pub scale: Vec3,
    pub rotation_y: f32,
    /// rad/sec; zero for entities that do not spin.
    pub rotation_speed: f32,
    pub color: [f32; 3],
    pub emissive_intensity: f32,
    pub hoverable: bool,
    /// Only meaningful when `group` is `None`; grouped entities delegate.
    pub hovered: bool,
    pub bloom_target: bool,
    pub group: Option<GroupId>,
    /// World-space picking sphere radius.
    pub pick_radius: f32,
}

/// Shared hover record for a named group of entities.
#[derive(Clone, Debug)]
pub struct HoverGroup {
    pub key: String,
    /// Rest scale all members animate from, taken from the first member.
    pub rest_scale: Vec3,
    pub hovered: bool,
}

/// Arena of entities plus group records, preserving asset load order.
#[derive(Default)]
pub struct SceneEntities {
    entities: Vec<SceneEntity>,
    groups: Vec<HoverGroup>,
    group_index: FnvHashMap<String, GroupId>,
}

impl SceneEntities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entity: SceneEntity) -> EntityId {
        let id = EntityId(self.entities.len());
        self.entities.push(entity);
        id
    }

    /// Look up a group by key, creating it on first use. The first member's
    /// rest scale becomes the group rest scale.
    pub fn ensure_group(&mut self, key: &str, rest_scale: Vec3) -> GroupId {
        if let Some(&id) = self.group_index.get(key) {
            return id;
        }
        let id = GroupId(self.groups.len());
        self.groups.push(HoverGroup {
            key: key.to_owned(),
            rest_scale,
            hovered: false,
        });
        self.group_index.insert(key.to_owned(), id);
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entity(&self, id: EntityId) -> &SceneEntity {
        &self.entities[id.0]
    }

    pub fn entity_mut(&mut self, id: EntityId) -> &mut SceneEntity {
        &mut self.entities[id.0]
    }

    pub fn group(&self, id: GroupId) -> &HoverGroup {
        &self.groups[id.0]
    }

    pub fn group_mut(&mut self, id: GroupId) -> &mut HoverGroup {
        &mut self.groups[id.0]
    }

    pub fn group_by_key(&self, key: &str) -> Option<GroupId> {
        self.group_index.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &SceneEntity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i), e))
    }

    pub fn entities(&self) -> &[SceneEntity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [SceneEntity] {
        &mut self.entities
    }

    pub fn groups(&self) -> &[HoverGroup] {
        &self.groups
    }

    /// Effective hover flag for an entity, delegating to its group record.
    pub fn is_hovered(&self, id: EntityId) -> bool {
        let e = &self.entities[id.0];
        match e.group {
            Some(g) => self.groups[g.0].hovered,
            None => e.hovered,
        }
    }

    /// Advance every entity's displayed scale one step toward its hover
    /// target. First-order low-pass: converges without overshoot and must run
    /// every frame regardless of hover changes.
    pub fn apply_hover_scales(&mut self) {
        for e in &mut self.entities {
            let (hovered, rest, factor) = match e.group {
                Some(g) => {
                    let grp = &self.groups[g.0];
                    (grp.hovered, grp.rest_scale, HOVER_SCALE_GROUP)
                }
                None => (e.hoverable && e.hovered, e.rest_scale, HOVER_SCALE_SINGLE),
            };
            let target = if hovered { rest * factor } else { rest };
            e.scale += (target - e.scale) * SCALE_SMOOTHING;
        }
    }
}
