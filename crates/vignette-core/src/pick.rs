//! Ray picking against the entity registry.

use glam::Vec3;
use smallvec::SmallVec;

use crate::entity::{EntityId, SceneEntities};

/// World-space pointer ray. Rebuilt from the camera on every pointer event,
/// never persisted.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub entity: EntityId,
    pub distance: f32,
}

/// Nearest forward intersection of a ray with a sphere, if any.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// True when an entity participates in pointer picking: explicitly hoverable
/// or a member of a hover group.
#[inline]
fn pickable(e: &crate::entity::SceneEntity) -> bool {
    e.hoverable || e.group.is_some()
}

/// All hits ordered nearest-first. The sort is stable, so exact ties keep
/// asset traversal order.
pub fn intersect(ray: Ray, entities: &SceneEntities) -> SmallVec<[Hit; 8]> {
    let mut hits: SmallVec<[Hit; 8]> = SmallVec::new();
    for (id, e) in entities.iter() {
        if !pickable(e) {
            continue;
        }
        if let Some(t) = ray_sphere(ray.origin, ray.dir, e.position, e.pick_radius) {
            hits.push(Hit {
                entity: id,
                distance: t,
            });
        }
    }
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Single nearest hit, or `None` for an empty or missed candidate set.
pub fn nearest_hit(ray: Ray, entities: &SceneEntities) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for (id, e) in entities.iter() {
        if !pickable(e) {
            continue;
        }
        if let Some(t) = ray_sphere(ray.origin, ray.dir, e.position, e.pick_radius) {
            match best {
                Some(ref b) if t >= b.distance => {}
                _ => {
                    best = Some(Hit {
                        entity: id,
                        distance: t,
                    })
                }
            }
        }
    }
    best
}
