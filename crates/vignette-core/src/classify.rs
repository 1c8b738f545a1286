//! Name-pattern classification of loaded scene nodes.
//!
//! The source asset encodes roles in mesh names (`clock_raycast`,
//! `face_pointer`, ...). All patterns are compiled once into a [`Classifier`]
//! at load time; the registry it produces carries typed records, so nothing
//! re-tests patterns at runtime. Nodes matching no rule stay visible but get
//! no hover or rotation behavior.

use glam::Vec3;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::constants::{
    EMISSIVE_INTENSITY, EMISSIVE_MATERIAL, FALLBACK_COLOR, MATERIAL_COLORS, PICK_SPHERE_RADIUS,
    ROTATION_SPEED,
};
use crate::entity::{SceneEntities, SceneEntity};

/// Raw node description as produced by the asset loader.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub position: Vec3,
    pub scale: Vec3,
    /// Authored material name, looked up in the material color table.
    pub material: Option<String>,
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("invalid name pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Declarative rule set mapping name patterns to entity roles.
#[derive(Clone, Debug)]
pub struct ClassifyRules<'a> {
    /// Group keys in priority order; the first match wins.
    pub group_keys: &'a [&'a str],
    pub hoverable: &'a str,
    pub rotating: &'a str,
    pub bloom: &'a str,
    pub emissive_boost: &'a str,
}

pub const DEFAULT_GROUP_KEYS: &[&str] =
    &["clock", "plotter", "2dprinter", "3dprinter", "monitor", "pen"];

pub const DEFAULT_RULES: ClassifyRules<'static> = ClassifyRules {
    group_keys: DEFAULT_GROUP_KEYS,
    hoverable: "raycast",
    rotating: "face|line",
    bloom: "pointer",
    emissive_boost: r"face|line|monitor_raycast\.001",
};

/// Compiled name-pattern classifier. Build once, apply to the node list the
/// loader hands over.
pub struct Classifier {
    groups: Vec<(String, Regex)>,
    hoverable: Regex,
    rotating: Regex,
    bloom: Regex,
    emissive_boost: Regex,
}

fn compile(pattern: &str) -> Result<Regex, ClassifyError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| ClassifyError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })
}

impl Classifier {
    /// Classifier for the desk scene's authoring convention.
    pub fn new() -> Result<Self, ClassifyError> {
        Self::with_rules(&DEFAULT_RULES)
    }

    pub fn with_rules(rules: &ClassifyRules<'_>) -> Result<Self, ClassifyError> {
        let groups = rules
            .group_keys
            .iter()
            .map(|key| Ok((key.to_string(), compile(&regex::escape(key))?)))
            .collect::<Result<Vec<_>, ClassifyError>>()?;
        Ok(Self {
            groups,
            hoverable: compile(rules.hoverable)?,
            rotating: compile(rules.rotating)?,
            bloom: compile(rules.bloom)?,
            emissive_boost: compile(rules.emissive_boost)?,
        })
    }

    /// Build the entity registry from the loader's node list, preserving
    /// traversal order.
    pub fn classify(&self, nodes: &[SceneNode]) -> SceneEntities {
        let mut out = SceneEntities::new();
        for node in nodes {
            let color = node
                .material
                .as_deref()
                .and_then(material_color)
                .unwrap_or(FALLBACK_COLOR);

            let emissive_material = node.material.as_deref() == Some(EMISSIVE_MATERIAL);
            let bloom_target = self.bloom.is_match(&node.name);
            let boosted = self.emissive_boost.is_match(&node.name);
            let emissive_intensity = if bloom_target || boosted || emissive_material {
                EMISSIVE_INTENSITY
            } else {
                0.0
            };

            let rotation_speed = if self.rotating.is_match(&node.name) {
                ROTATION_SPEED
            } else {
                0.0
            };

            let group = self
                .groups
                .iter()
                .find(|(_, re)| re.is_match(&node.name))
                .map(|(key, _)| out.ensure_group(key, node.scale));

            let entity = SceneEntity {
                name: node.name.clone(),
                position: node.position,
                rest_scale: node.scale,
                scale: node.scale,
                rotation_y: 0.0,
                rotation_speed,
                color,
                emissive_intensity,
                hoverable: self.hoverable.is_match(&node.name),
                hovered: false,
                bloom_target,
                group,
                pick_radius: PICK_SPHERE_RADIUS * node.scale.max_element(),
            };
            out.push(entity);
        }
        log::info!(
            "[scene] classified {} entities ({} hoverable, {} rotating, {} groups)",
            out.len(),
            out.entities().iter().filter(|e| e.hoverable).count(),
            out.entities()
                .iter()
                .filter(|e| e.rotation_speed != 0.0)
                .count(),
            out.groups().len(),
        );
        out
    }
}

fn material_color(name: &str) -> Option<[f32; 3]> {
    MATERIAL_COLORS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, color)| *color)
}
