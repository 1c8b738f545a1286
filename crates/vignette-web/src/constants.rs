use vignette_core::SceneNode;

/// Canvas element the experience renders into.
pub const CANVAS_ID: &str = "experience-canvas";

/// Upper bound on sprite instances uploaded per frame.
pub const MAX_SPRITES: usize = 64;

// Post clear color (dark blue-grey, matches the page background)
pub const CLEAR_COLOR: [f64; 3] = [0.03, 0.04, 0.08];

/// One authored node of the desk model: name, material, position, scale.
///
/// This table stands in for the traversal of the loaded asset; names follow
/// the model's authoring convention, which is what classification keys on.
pub struct NodeDesc {
    pub name: &'static str,
    pub material: &'static str,
    pub position: [f32; 3],
    pub scale: [f32; 3],
}

pub const SCENE_NODES: &[NodeDesc] = &[
    NodeDesc {
        name: "desk",
        material: "beige",
        position: [1.2, 1.0, -0.9],
        scale: [4.2, 0.2, 2.4],
    },
    NodeDesc {
        name: "desk_legs",
        material: "black",
        position: [1.2, 0.0, -0.9],
        scale: [3.9, 1.0, 2.1],
    },
    NodeDesc {
        name: "monitor_raycast.001",
        material: "black",
        position: [1.4, 2.4, -1.4],
        scale: [1.1, 0.8, 0.12],
    },
    NodeDesc {
        name: "monitor_stand",
        material: "grey",
        position: [1.4, 1.6, -1.4],
        scale: [0.25, 0.5, 0.25],
    },
    NodeDesc {
        name: "keyboard",
        material: "grey",
        position: [1.3, 1.15, -0.3],
        scale: [1.0, 0.08, 0.35],
    },
    NodeDesc {
        name: "clock_raycast",
        material: "black",
        position: [-1.6, 3.4, -1.8],
        scale: [0.8, 0.8, 0.15],
    },
    NodeDesc {
        name: "clock_dial",
        material: "paper",
        position: [-1.6, 3.4, -1.72],
        scale: [0.7, 0.7, 0.05],
    },
    NodeDesc {
        name: "clock_hands",
        material: "red",
        position: [-1.6, 3.4, -1.65],
        scale: [0.5, 0.5, 0.04],
    },
    NodeDesc {
        name: "plotter_raycast",
        material: "grey",
        position: [3.4, 1.2, -0.6],
        scale: [1.2, 0.4, 0.9],
    },
    NodeDesc {
        name: "plotter_arm",
        material: "black",
        position: [3.4, 1.5, -0.6],
        scale: [0.9, 0.1, 0.1],
    },
    NodeDesc {
        name: "2dprinter_raycast",
        material: "beige",
        position: [-0.9, 1.35, -1.3],
        scale: [0.9, 0.5, 0.7],
    },
    NodeDesc {
        name: "3dprinter_raycast",
        material: "black",
        position: [4.2, 1.55, -1.5],
        scale: [0.8, 1.0, 0.8],
    },
    NodeDesc {
        name: "3dprinter_nozzle",
        material: "red",
        position: [4.2, 1.35, -1.3],
        scale: [0.1, 0.15, 0.1],
    },
    NodeDesc {
        name: "pen_raycast",
        material: "green",
        position: [0.2, 1.13, 0.3],
        scale: [0.7, 0.06, 0.08],
    },
    NodeDesc {
        name: "pen_cap",
        material: "black",
        position: [0.55, 1.13, 0.3],
        scale: [0.12, 0.07, 0.09],
    },
    NodeDesc {
        name: "face_pointer",
        material: "red",
        position: [1.9, 3.6, 0.6],
        scale: [0.35, 0.35, 0.35],
    },
    NodeDesc {
        name: "line_pointer",
        material: "red",
        position: [0.4, 3.2, 0.8],
        scale: [0.5, 0.04, 0.04],
    },
    NodeDesc {
        name: "mug",
        material: "green",
        position: [-0.4, 1.3, 0.1],
        scale: [0.25, 0.3, 0.25],
    },
];

/// The node table as the loader-facing type classification consumes.
pub fn scene_nodes() -> Vec<SceneNode> {
    SCENE_NODES
        .iter()
        .map(|n| SceneNode {
            name: n.name.to_owned(),
            position: n.position.into(),
            scale: n.scale.into(),
            material: Some(n.material.to_owned()),
        })
        .collect()
}
