/// Interaction and animation tuning constants.
///
/// These constants express intended behavior (hover growth, smoothing rates,
/// pulsation phase lengths) and keep magic numbers out of the code.
// Hover scale factors (single entities grow more than whole groups)
pub const HOVER_SCALE_SINGLE: f32 = 1.2;
pub const HOVER_SCALE_GROUP: f32 = 1.1;

// Per-frame lerp factor toward the hover target scale
pub const SCALE_SMOOTHING: f32 = 0.1;

// Spin rate for decorative meshes (0.04 rad per frame at the reference 60 Hz)
pub const ROTATION_SPEED: f32 = 2.4; // rad/sec

// Ray-sphere picking radius for a unit-scale entity
pub const PICK_SPHERE_RADIUS: f32 = 0.6;

// Bloom pulsation cycle: hold at the floor, cubic spike up, linear fall back
pub const BLOOM_IDLE_TIME: f32 = 1.5; // seconds
pub const BLOOM_SPIKE_TIME: f32 = 0.4;
pub const BLOOM_FALL_TIME: f32 = 0.8;
pub const BLOOM_MIN_RADIUS: f32 = 0.0;
pub const BLOOM_MAX_RADIUS: f32 = 0.5;

// Fixed bloom parameters (only the radius is animated)
pub const BLOOM_STRENGTH: f32 = 0.5;
pub const BLOOM_THRESHOLD: f32 = 0.8;

// Authored camera placement for the desk scene
pub const CAMERA_EYE: [f32; 3] = [6.2, 4.2, 10.8];
pub const CAMERA_TARGET: [f32; 3] = [1.244, 2.206, -0.905];
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Base color per authored material name, plus the one emissive material.
// Values are the authored sRGB colors normalized to [0, 1].
pub const MATERIAL_COLORS: &[(&str, [f32; 3])] = &[
    ("beige", [0.827, 0.827, 0.827]),
    ("black", [0.333, 0.333, 0.333]),
    ("green", [0.137, 0.325, 0.278]),
    ("grey", [0.502, 0.502, 0.502]),
    ("red", [1.0, 0.675, 0.0]),
    ("paper", [0.980, 0.980, 0.980]),
];

pub const EMISSIVE_MATERIAL: &str = "red";
pub const EMISSIVE_INTENSITY: f32 = 1.0;

// Fallback color for nodes whose material name is not in the table
pub const FALLBACK_COLOR: [f32; 3] = [0.7, 0.7, 0.7];
