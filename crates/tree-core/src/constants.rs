use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Tree silhouette
pub const TREE_HEIGHT: f32 = 12.0;
pub const TREE_MAX_RADIUS: f32 = 4.0;
pub const TREE_VERTICAL_OFFSET: f32 = 2.0; // added after centring the cone on y = 0

// Chaos shell
pub const CHAOS_BASE_RADIUS: f32 = 15.0;
pub const CHAOS_SPREAD: f32 = 5.0; // shell thickness
pub const ORNAMENT_CHAOS_EXTENT: f32 = 40.0; // ornaments scatter in a cube of this edge

// Particle counts
pub const FOLIAGE_COUNT: usize = 15_000;
pub const ORNAMENT_BASE_COUNT: usize = 150;
pub const ORNAMENT_BOTTOM_COUNT: usize = 120;
pub const ORNAMENT_BOTTOM_FRACTION: f32 = 0.35; // bottom quota lives below this share of the height
pub const DUST_COUNT: usize = 300;

// Morph (progress) stepping
pub const MORPH_STEP_SCALE: f32 = 0.8;
pub const MORPH_SPEED: f32 = 2.0; // effective rate = MORPH_STEP_SCALE * MORPH_SPEED
pub const MORPH_SNAP_EPSILON: f32 = 0.001;

// Per-particle easing
pub const JITTER_BASE: f32 = 0.8; // progress multiplier for random_factor = 0
pub const JITTER_SPAN: f32 = 0.4; // added multiplier for random_factor = 1
pub const SWAY_PROGRESS_THRESHOLD: f32 = 0.8;
pub const SWAY_FREQUENCY: f32 = 2.0;
pub const SWAY_AMPLITUDE: f32 = 0.05;

// Foliage point size in pixels at unit depth: base + span * random_factor
pub const POINT_SIZE_BASE: f32 = 20.0;
pub const POINT_SIZE_SPAN: f32 = 60.0;

// Ornament motion
pub const ORNAMENT_HOVER_THRESHOLD: f32 = 0.1;
pub const ORNAMENT_HOVER_AMPLITUDE: f32 = 0.02;
pub const GIFT_SPIN_PER_TICK: f32 = 0.01;

// Gold dust
pub const DUST_EXTENT: f32 = 30.0;
pub const DUST_DRIFT_AMPLITUDE: f32 = 0.02;
pub const DUST_GRAVITY: f32 = 0.01;
pub const DUST_ATTRACT_RADIUS: f32 = 8.0; // attraction only inside this distance
pub const DUST_FORCE_FALLOFF: f32 = 10.0; // force = max(0, (falloff - d) / falloff)
pub const DUST_ATTRACT_STRENGTH: f32 = 0.2;
pub const DUST_RESPAWN_BELOW: f32 = -10.0;
pub const DUST_RESPAWN_HEIGHT: f32 = 15.0;
pub const DUST_ATTRACTOR_Z: f32 = 5.0; // pointer target is pinned to this depth

// Drag rotation
pub const DRAG_SENSITIVITY: f32 = 0.005; // radians of velocity per pixel
pub const ROTATION_FRICTION: f32 = 0.95; // 0.95 = slippery, 0.8 = stiff
pub const IDLE_SPIN_THRESHOLD: f32 = 0.001;
pub const IDLE_SPIN_PER_TICK: f32 = 0.0005;

// Tree group placement in world space
pub const TREE_GROUP_SCALE: f32 = 0.8;
pub const TREE_GROUP_OFFSET: [f32; 3] = [0.0, -2.5, 0.0];

// Star topper (tree space)
pub const STAR_POSITION: [f32; 3] = [0.0, 8.5, 0.0];
pub const STAR_VISIBLE_ABOVE: f32 = 0.8;
pub const STAR_SCALE: f32 = 1.0;

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 4.0, 20.0];
pub const CAMERA_FOVY_DEGREES: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;

// Post-processing
pub const BLOOM_THRESHOLD: f32 = 0.8; // luminance where bloom starts
pub const BLOOM_INTENSITY: f32 = 1.2;
pub const VIGNETTE_OFFSET: f32 = 0.1;
pub const VIGNETTE_DARKNESS: f32 = 0.6;

// Emissive sprite intensities (HDR, above the bloom threshold)
pub const LIGHT_EMISSIVE: f32 = 2.0;
pub const STAR_EMISSIVE: f32 = 2.0;
pub const DUST_OPACITY: f32 = 0.8;
pub const DUST_POINT_SIZE: f32 = 0.2; // world-space diameter

// Palette (sRGB hex as authored)
pub const FOLIAGE_DEEP_GREEN: u32 = 0x004225;
pub const FOLIAGE_LIGHT_GREEN: u32 = 0x0B6623;
pub const GOLD: u32 = 0xD4AF37;
pub const LIGHT_GOLD: u32 = 0xF9DF86;
pub const DARK_RED: u32 = 0x8B0000;
pub const SILVER: u32 = 0xC0C0C0;
pub const WHITE: u32 = 0xFFFFFF;
pub const BACKGROUND: u32 = 0x000500;

#[inline]
pub fn tree_group_offset_vec3() -> Vec3 {
    Vec3::from(TREE_GROUP_OFFSET)
}

#[inline]
pub fn star_position_vec3() -> Vec3 {
    Vec3::from(STAR_POSITION)
}

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

/// Convert a `0xRRGGBB` sRGB colour into linear RGB in \[0, 1\].
pub fn srgb_hex_to_linear(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xFF) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}
