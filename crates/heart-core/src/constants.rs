// Shared tuning constants for the heart morph.

// Field
pub const PARTICLE_COUNT: usize = 6000;
pub const SPREAD_JITTER: f32 = 0.1; // outward scatter: spread = 1 + U(0, SPREAD_JITTER)
pub const DEPTH_JITTER: f32 = 0.25; // z = U(-DEPTH_JITTER, DEPTH_JITTER)

// Theme hue (#ff4d6d)
pub const HEART_COLOR: [f32; 3] = [1.0, 0.302, 0.427];

// Build phase
pub const BUILD_DURATION_SEC: f32 = 0.8;

// Idle phase: rotation = SWAY_AMPLITUDE * sin(t * SWAY_FREQUENCY),
// scale = 1 + PULSE_AMPLITUDE * sin(t * PULSE_FREQUENCY)
pub const SWAY_AMPLITUDE: f32 = 0.1; // radians
pub const SWAY_FREQUENCY: f32 = 0.8;
pub const PULSE_AMPLITUDE: f32 = 0.03;
pub const PULSE_FREQUENCY: f32 = 1.5;

// Sprite
pub const SPRITE_SIZE_PX: u32 = 32;
pub const MAX_SPRITE_SIZE_PX: u32 = 4096; // well under the default 8192 texture limit
pub const SPRITE_CORE_PX: f32 = 1.0; // fully opaque plateau radius
pub const POINT_SIZE: f32 = 0.35; // world units, quad edge length

// Viewport
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera
pub const CAMERA_Z: f32 = 50.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
