use glam::Vec3;

// Shared tuning constants for the particle field, used by both web and native frontends.

// Field volume (full extents, centred on the origin)
pub const FIELD_EXTENT: Vec3 = Vec3::new(25.0, 20.0, 15.0);

// Connections
pub const CONNECTION_POOL_SIZE: usize = 50; // fixed, independent of tier
pub const CONNECTION_OPACITY_MAX: f32 = 0.3;
pub const CONNECTION_OPACITY_SPAN: f32 = 0.25;
pub const CONNECTION_OPACITY_MIN: f32 = 0.05;

// Node motion
pub const POINTER_INFLUENCE: f32 = 0.015;
pub const POSITION_BLEND: f32 = 0.03; // per-frame lerp factor toward target
pub const ROTATION_STEP_X: f32 = 0.005;
pub const ROTATION_STEP_Y: f32 = 0.008;
pub const SCENE_ROTATION_STEP: f32 = 0.0008;

// Pulse
pub const PULSE_AMPLITUDE: f32 = 0.2;
pub const PULSE_SPEED_MIN: f32 = 0.02;
pub const PULSE_SPEED_SPAN: f32 = 0.02;
pub const PULSE_STAGGER: u64 = 3; // a node pulses when index % 3 == frame % 3

// Pointer mapping
pub const POINTER_RANGE: f32 = 4.0; // normalized target spans [-4, 4]
pub const SCROLL_QUIET_MS: f64 = 150.0;

// Viewport
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera
pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Node appearance
pub const NODE_RADIUS: f32 = 0.05;
pub const NODE_OPACITY: f32 = 0.8;
pub const FIELD_COLOR: [f32; 3] = [0.196, 0.722, 0.851]; // #32b8d9

// Cursor trail
pub const MAX_CURSOR_TRAILS: usize = 3;
pub const TRAIL_LERP_BASE: f32 = 0.2;
pub const TRAIL_LERP_STEP: f32 = 0.03; // each trail follows a little more lazily
pub const CURSOR_DOT_OFFSET: f32 = 10.0;
pub const CURSOR_TRAIL_OFFSET: f32 = 4.0;
