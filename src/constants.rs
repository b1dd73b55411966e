// Scene, lighting and presentation constants for the web frontend.
// Colors are CSS-style `0xRRGGBB` values, converted to linear light before
// reaching the shaders.

// Card plane
pub const CARD_WIDTH: f32 = 3.6;
pub const CARD_HEIGHT: f32 = 5.2;
pub const CARD_SEGMENTS: u32 = 64;
pub const ALPHA_TEST: f32 = 0.1;

// Lighting
pub const AMBIENT_COLOR: u32 = 0x6366f1;
pub const AMBIENT_INTENSITY: f32 = 0.4;

pub const KEY_LIGHT_COLOR: u32 = 0xffffff;
pub const KEY_LIGHT_INTENSITY: f32 = 1.2;
pub const KEY_LIGHT_POSITION: [f32; 3] = [8.0, 8.0, 8.0];

pub const RIM_LIGHT_COLOR: u32 = 0x8b5cf6;
pub const RIM_LIGHT_INTENSITY: f32 = 0.6;
pub const RIM_LIGHT_POSITION: [f32; 3] = [-5.0, 3.0, -5.0];

pub const FILL_LIGHT_COLOR: u32 = 0x06b6d4;
pub const FILL_LIGHT_INTENSITY: f32 = 0.3;
pub const FILL_LIGHT_POSITION: [f32; 3] = [0.0, -5.0, 3.0];

// Backdrop radial gradient (center, middle, edge)
pub const BACKDROP_COLORS: [u32; 3] = [0x1a1a2e, 0x16213e, 0x0f0f23];

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Overlay
pub const PARTICLE_COUNT: usize = 20;
pub const INSTRUCTIONS_TEXT: &str = "Drag • Swipe • Arrow Keys • Click Dots";

// Frame diagnostics
pub const FRAME_LOG_INTERVAL_SEC: f32 = 10.0;
