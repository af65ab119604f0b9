use glam::Vec3;

// Shared sizing and interaction tuning constants for the AR projection engine.

// Plane sizing
pub const REFERENCE_WIDTH: f32 = 0.3; // metres, plane width before user scaling
pub const FALLBACK_ASPECT_RATIO: f32 = 1.0; // substituted for degenerate snapshots

// Default pose relative to the tracking origin: slightly above and in front
pub const DEFAULT_NODE_POSITION: Vec3 = Vec3::new(0.0, 0.1, -0.8);
pub const DEFAULT_NODE_SCALE: f32 = 1.0;

// Texture bake
pub const BAKE_SCALE: f32 = 1.0; // image pixels per drawing unit
pub const MAX_TEXTURE_EDGE: u32 = 4096; // longest baked edge before uniform downscale
pub const PLACEHOLDER_TEXTURE_EDGE: u32 = 1;
pub const PLACEHOLDER_COLOR: [u8; 4] = [255, 255, 255, 0]; // transparent white

// Gestures
pub const PAN_UNITS_PER_WORLD_UNIT: f32 = 500.0; // screen units per world unit
pub const DEFAULT_MIN_SCALE: f32 = 0.5;
pub const DEFAULT_MAX_SCALE: f32 = 3.0;
