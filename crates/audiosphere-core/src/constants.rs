// Shared visual/audio tuning constants used by the core and the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const SPHERE_RADIUS: f32 = 100.0; // rest positions lie on this sphere
pub const BOX_SIZE: f32 = 2.0; // edge length of each particle box

// Audio-reactive mapping
pub const SCALE_GAIN: f32 = 1.5; // full amplitude pushes a particle to 2.5x its rest radius
pub const ROTATION_GAIN: f32 = 0.1; // radians added per frame at full amplitude
pub const COLOR_SATURATION: f32 = 0.7;
pub const BASE_LIGHTNESS: f32 = 0.5;
pub const EMISSIVE_LIGHTNESS: f32 = 0.2;

// Constant spin of the whole group, radians per frame
pub const GROUP_SPIN: [f32; 2] = [0.0005, 0.001];

// Analyser
pub const FFT_SIZE: u32 = 256; // 128 frequency bins
pub const FFT_SIZE_MIN: u32 = 32;
pub const FFT_SIZE_MAX: u32 = 32768;

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 300.0;

// Lighting and material
pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_INTENSITY: f32 = 1.0;
pub const AMBIENT_COLOR_HEX: u32 = 0x222222;
pub const SPECULAR_COLOR_HEX: u32 = 0x444444;
pub const SHININESS: f32 = 100.0;
