// Shared tuning constants for the particle background and page effects.

// Particle population
pub const MAX_PARTICLES: usize = 80; // default population cap
pub const PARTICLE_HARD_CAP: usize = 300; // bound on configured caps; keeps pairwise links bounded
pub const AREA_PER_PARTICLE: u64 = 15_000; // surface pixels per particle

// Particle attribute ranges (uniform draws)
pub const PARTICLE_MIN_SIZE: f32 = 0.5;
pub const PARTICLE_SIZE_SPAN: f32 = 2.0; // size in [0.5, 2.5)
pub const PARTICLE_MAX_SPEED: f32 = 0.2; // per axis, speed in [-0.2, 0.2)
pub const PARTICLE_MIN_OPACITY: f32 = 0.1;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.5; // opacity in [0.1, 0.6)

// Connection mesh
pub const LINK_DISTANCE: f32 = 150.0;
pub const LINK_MAX_OPACITY: f32 = 0.06;
pub const LINK_LINE_WIDTH: f32 = 0.6;

// Pointer attraction lines
pub const POINTER_LINK_DISTANCE: f32 = 200.0;
pub const POINTER_LINK_MAX_OPACITY: f32 = 0.12;
pub const POINTER_LINE_WIDTH: f32 = 0.8;

// Palette
pub const ACCENT_RGB: [u8; 3] = [108, 99, 255]; // particles and mesh
pub const POINTER_RGB: [u8; 3] = [0, 212, 255]; // pointer links and hover highlight
