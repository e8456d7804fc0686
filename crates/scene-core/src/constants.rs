use std::f32::consts::PI;

// Visual tuning constants shared by the simulation, the shaders, and the
// frontend. The particle/camera numbers are load-bearing for visual parity;
// change them and the scene reads differently.

// Particle field
pub const PARTICLE_COUNT_DESKTOP: usize = 8000;
pub const PARTICLE_COUNT_MOBILE: usize = 3000;
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // logical px

// Dome sampling ranges (see `particles::ParticleField::generate`)
pub const DOME_RADIUS_MIN: f32 = 5.0;
pub const DOME_RADIUS_MAX: f32 = 20.0;
pub const DOME_PHI_MAX: f32 = 0.6 * PI;
pub const DOME_Y_MIN: f32 = -5.0;
pub const DOME_Y_MAX: f32 = 15.0;
pub const DOME_Z_OFFSET: f32 = -8.0; // pushes the dome in front of the origin

pub const PARTICLE_SIZE_MIN: f32 = 3.0;
pub const PARTICLE_SIZE_MAX: f32 = 11.0;
pub const PARTICLE_VELOCITY_SCALE: f32 = 2.0;

// Perspective point sizing
pub const POINT_SIZE_SCALE: f32 = 350.0;
pub const POINT_SIZE_MIN_PX: f32 = 2.0;
pub const POINT_SIZE_MAX_PX: f32 = 80.0;

// Palette
pub const GOLD: [f32; 3] = [0.788, 0.659, 0.298];
pub const ROSE: [f32; 3] = [0.82, 0.55, 0.55];
pub const PLATINUM: [f32; 3] = [0.67, 0.73, 0.82];

// Pointer repulsion
pub const MOUSE_WORLD_X: f32 = 8.0; // normalized mouse -> world units
pub const MOUSE_WORLD_Y: f32 = 5.0;
pub const REPULSION_RADIUS: f32 = 6.0;
pub const REPULSION_PUSH: f32 = 2.0;

// Input smoothing (per-frame lerp factors)
pub const MOUSE_SMOOTHING: f32 = 0.05;
pub const SCROLL_SMOOTHING: f32 = 0.1;
pub const MOUSE_STRENGTH_RAMP: f32 = 0.02; // per frame, fades repulsion in

// Ground plane
pub const GROUND_SIZE: f32 = 80.0;
pub const GROUND_Y: f32 = -3.0;
pub const GRID_CELL: f32 = 0.5;
pub const GRID_FADE_NEAR: f32 = 5.0;
pub const GRID_FADE_FAR: f32 = 30.0;

// Architecture
pub const STRUCTURE_OFFSET: [f32; 3] = [0.0, -1.0, -5.0];
pub const TILT_Y_GAIN: f32 = 0.15; // yaw toward the pointer
pub const TILT_X_GAIN: f32 = -0.08;
pub const BREATH_RATE: f32 = 0.3;
pub const BREATH_AMPLITUDE: f32 = 0.05;
pub const PLATFORM_FLOAT_RATE: f32 = 0.8;
// Bounded equivalent of the legacy per-frame 0.003 increment at 60 Hz
pub const PLATFORM_FLOAT_AMPLITUDE: f32 = 0.225;

// Camera
pub const INTRO_DURATION_SEC: f64 = 2.8;
pub const INTRO_Y_START: f32 = 12.0;
pub const INTRO_Y_END: f32 = 4.0;
pub const INTRO_Z_START: f32 = 35.0;
pub const INTRO_Z_END: f32 = 18.0;
pub const CAMERA_MOUSE_X_GAIN: f32 = 1.5;
pub const CAMERA_SCROLL_Y_GAIN: f32 = -2.0;
pub const CAMERA_SCROLL_Z_GAIN: f32 = -5.0;
pub const LOOKAT_SCROLL_GAIN: f32 = -3.0;
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Surface
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
