//! Particle field generation and the reference per-frame math.
//!
//! Particles are immutable after generation; all visible motion is a pure
//! function of `(particle, time, smoothed mouse, mouse strength)`. The
//! functions below are the authoritative form of that math; the vertex stage
//! in `shaders/particles.wgsl` reproduces them term for term.

use glam::{Vec2, Vec3, Vec3Swizzles};
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::constants::*;
use crate::math::smoothstep;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Base sample in the dome volume; never mutated after generation.
    pub position: Vec3,
    /// Point render size scale in [3, 11).
    pub size: f32,
    /// Per-particle animation offset in [0, 1).
    pub phase: f32,
    /// Per-axis drift multiplier, each component in [-2, 2).
    pub velocity: Vec3,
}

/// GPU layout for one particle instance. Matches the vertex attributes in
/// `particles.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub velocity: [f32; 3],
    pub phase: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

/// Particle budget for a viewport, by logical width at the 768px breakpoint.
pub fn particle_count_for_width(logical_width: f32) -> usize {
    if logical_width < MOBILE_BREAKPOINT_PX {
        PARTICLE_COUNT_MOBILE
    } else {
        PARTICLE_COUNT_DESKTOP
    }
}

impl ParticleField {
    /// Sample `count` particles from the dome volume: a downward-flattened
    /// dome centered 8 units in front of the origin, biased so most mass
    /// sits in a forward hemisphere. `count = 0` is legal and draws nothing.
    pub fn generate(count: usize, rng: &mut impl Rng) -> Self {
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            let theta = rng.gen_range(0.0..TAU);
            let phi = rng.gen_range(0.0..DOME_PHI_MAX);
            let r = rng.gen_range(DOME_RADIUS_MIN..DOME_RADIUS_MAX);
            let position = Vec3::new(
                r * phi.sin() * theta.cos(),
                rng.gen_range(DOME_Y_MIN..DOME_Y_MAX),
                r * phi.sin() * theta.sin() + DOME_Z_OFFSET,
            );
            particles.push(Particle {
                position,
                size: rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
                phase: rng.gen_range(0.0..1.0),
                velocity: Vec3::new(
                    rng.gen_range(-1.0..1.0) * PARTICLE_VELOCITY_SCALE,
                    rng.gen_range(-1.0..1.0) * PARTICLE_VELOCITY_SCALE,
                    rng.gen_range(-1.0..1.0) * PARTICLE_VELOCITY_SCALE,
                ),
            });
        }
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Pack the field for a one-time GPU upload.
    pub fn instances(&self) -> Vec<ParticleInstance> {
        self.particles
            .iter()
            .map(|p| ParticleInstance {
                position: p.position.to_array(),
                size: p.size,
                velocity: p.velocity.to_array(),
                phase: p.phase,
            })
            .collect()
    }

    /// Release the buffer. Called from `Scene::dispose` only.
    pub fn dispose(&mut self) {
        self.particles = Vec::new();
    }
}

/// Per-frame displaced position: sinusoidal drift, pointer repulsion, then
/// the vertical spiral term.
pub fn displaced_position(p: &Particle, t: f32, mouse: Vec2, mouse_strength: f32) -> Vec3 {
    let drift = Vec3::new(
        (t * 0.2 + p.phase * TAU).sin() * 0.8,
        (t * 0.15 + p.phase * PI).cos() * 0.6,
        (t * 0.1 + p.phase * 1.5 * PI).sin() * 0.4,
    ) * p.velocity;
    let mut pos = p.position + drift;

    let mouse_pos = Vec3::new(mouse.x * MOUSE_WORLD_X, mouse.y * MOUSE_WORLD_Y, 0.0);
    let to_mouse = pos - mouse_pos;
    let dist = to_mouse.length();
    if dist > 1e-5 {
        let repulsion = smoothstep(REPULSION_RADIUS, 0.0, dist) * mouse_strength;
        pos += to_mouse / dist * repulsion * REPULSION_PUSH;
    }

    let xz = pos.xz().length();
    pos.y += (t * 0.3 + xz * 0.5).sin() * 0.3;
    pos
}

/// Perspective-scaled point size in pixels. `view_z` is the view-space z of
/// the displaced position (negative in front of the camera).
pub fn point_size_px(size: f32, view_z: f32) -> f32 {
    (size * POINT_SIZE_SCALE / (-view_z).max(1e-3)).clamp(POINT_SIZE_MIN_PX, POINT_SIZE_MAX_PX)
}

/// Gold <-> rose by phase, then toward platinum by height.
pub fn particle_color(phase: f32, y: f32) -> Vec3 {
    let warm = Vec3::from(GOLD).lerp(Vec3::from(ROSE), (phase * PI).sin());
    warm.lerp(Vec3::from(PLATINUM), smoothstep(-10.0, 10.0, y))
}

/// Fades out near the 20-unit edge of the field; larger particles read
/// slightly stronger.
pub fn particle_alpha(final_pos: Vec3, size: f32) -> f32 {
    smoothstep(20.0, 5.0, final_pos.length()) * (0.3 + size * 0.02)
}
