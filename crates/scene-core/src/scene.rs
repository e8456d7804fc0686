//! Scene orchestrator: owns the input smoother, particle field,
//! architecture, lighting rig and camera, and runs the fixed-order tick.
//!
//! The clock is injected: `tick(now)` takes host seconds and accumulates
//! scene time only while running, so the intro animation and the frame loop
//! share one clock source and a stopped scene holds its last pose. The
//! submitted frame is a pure function of the state captured at the start of
//! the tick.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::architecture::{Architecture, StructureInstance};
use crate::camera::CameraRig;
use crate::input::InputState;
use crate::lighting::LightRig;
use crate::particles::{particle_count_for_width, ParticleField};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    #[error("cinematic intro is already playing")]
    IntroInProgress,
    #[error("cinematic intro has already played")]
    IntroAlreadyPlayed,
    #[error("scene has been disposed")]
    Disposed,
}

#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    /// Logical viewport size; width picks the particle budget.
    pub width: u32,
    pub height: u32,
    pub seed: u64,
}

pub struct Scene {
    pub input: InputState,
    pub particles: ParticleField,
    pub architecture: Architecture,
    pub lights: LightRig,
    pub camera: CameraRig,
    running: bool,
    disposed: bool,
    clock: f64,
    last_now: Option<f64>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let width = config.width.max(1);
        let height = config.height.max(1);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let count = particle_count_for_width(width as f32);
        log::info!("scene: {count} particles at {width}x{height}");
        Self {
            input: InputState::new(),
            particles: ParticleField::generate(count, &mut rng),
            architecture: Architecture::build(&mut rng),
            lights: LightRig::studio(),
            camera: CameraRig::new(width as f32 / height as f32),
            running: false,
            disposed: false,
            clock: 0.0,
            last_now: None,
        }
    }

    /// Begin ticking. Idempotent; a no-op after dispose.
    pub fn start(&mut self) {
        if !self.disposed {
            self.running = true;
        }
    }

    /// Halt ticking without releasing anything. Idempotent; safe mid-intro,
    /// in which case the camera keeps its last computed pose.
    pub fn stop(&mut self) {
        self.running = false;
        self.last_now = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Scene time in seconds; advances only while running.
    pub fn time(&self) -> f32 {
        self.clock as f32
    }

    /// Arm the one-shot camera flythrough on the shared clock.
    pub fn begin_intro(&mut self) -> Result<(), SceneError> {
        if self.disposed {
            return Err(SceneError::Disposed);
        }
        self.camera.begin_intro(self.clock)
    }

    pub fn intro_active(&self) -> bool {
        self.camera.intro_active()
    }

    pub fn intro_played(&self) -> bool {
        self.camera.intro_played()
    }

    /// One logical tick: clock, then input smoothing, then architecture and
    /// camera. Particle and ground uniforms are pure reads of the state set
    /// here, so later stages observe values updated earlier in this tick.
    pub fn tick(&mut self, now: f64) {
        if !self.running || self.disposed {
            return;
        }
        let dt = match self.last_now {
            Some(prev) => (now - prev).max(0.0),
            None => 0.0,
        };
        self.last_now = Some(now);
        self.clock += dt;

        self.input.tick();
        self.camera.update(self.clock, &self.input);
    }

    /// Smoothed pointer in [-1, 1] per axis.
    pub fn mouse(&self) -> Vec2 {
        Vec2::new(self.input.mouse.x, self.input.mouse.y)
    }

    /// This frame's architecture poses.
    pub fn structure_instances(&self) -> Vec<StructureInstance> {
        self.architecture.instances(self.time(), self.mouse())
    }

    /// Update the output aspect ratio. Zero dimensions are clamped rather
    /// than rejected; a transient zero-size layout pass is common at load.
    pub fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1) as f32;
        let height = height.max(1) as f32;
        self.camera.set_aspect(width / height);
    }

    /// Stop and release the simulation-side buffers. Idempotent; the scene
    /// is unusable afterward.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.running = false;
        self.disposed = true;
        self.last_now = None;
        self.particles.dispose();
        self.architecture.dispose();
        log::info!("scene: disposed");
    }
}
