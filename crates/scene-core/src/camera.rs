//! Camera rig with two mutually exclusive modes.
//!
//! Exactly one mode owns the eye each frame: `Intro` plays the one-shot
//! flythrough keyed off the shared scene clock, then hands over to `Live`,
//! which is a pure function of the smoothed input. There is no persisted
//! camera history beyond the last computed pose.

use glam::{Mat4, Vec3};

use crate::constants::*;
use crate::input::InputState;
use crate::math::lerp;
use crate::scene::SceneError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CameraMode {
    /// One-shot flythrough; `start` is a scene-clock timestamp.
    Intro { start: f64 },
    Live,
}

#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub aspect: f32,
    mode: CameraMode,
    intro_played: bool,
}

/// Quartic ease-out; non-decreasing on [0, 1] with e(0) = 0 and e(1) = 1.
pub fn ease_out_quart(p: f32) -> f32 {
    1.0 - (1.0 - p).powi(4)
}

/// Intro progress for a given elapsed time; clamps at exactly 1.
pub fn intro_progress(elapsed: f64) -> f32 {
    (elapsed / INTRO_DURATION_SEC).min(1.0) as f32
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, INTRO_Y_START, INTRO_Z_START),
            target: Vec3::ZERO,
            aspect: aspect.max(1e-3),
            mode: CameraMode::Live,
            intro_played: false,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn intro_active(&self) -> bool {
        matches!(self.mode, CameraMode::Intro { .. })
    }

    pub fn intro_played(&self) -> bool {
        self.intro_played
    }

    /// Arm the intro at the given scene-clock time. A second call while the
    /// flythrough is running, or after it finished, is rejected rather than
    /// racing two interpolations.
    pub fn begin_intro(&mut self, now: f64) -> Result<(), SceneError> {
        if self.intro_active() {
            return Err(SceneError::IntroInProgress);
        }
        if self.intro_played {
            return Err(SceneError::IntroAlreadyPlayed);
        }
        self.mode = CameraMode::Intro { start: now };
        Ok(())
    }

    /// Compute this frame's pose. While the intro owns the camera the live
    /// mapping is suppressed entirely.
    pub fn update(&mut self, now: f64, input: &InputState) {
        match self.mode {
            CameraMode::Intro { start } => {
                let p = intro_progress(now - start);
                let e = ease_out_quart(p);
                self.eye = Vec3::new(
                    0.0,
                    lerp(INTRO_Y_START, INTRO_Y_END, e),
                    lerp(INTRO_Z_START, INTRO_Z_END, e),
                );
                self.target = Vec3::ZERO;
                if p >= 1.0 {
                    self.mode = CameraMode::Live;
                    self.intro_played = true;
                }
            }
            CameraMode::Live => {
                let scroll = input.scroll.current;
                self.eye = Vec3::new(
                    input.mouse.x * CAMERA_MOUSE_X_GAIN,
                    INTRO_Y_END + scroll * CAMERA_SCROLL_Y_GAIN,
                    INTRO_Z_END + scroll * CAMERA_SCROLL_Z_GAIN,
                );
                self.target = Vec3::new(0.0, scroll * LOOKAT_SCROLL_GAIN, 0.0);
            }
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(1e-3);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOVY_RADIANS, self.aspect, CAMERA_ZNEAR, CAMERA_ZFAR)
    }
}
