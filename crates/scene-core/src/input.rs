//! Critically-damped input smoothing.
//!
//! Raw pointer and scroll samples land in `target` slots; every tick moves
//! the smoothed values a fixed fraction toward them. A pointer event that
//! arrives mid-tick is only visible starting the next tick.

use crate::constants::{MOUSE_SMOOTHING, MOUSE_STRENGTH_RAMP, SCROLL_SMOOTHING};
use crate::math::lerp;

#[derive(Clone, Copy, Debug, Default)]
pub struct MouseSmoother {
    pub x: f32,
    pub y: f32,
    pub target_x: f32,
    pub target_y: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollSmoother {
    pub current: f32,
    pub target: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub mouse: MouseSmoother,
    pub scroll: ScrollSmoother,
    /// Ramps 0 -> 1 after the loop starts so pointer repulsion fades in
    /// instead of snapping at load.
    pub mouse_strength: f32,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pointer target from values already normalized to [-1, 1].
    pub fn set_pointer_target(&mut self, nx: f32, ny: f32) {
        self.mouse.target_x = nx;
        self.mouse.target_y = ny;
    }

    /// Set the pointer target from surface pixel coordinates. Y is inverted
    /// so +1 is the top edge.
    pub fn set_pointer_from_pixels(&mut self, px: f32, py: f32, width: f32, height: f32) {
        let w = width.max(1.0);
        let h = height.max(1.0);
        self.mouse.target_x = (px / w) * 2.0 - 1.0;
        self.mouse.target_y = -((py / h) * 2.0 - 1.0);
    }

    /// Set the scroll target from the raw page-scroll fraction.
    pub fn set_scroll_target(&mut self, fraction: f32) {
        self.scroll.target = fraction.clamp(0.0, 1.0);
    }

    /// Advance one frame of smoothing.
    pub fn tick(&mut self) {
        self.mouse.x = lerp(self.mouse.x, self.mouse.target_x, MOUSE_SMOOTHING);
        self.mouse.y = lerp(self.mouse.y, self.mouse.target_y, MOUSE_SMOOTHING);
        self.scroll.current = lerp(self.scroll.current, self.scroll.target, SCROLL_SMOOTHING);
        self.mouse_strength = (self.mouse_strength + MOUSE_STRENGTH_RAMP).min(1.0);
    }
}
