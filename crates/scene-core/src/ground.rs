//! Ground plane geometry and the host-side mirror of the grid fragment math.
//!
//! The quad itself is trivial; the interesting part is the fragment stage in
//! `shaders/grid.wgsl`. The fade/pulse/alpha terms are mirrored here so the
//! radial boundary can be asserted without a GPU.

use crate::constants::{GRID_FADE_FAR, GRID_FADE_NEAR, GROUND_SIZE, GROUND_Y};
use crate::math::smoothstep;

/// Two triangles spanning the 80x80 plane, laid flat 3 units below the
/// origin.
pub fn ground_vertices() -> [[f32; 3]; 6] {
    let h = GROUND_SIZE / 2.0;
    [
        [-h, GROUND_Y, -h],
        [-h, GROUND_Y, h],
        [h, GROUND_Y, h],
        [-h, GROUND_Y, -h],
        [h, GROUND_Y, h],
        [h, GROUND_Y, -h],
    ]
}

/// Radial fade: fully visible near the center, gone by 30 units out.
pub fn radial_fade(dist: f32) -> f32 {
    smoothstep(GRID_FADE_FAR, GRID_FADE_NEAR, dist)
}

/// Traveling wave emanating outward, in [0, 1].
pub fn grid_pulse(t: f32, dist: f32) -> f32 {
    0.5 * (t * 0.5 - dist * 0.3).sin() + 0.5
}

/// Final fragment alpha for a given anti-aliased line mask and radial
/// distance.
pub fn ground_alpha(grid_alpha: f32, dist: f32) -> f32 {
    grid_alpha * radial_fade(dist) * 0.6
}
