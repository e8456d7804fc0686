//! Platform-independent scene simulation for the atrium background renderer.
//!
//! Everything here is pure Rust with an injected clock: the web frontend
//! drives [`scene::Scene::tick`] from requestAnimationFrame, tests drive it
//! from a simulated clock. Shader sources live next to this crate so the
//! per-frame math and its WGSL counterpart stay in one place.

pub mod architecture;
pub mod camera;
pub mod constants;
pub mod ground;
pub mod input;
pub mod lighting;
pub mod math;
pub mod particles;
pub mod scene;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static GRID_WGSL: &str = include_str!("../shaders/grid.wgsl");
pub static STRUCTURE_WGSL: &str = include_str!("../shaders/structure.wgsl");

pub use architecture::*;
pub use camera::*;
pub use constants::*;
pub use ground::*;
pub use input::*;
pub use lighting::*;
pub use math::*;
pub use particles::*;
pub use scene::*;
