//! Fixed lighting rig for the structure pass. No dynamic behavior; the rig
//! exists so the architecture reads as lit volume rather than flat fill.

use glam::Vec3;

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct LightRig {
    pub ambient: Vec3,
    pub key: DirectionalLight,
    pub accents: [PointLight; 2],
}

/// Uniform layout consumed by `structure.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    pub ambient: [f32; 4],
    pub key_direction: [f32; 4],
    pub key_color: [f32; 4], // w = intensity
    pub accent_positions: [[f32; 4]; 2], // w = radius
    pub accent_colors: [[f32; 4]; 2],    // w = intensity
}

impl LightRig {
    /// The one authored rig: cool key from above, warm accent near the
    /// bands, cool accent behind the wings.
    pub fn studio() -> Self {
        Self {
            ambient: Vec3::new(0.12, 0.13, 0.16),
            key: DirectionalLight {
                direction: Vec3::new(-0.4, -1.0, -0.3).normalize(),
                color: Vec3::new(0.95, 0.93, 0.88),
                intensity: 0.9,
            },
            accents: [
                PointLight {
                    position: Vec3::new(2.0, 1.5, -2.0),
                    color: Vec3::from(crate::constants::GOLD),
                    intensity: 1.4,
                    radius: 12.0,
                },
                PointLight {
                    position: Vec3::new(-3.0, 4.0, -7.0),
                    color: Vec3::from(crate::constants::PLATINUM),
                    intensity: 1.0,
                    radius: 16.0,
                },
            ],
        }
    }

    pub fn pack(&self) -> LightsUniform {
        let accent = |l: &PointLight| {
            (
                [l.position.x, l.position.y, l.position.z, l.radius],
                [l.color.x, l.color.y, l.color.z, l.intensity],
            )
        };
        let (p0, c0) = accent(&self.accents[0]);
        let (p1, c1) = accent(&self.accents[1]);
        LightsUniform {
            ambient: [self.ambient.x, self.ambient.y, self.ambient.z, 0.0],
            key_direction: [
                self.key.direction.x,
                self.key.direction.y,
                self.key.direction.z,
                0.0,
            ],
            key_color: [
                self.key.color.x,
                self.key.color.y,
                self.key.color.z,
                self.key.intensity,
            ],
            accent_positions: [p0, p1],
            accent_colors: [c0, c1],
        }
    }
}
