//! The procedural centerpiece: a monolith, stacked accent bands, two wings
//! and five floating platforms, built once and posed fresh every frame.
//!
//! Platform float is a bounded oscillation around a stored base position,
//! not an accumulating increment, so platforms never wander from their
//! authored spots over long sessions.

use glam::{Mat4, Quat, Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Monolith,
    Band,
    Wing,
    Platform,
}

#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub base_position: Vec3,
    pub size: Vec3,
    pub color: [f32; 3],
    /// Phase tag for platform float; zero for everything else.
    pub float_offset: f32,
}

/// GPU layout for one box instance. Matches `structure.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StructureInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Unit-cube vertex with its face normal, 36 per box.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

const CHARCOAL: [f32; 3] = [0.10, 0.11, 0.13];

const PLATFORM_POSITIONS: [[f32; 3]; 5] = [
    [3.5, 2.0, 1.5],
    [-3.0, 3.2, -1.0],
    [2.2, 4.5, -2.5],
    [-1.8, 1.2, 2.8],
    [0.5, 5.2, 1.0],
];

#[derive(Clone, Debug)]
pub struct Architecture {
    nodes: Vec<Node>,
}

impl Architecture {
    /// Authored layout: one monolith, 8 bands at `y = -2 + i`, wings at
    /// `x = +-2.5`, 5 platforms with random float phases. Node count and
    /// local transforms are fixed for the scene lifetime.
    pub fn build(rng: &mut impl Rng) -> Self {
        let mut nodes = Vec::with_capacity(16);
        nodes.push(Node {
            kind: NodeKind::Monolith,
            base_position: Vec3::new(0.0, 1.0, 0.0),
            size: Vec3::new(1.2, 6.0, 1.2),
            color: CHARCOAL,
            float_offset: 0.0,
        });
        for i in 0..8 {
            nodes.push(Node {
                kind: NodeKind::Band,
                base_position: Vec3::new(0.0, -2.0 + i as f32, 0.0),
                size: Vec3::new(1.4, 0.06, 1.4),
                color: GOLD,
                float_offset: 0.0,
            });
        }
        for sign in [-1.0f32, 1.0] {
            nodes.push(Node {
                kind: NodeKind::Wing,
                base_position: Vec3::new(sign * 2.5, 0.0, 0.0),
                size: Vec3::new(0.8, 4.0, 0.8),
                color: CHARCOAL,
                float_offset: 0.0,
            });
        }
        for pos in PLATFORM_POSITIONS {
            nodes.push(Node {
                kind: NodeKind::Platform,
                base_position: Vec3::from(pos),
                size: Vec3::new(1.0, 0.12, 1.0),
                color: PLATINUM,
                float_offset: rng.gen_range(0.0..TAU),
            });
        }
        Self { nodes }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Pose every node for the current frame. Pure in `(t, mouse)`.
    pub fn instances(&self, t: f32, mouse: Vec2) -> Vec<StructureInstance> {
        let (rot_x, rot_y) = tilt(mouse);
        let group = Mat4::from_scale_rotation_translation(
            Vec3::splat(breathing_scale(t)),
            Quat::from_rotation_y(rot_y) * Quat::from_rotation_x(rot_x),
            Vec3::from(STRUCTURE_OFFSET),
        );
        self.nodes
            .iter()
            .map(|node| {
                let mut pos = node.base_position;
                if node.kind == NodeKind::Platform {
                    pos.y += platform_float(t, node.float_offset);
                }
                let local = Mat4::from_translation(pos) * Mat4::from_scale(node.size);
                StructureInstance {
                    model: (group * local).to_cols_array_2d(),
                    color: [node.color[0], node.color[1], node.color[2], 1.0],
                }
            })
            .collect()
    }

    pub fn dispose(&mut self) {
        self.nodes = Vec::new();
    }
}

/// Whole-structure tilt toward the pointer, `(rot_x, rot_y)` in radians.
pub fn tilt(mouse: Vec2) -> (f32, f32) {
    (mouse.y * TILT_X_GAIN, mouse.x * TILT_Y_GAIN)
}

/// Slow uniform breathing pulse, recomputed fresh each frame.
pub fn breathing_scale(t: f32) -> f32 {
    1.0 + (t * BREATH_RATE).sin() * BREATH_AMPLITUDE
}

/// Bounded vertical float for a platform with the given phase tag.
pub fn platform_float(t: f32, float_offset: f32) -> f32 {
    (t * PLATFORM_FLOAT_RATE + float_offset).sin() * PLATFORM_FLOAT_AMPLITUDE
}

/// Unit cube centered at the origin, expanded per-node by the instance
/// model matrix.
pub fn cube_vertices() -> Vec<CubeVertex> {
    let mut verts = Vec::with_capacity(36);
    let mut quad = |a: [f32; 3], b: [f32; 3], c: [f32; 3], d: [f32; 3], n: [f32; 3]| {
        for position in [a, b, c, a, c, d] {
            verts.push(CubeVertex {
                position,
                normal: n,
            });
        }
    };
    let h = 0.5f32;
    // +z, -z
    quad([-h, -h, h], [h, -h, h], [h, h, h], [-h, h, h], [0.0, 0.0, 1.0]);
    quad([h, -h, -h], [-h, -h, -h], [-h, h, -h], [h, h, -h], [0.0, 0.0, -1.0]);
    // +x, -x
    quad([h, -h, h], [h, -h, -h], [h, h, -h], [h, h, h], [1.0, 0.0, 0.0]);
    quad([-h, -h, -h], [-h, -h, h], [-h, h, h], [-h, h, -h], [-1.0, 0.0, 0.0]);
    // +y, -y
    quad([-h, h, h], [h, h, h], [h, h, -h], [-h, h, -h], [0.0, 1.0, 0.0]);
    quad([-h, -h, -h], [h, -h, -h], [h, -h, h], [-h, -h, h], [0.0, -1.0, 0.0]);
    verts
}
