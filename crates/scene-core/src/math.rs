//! Small interpolation helpers mirrored by the WGSL `hermite` function.

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic Hermite ramp clamped between the edges. Unlike GLSL `smoothstep`,
/// reversed edges (`edge0 > edge1`) are well defined and produce the
/// descending ramp; the shaders rely on that for the distance fades.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
