//! Shader-style scalar helpers.
//!
//! These follow the GLSL/WGSL definitions rather than Rust's, so the CPU
//! evaluators produce the same values as the GPU path.

use glam::{Vec2, Vec3};

/// `x - floor(x)`, which stays in [0, 1) for negative inputs too.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Floored modulo, matching GLSL `mod`.
#[inline]
pub fn glsl_mod(x: Vec2, y: Vec2) -> Vec2 {
    x - y * (x / y).floor()
}

/// Cubic Hermite easing on [edge0, edge1], clamped to [0, 1].
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[inline]
pub fn smoothstep01(x: f32) -> f32 {
    smoothstep(0.0, 1.0, x)
}

/// Reflect incident vector `i` about normal `n`.
#[inline]
pub fn reflect(i: Vec3, n: Vec3) -> Vec3 {
    i - 2.0 * n.dot(i) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fract_is_floor_based() {
        assert!((fract(1.25) - 0.25).abs() < 1e-6);
        assert!((fract(-0.25) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn glsl_mod_wraps_negatives_upward() {
        let m = glsl_mod(Vec2::new(-0.5, 2.5), Vec2::new(1.0, 1.0));
        assert!((m.x - 0.5).abs() < 1e-6);
        assert!((m.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn smoothstep_clamps_and_eases() {
        assert_eq!(smoothstep01(-1.0), 0.0);
        assert_eq!(smoothstep01(2.0), 1.0);
        assert!((smoothstep01(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn reflect_flips_normal_component() {
        let r = reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert!((r - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
    }
}
