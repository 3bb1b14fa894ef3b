//! Cosine palette shared by both render paths.

use crate::math::{fract, smoothstep01};
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

const A: Vec3 = Vec3::splat(0.5);
const B: Vec3 = Vec3::splat(0.5);
const C: Vec3 = Vec3::new(1.0, 1.0, 0.7);
const D: Vec3 = Vec3::new(0.30, 0.20, 0.20);

/// `a + b * cos(2π (c * t/2 + d))`. Channels stay in [0, 1].
#[inline]
pub fn palette(t: f32) -> Vec3 {
    palette_shifted(t, Vec3::ZERO)
}

/// Palette with the phase vector `d` offset by `shift`.
pub fn palette_shifted(t: f32, shift: Vec3) -> Vec3 {
    let t = t * 0.5;
    let phase = (C * t + D + shift) * TAU;
    A + B * Vec3::new(phase.x.cos(), phase.y.cos(), phase.z.cos())
}

/// Phase shift the 3D scene applies to its palette: the view rotation nudges
/// red/green and a slow breathing term scaled by the rotation nudges blue.
pub fn rotation_shift(rotation: Vec2, time: f32) -> Vec3 {
    let influence = ((time * 0.5).sin() * 0.5 + 0.5) * rotation.length();
    Vec3::new(rotation.x, rotation.y, influence) * 0.1
}

/// Blend between `P(t)` and `P(t + 0.1)` with a smooth-stepped factor taken
/// from the fractional part of `10 t`.
pub fn smooth_color(t: f32, shift: Vec3) -> Vec3 {
    let a = palette_shifted(t, shift);
    let b = palette_shifted(t + 0.1, shift);
    let blend = smoothstep01(fract(t * 10.0));
    a.lerp(b, blend)
}
