//! Escape-time evaluator for the 2D Mandelbrot view.

use crate::constants::{
    ESCAPE_RADIUS_SQ, MAX_ITERATIONS, PLANE_OFFSET_X, PLANE_SCALE,
};
use crate::palette::palette;
use crate::params::ShaderParameters;
use glam::{Vec2, Vec3};

/// Complex constant for a plane coordinate under the current view.
#[inline]
pub fn plane_to_c(uv: Vec2, rotation: Vec2, zoom: f32) -> Vec2 {
    uv * PLANE_SCALE / zoom + Vec2::new(rotation.x * 2.0 + PLANE_OFFSET_X, rotation.y)
}

/// Number of iterations of `z <- z^2 + c` that stayed inside radius 2,
/// capped at [`MAX_ITERATIONS`].
pub fn escape_iterations(c: Vec2) -> u32 {
    let mut z = Vec2::ZERO;
    let mut n = 0;
    for _ in 0..MAX_ITERATIONS {
        z = Vec2::new(z.x * z.x - z.y * z.y + c.x, 2.0 * z.x * z.y + c.y);
        if z.length_squared() > ESCAPE_RADIUS_SQ {
            break;
        }
        n += 1;
    }
    n
}

/// Square-root easing of the normalized iteration count.
#[inline]
pub fn smooth_count(n: u32) -> f32 {
    (n as f32 / MAX_ITERATIONS as f32).sqrt()
}

/// Brightness multiplier shared by the 2D view: 1 + intensity * (0.5 + 0.5 sin(t * speed)).
#[inline]
pub fn pulse_gain(time: f32, params: &ShaderParameters) -> f32 {
    let pulse = (time * params.pulse_speed).sin() * 0.5 + 0.5;
    1.0 + pulse * params.pulse_intensity
}

/// Final 2D pixel colour for plane coordinate `uv`.
pub fn mandelbrot_color(
    uv: Vec2,
    rotation: Vec2,
    zoom: f32,
    time: f32,
    params: &ShaderParameters,
) -> Vec3 {
    let n = escape_iterations(plane_to_c(uv, rotation, zoom));
    let t = smooth_count(n);
    let color = palette(t * params.color_intensity + time * params.color_speed);
    color * pulse_gain(time, params)
}
