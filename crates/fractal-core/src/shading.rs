//! Surface shading for ray-march hits.

use crate::constants::{
    AMBIENT, COLOR_TIME_SCALE, CYCLE_BLEND, FOG_DENSITY, RIM_EXPONENT, RIM_STRENGTH,
    SPECULAR_EXPONENT, SPECULAR_STRENGTH, SURFACE_PULSE,
};
use crate::math::{reflect, smoothstep01};
use crate::palette::{rotation_shift, smooth_color};
use glam::{Vec2, Vec3};

/// Everything the shading step needs that is constant across a frame.
#[derive(Clone, Copy, Debug)]
pub struct ShadeContext {
    pub rotation: Vec2,
    pub color_time: f32,
    pub palette_shift: Vec3,
    pub light_dir: Vec3,
}

impl ShadeContext {
    pub fn new(rotation: Vec2, time: f32) -> Self {
        Self {
            rotation,
            color_time: time * COLOR_TIME_SCALE,
            palette_shift: rotation_shift(rotation, time),
            light_dir: Vec3::ONE.normalize(),
        }
    }

    #[inline]
    fn sc(&self, t: f32) -> Vec3 {
        smooth_color(t, self.palette_shift)
    }

    /// Colour of a hit at `p` with surface normal `normal`, reached along
    /// `rd` after travelling `depth`.
    pub fn shade(&self, p: Vec3, normal: Vec3, rd: Vec3, depth: f32) -> Vec3 {
        let ct = self.color_time;
        let light = self.light_dir;

        let mut base = self.sc(p.length() * 0.1 + ct);
        base *= self.sc(normal.dot(Vec3::ONE) * 0.2 + ct * 0.7);
        let mut color = base;

        let rim = smoothstep01(1.0 - normal.dot(-rd).max(0.0));
        color += self.sc(rim + ct * 0.5) * rim.powf(RIM_EXPONENT) * RIM_STRENGTH;

        let reflected = reflect(-light, normal);
        let spec = smoothstep01(reflected.dot(-rd).max(0.0).powf(SPECULAR_EXPONENT));
        color += self.sc(spec + ct) * spec * SPECULAR_STRENGTH;

        let diff = smoothstep01(normal.dot(light).max(0.0));
        color *= diff;
        color += base * AMBIENT;

        let pulse = smoothstep01((ct + p.length() * 2.0).sin() * 0.5 + 0.5);
        color *= 1.0 + pulse * SURFACE_PULSE;

        let fog = smoothstep01((-depth * FOG_DENSITY).exp());
        color *= fog;

        let cycle = self.sc(self.rotation.x + self.rotation.y + ct * 0.5);
        color.lerp(cycle, CYCLE_BLEND)
    }
}
