//! Mandelbulb distance estimator, sphere tracer and normal estimate.

use crate::constants::{
    ANGLE_WOBBLE, BULB_BAILOUT, BULB_ITERATIONS, MAX_DIST, MAX_STEPS, MIN_DIST, NORMAL_EPSILON,
    POWER_WOBBLE,
};
use glam::{Vec2, Vec3};

/// Per-frame distance field. The exponent and the spherical angles are
/// perturbed by the view rotation and time, so the field is rebuilt each
/// frame rather than per sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulbField {
    pub power: f32,
    pub theta_shift: f32,
    pub phi_shift: f32,
}

impl BulbField {
    pub fn new(power: f32, rotation: Vec2, time: f32) -> Self {
        Self {
            power: power + rotation.x * time.sin() * POWER_WOBBLE,
            theta_shift: rotation.y * ANGLE_WOBBLE * time.sin(),
            phi_shift: rotation.x * ANGLE_WOBBLE * time.cos(),
        }
    }

    /// Unperturbed field of the given power.
    pub fn still(power: f32) -> Self {
        Self {
            power,
            theta_shift: 0.0,
            phi_shift: 0.0,
        }
    }

    /// Distance estimate `0.5 ln(r) r / dr`. Approximate: it can under- or
    /// overshoot near the surface and goes negative inside the set.
    pub fn distance(&self, pos: Vec3) -> f32 {
        let power = self.power;
        let mut z = pos;
        let mut dr = 1.0_f32;
        let mut r = 0.0_f32;

        for _ in 0..BULB_ITERATIONS {
            r = z.length();
            if r > BULB_BAILOUT {
                break;
            }
            if r == 0.0 {
                // z sits on the origin; the next step is just `pos`
                z = pos;
                continue;
            }
            let theta = (z.z / r).clamp(-1.0, 1.0).acos() + self.theta_shift;
            let phi = z.y.atan2(z.x) + self.phi_shift;
            dr = r.powf(power - 1.0) * power * dr + 1.0;

            let zr = r.powf(power);
            let theta = theta * power;
            let phi = phi * power;
            z = zr * Vec3::new(theta.sin() * phi.cos(), theta.sin() * phi.sin(), theta.cos()) + pos;
        }

        if r == 0.0 {
            return 0.0;
        }
        0.5 * r.ln() * r / dr
    }
}

/// Sphere-trace from `ro` along `rd`. Returns the hit depth, or exactly
/// [`MAX_DIST`] on a miss or when the step budget runs out.
pub fn ray_march(field: &BulbField, ro: Vec3, rd: Vec3) -> f32 {
    let mut depth = 0.0_f32;
    for _ in 0..MAX_STEPS {
        let dist = field.distance(ro + depth * rd);
        if dist < MIN_DIST {
            return depth;
        }
        depth += dist;
        if depth >= MAX_DIST {
            break;
        }
    }
    MAX_DIST
}

#[inline]
pub fn is_miss(depth: f32) -> bool {
    depth >= MAX_DIST
}

/// Backward-difference gradient of the field at `p`, normalized.
pub fn estimate_normal(field: &BulbField, p: Vec3) -> Vec3 {
    let d = field.distance(p);
    let n = Vec3::splat(d)
        - Vec3::new(
            field.distance(p - Vec3::X * NORMAL_EPSILON),
            field.distance(p - Vec3::Y * NORMAL_EPSILON),
            field.distance(p - Vec3::Z * NORMAL_EPSILON),
        );
    n.normalize_or_zero()
}
