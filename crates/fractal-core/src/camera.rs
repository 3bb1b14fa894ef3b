//! Screen-to-plane mapping and the orbiting 3D camera.

use crate::constants::{
    CAMERA_DISTANCE, CAMERA_FOV_Y_DEG, HEX_CELL, HEX_WOBBLE, ORBIT_DRIFT, ORBIT_RADIUS,
    PLANE_HALF_EXTENT,
};
use crate::math::glsl_mod;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

/// Half-height of the visible region on the z=0 plane.
#[inline]
pub fn half_view_height() -> f32 {
    (CAMERA_FOV_Y_DEG.to_radians() * 0.5).tan() * CAMERA_DISTANCE
}

/// Map a normalized-device coordinate to the point it sees on the 2x2 plane.
/// Returns `None` when the pixel looks past the plane's edge.
pub fn plane_uv(ndc: Vec2, aspect: f32) -> Option<Vec2> {
    let uv = ndc * Vec2::new(aspect, 1.0) * half_view_height();
    (uv.x.abs() <= PLANE_HALF_EXTENT && uv.y.abs() <= PLANE_HALF_EXTENT).then_some(uv)
}

/// Offset from `uv` to the nearest centre of a hexagonal lattice.
pub fn hex_coords(uv: Vec2) -> Vec2 {
    let r = Vec2::from(HEX_CELL);
    let h = r * 0.5;
    let a = glsl_mod(uv, r) - h;
    let b = glsl_mod(uv + h, r) - h;
    if a.dot(a) < b.dot(b) {
        a
    } else {
        b
    }
}

/// Small time-varying hexagonal ripple applied to the 3D view's coordinates.
pub fn hex_distort(uv: Vec2, rotation: Vec2, time: f32, scale: f32) -> Vec2 {
    let hex = hex_coords(uv * scale + rotation * (time * 0.5).sin());
    uv + hex * (time.sin() * HEX_WOBBLE)
}

/// Camera orbiting the origin; drag rotation plus a slow automatic drift.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub origin: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl OrbitCamera {
    pub fn new(rotation: Vec2, time: f32, zoom: f32) -> Self {
        let rot_x = rotation.y * TAU + time * ORBIT_DRIFT;
        let rot_y = rotation.x * TAU + time * ORBIT_DRIFT;
        let origin = Vec3::new(
            rot_y.sin() * rot_x.cos(),
            rot_x.sin(),
            rot_y.cos() * rot_x.cos(),
        ) * ORBIT_RADIUS
            / zoom;
        Self::looking_at_origin(origin)
    }

    pub fn looking_at_origin(origin: Vec3) -> Self {
        let forward = (-origin).normalize_or_zero();
        let right = Vec3::Y.cross(forward).normalize_or_zero();
        let up = forward.cross(right);
        Self {
            origin,
            forward,
            right,
            up,
        }
    }

    /// Primary ray direction for plane coordinate `uv`.
    pub fn ray_dir(&self, uv: Vec2) -> Vec3 {
        (self.forward + self.right * uv.x + self.up * uv.y).normalize_or_zero()
    }
}
