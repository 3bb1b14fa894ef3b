//! Rotation and zoom state driven by pointer input.

use crate::constants::{ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN, ZOOM_SMOOTHING, ZOOM_STEP};
use glam::Vec2;
use std::f32::consts::TAU;

/// Wrap an angle into [0, 2π).
#[inline]
pub fn wrap_angle(a: f32) -> f32 {
    let w = a.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if w >= TAU {
        0.0
    } else {
        w
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Accumulated vertical drag.
    pub rotation_x: f32,
    /// Accumulated horizontal drag.
    pub rotation_y: f32,
    pub zoom_target: f32,
    pub zoom_current: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            zoom_target: ZOOM_DEFAULT,
            zoom_current: ZOOM_DEFAULT,
        }
    }
}

impl ViewState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add to both rotation angles, keeping each in [0, 2π).
    pub fn rotate_by(&mut self, dx: f32, dy: f32) {
        self.rotation_x = wrap_angle(self.rotation_x + dx);
        self.rotation_y = wrap_angle(self.rotation_y + dy);
    }

    /// Move the zoom target by `ticks` wheel steps, clamped.
    pub fn nudge_zoom(&mut self, ticks: f32) {
        self.zoom_target = (self.zoom_target + ticks * ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// One frame of exponential smoothing toward the target.
    pub fn advance_zoom(&mut self) -> f32 {
        self.zoom_current += ZOOM_SMOOTHING * (self.zoom_target - self.zoom_current);
        self.zoom_current
    }

    /// Rotation in the order the shaders consume it: `(rotation_y, rotation_x)`.
    #[inline]
    pub fn shader_rotation(&self) -> Vec2 {
        Vec2::new(self.rotation_y, self.rotation_x)
    }
}
