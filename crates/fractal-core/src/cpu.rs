//! CPU reference renderer.
//!
//! Evaluates the same per-pixel functions as the WGSL shaders, so tests can
//! check rendered colours without a GPU.

use crate::bulb::{estimate_normal, is_miss, ray_march, BulbField};
use crate::camera::{hex_distort, plane_uv, OrbitCamera};
use crate::escape::mandelbrot_color;
use crate::params::RenderMode;
use crate::scene::FrameInputs;
use crate::shading::ShadeContext;
use glam::{Vec2, Vec3};

/// Colour shown where nothing is drawn (outside the plane, ray misses).
pub const BACKGROUND: Vec3 = Vec3::ZERO;

/// Per-frame state derived once from [`FrameInputs`].
#[derive(Clone, Copy, Debug)]
pub struct FramePlan {
    inputs: FrameInputs,
    field: BulbField,
    camera: OrbitCamera,
    shade: ShadeContext,
}

impl FramePlan {
    pub fn new(inputs: &FrameInputs) -> Self {
        Self {
            inputs: *inputs,
            field: BulbField::new(inputs.params.power, inputs.rotation, inputs.time),
            camera: OrbitCamera::new(inputs.rotation, inputs.time, inputs.zoom),
            shade: ShadeContext::new(inputs.rotation, inputs.time),
        }
    }

    /// Colour for a plane coordinate in the active mode.
    pub fn shade_uv(&self, uv: Vec2) -> Vec3 {
        let i = &self.inputs;
        match i.mode {
            RenderMode::TwoD => mandelbrot_color(uv, i.rotation, i.zoom, i.time, &i.params),
            RenderMode::ThreeD => {
                let uv = hex_distort(uv, i.rotation, i.time, i.params.distortion_scale);
                let ro = self.camera.origin;
                let rd = self.camera.ray_dir(uv);
                let depth = ray_march(&self.field, ro, rd);
                if is_miss(depth) {
                    return BACKGROUND;
                }
                let p = ro + rd * depth;
                let normal = estimate_normal(&self.field, p);
                self.shade.shade(p, normal, rd, depth)
            }
        }
    }

    /// Colour for a normalized-device coordinate (y up).
    pub fn shade_ndc(&self, ndc: Vec2, aspect: f32) -> Vec3 {
        match plane_uv(ndc, aspect) {
            Some(uv) => self.shade_uv(uv),
            None => BACKGROUND,
        }
    }
}

/// Pixel centre to NDC for a `width` x `height` image, row 0 at the top.
#[inline]
pub fn pixel_ndc(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new(
        (x as f32 + 0.5) / w * 2.0 - 1.0,
        1.0 - (y as f32 + 0.5) / h * 2.0,
    )
}

#[inline]
fn to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Render a full frame into a tightly packed RGBA8 buffer.
pub fn render_rgba8(inputs: &FrameInputs, width: u32, height: u32) -> Vec<u8> {
    let plan = FramePlan::new(inputs);
    let aspect = width.max(1) as f32 / height.max(1) as f32;
    let mut out = Vec::with_capacity(width as usize * height as usize * 4);
    for y in 0..height {
        for x in 0..width {
            let c = plan.shade_ndc(pixel_ndc(x, y, width, height), aspect);
            out.extend_from_slice(&[to_u8(c.x), to_u8(c.y), to_u8(c.z), 255]);
        }
    }
    out
}
