//! Shared scene state and the per-frame snapshot read by the renderers.
//!
//! Input handlers write into [`SceneState`] whenever events arrive. The frame
//! driver calls [`SceneState::begin_frame`] exactly once per tick; that is the
//! only place smoothing advances, and everything downstream of it (uniform
//! upload, CPU shading) works from the returned [`FrameInputs`] copy.

use crate::error::ParamError;
use crate::interaction::InteractionController;
use crate::params::{ParamKey, RenderMode, ShaderParameters};
use crate::uniforms::FractalUniforms;
use crate::view::ViewState;
use glam::Vec2;
use instant::Instant;

#[derive(Clone, Debug, Default)]
pub struct SceneState {
    pub mode: RenderMode,
    pub view: ViewState,
    pub params: ShaderParameters,
    pub controller: InteractionController,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch render mode. A real change resets rotation and zoom; returns
    /// whether the mode changed.
    pub fn set_mode(&mut self, mode: RenderMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.view.reset();
        self.controller.pointer_up();
        log::info!("[scene] mode -> {}", mode.label());
        true
    }

    pub fn toggle_mode(&mut self) -> RenderMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
        log::info!("[scene] view reset");
    }

    pub fn set_param(&mut self, key: ParamKey, value: f32) -> f32 {
        let stored = self.params.set(key, value);
        log::debug!("[params] {} = {}", key.id(), stored);
        stored
    }

    /// Parse a raw control value and store it clamped; the store is left
    /// untouched on error.
    pub fn set_param_str(&mut self, key: ParamKey, raw: &str) -> Result<f32, ParamError> {
        let stored = self.params.set_from_str(key, raw)?;
        log::debug!("[params] {} = {}", key.id(), stored);
        Ok(stored)
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.controller.pointer_down(pos);
    }

    pub fn pointer_move(&mut self, pos: Vec2, viewport: Vec2) -> bool {
        self.controller.pointer_move(pos, viewport, &mut self.view)
    }

    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.controller.pointer_leave();
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.controller.wheel(delta_y, &mut self.view);
    }

    /// Advance per-frame smoothing and copy out what this frame renders.
    pub fn begin_frame(&mut self, time: f32) -> FrameInputs {
        let rotation = self.view.shader_rotation();
        let zoom = self.view.advance_zoom();
        FrameInputs {
            mode: self.mode,
            time,
            rotation,
            zoom,
            params: self.params,
        }
    }
}

/// Immutable view of one frame's shader inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub mode: RenderMode,
    pub time: f32,
    /// Shader order: `(rotation_y, rotation_x)`.
    pub rotation: Vec2,
    pub zoom: f32,
    pub params: ShaderParameters,
}

impl Default for FrameInputs {
    fn default() -> Self {
        SceneState::default().begin_frame(0.0)
    }
}

impl FrameInputs {
    pub fn uniforms(&self, width: u32, height: u32) -> FractalUniforms {
        let p = &self.params;
        FractalUniforms {
            resolution: [width.max(1) as f32, height.max(1) as f32],
            rotation: self.rotation.to_array(),
            time: self.time,
            zoom: self.zoom,
            power: p.power,
            color_speed: p.color_speed,
            color_intensity: p.color_intensity,
            distortion_scale: p.distortion_scale,
            pulse_speed: p.pulse_speed,
            pulse_intensity: p.pulse_intensity,
        }
    }
}

/// Seconds since the scene was mounted.
#[derive(Clone, Copy, Debug)]
pub struct SceneClock {
    start: Instant,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::start()
    }
}

impl SceneClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_at(&self, now: Instant) -> f32 {
        now.duration_since(self.start).as_secs_f32()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed_at(Instant::now())
    }
}
