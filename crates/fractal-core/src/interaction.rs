//! Pointer drag / wheel state machine.
//!
//! Frontends translate their native events into the calls below; the
//! controller only knows positions in pixels and the viewport size.

use crate::constants::ROTATION_DRAG_GAIN;
use crate::view::ViewState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        anchor: Vec2,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionController {
    phase: DragPhase,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn pointer_down(&mut self, pos: Vec2) {
        self.phase = DragPhase::Dragging { anchor: pos };
    }

    /// Apply the drag since the last anchor to `view`. Returns true when the
    /// view changed.
    pub fn pointer_move(&mut self, pos: Vec2, viewport: Vec2, view: &mut ViewState) -> bool {
        let DragPhase::Dragging { anchor } = self.phase else {
            return false;
        };
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return false;
        }
        let delta = (pos - anchor) / viewport;
        view.rotate_by(delta.y * ROTATION_DRAG_GAIN, delta.x * ROTATION_DRAG_GAIN);
        self.phase = DragPhase::Dragging { anchor: pos };
        true
    }

    pub fn pointer_up(&mut self) {
        self.phase = DragPhase::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// One wheel event. Scrolling down (positive delta) zooms out by one step
    /// regardless of how far the wheel reports it moved.
    pub fn wheel(&mut self, delta_y: f32, view: &mut ViewState) {
        view.nudge_zoom(wheel_ticks(delta_y));
    }
}

/// `-sign(delta_y)`, with zero (and NaN) mapping to no movement.
#[inline]
pub fn wheel_ticks(delta_y: f32) -> f32 {
    if delta_y > 0.0 {
        -1.0
    } else if delta_y < 0.0 {
        1.0
    } else {
        0.0
    }
}
