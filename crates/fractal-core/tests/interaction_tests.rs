// Drag / wheel state machine.

use fractal_core::interaction::wheel_ticks;
use fractal_core::{DragPhase, InteractionController, ViewState};
use glam::Vec2;

const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn move_without_press_does_nothing() {
    let mut c = InteractionController::new();
    let mut v = ViewState::default();
    assert!(!c.pointer_move(Vec2::new(100.0, 100.0), VIEWPORT, &mut v));
    assert_eq!(v, ViewState::default());
}

#[test]
fn drag_accumulates_scaled_normalized_deltas() {
    let mut c = InteractionController::new();
    let mut v = ViewState::default();
    c.pointer_down(Vec2::new(100.0, 100.0));
    assert!(c.is_dragging());
    assert!(c.pointer_move(Vec2::new(180.0, 130.0), VIEWPORT, &mut v));
    // horizontal drag feeds rotation_y, vertical feeds rotation_x
    assert!((v.rotation_y - 80.0 / 800.0 * 2.0).abs() < 1e-6);
    assert!((v.rotation_x - 30.0 / 600.0 * 2.0).abs() < 1e-6);

    // anchor moved, so the next delta is relative to the last position
    c.pointer_move(Vec2::new(180.0, 130.0), VIEWPORT, &mut v);
    assert!((v.rotation_y - 0.2).abs() < 1e-6);
}

#[test]
fn release_and_leave_end_the_drag() {
    let mut c = InteractionController::new();
    c.pointer_down(Vec2::ZERO);
    c.pointer_up();
    assert_eq!(c.phase(), DragPhase::Idle);

    c.pointer_down(Vec2::ZERO);
    c.pointer_leave();
    assert_eq!(c.phase(), DragPhase::Idle);

    let mut v = ViewState::default();
    assert!(!c.pointer_move(Vec2::new(50.0, 50.0), VIEWPORT, &mut v));
}

#[test]
fn negative_drag_wraps_upward() {
    let mut c = InteractionController::new();
    let mut v = ViewState::default();
    c.pointer_down(Vec2::new(400.0, 300.0));
    c.pointer_move(Vec2::new(320.0, 300.0), VIEWPORT, &mut v);
    assert!(v.rotation_y > 6.0 && v.rotation_y < std::f32::consts::TAU);
}

#[test]
fn empty_viewport_is_ignored() {
    let mut c = InteractionController::new();
    let mut v = ViewState::default();
    c.pointer_down(Vec2::ZERO);
    assert!(!c.pointer_move(Vec2::ONE, Vec2::ZERO, &mut v));
}

#[test]
fn wheel_steps_by_sign_only() {
    assert_eq!(wheel_ticks(120.0), -1.0);
    assert_eq!(wheel_ticks(0.5), -1.0);
    assert_eq!(wheel_ticks(-3.0), 1.0);
    assert_eq!(wheel_ticks(0.0), 0.0);
    assert_eq!(wheel_ticks(f32::NAN), 0.0);

    let mut c = InteractionController::new();
    let mut v = ViewState::default();
    c.wheel(-100.0, &mut v);
    assert!((v.zoom_target - 1.1).abs() < 1e-6);
    c.wheel(100.0, &mut v);
    c.wheel(100.0, &mut v);
    assert!((v.zoom_target - 0.9).abs() < 1e-6);
    c.wheel(0.0, &mut v);
    assert!((v.zoom_target - 0.9).abs() < 1e-6);
}

#[test]
fn wheel_works_while_dragging() {
    let mut c = InteractionController::new();
    let mut v = ViewState::default();
    c.pointer_down(Vec2::ZERO);
    c.wheel(-1.0, &mut v);
    assert!(c.is_dragging());
    assert!(v.zoom_target > 1.0);
}
