// Frame snapshot and uniform layout.

use fractal_core::{
    FractalUniforms, FrameInputs, ParamError, ParamKey, RenderMode, SceneClock, SceneState,
};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

#[test]
fn uniform_block_is_48_bytes() {
    assert_eq!(std::mem::size_of::<FractalUniforms>(), 48);
    assert_eq!(std::mem::size_of::<FractalUniforms>() % 16, 0);
}

#[test]
fn begin_frame_advances_zoom_once() {
    let mut scene = SceneState::new();
    scene.wheel(-1.0); // target 1.1
    let a = scene.begin_frame(0.5);
    assert!((a.zoom - 1.01).abs() < 1e-6);
    assert_eq!(a.time, 0.5);
    let b = scene.begin_frame(0.6);
    assert!(b.zoom > a.zoom);
}

#[test]
fn snapshot_is_detached_from_later_input() {
    let mut scene = SceneState::new();
    let inputs = scene.begin_frame(1.0);
    scene.pointer_down(Vec2::ZERO);
    scene.pointer_move(Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0));
    scene.set_param(ParamKey::Power, 4.0);
    assert_eq!(inputs.rotation, Vec2::ZERO);
    assert_eq!(inputs.params.power, 8.0);
    let next = scene.begin_frame(1.1);
    assert!((next.rotation.x - 2.0).abs() < 1e-6);
    assert_eq!(next.params.power, 4.0);
}

#[test]
fn uniforms_mirror_the_snapshot() {
    let mut scene = SceneState::new();
    scene.set_mode(RenderMode::TwoD);
    scene.set_param(ParamKey::ColorSpeed, 0.7);
    scene.view.rotate_by(0.25, 0.5);
    let inputs = scene.begin_frame(3.0);
    let u = inputs.uniforms(640, 0);
    assert_eq!(u.resolution, [640.0, 1.0]);
    assert_eq!(u.rotation, [0.5, 0.25]);
    assert_eq!(u.time, 3.0);
    assert_eq!(u.zoom, inputs.zoom);
    assert_eq!(u.power, 8.0);
    assert!((u.color_speed - 0.7).abs() < 1e-6);
    assert_eq!(u.distortion_scale, 3.0);
}

#[test]
fn uniforms_cast_to_bytes() {
    let u = FrameInputs::default().uniforms(2, 2);
    let bytes: &[u8] = bytemuck::bytes_of(&u);
    assert_eq!(bytes.len(), 48);
    assert_eq!(&bytes[0..4], &2.0_f32.to_ne_bytes());
}

#[test]
fn toggle_mode_flips_and_resets() {
    let mut scene = SceneState::new();
    scene.wheel(-1.0);
    assert_eq!(scene.toggle_mode(), RenderMode::TwoD);
    assert_eq!(scene.view.zoom_target, 1.0);
    assert_eq!(scene.toggle_mode(), RenderMode::ThreeD);
}

#[test]
fn clock_counts_seconds_since_start() {
    let clock = SceneClock::start();
    let later = Instant::now() + Duration::from_millis(1500);
    let t = clock.elapsed_at(later);
    assert!(t >= 1.5 && t < 2.0, "t={}", t);
    assert!(clock.elapsed() >= 0.0);
}

#[test]
fn raw_control_values_are_parsed_and_clamped() {
    let mut scene = SceneState::new();
    assert_eq!(scene.set_param_str(ParamKey::Power, " 12.5 "), Ok(12.5));
    assert_eq!(scene.set_param_str(ParamKey::PulseIntensity, "9"), Ok(0.5));
    let inputs = scene.begin_frame(0.0);
    assert_eq!(inputs.params.power, 12.5);
    assert_eq!(inputs.params.pulse_intensity, 0.5);
}

#[test]
fn bad_control_values_leave_the_scene_untouched() {
    let mut scene = SceneState::new();
    let err = scene.set_param_str(ParamKey::ColorSpeed, "fast");
    assert!(matches!(err, Err(ParamError::NotANumber { key: "colorSpeed", .. })));
    assert_eq!(scene.params.color_speed, 0.2);
}

#[test]
fn small_left_drag_wraps_rotation_and_the_2d_offset() {
    // angles live in [0, 2π), so nudging below zero lands near 2π
    let mut scene = SceneState::new();
    scene.set_mode(RenderMode::TwoD);
    scene.pointer_down(Vec2::new(50.0, 50.0));
    scene.pointer_move(Vec2::new(49.0, 50.0), Vec2::new(100.0, 100.0));
    let inputs = scene.begin_frame(0.0);
    assert!((inputs.rotation.x - (std::f32::consts::TAU - 0.02)).abs() < 1e-5);

    let c = fractal_core::escape::plane_to_c(Vec2::ZERO, inputs.rotation, inputs.zoom);
    assert!((c.x - 11.026_37).abs() < 1e-3, "{c:?}");

    scene.reset_view();
    let c = fractal_core::escape::plane_to_c(Vec2::ZERO, scene.begin_frame(0.0).rotation, 1.0);
    assert_eq!(c, Vec2::new(-1.5, 0.0));
}
