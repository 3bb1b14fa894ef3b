// Palette periodicity and bounds.

use fractal_core::palette::{palette, palette_shifted, rotation_shift, smooth_color};
use glam::{Vec2, Vec3};

fn close(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() < eps
}

#[test]
fn palette_channels_stay_in_unit_range() {
    for i in 0..=200 {
        let t = i as f32 / 100.0 - 1.0;
        let c = palette(t);
        for ch in c.to_array() {
            assert!((0.0..=1.0).contains(&ch), "t={} channel={}", t, ch);
            // Looser bound stated for the unclamped output
            assert!((-0.5..=1.5).contains(&ch));
        }
    }
}

#[test]
fn red_and_green_repeat_every_two_units() {
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let a = palette(t);
        let b = palette(t + 2.0);
        assert!((a.x - b.x).abs() < 1e-4);
        assert!((a.y - b.y).abs() < 1e-4);
    }
}

#[test]
fn full_palette_repeats_every_twenty_units() {
    // Blue runs at 0.7x, so the whole vector only lines up again at t + 20
    for i in 0..=10 {
        let t = i as f32 / 10.0;
        assert!(close(palette(t), palette(t + 20.0), 1e-3));
    }
}

#[test]
fn zero_shift_matches_plain_palette() {
    assert_eq!(palette(0.37), palette_shifted(0.37, Vec3::ZERO));
}

#[test]
fn rotation_shift_vanishes_without_rotation() {
    assert_eq!(rotation_shift(Vec2::ZERO, 3.0), Vec3::ZERO);
    let s = rotation_shift(Vec2::new(1.0, 0.5), 0.0);
    assert!((s.x - 0.1).abs() < 1e-6);
    assert!((s.y - 0.05).abs() < 1e-6);
}

#[test]
fn smooth_color_starts_at_palette_on_tenths() {
    // fract(10t) == 0 puts the blend fully on the first tap
    let t = 0.5;
    assert!(close(smooth_color(t, Vec3::ZERO), palette(t), 1e-4));
}
