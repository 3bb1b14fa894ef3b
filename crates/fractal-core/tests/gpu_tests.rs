// Surface format selection and GPU error reporting (no device needed).
#![cfg(feature = "gpu")]

use fractal_core::gpu::{pick_surface_format, GpuError};

fn caps(formats: Vec<wgpu::TextureFormat>) -> wgpu::SurfaceCapabilities {
    wgpu::SurfaceCapabilities {
        formats,
        present_modes: vec![wgpu::PresentMode::Fifo],
        alpha_modes: vec![wgpu::CompositeAlphaMode::Opaque],
        usages: wgpu::TextureUsages::RENDER_ATTACHMENT,
    }
}

#[test]
fn prefers_a_linear_format() {
    let c = caps(vec![
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Bgra8Unorm,
    ]);
    assert_eq!(pick_surface_format(&c), Some(wgpu::TextureFormat::Bgra8Unorm));
}

#[test]
fn falls_back_to_first_srgb_format() {
    let c = caps(vec![wgpu::TextureFormat::Rgba8UnormSrgb]);
    assert_eq!(pick_surface_format(&c), Some(wgpu::TextureFormat::Rgba8UnormSrgb));
}

#[test]
fn empty_format_list_is_its_own_error() {
    assert_eq!(pick_surface_format(&caps(vec![])), None);
    let msg = GpuError::NoSurfaceFormat.to_string();
    assert!(msg.contains("format"), "{msg}");
    assert_ne!(msg, GpuError::NoAdapter.to_string());
}
