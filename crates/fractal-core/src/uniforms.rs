/// Uniform block consumed by both fragment shaders (`Uniforms` in
/// `shaders/common.wgsl`). 48 bytes, all fields 4-byte scalars or vec2.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FractalUniforms {
    pub resolution: [f32; 2],
    pub rotation: [f32; 2],
    pub time: f32,
    pub zoom: f32,
    pub power: f32,
    pub color_speed: f32,
    pub color_intensity: f32,
    pub distortion_scale: f32,
    pub pulse_speed: f32,
    pub pulse_intensity: f32,
}
