//! Host-agnostic core of the fractal explorer.
//!
//! Everything here is plain math over pixel coordinates plus the small amount
//! of state that user input drives. The WGSL shaders in `shaders/` are GPU
//! ports of the same functions; [`cpu`] evaluates them on the CPU.

pub mod bulb;
pub mod camera;
pub mod constants;
pub mod cpu;
pub mod error;
pub mod escape;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod interaction;
pub mod math;
pub mod palette;
pub mod params;
pub mod scene;
pub mod shading;
pub mod uniforms;
pub mod view;

pub use error::ParamError;
pub use interaction::{DragPhase, InteractionController};
pub use params::{ParamKey, ParamRange, RenderMode, ShaderParameters};
pub use scene::{FrameInputs, SceneClock, SceneState};
pub use uniforms::FractalUniforms;
pub use view::ViewState;

// Shaders bundled as string constants
pub static COMMON_WGSL: &str = include_str!("../shaders/common.wgsl");
pub static MANDELBROT_WGSL: &str = include_str!("../shaders/mandelbrot.wgsl");
pub static MANDELBULB_WGSL: &str = include_str!("../shaders/mandelbulb.wgsl");

/// Complete WGSL module for `mode`: the shared prelude plus that mode's
/// fragment entry point.
pub fn shader_source(mode: RenderMode) -> String {
    let body = match mode {
        RenderMode::TwoD => MANDELBROT_WGSL,
        RenderMode::ThreeD => MANDELBULB_WGSL,
    };
    format!("{COMMON_WGSL}\n{body}")
}
