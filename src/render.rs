use fractal_core::gpu::FractalRenderer;
use fractal_core::RenderMode;
use web_sys as web;

/// Create the WebGPU surface for `canvas` and build the renderer for `mode`.
pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    mode: RenderMode,
) -> anyhow::Result<FractalRenderer<'static>> {
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let renderer =
        FractalRenderer::new(&instance, surface, canvas.width(), canvas.height(), mode).await?;
    Ok(renderer)
}
