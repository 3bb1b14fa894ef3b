use crate::SharedScene;
use fractal_core::gpu::FractalRenderer;
use fractal_core::SceneClock;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: SharedScene,
    pub clock: SceneClock,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<FractalRenderer<'static>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // One borrow per tick: smoothing advances here and nowhere else.
        let inputs = self.scene.borrow_mut().begin_frame(self.clock.elapsed());

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&inputs) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let w = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}

/// Handle to a running `requestAnimationFrame` loop.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the tick closure.
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_next = tick.clone();
    let pending_next = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_next.set(None);
        frame_ctx.borrow_mut().frame();
        pending_next.set(request_frame(&tick_next));
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));

    FrameLoop { tick, pending }
}
