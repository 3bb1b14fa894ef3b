#![cfg(target_arch = "wasm32")]
use dom::Listener;
use fractal_core::{SceneClock, SceneState};
use frame::{FrameContext, FrameLoop};
use panel::Panel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod markup;
mod panel;
mod render;

/// Scene shared between DOM handlers and the frame loop.
pub(crate) type SharedScene = Rc<RefCell<SceneState>>;

/// Everything owned by a mounted scene. Dropping it stops the frame loop and
/// unregisters every listener.
struct App {
    frame_loop: FrameLoop,
    _listeners: Vec<Listener>,
    _panel: Rc<Panel>,
}

impl Drop for App {
    fn drop(&mut self) {
        self.frame_loop.stop();
        log::info!("fractal-web unmounted");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) -> Listener {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    Listener::new(window, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas_resize);
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fractal-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear down the running scene: cancels the pending animation frame, removes
/// all listeners and clears the control panel.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    drop(app);
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let scene: SharedScene = Rc::new(RefCell::new(SceneState::new()));
    let panel = Rc::new(Panel::mount(&document, &scene)?);

    let mut listeners = vec![wire_canvas_resize(&window, &canvas)];
    listeners.extend(events::wire_pointer_handlers(
        &window, &document, &canvas, &scene,
    ));
    listeners.push(events::wire_keyboard(&window, &scene, &panel));

    let mode = scene.borrow().mode;
    let gpu = match render::init_gpu(&canvas, mode).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        scene,
        clock: SceneClock::start(),
        canvas,
        gpu,
    }));
    let frame_loop = frame::start_loop(frame_ctx);

    APP.with(|slot| {
        let previous = slot.borrow_mut().replace(App {
            frame_loop,
            _listeners: listeners,
            _panel: panel,
        });
        drop(previous);
    });
    Ok(())
}
