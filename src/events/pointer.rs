use crate::dom::Listener;
use crate::SharedScene;
use glam::Vec2;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

// Drag deltas are normalised by the window, not the canvas.
fn viewport(window: &web::Window) -> Vec2 {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(dim(window.inner_width()), dim(window.inner_height()))
}

/// Drag-to-rotate and wheel-to-zoom.
///
/// Press is only recognised on the canvas so that dragging a slider does not
/// rotate the view; move and release are tracked on the window so a drag that
/// leaves the canvas keeps going until the button is released.
pub fn wire_pointer_handlers(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    scene: &SharedScene,
) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(5);

    let s = scene.clone();
    listeners.push(Listener::typed(
        canvas,
        "pointerdown",
        move |ev: web::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            s.borrow_mut().pointer_down(client_pos(&ev));
        },
    ));

    let s = scene.clone();
    let wnd = window.clone();
    listeners.push(Listener::typed(
        window,
        "pointermove",
        move |ev: web::PointerEvent| {
            let mut scene = s.borrow_mut();
            if !scene.controller.is_dragging() {
                return;
            }
            scene.pointer_move(client_pos(&ev), viewport(&wnd));
        },
    ));

    let s = scene.clone();
    listeners.push(Listener::typed(
        window,
        "pointerup",
        move |_ev: web::PointerEvent| {
            s.borrow_mut().pointer_up();
        },
    ));

    if let Some(root) = document.document_element() {
        let s = scene.clone();
        listeners.push(Listener::typed(
            &root,
            "pointerleave",
            move |_ev: web::PointerEvent| {
                s.borrow_mut().pointer_leave();
            },
        ));
    }

    let s = scene.clone();
    listeners.push(Listener::typed_active(
        window,
        "wheel",
        move |ev: web::WheelEvent| {
            ev.prevent_default();
            s.borrow_mut().wheel(ev.delta_y() as f32);
        },
    ));

    listeners
}
