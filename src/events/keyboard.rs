use crate::dom::Listener;
use crate::input::{key_action, KeyAction};
use crate::panel::Panel;
use crate::SharedScene;
use std::rc::Rc;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, scene: &SharedScene, panel: &Panel) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || ev.repeat() {
        return;
    }
    let Some(action) = key_action(&ev.key()) else {
        return;
    };
    match action {
        KeyAction::TogglePanel => panel.toggle_visible(),
        KeyAction::ToggleMode => {
            let mode = scene.borrow_mut().toggle_mode();
            panel.sync_mode(mode);
        }
        KeyAction::ResetView => scene.borrow_mut().reset_view(),
    }
    ev.prevent_default();
}

pub fn wire_keyboard(window: &web::Window, scene: &SharedScene, panel: &Rc<Panel>) -> Listener {
    let scene = scene.clone();
    let panel = panel.clone();
    Listener::typed(window, "keydown", move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &scene, &panel);
    })
}
