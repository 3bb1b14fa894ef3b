use crate::constants::{CONTROLS_ID, HIDDEN_CLASS, MODE_TOGGLE_ID};
use crate::dom::Listener;
use crate::markup;
use crate::SharedScene;
use fractal_core::{ParamKey, RenderMode};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The slider panel inside `#controls`.
pub struct Panel {
    root: web::HtmlElement,
    mode_toggle: Option<web::HtmlInputElement>,
    _listeners: Vec<Listener>,
}

fn find<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

impl Panel {
    /// Render the controls from the current scene and wire their listeners.
    pub fn mount(document: &web::Document, scene: &SharedScene) -> anyhow::Result<Self> {
        let root: web::HtmlElement = find(document, CONTROLS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTROLS_ID))?;
        {
            let s = scene.borrow();
            root.set_inner_html(&markup::panel_html(&s.params, s.mode));
        }

        let mut listeners = Vec::with_capacity(ParamKey::ALL.len() + 1);
        for key in ParamKey::ALL {
            let Some(input) = find::<web::HtmlInputElement>(document, &markup::input_id(key)) else {
                log::warn!("[panel] slider for {} not found", key.id());
                continue;
            };
            let label: Option<web::Element> = document.get_element_by_id(&markup::label_id(key));
            let s = scene.clone();
            let el = input.clone();
            listeners.push(Listener::new(&input, "input", move |_ev| {
                let raw = el.value();
                let result = s.borrow_mut().set_param_str(key, &raw);
                match result {
                    Ok(stored) => {
                        if let Some(label) = &label {
                            label.set_text_content(Some(&key.format_value(stored)));
                        }
                    }
                    Err(e) => log::warn!("[panel] {}", e),
                }
            }));
        }

        let mode_toggle = find::<web::HtmlInputElement>(document, MODE_TOGGLE_ID);
        if let Some(toggle) = &mode_toggle {
            let s = scene.clone();
            let el = toggle.clone();
            listeners.push(Listener::new(toggle, "change", move |_ev| {
                s.borrow_mut().set_mode(RenderMode::from_is_2d(el.checked()));
            }));
        }

        log::info!("[panel] mounted {} controls", listeners.len());
        Ok(Self {
            root,
            mode_toggle,
            _listeners: listeners,
        })
    }

    pub fn toggle_visible(&self) {
        _ = self.root.class_list().toggle(HIDDEN_CLASS);
    }

    /// Reflect a mode change made outside the checkbox (keyboard shortcut).
    pub fn sync_mode(&self, mode: RenderMode) {
        if let Some(toggle) = &self.mode_toggle {
            toggle.set_checked(mode.is_2d());
        }
    }
}

impl Drop for Panel {
    fn drop(&mut self) {
        self.root.set_inner_html("");
    }
}
