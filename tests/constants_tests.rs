// Host-side tests for the page contract and generated panel markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/markup.rs"]
mod markup;

use constants::*;
use fractal_core::{ParamKey, RenderMode, ShaderParameters};
use markup::*;

#[test]
fn page_contract_ids() {
    assert_eq!(CANVAS_ID, "app-canvas");
    assert_eq!(CONTROLS_ID, "controls");
    assert_ne!(PARAM_INPUT_PREFIX, PARAM_LABEL_PREFIX);
}

#[test]
fn element_ids_are_unique() {
    let mut ids: Vec<String> = ParamKey::ALL
        .iter()
        .flat_map(|&k| [input_id(k), label_id(k)])
        .collect();
    ids.push(MODE_TOGGLE_ID.to_string());
    ids.push(CANVAS_ID.to_string());
    ids.push(CONTROLS_ID.to_string());
    let before = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn power_slider_carries_range_and_value() {
    let html = slider_html(ParamKey::Power, 8.0);
    assert!(html.contains(r#"id="param-power""#), "{html}");
    assert!(html.contains(r#"min="2""#), "{html}");
    assert!(html.contains(r#"max="16""#), "{html}");
    assert!(html.contains(r#"step="0.1""#), "{html}");
    assert!(html.contains(r#"value="8.0""#), "{html}");
    assert!(html.contains(">Power: 8.0<"), "{html}");
}

#[test]
fn fine_sliders_show_two_decimals() {
    let html = slider_html(ParamKey::ColorSpeed, 0.2);
    assert!(html.contains(r#"step="0.01""#), "{html}");
    assert!(html.contains(r#"value="0.20""#), "{html}");
    assert!(html.contains("Color Speed: 0.20"), "{html}");
}

#[test]
fn mode_toggle_reflects_mode() {
    let on = mode_toggle_html(RenderMode::TwoD);
    let off = mode_toggle_html(RenderMode::ThreeD);
    assert!(on.contains(" checked>"), "{on}");
    assert!(!off.contains("checked"), "{off}");
    assert!(on.contains(MODE_TOGGLE_TEXT));
    assert!(on.contains(&format!(r#"id="{MODE_TOGGLE_ID}""#)));
}

#[test]
fn panel_is_title_toggle_sliders_then_help() {
    let html = panel_html(&ShaderParameters::default(), RenderMode::default());
    assert!(html.starts_with("<h2>Fractal Controls</h2>"), "{html}");

    let toggle = html.find(MODE_TOGGLE_ID).expect("toggle");
    let mut last = toggle;
    for key in ParamKey::ALL {
        let at = html
            .find(&format!(r#"id="{}""#, input_id(key)))
            .unwrap_or_else(|| panic!("missing {}", key.id()));
        assert!(at > last, "{} out of order", key.id());
        last = at;
    }
    assert_eq!(html.matches(r#"type="range""#).count(), ParamKey::ALL.len());

    let help = html.find(r#"class="help""#).expect("help block");
    assert!(help > last);
    assert!(html.ends_with("</div>"));
}

#[test]
fn help_lists_the_mouse_controls() {
    let help = help_html();
    for line in HELP_LINES {
        assert!(help.contains(&format!("\u{2022} {line}")), "{help}");
    }
    assert!(help.contains("Scroll to zoom in/out"));
    assert!(help.contains("Drag to rotate view"));
}
