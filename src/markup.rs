//! HTML for the control panel, generated from the parameter table.

use crate::constants::{
    HELP_LINES, MODE_TOGGLE_ID, MODE_TOGGLE_TEXT, PANEL_TITLE, PARAM_INPUT_PREFIX,
    PARAM_LABEL_PREFIX,
};
use fractal_core::{ParamKey, RenderMode, ShaderParameters};

pub fn input_id(key: ParamKey) -> String {
    format!("{PARAM_INPUT_PREFIX}{}", key.id())
}

pub fn label_id(key: ParamKey) -> String {
    format!("{PARAM_LABEL_PREFIX}{}", key.id())
}

pub fn slider_html(key: ParamKey, value: f32) -> String {
    let r = key.range();
    let decimals = r.decimals();
    format!(
        r#"<div class="control"><label id="{label}" for="{input}">{text}</label><input type="range" id="{input}" min="{min}" max="{max}" step="{step}" value="{value:.decimals$}"></div>"#,
        label = label_id(key),
        input = input_id(key),
        text = key.format_value(value),
        min = r.min,
        max = r.max,
        step = r.step,
    )
}

pub fn mode_toggle_html(mode: RenderMode) -> String {
    let checked = if mode.is_2d() { " checked" } else { "" };
    format!(
        r#"<div class="control"><label><input type="checkbox" id="{MODE_TOGGLE_ID}"{checked}> {MODE_TOGGLE_TEXT}</label></div>"#
    )
}

pub fn help_html() -> String {
    let mut html = String::from(r#"<div class="help">"#);
    for line in HELP_LINES {
        html.push_str(&format!("<p>\u{2022} {line}</p>"));
    }
    html.push_str("</div>");
    html
}

/// Full panel body: title, mode checkbox, one slider per parameter, then the
/// usage hints.
pub fn panel_html(params: &ShaderParameters, mode: RenderMode) -> String {
    let mut html = format!("<h2>{PANEL_TITLE}</h2>");
    html.push_str(&mode_toggle_html(mode));
    for key in ParamKey::ALL {
        html.push_str(&slider_html(key, params.get(key)));
    }
    html.push_str(&help_html());
    html
}
