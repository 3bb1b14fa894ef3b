/// Global shortcuts handled on `keydown`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    TogglePanel,
    ToggleMode,
    ResetView,
}

#[inline]
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "h" | "H" => Some(KeyAction::TogglePanel),
        "m" | "M" => Some(KeyAction::ToggleMode),
        "r" | "R" => Some(KeyAction::ResetView),
        _ => None,
    }
}

/// Canvas backing size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, min_px: u32) -> (u32, u32) {
    let w = (css_width * dpr).max(0.0) as u32;
    let h = (css_height * dpr).max(0.0) as u32;
    (w.max(min_px), h.max(min_px))
}
