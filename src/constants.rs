/// Page contract and control-panel wiring.
///
/// `index.html` provides the canvas and the empty controls container; the
/// panel contents are generated at mount from the parameter table.
pub const CANVAS_ID: &str = "app-canvas";
pub const CONTROLS_ID: &str = "controls";

// Generated element ids
pub const MODE_TOGGLE_ID: &str = "mode-2d";
pub const PARAM_INPUT_PREFIX: &str = "param-"; // + ParamKey::id()
pub const PARAM_LABEL_PREFIX: &str = "label-"; // + ParamKey::id()

pub const PANEL_TITLE: &str = "Fractal Controls";
pub const MODE_TOGGLE_TEXT: &str = "2D Mandelbrot Mode";
pub const HELP_LINES: [&str; 2] = ["Drag to rotate view", "Scroll to zoom in/out"];

// Class toggled on #controls by the `h` key
pub const HIDDEN_CLASS: &str = "hidden";

// Floor for the backing store so a collapsed canvas still configures a surface
pub const MIN_BACKING_PX: u32 = 1;
