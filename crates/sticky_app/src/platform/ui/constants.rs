pub const WINDOW_TITLE: &str = "Sticky Mini Web";

/// Toolbar page; talks to the shell through `window.ipc` only.
pub const TOOLBAR_HTML: &str = include_str!("toolbar.html");

/// DodgerBlue, the highlight of the settings button while the panel is open.
pub const SETTINGS_ACTIVE_COLOR: &str = "#1E90FF";

/// Width used for the maximum-size cap when only the height is bounded.
pub const UNBOUNDED_WIDTH: f64 = 16384.0;
