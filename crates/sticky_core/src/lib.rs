//! Sticky widget core: pure state machine, settings format and view-model helpers.
mod address;
mod color;
mod compact;
mod effect;
mod msg;
mod refresh;
mod settings;
mod state;
mod update;
mod view_model;

pub use address::{is_navigable, normalize_url, same_address, DEFAULT_URL};
pub use color::{
    normalize_hex_text, parse_hex_color, ColorParseError, HexColor, Rgba, DEFAULT_BACKGROUND_HEX,
    TOOLBAR_TINT_ALPHA,
};
pub use compact::{
    compact_height, toggle_height, ChromeMetrics, HeightConstraint, HeightSnapshot, Thickness,
    WindowMetrics, WindowMode, COMPACT_MIN_HEIGHT, EXPANDED_FALLBACK_MIN_HEIGHT,
};
pub use effect::Effect;
pub use msg::Msg;
pub use refresh::{
    effective_interval, parse_interval_text, AutoRefreshSession, RefreshPhase, ReloadTicket,
    SessionId, TickOutcome, DEFAULT_INTERVAL_SECS, MIN_INTERVAL_SECS,
};
pub use settings::{
    parse_settings, render_settings, PersistedSettings, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
pub use state::AppState;
pub use update::update;
pub use view_model::AppViewModel;
