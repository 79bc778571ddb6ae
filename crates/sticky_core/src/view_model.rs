use crate::{HexColor, RefreshPhase, Rgba};

/// Everything the toolbar needs to draw itself.
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub title: String,
    pub url_text: String,
    pub settings_visible: bool,
    /// The settings button is disabled in compact mode.
    pub settings_enabled: bool,
    pub topmost: bool,
    pub auto_refresh_enabled: bool,
    pub interval_text: String,
    pub refresh_phase: RefreshPhase,
    pub background_text: String,
    pub background: HexColor,
    pub toolbar_tint: Rgba,
    /// Light toolbar text for dark tints.
    pub toolbar_text_light: bool,
    pub compact: bool,
    pub content_hidden: bool,
    pub content_visible: bool,
    pub dirty: bool,
}
