use serde::Serialize;
use sticky_core::{AppViewModel, RefreshPhase};

use super::constants::SETTINGS_ACTIVE_COLOR;

/// What the toolbar page receives through `window.stickyToolbar.apply`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolbarView {
    pub title: String,
    pub url_text: String,
    pub settings_visible: bool,
    pub settings_enabled: bool,
    pub settings_accent: &'static str,
    pub topmost: bool,
    pub auto_refresh: bool,
    pub interval_text: String,
    pub refresh_state: &'static str,
    pub background_text: String,
    pub toolbar_tint: String,
    pub light_text: bool,
    pub compact: bool,
    pub content_hidden: bool,
    pub toggle_height: f64,
}

pub fn toolbar_view(view: &AppViewModel, toggle_height: f64) -> ToolbarView {
    ToolbarView {
        title: view.title.clone(),
        url_text: view.url_text.clone(),
        settings_visible: view.settings_visible,
        settings_enabled: view.settings_enabled,
        settings_accent: SETTINGS_ACTIVE_COLOR,
        topmost: view.topmost,
        auto_refresh: view.auto_refresh_enabled,
        interval_text: view.interval_text.clone(),
        refresh_state: phase_label(view.refresh_phase),
        background_text: view.background_text.clone(),
        toolbar_tint: view.toolbar_tint.to_css(),
        light_text: view.toolbar_text_light,
        compact: view.compact,
        content_hidden: view.content_hidden,
        toggle_height,
    }
}

fn phase_label(phase: RefreshPhase) -> &'static str {
    match phase {
        RefreshPhase::Stopped => "stopped",
        RefreshPhase::Armed => "armed",
        RefreshPhase::Refreshing => "refreshing",
    }
}

/// Script that pushes `view` into the toolbar page.
///
/// Guarded so an update racing the toolbar's own load is a no-op; the page
/// asks for a full render once it is ready.
pub fn render(view: &AppViewModel, toggle_height: f64) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(&toolbar_view(view, toggle_height))?;
    Ok(format!(
        "window.stickyToolbar && window.stickyToolbar.apply({json});"
    ))
}
