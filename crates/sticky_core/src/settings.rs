//! Flat settings format: one field per line, fixed order, additive only.
//!
//! Line order: url, width, height, auto-refresh flag, interval seconds,
//! background hex, content-hidden flag. Older files simply stop early and the
//! missing tail takes defaults. New fields must be appended, never inserted.

use crate::address::{normalize_url, DEFAULT_URL};
use crate::color::{parse_hex_color, HexColor};
use crate::refresh::{DEFAULT_INTERVAL_SECS, MIN_INTERVAL_SECS};

pub const DEFAULT_WIDTH: f64 = 320.0;
pub const DEFAULT_HEIGHT: f64 = 420.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PersistedSettings {
    pub url: String,
    pub width: f64,
    pub height: f64,
    pub auto_refresh_enabled: bool,
    pub auto_refresh_interval_secs: u32,
    pub background: HexColor,
    pub content_hidden: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            auto_refresh_enabled: false,
            auto_refresh_interval_secs: DEFAULT_INTERVAL_SECS,
            background: HexColor::WHITE,
            content_hidden: false,
        }
    }
}

/// Decode settings text. Never fails: every unreadable field keeps its default.
pub fn parse_settings(text: &str) -> PersistedSettings {
    let mut settings = PersistedSettings::default();
    let lines: Vec<&str> = text.lines().collect();
    let field = |index: usize| lines.get(index).map(|line| line.trim());

    if let Some(url) = field(0).filter(|line| !line.is_empty()) {
        let normalized = normalize_url(url);
        if !normalized.is_empty() {
            settings.url = normalized;
        }
    }
    if let Some(width) = field(1).and_then(parse_dimension) {
        settings.width = width;
    }
    if let Some(height) = field(2).and_then(parse_dimension) {
        settings.height = height;
    }
    if let Some(flag) = field(3) {
        settings.auto_refresh_enabled = flag == "1";
    }
    if let Some(interval) = field(4) {
        settings.auto_refresh_interval_secs = parse_stored_interval(interval);
    }
    if let Some(hex) = field(5).filter(|line| !line.is_empty()) {
        // Malformed colors silently become the default white.
        settings.background = parse_hex_color(hex).unwrap_or_default();
    }
    if let Some(flag) = field(6) {
        settings.content_hidden = flag == "1";
    }

    settings
}

/// Encode settings in the fixed line order. No trailing newline.
pub fn render_settings(settings: &PersistedSettings) -> String {
    let url = normalize_url(&settings.url);
    [
        url,
        settings.width.to_string(),
        settings.height.to_string(),
        flag(settings.auto_refresh_enabled).to_string(),
        settings.auto_refresh_interval_secs.to_string(),
        settings.background.to_hex(),
        flag(settings.content_hidden).to_string(),
    ]
    .join("\n")
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

// Invariant culture: `.` decimal separator only.
fn parse_dimension(text: &str) -> Option<f64> {
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

fn parse_stored_interval(text: &str) -> u32 {
    match text.parse::<i64>() {
        Ok(seconds) if seconds >= i64::from(MIN_INTERVAL_SECS) => {
            u32::try_from(seconds).unwrap_or(u32::MAX)
        }
        _ => DEFAULT_INTERVAL_SECS,
    }
}
