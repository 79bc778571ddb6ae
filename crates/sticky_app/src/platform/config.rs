//! Compile-time widget defaults plus the few environment overrides.

use std::env;
use std::path::PathBuf;

use sticky_core::{ChromeMetrics, Thickness, EXPANDED_FALLBACK_MIN_HEIGHT};
use sticky_engine::default_data_dir;
use sticky_logging::sticky_warn;

pub const DATA_DIR_ENV: &str = "STICKY_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "STICKY_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    /// Explicit data directory; `None` uses the per-user default.
    pub data_dir: Option<PathBuf>,
    /// Height of the always-visible toolbar strip.
    pub strip_height: f64,
    /// Extra toolbar height while the settings panel is open.
    pub panel_height: f64,
    pub font_size: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub toggle_min_height: f64,
    pub toggle_margin: Thickness,
    pub layout_margin: Thickness,
    /// Borderless window: no caption, no resize frame.
    pub chrome: ChromeMetrics,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            strip_height: 36.0,
            panel_height: 68.0,
            font_size: 14.0,
            min_width: 200.0,
            min_height: EXPANDED_FALLBACK_MIN_HEIGHT,
            toggle_min_height: 14.0,
            toggle_margin: Thickness::vertical(4.0, 4.0),
            layout_margin: Thickness::vertical(6.0, 6.0),
            chrome: ChromeMetrics::default(),
        }
    }
}

impl WidgetConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            data_dir,
            ..Self::default()
        }
    }

    /// Data directory to use, or `None` when the platform has none.
    pub fn resolve_data_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Some(dir.clone());
        }
        match default_data_dir() {
            Ok(dir) => Some(dir),
            Err(err) => {
                sticky_warn!("{}", err);
                None
            }
        }
    }
}
