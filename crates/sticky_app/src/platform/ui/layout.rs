use sticky_core::{toggle_height, WindowMetrics};

use crate::platform::config::WidgetConfig;

/// Logical-pixel rectangle of one webview inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneLayout {
    pub toolbar: PaneBounds,
    pub content: PaneBounds,
}

/// Height bounds currently applied to the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedHeight {
    pub min_height: f64,
    pub max_height: Option<f64>,
}

impl AppliedHeight {
    pub fn from_config(config: &WidgetConfig) -> Self {
        Self {
            min_height: config.min_height,
            max_height: None,
        }
    }
}

/// The toolbar takes the whole window in compact mode.
pub fn toolbar_height(
    config: &WidgetConfig,
    settings_visible: bool,
    compact: bool,
    window_height: f64,
) -> f64 {
    if compact {
        return window_height.max(0.0);
    }
    let panel = if settings_visible {
        config.panel_height
    } else {
        0.0
    };
    (config.strip_height + panel).min(window_height).max(0.0)
}

pub fn pane_layout(
    config: &WidgetConfig,
    width: f64,
    height: f64,
    settings_visible: bool,
    compact: bool,
) -> PaneLayout {
    let toolbar = toolbar_height(config, settings_visible, compact, height);
    PaneLayout {
        toolbar: PaneBounds {
            x: 0.0,
            y: 0.0,
            width,
            height: toolbar,
        },
        content: PaneBounds {
            x: 0.0,
            y: toolbar,
            width,
            height: (height - toolbar).max(0.0),
        },
    }
}

/// Toggle height the toolbar should lay out, from the configured font size.
pub fn designed_toggle_height(config: &WidgetConfig) -> f64 {
    toggle_height(config.font_size)
}

/// Metrics for a compact-mode transition.
///
/// `measured_toggle` is what the toolbar reported; zero or less means the
/// toggle was not laid out and the fallback height applies.
pub fn window_metrics(
    config: &WidgetConfig,
    height: f64,
    applied: AppliedHeight,
    measured_toggle: f64,
) -> WindowMetrics {
    WindowMetrics {
        height,
        min_height: applied.min_height,
        max_height: applied.max_height,
        font_size: config.font_size,
        toggle_height: measured_toggle,
        toggle_min_height: config.toggle_min_height,
        toggle_margin: config.toggle_margin,
        layout_margin: config.layout_margin,
        chrome: config.chrome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sticky_core::compact_height;

    #[test]
    fn expanded_layout_stacks_toolbar_over_content() {
        let config = WidgetConfig::default();
        let layout = pane_layout(&config, 320.0, 480.0, false, false);
        assert_eq!(layout.toolbar.height, config.strip_height);
        assert_eq!(layout.content.y, config.strip_height);
        assert_eq!(layout.content.height, 480.0 - config.strip_height);
        assert_eq!(layout.content.width, 320.0);
    }

    #[test]
    fn settings_panel_grows_toolbar() {
        let config = WidgetConfig::default();
        let layout = pane_layout(&config, 320.0, 480.0, true, false);
        assert_eq!(
            layout.toolbar.height,
            config.strip_height + config.panel_height
        );
        assert_eq!(layout.content.y, layout.toolbar.height);
    }

    #[test]
    fn compact_layout_gives_toolbar_everything() {
        let config = WidgetConfig::default();
        let layout = pane_layout(&config, 320.0, 60.0, true, true);
        assert_eq!(layout.toolbar.height, 60.0);
        assert_eq!(layout.content.height, 0.0);
    }

    #[test]
    fn tiny_window_never_goes_negative() {
        let config = WidgetConfig::default();
        let layout = pane_layout(&config, 100.0, 10.0, true, false);
        assert_eq!(layout.toolbar.height, 10.0);
        assert_eq!(layout.content.height, 0.0);
    }

    #[test]
    fn default_metrics_pin_to_compact_floor() {
        let config = WidgetConfig::default();
        let applied = AppliedHeight::from_config(&config);
        let metrics = window_metrics(&config, 480.0, applied, designed_toggle_height(&config));
        assert_eq!(metrics.min_height, config.min_height);
        assert_eq!(metrics.max_height, None);
        assert_eq!(compact_height(&metrics), sticky_core::COMPACT_MIN_HEIGHT);
    }
}
