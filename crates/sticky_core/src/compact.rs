//! Height arithmetic for the compact ("taskbar-only") mode.

pub const COMPACT_SCALE: f64 = 1.2;
pub const COMPACT_MIN_HEIGHT: f64 = 60.0;
pub const EXPANDED_FALLBACK_MIN_HEIGHT: f64 = 280.0;
const TOGGLE_FONT_RATIO: f64 = 0.6;
const TOGGLE_MIN_HEIGHT: f64 = 14.0;
const TOGGLE_SCALE: f64 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Thickness {
    pub top: f64,
    pub bottom: f64,
}

impl Thickness {
    pub const fn vertical(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn sum(self) -> f64 {
        self.top + self.bottom
    }
}

/// Platform window decoration sizes, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChromeMetrics {
    pub caption_height: f64,
    pub resize_border: Thickness,
}

impl ChromeMetrics {
    pub fn height(self) -> f64 {
        self.caption_height + self.resize_border.sum()
    }
}

/// Everything needed to size the window when entering compact mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowMetrics {
    pub height: f64,
    pub min_height: f64,
    /// `None` means unbounded.
    pub max_height: Option<f64>,
    pub font_size: f64,
    /// Measured toggle height; zero or less when not laid out yet.
    pub toggle_height: f64,
    pub toggle_min_height: f64,
    pub toggle_margin: Thickness,
    pub layout_margin: Thickness,
    pub chrome: ChromeMetrics,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightSnapshot {
    pub height: f64,
    pub min_height: f64,
    pub max_height: Option<f64>,
    pub settings_visible: bool,
}

/// Window height bounds to apply; `max_height == None` lifts the cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightConstraint {
    pub height: f64,
    pub min_height: f64,
    pub max_height: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WindowMode {
    #[default]
    Expanded,
    Compact(HeightSnapshot),
}

impl WindowMode {
    pub fn is_compact(&self) -> bool {
        matches!(self, WindowMode::Compact(_))
    }
}

/// Height of the compact toggle for a given font size.
pub fn toggle_height(font_size: f64) -> f64 {
    (font_size * TOGGLE_FONT_RATIO).max(TOGGLE_MIN_HEIGHT) * TOGGLE_SCALE
}

pub fn compact_height(metrics: &WindowMetrics) -> f64 {
    let toggle = if metrics.toggle_height > 0.0 {
        metrics.toggle_height
    } else {
        metrics
            .toggle_min_height
            .max(metrics.font_size * TOGGLE_FONT_RATIO)
            * COMPACT_SCALE
    };
    let target = (toggle
        + metrics.toggle_margin.sum()
        + metrics.layout_margin.sum()
        + metrics.chrome.height())
        * COMPACT_SCALE;
    target.max(COMPACT_MIN_HEIGHT)
}

pub fn snapshot(metrics: &WindowMetrics, settings_visible: bool) -> HeightSnapshot {
    HeightSnapshot {
        height: metrics.height,
        min_height: metrics.min_height,
        max_height: metrics.max_height,
        settings_visible,
    }
}

pub fn pinned(height: f64) -> HeightConstraint {
    HeightConstraint {
        height,
        min_height: height,
        max_height: Some(height),
    }
}

/// Bounds to restore when leaving compact mode.
pub fn restore(snapshot: &HeightSnapshot, current_height: f64) -> HeightConstraint {
    let min_height = if snapshot.min_height > 0.0 {
        snapshot.min_height
    } else {
        EXPANDED_FALLBACK_MIN_HEIGHT
    };
    let base = if snapshot.height.is_finite() && snapshot.height > 0.0 {
        snapshot.height
    } else {
        current_height
    };
    HeightConstraint {
        height: base.max(min_height),
        min_height,
        max_height: snapshot.max_height,
    }
}
