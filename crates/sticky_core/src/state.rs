use crate::address::normalize_url;
use crate::color::TOOLBAR_TINT_ALPHA;
use crate::compact::WindowMode;
use crate::refresh::{effective_interval, AutoRefreshSession, RefreshPhase, SessionId};
use crate::view_model::AppViewModel;
use crate::{HexColor, PersistedSettings};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub(crate) url_text: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) title: String,
    pub(crate) topmost: bool,
    pub(crate) settings_visible: bool,
    pub(crate) auto_refresh_enabled: bool,
    pub(crate) interval_text: String,
    pub(crate) refresh: Option<AutoRefreshSession>,
    next_session: SessionId,
    pub(crate) typing: bool,
    pub(crate) background: HexColor,
    pub(crate) background_text: String,
    pub(crate) mode: WindowMode,
    pub(crate) content_hidden: bool,
    pub(crate) closing: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let defaults = PersistedSettings::default();
        Self {
            url_text: defaults.url,
            width: defaults.width,
            height: defaults.height,
            title: String::new(),
            topmost: false,
            settings_visible: false,
            auto_refresh_enabled: defaults.auto_refresh_enabled,
            interval_text: defaults.auto_refresh_interval_secs.to_string(),
            refresh: None,
            next_session: 1,
            typing: false,
            background: defaults.background,
            background_text: defaults.background.to_hex(),
            mode: WindowMode::Expanded,
            content_hidden: defaults.content_hidden,
            closing: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let compact = self.mode.is_compact();
        AppViewModel {
            title: self.title.clone(),
            url_text: self.url_text.clone(),
            settings_visible: self.settings_visible && !compact,
            settings_enabled: !compact,
            topmost: self.topmost,
            auto_refresh_enabled: self.auto_refresh_enabled,
            interval_text: self.interval_text.clone(),
            refresh_phase: self.refresh_phase(),
            background_text: self.background_text.clone(),
            background: self.background,
            toolbar_tint: self.background.with_alpha(TOOLBAR_TINT_ALPHA),
            toolbar_text_light: self.background.is_dark(),
            compact,
            content_hidden: self.content_hidden,
            content_visible: self.content_visible(),
            dirty: self.dirty,
        }
    }

    pub fn refresh_phase(&self) -> RefreshPhase {
        self.refresh
            .as_ref()
            .map_or(RefreshPhase::Stopped, AutoRefreshSession::phase)
    }

    pub fn refresh_session(&self) -> Option<&AutoRefreshSession> {
        self.refresh.as_ref()
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn mode(&self) -> &WindowMode {
        &self.mode
    }

    pub fn background(&self) -> HexColor {
        self.background
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn content_visible(&self) -> bool {
        !self.content_hidden && !self.mode.is_compact()
    }

    /// Settings as they should be written at close.
    ///
    /// While compact, the expanded height from the snapshot is saved so the
    /// next start does not open as a thin strip.
    pub fn persisted_settings(&self) -> PersistedSettings {
        let height = match self.mode {
            WindowMode::Compact(snapshot) if snapshot.height > 0.0 => snapshot.height,
            _ => self.height,
        };
        PersistedSettings {
            url: normalize_url(&self.url_text),
            width: self.width,
            height,
            auto_refresh_enabled: self.auto_refresh_enabled,
            auto_refresh_interval_secs: effective_interval(&self.interval_text),
            background: self.background,
            content_hidden: self.content_hidden,
        }
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn allocate_session(&mut self) -> SessionId {
        let id = self.next_session;
        self.next_session += 1;
        id
    }
}
