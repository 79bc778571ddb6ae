use crate::{PersistedSettings, ReloadTicket};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Settings read from disk at window open.
    Restore(PersistedSettings),
    /// The browser host finished initializing.
    HostReady,
    /// User edited the URL box.
    UrlInputChanged(String),
    /// User pressed Enter in the URL box or clicked Open.
    OpenRequested,
    /// User clicked the settings button.
    SettingsToggled,
    TopmostToggled(bool),
    AutoRefreshToggled(bool),
    /// User edited the interval box (digits only, not yet committed).
    IntervalInputChanged(String),
    /// Interval box lost focus or Enter was pressed.
    IntervalCommitted,
    /// The refresh timer reached its deadline.
    RefreshTimerFired,
    /// A reload issued for `ReloadTicket` finished loading (or failed).
    ReloadSettled(ReloadTicket),
    /// Page-side probe reported a change in editable focus.
    TypingChanged(bool),
    BackgroundInputChanged(String),
    /// Background box lost focus or Enter was pressed.
    BackgroundCommitted,
    /// User flipped the compact toggle.
    CompactToggled {
        enable: bool,
        metrics: crate::WindowMetrics,
    },
    ContentHiddenToggled(bool),
    /// Logical inner size after a user resize.
    WindowResized { width: f64, height: f64 },
    /// Document title reported by the browser host.
    TitleChanged(String),
    /// The page tried to open a new window.
    NewWindowRequested(String),
    /// The user asked to close the window.
    CloseRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}

