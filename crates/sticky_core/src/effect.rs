use crate::{HeightConstraint, HexColor, PersistedSettings, ReloadTicket, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Navigate { url: String },
    /// Reload `url`, or navigate to it when the host shows something else.
    Reload { ticket: ReloadTicket, url: String },
    /// (Re)start the refresh timer; any previous deadline is discarded.
    ArmRefreshTimer { session: SessionId, interval_secs: u32 },
    /// Halt the timer and cancel the session's in-flight reload.
    StopRefreshTimer { session: SessionId },
    SetTopmost(bool),
    ApplyBackground(HexColor),
    SetContentVisible(bool),
    ApplyHeight(HeightConstraint),
    SetWindowTitle(String),
    OpenExternal { url: String },
    SaveSettings(PersistedSettings),
    Quit,
}
