//! Messages posted by the toolbar page.

use serde::Deserialize;
use sticky_core::Msg;
use sticky_logging::sticky_debug;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ToolbarAction {
    /// Toolbar script is loaded and can take view updates.
    Ready,
    UrlInput {
        value: String,
    },
    Open,
    ToggleSettings,
    Topmost {
        value: bool,
    },
    AutoRefresh {
        value: bool,
    },
    IntervalInput {
        value: String,
    },
    IntervalCommit,
    BackgroundInput {
        value: String,
    },
    BackgroundCommit,
    Compact {
        value: bool,
        #[serde(rename = "toggleHeight", default)]
        toggle_height: f64,
    },
    ContentHidden {
        value: bool,
    },
    Drag,
    Close,
}

impl ToolbarAction {
    /// The state message for actions that do not need the window.
    pub fn to_msg(&self) -> Option<Msg> {
        let msg = match self {
            ToolbarAction::UrlInput { value } => Msg::UrlInputChanged(value.clone()),
            ToolbarAction::Open => Msg::OpenRequested,
            ToolbarAction::ToggleSettings => Msg::SettingsToggled,
            ToolbarAction::Topmost { value } => Msg::TopmostToggled(*value),
            ToolbarAction::AutoRefresh { value } => Msg::AutoRefreshToggled(*value),
            ToolbarAction::IntervalInput { value } => Msg::IntervalInputChanged(value.clone()),
            ToolbarAction::IntervalCommit => Msg::IntervalCommitted,
            ToolbarAction::BackgroundInput { value } => Msg::BackgroundInputChanged(value.clone()),
            ToolbarAction::BackgroundCommit => Msg::BackgroundCommitted,
            ToolbarAction::ContentHidden { value } => Msg::ContentHiddenToggled(*value),
            ToolbarAction::Close => Msg::CloseRequested,
            ToolbarAction::Ready | ToolbarAction::Compact { .. } | ToolbarAction::Drag => {
                return None
            }
        };
        Some(msg)
    }
}

pub fn decode_toolbar_message(raw: &str) -> Option<ToolbarAction> {
    match serde_json::from_str::<ToolbarAction>(raw) {
        Ok(action) => Some(action),
        Err(err) => {
            sticky_debug!("Ignoring toolbar message ({}): {:.120}", err, raw);
            None
        }
    }
}
