use sticky_core::HexColor;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("browser host failed to initialize: {0}")]
    Init(String),
    #[error("navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },
    #[error("reload failed: {0}")]
    Reload(String),
    #[error("script evaluation failed: {0}")]
    Script(String),
}

/// Events raised by the embedded browser, delivered through a [`HostEventSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    TitleChanged(String),
    /// Raw string posted by page script; decoding is up to the receiver.
    PageMessage(String),
    NewWindowRequested(String),
    LoadStarted(String),
    LoadFinished(String),
}

/// Receiver registered with a host at construction time.
///
/// Hosts may call this from webview callbacks; implementations forward the
/// event to the UI loop instead of touching state directly.
pub trait HostEventSink: Send + Sync {
    fn emit(&self, event: HostEvent);
}

/// Capability interface over an embeddable browser engine.
pub trait BrowserHost {
    /// Load `url`, bypassing caches.
    fn navigate(&self, url: &str) -> Result<(), HostError>;
    fn reload(&self) -> Result<(), HostError>;
    /// The address currently shown, if the host knows it.
    fn current_url(&self) -> Option<String>;
    fn set_visible(&self, visible: bool) -> Result<(), HostError>;
    fn set_background(&self, color: HexColor) -> Result<(), HostError>;
}
