//! `wry` implementation of the browser host: a toolbar webview over a
//! content webview, both children of the borderless `tao` window.

use std::sync::{Arc, Mutex};

use sticky_core::HexColor;
use sticky_engine::{typing_probe_script, BrowserHost, HostError, HostEvent, HostEventSink};
use sticky_logging::{sticky_debug, sticky_error};
use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::http::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use wry::http::{HeaderMap, HeaderValue, Request};
use wry::{NewWindowResponse, PageLoadEvent, Rect, WebView, WebViewBuilder};

use super::ui::constants::TOOLBAR_HTML;
use super::ui::layout::{PaneBounds, PaneLayout};

/// Everything webview callbacks hand back to the event loop.
#[derive(Debug, Clone)]
pub enum UserEvent {
    Host(HostEvent),
    /// Raw JSON posted by the toolbar page.
    Toolbar(String),
}

/// Forwards host events onto the UI loop.
pub struct ProxySink {
    proxy: Mutex<EventLoopProxy<UserEvent>>,
}

impl ProxySink {
    pub fn new(proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }

    fn send(&self, event: UserEvent) {
        let Ok(proxy) = self.proxy.lock() else {
            return;
        };
        // Fails only once the loop is gone, at which point nobody listens.
        if proxy.send_event(event).is_err() {
            sticky_debug!("Event loop closed; dropping webview event");
        }
    }

    fn toolbar(&self, raw: String) {
        self.send(UserEvent::Toolbar(raw));
    }
}

impl HostEventSink for ProxySink {
    fn emit(&self, event: HostEvent) {
        self.send(UserEvent::Host(event));
    }
}

pub struct WryHost {
    toolbar: WebView,
    content: WebView,
}

impl WryHost {
    pub fn build(
        window: &Window,
        layout: PaneLayout,
        background: HexColor,
        sink: Arc<ProxySink>,
    ) -> Result<Self, HostError> {
        let toolbar_sink = Arc::clone(&sink);
        let toolbar = WebViewBuilder::new()
            .with_html(TOOLBAR_HTML)
            .with_bounds(to_rect(layout.toolbar))
            .with_devtools(cfg!(debug_assertions))
            .with_ipc_handler(move |request: Request<String>| {
                toolbar_sink.toolbar(request.body().clone());
            })
            .build_as_child(window)
            .map_err(|err| HostError::Init(format!("toolbar webview: {err}")))?;

        let probe = typing_probe_script();
        let ipc_sink = Arc::clone(&sink);
        let title_sink = Arc::clone(&sink);
        let window_sink = Arc::clone(&sink);
        let load_sink = sink;
        let content = WebViewBuilder::new()
            .with_bounds(to_rect(layout.content))
            .with_background_color((background.r, background.g, background.b, 255))
            .with_devtools(cfg!(debug_assertions))
            .with_initialization_script(&probe)
            .with_ipc_handler(move |request: Request<String>| {
                ipc_sink.emit(HostEvent::PageMessage(request.body().clone()));
            })
            .with_document_title_changed_handler(move |title| {
                title_sink.emit(HostEvent::TitleChanged(title));
            })
            .with_new_window_req_handler(move |url, _features| {
                window_sink.emit(HostEvent::NewWindowRequested(url));
                NewWindowResponse::Deny
            })
            .with_on_page_load_handler(move |event, url| {
                let event = match event {
                    PageLoadEvent::Started => HostEvent::LoadStarted(url),
                    PageLoadEvent::Finished => HostEvent::LoadFinished(url),
                };
                load_sink.emit(event);
            })
            .build_as_child(window)
            .map_err(|err| HostError::Init(format!("content webview: {err}")))?;

        Ok(Self { toolbar, content })
    }

    pub fn apply_layout(&self, layout: PaneLayout) {
        if let Err(err) = self.toolbar.set_bounds(to_rect(layout.toolbar)) {
            sticky_error!("Failed to place toolbar: {}", err);
        }
        if let Err(err) = self.content.set_bounds(to_rect(layout.content)) {
            sticky_error!("Failed to place content: {}", err);
        }
    }

    /// Run a script in the toolbar page.
    pub fn update_toolbar(&self, script: &str) -> Result<(), HostError> {
        self.toolbar
            .evaluate_script(script)
            .map_err(|err| HostError::Script(err.to_string()))
    }
}

impl BrowserHost for WryHost {
    fn navigate(&self, url: &str) -> Result<(), HostError> {
        self.content
            .load_url_with_headers(url, no_cache_headers())
            .map_err(|err| HostError::Navigation {
                url: url.to_string(),
                message: err.to_string(),
            })
    }

    fn reload(&self) -> Result<(), HostError> {
        self.content
            .reload()
            .map_err(|err| HostError::Reload(err.to_string()))
    }

    fn current_url(&self) -> Option<String> {
        self.content.url().ok().filter(|url| !url.is_empty())
    }

    fn set_visible(&self, visible: bool) -> Result<(), HostError> {
        self.content
            .set_visible(visible)
            .map_err(|err| HostError::Script(err.to_string()))
    }

    fn set_background(&self, color: HexColor) -> Result<(), HostError> {
        self.content
            .set_background_color((color.r, color.g, color.b, 255))
            .map_err(|err| HostError::Script(err.to_string()))
    }
}

fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    headers
}

fn to_rect(bounds: PaneBounds) -> Rect {
    Rect {
        position: LogicalPosition::new(bounds.x, bounds.y).into(),
        size: LogicalSize::new(bounds.width, bounds.height).into(),
    }
}
