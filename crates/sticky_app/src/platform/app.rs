use std::collections::VecDeque;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use sticky_core::{update, AppState, Msg, PersistedSettings};
use sticky_engine::{decode_page_message, HostError, HostEvent, PageMessage, SettingsStore};
use sticky_logging::{sticky_debug, sticky_error, sticky_info, sticky_warn};
use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::{Window, WindowBuilder};

use super::config::{WidgetConfig, LOG_LEVEL_ENV};
use super::effects::{logical_size, EffectRunner};
use super::host::{ProxySink, UserEvent, WryHost};
use super::logging::{self, LogDestination};
use super::ui;
use super::ui::constants::WINDOW_TITLE;
use super::ui::layout::{designed_toggle_height, pane_layout, window_metrics, PaneLayout};
use super::ui::toolbar::{decode_toolbar_message, ToolbarAction};

pub fn run_app() -> anyhow::Result<()> {
    let config = WidgetConfig::from_env();
    let data_dir = config.resolve_data_dir();
    let level = logging::level_from(env::var(LOG_LEVEL_ENV).ok().as_deref());
    logging::initialize(LogDestination::for_build(), level, data_dir.as_deref());
    sticky_info!("Starting {} (log level {})", WINDOW_TITLE, level);

    let store = SettingsStore::new(data_dir.unwrap_or_else(|| PathBuf::from(".")));
    let settings = store.load();

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let sink = Arc::new(ProxySink::new(event_loop.create_proxy()));

    let (window, host) = match build_host(&event_loop, &config, &settings, sink) {
        Ok(parts) => parts,
        Err(err) => {
            report_init_failure(&err);
            return Err(err.into());
        }
    };

    let mut shell = Shell {
        runner: EffectRunner::new(store, &config),
        window,
        host,
        config,
        state: AppState::new(),
        toolbar_ready: false,
        layout: None,
    };
    shell.dispatch_msg(Msg::Restore(settings));
    shell.dispatch_msg(Msg::HostReady);

    event_loop.run(move |event, _target, control_flow| {
        shell.handle_event(event, control_flow);
    })
}

fn build_host(
    event_loop: &EventLoop<UserEvent>,
    config: &WidgetConfig,
    settings: &PersistedSettings,
    sink: Arc<ProxySink>,
) -> Result<(Window, WryHost), HostError> {
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(settings.width, settings.height))
        .with_min_inner_size(LogicalSize::new(config.min_width, config.min_height))
        .with_decorations(false)
        .build(event_loop)
        .map_err(|err| HostError::Init(format!("window: {err}")))?;

    let size = logical_size(&window);
    let layout = pane_layout(config, size.width, size.height, false, false);
    let host = WryHost::build(&window, layout, settings.background, sink)?;
    Ok((window, host))
}

/// The only error the user ever sees: without a webview there is no widget.
fn report_init_failure(err: &HostError) {
    sticky_error!("{}", err);
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(WINDOW_TITLE)
        .set_description(format!("Could not start the embedded browser.\n\n{err}"))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

struct Shell {
    window: Window,
    host: WryHost,
    config: WidgetConfig,
    state: AppState,
    runner: EffectRunner,
    toolbar_ready: bool,
    layout: Option<PaneLayout>,
}

impl Shell {
    fn handle_event(&mut self, event: Event<'_, UserEvent>, control_flow: &mut ControlFlow) {
        match event {
            Event::NewEvents(_) => {
                let now = Instant::now();
                if let Some(msg) = self.runner.expire_reload(now) {
                    self.dispatch_msg(msg);
                }
                if self.runner.poll_timer(now) {
                    self.dispatch_msg(Msg::RefreshTimerFired);
                }
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => self.dispatch_msg(Msg::CloseRequested),
            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                // Minimizing reports a 0x0 client area.
                if !self.window.is_minimized() {
                    let size = logical_size(&self.window);
                    self.dispatch_msg(Msg::WindowResized {
                        width: size.width,
                        height: size.height,
                    });
                }
            }
            Event::UserEvent(UserEvent::Toolbar(raw)) => self.on_toolbar(&raw),
            Event::UserEvent(UserEvent::Host(event)) => self.on_host(event),
            _ => {}
        }

        *control_flow = if self.runner.should_quit() {
            ControlFlow::Exit
        } else {
            match self.runner.next_deadline() {
                Some(deadline) => ControlFlow::WaitUntil(deadline),
                None => ControlFlow::Wait,
            }
        };
    }

    fn on_toolbar(&mut self, raw: &str) {
        let Some(action) = decode_toolbar_message(raw) else {
            return;
        };
        match action {
            ToolbarAction::Ready => {
                self.toolbar_ready = true;
                self.render();
            }
            ToolbarAction::Drag => {
                if let Err(err) = self.window.drag_window() {
                    sticky_debug!("Window drag refused: {}", err);
                }
            }
            ToolbarAction::Compact {
                value,
                toggle_height,
            } => {
                let size = logical_size(&self.window);
                let metrics = window_metrics(
                    &self.config,
                    size.height,
                    self.runner.applied_height(),
                    toggle_height,
                );
                self.dispatch_msg(Msg::CompactToggled {
                    enable: value,
                    metrics,
                });
            }
            other => {
                if let Some(msg) = other.to_msg() {
                    self.dispatch_msg(msg);
                }
            }
        }
    }

    fn on_host(&mut self, event: HostEvent) {
        match event {
            HostEvent::TitleChanged(title) => self.dispatch_msg(Msg::TitleChanged(title)),
            HostEvent::PageMessage(raw) => {
                if let Some(PageMessage::TypingState { is_typing }) = decode_page_message(&raw) {
                    self.dispatch_msg(Msg::TypingChanged(is_typing));
                }
            }
            HostEvent::NewWindowRequested(url) => {
                self.dispatch_msg(Msg::NewWindowRequested(url));
            }
            HostEvent::LoadStarted(url) => sticky_debug!("Load started: {}", url),
            HostEvent::LoadFinished(url) => {
                sticky_debug!("Load finished: {}", url);
                if let Some(msg) = self.runner.load_finished() {
                    self.dispatch_msg(msg);
                }
            }
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(
                self.runner
                    .run(effects, &self.window, &self.host, &self.config),
            );
        }

        if self.state.consume_dirty() {
            self.render();
        }
        self.relayout();
    }

    fn render(&self) {
        if !self.toolbar_ready {
            return;
        }
        let view = self.state.view();
        match ui::render::render(&view, designed_toggle_height(&self.config)) {
            Ok(script) => {
                if let Err(err) = self.host.update_toolbar(&script) {
                    sticky_warn!("{}", err);
                }
            }
            Err(err) => sticky_error!("Failed to encode toolbar view: {}", err),
        }
    }

    fn relayout(&mut self) {
        if self.state.is_closing() {
            return;
        }
        let view = self.state.view();
        let size = logical_size(&self.window);
        let layout = pane_layout(
            &self.config,
            size.width,
            size.height,
            view.settings_visible,
            view.compact,
        );
        if self.layout != Some(layout) {
            self.host.apply_layout(layout);
            self.layout = Some(layout);
        }
    }
}
