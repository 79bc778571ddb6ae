use std::time::{Duration, Instant};

use sticky_core::{Effect, HeightConstraint, Msg};
use sticky_engine::{open_external, BrowserHost, ReloadDispatcher, RefreshTimer, SettingsStore};
use sticky_logging::{sticky_debug, sticky_info, sticky_warn};
use tao::dpi::LogicalSize;
use tao::window::Window;

use super::config::WidgetConfig;
use super::host::WryHost;
use super::ui::constants::UNBOUNDED_WIDTH;
use super::ui::layout::AppliedHeight;

/// Executes core effects against the window, the webviews and the disk.
pub struct EffectRunner {
    store: SettingsStore,
    dispatcher: ReloadDispatcher,
    timer: RefreshTimer,
    applied: AppliedHeight,
    quit: bool,
}

impl EffectRunner {
    pub fn new(store: SettingsStore, config: &WidgetConfig) -> Self {
        Self {
            store,
            dispatcher: ReloadDispatcher::new(),
            timer: RefreshTimer::new(),
            applied: AppliedHeight::from_config(config),
            quit: false,
        }
    }

    /// Runs `effects` in order; returns messages to feed back into `update`.
    pub fn run(
        &mut self,
        effects: Vec<Effect>,
        window: &Window,
        host: &WryHost,
        config: &WidgetConfig,
    ) -> Vec<Msg> {
        let mut followups = Vec::new();
        for effect in effects {
            match effect {
                Effect::Navigate { url } => {
                    sticky_info!("Navigate url={}", url);
                    if let Err(err) = host.navigate(&url) {
                        sticky_warn!("{}", err);
                    }
                }
                Effect::Reload { ticket, url } => {
                    match self.dispatcher.dispatch(host, ticket, &url, Instant::now()) {
                        Ok(mode) => sticky_debug!(
                            "Auto-refresh session={} seq={} {:?}",
                            ticket.session,
                            ticket.seq,
                            mode
                        ),
                        Err(ticket) => followups.push(Msg::ReloadSettled(ticket)),
                    }
                }
                Effect::ArmRefreshTimer {
                    session,
                    interval_secs,
                } => {
                    sticky_info!(
                        "Auto-refresh session={} every {}s",
                        session,
                        interval_secs
                    );
                    self.dispatcher.begin_session(session);
                    self.timer.arm(
                        session,
                        Duration::from_secs(u64::from(interval_secs)),
                        Instant::now(),
                    );
                }
                Effect::StopRefreshTimer { session } => {
                    sticky_info!("Auto-refresh session={} stopped", session);
                    self.timer.stop(session);
                    self.dispatcher.cancel_session(session);
                }
                Effect::SetTopmost(topmost) => window.set_always_on_top(topmost),
                Effect::ApplyBackground(color) => {
                    if let Err(err) = host.set_background(color) {
                        sticky_warn!("Background {}: {}", color, err);
                    }
                }
                Effect::SetContentVisible(visible) => {
                    if let Err(err) = host.set_visible(visible) {
                        sticky_warn!("{}", err);
                    }
                }
                Effect::ApplyHeight(constraint) => {
                    apply_height(window, config, constraint);
                    self.applied = AppliedHeight {
                        min_height: constraint.min_height,
                        max_height: constraint.max_height,
                    };
                }
                Effect::SetWindowTitle(title) => window.set_title(&title),
                Effect::OpenExternal { url } => {
                    open_external(&url);
                }
                Effect::SaveSettings(settings) => self.store.save(&settings),
                Effect::Quit => self.quit = true,
            }
        }
        followups
    }

    /// A content load finished; settles the pending reload, if any.
    pub fn load_finished(&mut self) -> Option<Msg> {
        self.dispatcher.on_load_finished().map(Msg::ReloadSettled)
    }

    /// Settles a reload that never reported a finished load.
    pub fn expire_reload(&mut self, now: Instant) -> Option<Msg> {
        let ticket = self.dispatcher.expire(now)?;
        sticky_warn!(
            "Auto-refresh session={} seq={} got no load event; settling",
            ticket.session,
            ticket.seq
        );
        Some(Msg::ReloadSettled(ticket))
    }

    pub fn poll_timer(&mut self, now: Instant) -> bool {
        self.timer.poll(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.timer.deadline(), self.dispatcher.deadline()) {
            (Some(timer), Some(reload)) => Some(timer.min(reload)),
            (timer, reload) => timer.or(reload),
        }
    }

    pub fn applied_height(&self) -> AppliedHeight {
        self.applied
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

pub fn logical_size(window: &Window) -> LogicalSize<f64> {
    window.inner_size().to_logical(window.scale_factor())
}

fn apply_height(window: &Window, config: &WidgetConfig, constraint: HeightConstraint) {
    let width = logical_size(window).width;
    // Lift both bounds first so the new height is never clamped by the old ones.
    window.set_max_inner_size(None::<LogicalSize<f64>>);
    window.set_min_inner_size(None::<LogicalSize<f64>>);
    window.set_inner_size(LogicalSize::new(width, constraint.height));
    window.set_min_inner_size(Some(LogicalSize::new(
        config.min_width,
        constraint.min_height,
    )));
    window.set_max_inner_size(
        constraint
            .max_height
            .map(|height| LogicalSize::new(UNBOUNDED_WIDTH, height)),
    );
}
