use crate::address::{is_navigable, normalize_url};
use crate::color::parse_hex_color;
use crate::compact::{self, WindowMode, WindowMetrics};
use crate::refresh::{effective_interval, parse_interval_text, AutoRefreshSession, TickOutcome};
use crate::{AppState, Effect, Msg, PersistedSettings};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    if state.closing && !matches!(msg, Msg::NoOp) {
        // Nothing may re-arm timers or navigate once the close path ran.
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Restore(settings) => restore(&mut state, settings),
        Msg::HostReady => {
            let url = normalize_url(&state.url_text);
            if is_navigable(&url) {
                vec![Effect::Navigate { url }]
            } else {
                Vec::new()
            }
        }
        Msg::UrlInputChanged(text) => {
            // Echo of what the user typed; re-rendering would fight the caret.
            state.url_text = text;
            Vec::new()
        }
        Msg::OpenRequested => {
            let url = normalize_url(&state.url_text);
            if !is_navigable(&url) {
                return (state, Vec::new());
            }
            state.url_text = url.clone();
            state.mark_dirty();
            vec![Effect::Navigate { url }]
        }
        Msg::SettingsToggled => {
            if state.mode.is_compact() {
                return (state, Vec::new());
            }
            state.settings_visible = !state.settings_visible;
            state.mark_dirty();
            Vec::new()
        }
        Msg::TopmostToggled(topmost) => {
            state.topmost = topmost;
            state.mark_dirty();
            vec![Effect::SetTopmost(topmost)]
        }
        Msg::AutoRefreshToggled(true) => enable_auto_refresh(&mut state),
        Msg::AutoRefreshToggled(false) => {
            state.auto_refresh_enabled = false;
            state.mark_dirty();
            stop_auto_refresh(&mut state)
        }
        Msg::IntervalInputChanged(text) => {
            let live = parse_interval_text(&text);
            state.interval_text = text;
            match (live, state.refresh.as_mut()) {
                (Some(secs), Some(session)) => {
                    session.rearm(secs);
                    vec![Effect::ArmRefreshTimer {
                        session: session.id(),
                        interval_secs: session.interval_secs(),
                    }]
                }
                _ => Vec::new(),
            }
        }
        Msg::IntervalCommitted => {
            let secs = effective_interval(&state.interval_text);
            state.interval_text = secs.to_string();
            state.mark_dirty();
            match state.refresh.as_mut() {
                Some(session) => {
                    session.rearm(secs);
                    vec![Effect::ArmRefreshTimer {
                        session: session.id(),
                        interval_secs: session.interval_secs(),
                    }]
                }
                None => Vec::new(),
            }
        }
        Msg::RefreshTimerFired => trigger_refresh(&mut state),
        Msg::ReloadSettled(ticket) => {
            // Tickets from a stopped session no longer match anything.
            if let Some(session) = state.refresh.as_mut() {
                if session.settle(ticket) {
                    state.mark_dirty();
                }
            }
            Vec::new()
        }
        Msg::TypingChanged(typing) => {
            state.typing = typing;
            Vec::new()
        }
        Msg::BackgroundInputChanged(text) => {
            if text != state.background_text {
                state.background_text = text;
            }
            Vec::new()
        }
        Msg::BackgroundCommitted => commit_background(&mut state),
        Msg::CompactToggled { enable, metrics } => set_compact(&mut state, enable, &metrics),
        Msg::ContentHiddenToggled(hidden) => {
            if state.content_hidden == hidden {
                return (state, Vec::new());
            }
            state.content_hidden = hidden;
            state.mark_dirty();
            if state.mode.is_compact() {
                Vec::new()
            } else {
                vec![Effect::SetContentVisible(!hidden)]
            }
        }
        Msg::WindowResized { width, height } => {
            // Minimized windows report an empty client area.
            let usable = |value: f64| value.is_finite() && value > 0.0;
            if !usable(width) || !usable(height) {
                return (state, Vec::new());
            }
            state.width = width;
            // The pinned compact height is not a user choice.
            if !state.mode.is_compact() {
                state.height = height;
            }
            Vec::new()
        }
        Msg::TitleChanged(title) => {
            if title.trim().is_empty() || title == state.title {
                return (state, Vec::new());
            }
            state.title = title.clone();
            state.mark_dirty();
            vec![Effect::SetWindowTitle(title)]
        }
        Msg::NewWindowRequested(url) => {
            let url = url.trim().to_string();
            if url.is_empty() {
                Vec::new()
            } else {
                vec![Effect::OpenExternal { url }]
            }
        }
        Msg::CloseRequested => {
            let mut effects = vec![Effect::SaveSettings(state.persisted_settings())];
            effects.extend(stop_auto_refresh(&mut state));
            effects.push(Effect::Quit);
            state.closing = true;
            effects
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn restore(state: &mut AppState, settings: PersistedSettings) -> Vec<Effect> {
    state.url_text = settings.url;
    state.width = settings.width;
    state.height = settings.height;
    state.interval_text = settings.auto_refresh_interval_secs.to_string();
    state.background = settings.background;
    state.background_text = settings.background.to_hex();
    state.content_hidden = settings.content_hidden;
    state.mark_dirty();

    let mut effects = vec![
        Effect::ApplyBackground(settings.background),
        Effect::SetContentVisible(state.content_visible()),
    ];
    // Start-up navigation already loads the page; only arm the timer here.
    effects.extend(stop_auto_refresh(state));
    state.auto_refresh_enabled = settings.auto_refresh_enabled;
    if settings.auto_refresh_enabled {
        effects.push(start_session(state, settings.auto_refresh_interval_secs));
    }
    effects
}

fn enable_auto_refresh(state: &mut AppState) -> Vec<Effect> {
    if state.refresh.is_some() {
        return Vec::new();
    }
    state.auto_refresh_enabled = true;
    let secs = effective_interval(&state.interval_text);
    state.interval_text = secs.to_string();
    state.mark_dirty();

    let mut effects = vec![start_session(state, secs)];
    effects.extend(trigger_refresh(state));
    effects
}

fn start_session(state: &mut AppState, interval_secs: u32) -> Effect {
    let session = AutoRefreshSession::start(state.allocate_session(), interval_secs);
    let effect = Effect::ArmRefreshTimer {
        session: session.id(),
        interval_secs: session.interval_secs(),
    };
    state.refresh = Some(session);
    effect
}

fn stop_auto_refresh(state: &mut AppState) -> Vec<Effect> {
    match state.refresh.take() {
        Some(session) => vec![Effect::StopRefreshTimer {
            session: session.id(),
        }],
        None => Vec::new(),
    }
}

fn trigger_refresh(state: &mut AppState) -> Vec<Effect> {
    let url = normalize_url(&state.url_text);
    if url.is_empty() {
        return Vec::new();
    }
    let typing = state.typing;
    let Some(session) = state.refresh.as_mut() else {
        return Vec::new();
    };
    match session.tick(typing) {
        TickOutcome::Reload(ticket) => {
            state.mark_dirty();
            vec![Effect::Reload { ticket, url }]
        }
        TickOutcome::SkippedInFlight | TickOutcome::SkippedTyping => Vec::new(),
    }
}

fn commit_background(state: &mut AppState) -> Vec<Effect> {
    state.mark_dirty();
    match parse_hex_color(&state.background_text) {
        Ok(color) => {
            state.background = color;
            state.background_text = color.to_hex();
            vec![Effect::ApplyBackground(color)]
        }
        Err(_) => {
            // Last-known-good: show the color that is actually applied.
            state.background_text = state.background.to_hex();
            Vec::new()
        }
    }
}

fn set_compact(state: &mut AppState, enable: bool, metrics: &WindowMetrics) -> Vec<Effect> {
    state.mark_dirty();
    if state.mode.is_compact() == enable {
        return Vec::new();
    }

    match state.mode {
        WindowMode::Expanded => {
            let snapshot = compact::snapshot(metrics, state.settings_visible);
            state.settings_visible = false;
            state.mode = WindowMode::Compact(snapshot);
            let height = compact::compact_height(metrics);
            vec![
                Effect::SetContentVisible(false),
                Effect::ApplyHeight(compact::pinned(height)),
            ]
        }
        WindowMode::Compact(snapshot) => {
            let constraint = compact::restore(&snapshot, metrics.height);
            state.mode = WindowMode::Expanded;
            state.settings_visible = snapshot.settings_visible;
            state.height = constraint.height;
            vec![
                Effect::SetContentVisible(state.content_visible()),
                Effect::ApplyHeight(constraint),
            ]
        }
    }
}
