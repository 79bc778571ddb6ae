use pretty_assertions::assert_eq;
use sticky_core::{
    update, AppState, AutoRefreshSession, Effect, Msg, PersistedSettings, RefreshPhase,
    ReloadTicket, TickOutcome,
};

fn init_logging() {
    sticky_logging::initialize_for_tests();
}

fn reloads(effects: &[Effect]) -> Vec<ReloadTicket> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Reload { ticket, .. } => Some(*ticket),
            _ => None,
        })
        .collect()
}

/// State restored with auto-refresh on, so the timer is armed but nothing is in flight.
fn armed(interval_secs: u32) -> AppState {
    let (state, effects) = update(
        AppState::new(),
        Msg::Restore(PersistedSettings {
            url: "http://board.local".to_string(),
            auto_refresh_enabled: true,
            auto_refresh_interval_secs: interval_secs,
            ..PersistedSettings::default()
        }),
    );
    assert!(effects.contains(&Effect::ArmRefreshTimer {
        session: 1,
        interval_secs,
    }));
    assert!(reloads(&effects).is_empty(), "restore only arms the timer");
    state
}

#[test]
fn enabling_arms_timer_and_refreshes_once() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::AutoRefreshToggled(true));

    assert_eq!(
        effects,
        vec![
            Effect::ArmRefreshTimer {
                session: 1,
                interval_secs: 30,
            },
            Effect::Reload {
                ticket: ReloadTicket { session: 1, seq: 1 },
                url: "http://localhost:8000".to_string(),
            },
        ]
    );
    assert_eq!(state.refresh_phase(), RefreshPhase::Refreshing);
}

#[test]
fn tick_while_reload_in_flight_is_dropped() {
    init_logging();
    let state = armed(10);
    let (state, first) = update(state, Msg::RefreshTimerFired);
    assert_eq!(reloads(&first).len(), 1);
    assert_eq!(state.refresh_phase(), RefreshPhase::Refreshing);

    let (state, second) = update(state, Msg::RefreshTimerFired);
    assert!(reloads(&second).is_empty());

    let (state, _) = update(state, Msg::ReloadSettled(reloads(&first)[0]));
    assert_eq!(state.refresh_phase(), RefreshPhase::Armed);

    let (_state, third) = update(state, Msg::RefreshTimerFired);
    assert_eq!(reloads(&third), vec![ReloadTicket { session: 1, seq: 2 }]);
}

#[test]
fn typing_suppresses_reload_without_catch_up() {
    init_logging();
    let state = armed(10);
    let (state, _) = update(state, Msg::TypingChanged(true));
    let (state, effects) = update(state, Msg::RefreshTimerFired);
    assert!(effects.is_empty());
    assert_eq!(state.refresh_phase(), RefreshPhase::Armed);

    let (state, effects) = update(state, Msg::TypingChanged(false));
    assert!(effects.is_empty(), "typing end does not trigger a catch-up reload");

    let (_state, effects) = update(state, Msg::RefreshTimerFired);
    assert_eq!(reloads(&effects).len(), 1);
}

#[test]
fn disabling_stops_timer_and_ignores_late_completion() {
    init_logging();
    let state = armed(10);
    let (state, effects) = update(state, Msg::RefreshTimerFired);
    let ticket = reloads(&effects)[0];

    let (state, effects) = update(state, Msg::AutoRefreshToggled(false));
    assert_eq!(effects, vec![Effect::StopRefreshTimer { session: 1 }]);
    assert_eq!(state.refresh_phase(), RefreshPhase::Stopped);

    let (mut state, effects) = update(state, Msg::ReloadSettled(ticket));
    assert!(effects.is_empty());
    assert_eq!(state.refresh_phase(), RefreshPhase::Stopped);
    state.consume_dirty();

    let (state, effects) = update(state, Msg::RefreshTimerFired);
    assert!(effects.is_empty());

    // A new session never accepts tickets from the old one.
    let (state, effects) = update(state, Msg::AutoRefreshToggled(true));
    let fresh = reloads(&effects)[0];
    assert_eq!(fresh.session, 2);
    let (state, _) = update(state, Msg::ReloadSettled(ticket));
    assert_eq!(state.refresh_phase(), RefreshPhase::Refreshing);
}

#[test]
fn live_interval_edit_rearms_only_valid_values() {
    init_logging();
    let state = armed(30);

    let (state, effects) = update(state, Msg::IntervalInputChanged("4".into()));
    assert!(effects.is_empty());

    let (state, effects) = update(state, Msg::IntervalInputChanged("12".into()));
    assert_eq!(
        effects,
        vec![Effect::ArmRefreshTimer {
            session: 1,
            interval_secs: 12,
        }]
    );
    assert_eq!(state.refresh_session().map(|s| s.interval_secs()), Some(12));
}

#[test]
fn interval_commit_normalizes_text_and_keeps_enabled_flag() {
    init_logging();
    let state = armed(30);
    let (state, _) = update(state, Msg::IntervalInputChanged("3".into()));
    let (state, effects) = update(state, Msg::IntervalCommitted);

    assert_eq!(state.view().interval_text, "30");
    assert!(state.view().auto_refresh_enabled);
    assert_eq!(
        effects,
        vec![Effect::ArmRefreshTimer {
            session: 1,
            interval_secs: 30,
        }]
    );
}

#[test]
fn interval_commit_without_session_only_updates_text() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::IntervalInputChanged("15".into()));
    let (state, effects) = update(state, Msg::IntervalCommitted);
    assert!(effects.is_empty());
    assert_eq!(state.view().interval_text, "15");
    assert_eq!(state.persisted_settings().auto_refresh_interval_secs, 15);
}

#[test]
fn blank_url_skips_the_tick() {
    init_logging();
    let state = armed(10);
    let (state, _) = update(state, Msg::UrlInputChanged("  ".into()));
    let (state, effects) = update(state, Msg::RefreshTimerFired);
    assert!(effects.is_empty());
    assert_eq!(state.refresh_phase(), RefreshPhase::Armed);
}

#[test]
fn close_stops_the_session() {
    init_logging();
    let state = armed(10);
    let (state, effects) = update(state, Msg::CloseRequested);

    assert!(matches!(effects.first(), Some(Effect::SaveSettings(s)) if s.auto_refresh_enabled));
    assert!(effects.contains(&Effect::StopRefreshTimer { session: 1 }));
    assert_eq!(effects.last(), Some(&Effect::Quit));
    assert_eq!(state.refresh_phase(), RefreshPhase::Stopped);

    let (_state, effects) = update(state, Msg::RefreshTimerFired);
    assert!(effects.is_empty());
}

#[test]
fn session_guard_is_a_flag_not_a_queue() {
    init_logging();
    let mut session = AutoRefreshSession::start(7, 2);
    assert_eq!(session.interval_secs(), 5, "interval floor");

    let TickOutcome::Reload(ticket) = session.tick(false) else {
        panic!("first tick reloads");
    };
    assert_eq!(session.tick(false), TickOutcome::SkippedInFlight);
    assert_eq!(session.tick(true), TickOutcome::SkippedInFlight);
    assert!(!session.settle(ReloadTicket { session: 7, seq: 99 }));
    assert!(session.settle(ticket));
    assert_eq!(session.phase(), RefreshPhase::Armed);
    assert_eq!(session.tick(true), TickOutcome::SkippedTyping);
}
