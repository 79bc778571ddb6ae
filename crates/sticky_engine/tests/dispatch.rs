use std::cell::RefCell;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use sticky_core::{AutoRefreshSession, HexColor, ReloadTicket, TickOutcome};
use sticky_engine::{
    BrowserHost, HostError, ReloadDispatcher, ReloadMode, RELOAD_SETTLE_TIMEOUT,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Navigate(String),
    Reload,
}

#[derive(Default)]
struct RecordingHost {
    current: Option<String>,
    fail: bool,
    calls: RefCell<Vec<Call>>,
}

impl RecordingHost {
    fn showing(url: &str) -> Self {
        Self {
            current: Some(url.to_string()),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl BrowserHost for RecordingHost {
    fn navigate(&self, url: &str) -> Result<(), HostError> {
        self.calls.borrow_mut().push(Call::Navigate(url.to_string()));
        if self.fail {
            return Err(HostError::Navigation {
                url: url.to_string(),
                message: "offline".to_string(),
            });
        }
        Ok(())
    }

    fn reload(&self) -> Result<(), HostError> {
        self.calls.borrow_mut().push(Call::Reload);
        if self.fail {
            return Err(HostError::Reload("offline".to_string()));
        }
        Ok(())
    }

    fn current_url(&self) -> Option<String> {
        self.current.clone()
    }

    fn set_visible(&self, _visible: bool) -> Result<(), HostError> {
        Ok(())
    }

    fn set_background(&self, _color: HexColor) -> Result<(), HostError> {
        Ok(())
    }
}

fn ticket(session_id: u64) -> ReloadTicket {
    let mut session = AutoRefreshSession::start(session_id, 5);
    match session.tick(false) {
        TickOutcome::Reload(ticket) => ticket,
        other => panic!("expected a reload, got {other:?}"),
    }
}

#[test]
fn reloads_when_address_matches() {
    sticky_logging::initialize_for_tests();
    let host = RecordingHost::showing("HTTP://Example.com/");
    let mut dispatcher = ReloadDispatcher::new();

    let mode = dispatcher.dispatch(&host, ticket(1), "http://example.com/", Instant::now());
    assert_eq!(mode, Ok(ReloadMode::Reloaded));
    assert_eq!(host.calls(), vec![Call::Reload]);
}

#[test]
fn navigates_when_address_differs() {
    sticky_logging::initialize_for_tests();
    let host = RecordingHost::showing("http://other.example/");
    let mut dispatcher = ReloadDispatcher::new();

    let mode = dispatcher.dispatch(&host, ticket(1), "http://example.com/", Instant::now());
    assert_eq!(mode, Ok(ReloadMode::Navigated));
    assert_eq!(host.calls(), vec![Call::Navigate("http://example.com/".into())]);

    let blank = RecordingHost::default();
    let mode = dispatcher.dispatch(&blank, ticket(1), "http://example.com/", Instant::now());
    assert_eq!(mode, Ok(ReloadMode::Navigated));
}

#[test]
fn load_finished_settles_pending_ticket_once() {
    sticky_logging::initialize_for_tests();
    let host = RecordingHost::showing("http://example.com/");
    let mut dispatcher = ReloadDispatcher::new();
    let issued = ticket(1);

    dispatcher
        .dispatch(&host, issued, "http://example.com/", Instant::now())
        .unwrap();
    assert_eq!(dispatcher.pending(), Some(issued));
    assert_eq!(dispatcher.on_load_finished(), Some(issued));
    assert_eq!(dispatcher.on_load_finished(), None);
    assert_eq!(dispatcher.pending(), None);
}

#[test]
fn cancelled_session_drops_completion() {
    sticky_logging::initialize_for_tests();
    let host = RecordingHost::showing("http://example.com/");
    let mut dispatcher = ReloadDispatcher::new();
    let issued = ticket(1);

    dispatcher
        .dispatch(&host, issued, "http://example.com/", Instant::now())
        .unwrap();
    dispatcher.cancel_session(1);
    // Still tracked; the cancelled token is what silences it.
    assert_eq!(dispatcher.pending(), Some(issued));
    assert_eq!(dispatcher.on_load_finished(), None);
    assert_eq!(dispatcher.pending(), None);
}

#[test]
fn cancelling_another_session_keeps_pending() {
    sticky_logging::initialize_for_tests();
    let host = RecordingHost::showing("http://example.com/");
    let mut dispatcher = ReloadDispatcher::new();
    let issued = ticket(2);

    dispatcher
        .dispatch(&host, issued, "http://example.com/", Instant::now())
        .unwrap();
    dispatcher.cancel_session(1);
    assert_eq!(dispatcher.on_load_finished(), Some(issued));
}

#[test]
fn new_session_replaces_old_pending() {
    sticky_logging::initialize_for_tests();
    let host = RecordingHost::showing("http://example.com/");
    let mut dispatcher = ReloadDispatcher::new();

    dispatcher
        .dispatch(&host, ticket(1), "http://example.com/", Instant::now())
        .unwrap();
    dispatcher.begin_session(2);
    assert_eq!(dispatcher.on_load_finished(), None);

    let next = ticket(2);
    dispatcher
        .dispatch(&host, next, "http://example.com/", Instant::now())
        .unwrap();
    assert_eq!(dispatcher.on_load_finished(), Some(next));
}

#[test]
fn host_failure_hands_ticket_back() {
    sticky_logging::initialize_for_tests();
    let host = RecordingHost {
        fail: true,
        ..RecordingHost::showing("http://example.com/")
    };
    let mut dispatcher = ReloadDispatcher::new();
    let issued = ticket(1);

    assert_eq!(
        dispatcher.dispatch(&host, issued, "http://example.com/", Instant::now()),
        Err(issued)
    );
    assert_eq!(dispatcher.pending(), None);
}

#[test]
fn fragment_navigation_without_load_event_expires() {
    sticky_logging::initialize_for_tests();
    let host = RecordingHost::showing("http://dash.local/#/board/detail");
    let mut dispatcher = ReloadDispatcher::new();
    let issued = ticket(1);
    let start = Instant::now();

    let mode = dispatcher.dispatch(&host, issued, "http://dash.local/#/board", start);
    assert_eq!(mode, Ok(ReloadMode::Navigated));
    assert_eq!(dispatcher.deadline(), Some(start + RELOAD_SETTLE_TIMEOUT));

    let almost = start + RELOAD_SETTLE_TIMEOUT - Duration::from_millis(1);
    assert_eq!(dispatcher.expire(almost), None);
    assert_eq!(dispatcher.pending(), Some(issued));

    assert_eq!(dispatcher.expire(start + RELOAD_SETTLE_TIMEOUT), Some(issued));
    assert_eq!(dispatcher.pending(), None);
    assert_eq!(dispatcher.deadline(), None);
    assert_eq!(dispatcher.on_load_finished(), None);
}

#[test]
fn cancelled_reload_expires_silently() {
    sticky_logging::initialize_for_tests();
    let host = RecordingHost::showing("http://example.com/");
    let mut dispatcher = ReloadDispatcher::new();
    let start = Instant::now();

    dispatcher
        .dispatch(&host, ticket(1), "http://example.com/", start)
        .unwrap();
    dispatcher.cancel_session(1);
    assert_eq!(dispatcher.expire(start + RELOAD_SETTLE_TIMEOUT), None);
    assert_eq!(dispatcher.pending(), None);
}
