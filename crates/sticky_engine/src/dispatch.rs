use std::time::{Duration, Instant};

use sticky_core::{same_address, ReloadTicket, SessionId};
use sticky_logging::{sticky_debug, sticky_warn};
use tokio_util::sync::CancellationToken;

use crate::host::BrowserHost;

/// How a reload was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadMode {
    Reloaded,
    Navigated,
}

/// How long a reload may wait for its load-finished event before it is
/// settled anyway. Fragment-only navigations never report one.
pub const RELOAD_SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

struct PendingReload {
    ticket: ReloadTicket,
    token: CancellationToken,
    deadline: Instant,
}

/// Issues auto-refresh reloads and reports when they settle.
///
/// A reload settles on the next finished page load or after
/// [`RELOAD_SETTLE_TIMEOUT`], whichever comes first. Each session gets a
/// cancellation token; stopping the session cancels it, so a reload that
/// settles afterwards is dropped quietly.
#[derive(Default)]
pub struct ReloadDispatcher {
    session: Option<(SessionId, CancellationToken)>,
    pending: Option<PendingReload>,
}

impl ReloadDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_session(&mut self, session: SessionId) {
        if matches!(&self.session, Some((id, _)) if *id == session) {
            return;
        }
        self.cancel_current();
        self.session = Some((session, CancellationToken::new()));
    }

    pub fn cancel_session(&mut self, session: SessionId) {
        if matches!(&self.session, Some((id, _)) if *id == session) {
            self.cancel_current();
        }
    }

    fn cancel_current(&mut self) {
        if let Some((id, token)) = self.session.take() {
            sticky_debug!("Cancelling auto-refresh session {}", id);
            token.cancel();
        }
    }

    /// Reload when the host already shows `url`, otherwise navigate to it.
    ///
    /// Returns the ticket immediately when the host call fails, since no load
    /// event will follow.
    pub fn dispatch(
        &mut self,
        host: &dyn BrowserHost,
        ticket: ReloadTicket,
        url: &str,
        now: Instant,
    ) -> Result<ReloadMode, ReloadTicket> {
        self.begin_session(ticket.session);
        let token = match &self.session {
            Some((_, token)) => token.child_token(),
            None => CancellationToken::new(),
        };

        let current = host.current_url().unwrap_or_default();
        let (mode, result) = if same_address(&current, url) {
            (ReloadMode::Reloaded, host.reload())
        } else {
            (ReloadMode::Navigated, host.navigate(url))
        };

        match result {
            Ok(()) => {
                self.pending = Some(PendingReload {
                    ticket,
                    token,
                    deadline: now + RELOAD_SETTLE_TIMEOUT,
                });
                Ok(mode)
            }
            Err(err) => {
                sticky_warn!("Auto-refresh of {} failed: {}", url, err);
                self.pending = None;
                Err(ticket)
            }
        }
    }

    /// A page load finished; returns the ticket to settle unless cancelled.
    pub fn on_load_finished(&mut self) -> Option<ReloadTicket> {
        self.settle()
    }

    /// Settles a reload whose load-finished event never arrived.
    pub fn expire(&mut self, now: Instant) -> Option<ReloadTicket> {
        let overdue = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if overdue {
            self.settle()
        } else {
            None
        }
    }

    /// When [`expire`](Self::expire) should next be polled.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    fn settle(&mut self) -> Option<ReloadTicket> {
        let pending = self.pending.take()?;
        if pending.token.is_cancelled() {
            sticky_debug!(
                "Dropping reload session={} seq={} from a cancelled session",
                pending.ticket.session,
                pending.ticket.seq
            );
            return None;
        }
        Some(pending.ticket)
    }

    pub fn pending(&self) -> Option<ReloadTicket> {
        self.pending.as_ref().map(|pending| pending.ticket)
    }
}
