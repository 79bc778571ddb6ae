//! Auto-refresh session: an owned value that exists only while refresh is enabled.

pub const MIN_INTERVAL_SECS: u32 = 5;
pub const DEFAULT_INTERVAL_SECS: u32 = 30;

pub type SessionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPhase {
    #[default]
    Stopped,
    Armed,
    Refreshing,
}

/// Identifies one reload. Tickets from a dropped session are stale by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReloadTicket {
    pub session: SessionId,
    pub seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Reload(ReloadTicket),
    /// A reload is still in flight; the tick is dropped, not deferred.
    SkippedInFlight,
    /// The page reports a focused editable element; no catch-up later.
    SkippedTyping,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoRefreshSession {
    id: SessionId,
    interval_secs: u32,
    next_seq: u64,
    in_flight: Option<ReloadTicket>,
}

impl AutoRefreshSession {
    pub fn start(id: SessionId, interval_secs: u32) -> Self {
        Self {
            id,
            interval_secs: interval_secs.max(MIN_INTERVAL_SECS),
            next_seq: 1,
            in_flight: None,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
    }

    pub fn phase(&self) -> RefreshPhase {
        if self.in_flight.is_some() {
            RefreshPhase::Refreshing
        } else {
            RefreshPhase::Armed
        }
    }

    pub fn in_flight(&self) -> Option<ReloadTicket> {
        self.in_flight
    }

    pub fn tick(&mut self, typing: bool) -> TickOutcome {
        if self.in_flight.is_some() {
            return TickOutcome::SkippedInFlight;
        }
        if typing {
            return TickOutcome::SkippedTyping;
        }
        let ticket = ReloadTicket {
            session: self.id,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.in_flight = Some(ticket);
        TickOutcome::Reload(ticket)
    }

    /// Returns `true` when `ticket` was the reload in flight for this session.
    pub fn settle(&mut self, ticket: ReloadTicket) -> bool {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Changing the interval keeps any reload already in flight.
    pub fn rearm(&mut self, interval_secs: u32) {
        self.interval_secs = interval_secs.max(MIN_INTERVAL_SECS);
    }
}

/// Interval typed by the user, if it is all digits and at least the minimum.
pub fn parse_interval_text(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed
        .parse::<u32>()
        .ok()
        .filter(|secs| *secs >= MIN_INTERVAL_SECS)
}

pub fn effective_interval(text: &str) -> u32 {
    parse_interval_text(text).unwrap_or(DEFAULT_INTERVAL_SECS)
}
