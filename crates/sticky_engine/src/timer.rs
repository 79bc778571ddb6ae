use std::time::{Duration, Instant};

use sticky_core::SessionId;

/// Repeating deadline for the auto-refresh session, polled by the UI loop.
#[derive(Debug, Default)]
pub struct RefreshTimer {
    armed: Option<Armed>,
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    session: SessionId,
    interval: Duration,
    deadline: Instant,
}

impl RefreshTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer; the first tick is one full interval away.
    pub fn arm(&mut self, session: SessionId, interval: Duration, now: Instant) {
        self.armed = Some(Armed {
            session,
            interval,
            deadline: now + interval,
        });
    }

    /// Stop the timer if it belongs to `session`.
    pub fn stop(&mut self, session: SessionId) -> bool {
        match self.armed {
            Some(armed) if armed.session == session => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.armed.map(|armed| armed.deadline)
    }

    pub fn session(&self) -> Option<SessionId> {
        self.armed.map(|armed| armed.session)
    }

    /// Returns `true` once per elapsed deadline and schedules the next one.
    ///
    /// Missed periods are not replayed: after a long stall the next deadline
    /// is one interval from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        if now < armed.deadline {
            return false;
        }
        let next = armed.deadline + armed.interval;
        armed.deadline = if next > now { next } else { now + armed.interval };
        true
    }
}
