//! Celebration state machine

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::domain::{FinalScore, WinEvent};

/// Stored lifecycle phase.
///
/// The stored phase lags reality: expiry is time-based and applied lazily
/// on read, so external checks must go through [`CelebrationState::is_celebrating`]
/// rather than comparing this value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CelebrationPhase {
    Idle,
    Celebrating,
}

/// The single mutable celebration record.
///
/// Created once per plugin instance, reset only by [`CelebrationState::cleanup`].
/// There is no timer thread; expiry is derived from `now` on every query.
#[derive(Debug, Clone, PartialEq)]
pub struct CelebrationState {
    phase: CelebrationPhase,
    started_at: Option<DateTime<Utc>>,
    expires_at: Option<DateTime<Utc>>,
    captured_score: Option<FinalScore>,
    last_poll_at: Option<DateTime<Utc>>,
}

impl Default for CelebrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl CelebrationState {
    /// Fresh idle state with nothing captured.
    pub fn new() -> Self {
        Self {
            phase: CelebrationPhase::Idle,
            started_at: None,
            expires_at: None,
            captured_score: None,
            last_poll_at: None,
        }
    }

    /// Stored phase (may lag expiry; see [`CelebrationState::is_celebrating`]).
    pub fn phase(&self) -> CelebrationPhase {
        self.phase
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn captured_score(&self) -> Option<&FinalScore> {
        self.captured_score.as_ref()
    }

    pub fn last_poll_at(&self) -> Option<DateTime<Utc>> {
        self.last_poll_at
    }

    /// Derived celebration check: started, and the window has not passed.
    pub fn is_celebrating(&self, now: DateTime<Utc>) -> bool {
        self.phase == CelebrationPhase::Celebrating
            && self.expires_at.is_some_and(|expires| now < expires)
    }

    /// Time since the celebration started, if one ever did.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.started_at.map(|started| now - started)
    }

    /// Whether enough time has passed since the last poll attempt.
    pub fn should_poll(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        self.last_poll_at.is_none_or(|last| now - last >= interval)
    }

    /// Record a poll attempt, successful or not.
    pub fn mark_poll(&mut self, now: DateTime<Utc>) {
        self.last_poll_at = Some(now);
    }

    /// Apply one poll's evaluation result.
    ///
    /// A win starts the celebration window exactly once per distinct win:
    /// re-reports of the same final score never restart or extend the
    /// window, even after it has expired. A non-win never retracts an
    /// active celebration; only the passage of time does.
    pub fn on_poll_result(&mut self, event: &WinEvent, now: DateTime<Utc>, window: Duration) {
        if !event.won {
            return;
        }

        if self.is_celebrating(now) {
            debug!("win re-reported during active celebration, keeping current window");
            return;
        }

        // The same decided game stays on the feed after the window expires;
        // a matching captured score means this win was already celebrated.
        if self.phase == CelebrationPhase::Celebrating
            && self.captured_score == event.final_score
        {
            debug!("win already celebrated, not re-arming");
            return;
        }

        let Some(score) = event.final_score.clone() else {
            debug!("won event carried no final score, ignoring");
            return;
        };

        info!(
            "win detected: {}. Celebrating until {}",
            score,
            now + window
        );

        self.phase = CelebrationPhase::Celebrating;
        self.started_at = Some(now);
        self.expires_at = Some(now + window);
        self.captured_score = Some(score);
    }

    /// Unconditional reset to the initial idle state. Idempotent.
    pub fn cleanup(&mut self) {
        *self = Self::new();
    }

    /// Drop an active celebration without touching the poll clock.
    ///
    /// Used when simulation mode is switched off mid-celebration.
    pub fn cancel_celebration(&mut self) {
        self.phase = CelebrationPhase::Idle;
        self.started_at = None;
        self.expires_at = None;
        self.captured_score = None;
    }
}
