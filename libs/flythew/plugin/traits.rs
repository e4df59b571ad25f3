//! Plugin trait definitions
//!
//! Defines the contract between the display host and this unit, plus the
//! seam for the scoreboard feed so tests can script the upstream.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use scorefeed::{GameSnapshot, ScoreboardClient};

use crate::animation::Frame;
use crate::config::VegasMode;

/// Source of scoreboard snapshots.
///
/// The live implementation wraps the HTTP client; tests substitute a
/// scripted feed. Sources are stateless from the plugin's point of view:
/// throttling is the caller's job.
#[async_trait]
pub trait ScoreSource: Send + Sync {
    async fn fetch_snapshots(&self) -> scorefeed::Result<Vec<GameSnapshot>>;
}

#[async_trait]
impl ScoreSource for ScoreboardClient {
    async fn fetch_snapshots(&self) -> scorefeed::Result<Vec<GameSnapshot>> {
        ScoreboardClient::fetch_snapshots(self).await
    }
}

/// Capability set a display plugin offers the host.
///
/// Every method is safe to call at any time, including before the first
/// `update`; `now` is always supplied by the host so plugins never read
/// the system clock themselves.
#[async_trait]
pub trait DisplayPlugin: Send + Sync {
    /// Plugin name for logging and identification
    fn name(&self) -> &str;

    /// Refresh upstream state. May perform (throttled) network I/O.
    async fn update(&mut self, now: DateTime<Utc>);

    /// Render the current frame. Returns a blank frame when the plugin
    /// has nothing to show; it never fails.
    fn display(&mut self, now: DateTime<Utc>) -> Frame;

    /// Whether the plugin currently has live content the host may want
    /// to pull forward in its rotation.
    fn has_live_content(&self, now: DateTime<Utc>) -> bool;

    /// How the host's continuous-scroll mode should treat this plugin.
    fn vegas_mode(&self) -> VegasMode;

    /// Current frame as a scrollable block, if the plugin is live.
    fn vegas_content(&self, now: DateTime<Utc>) -> Option<Frame>;

    /// Reset to the initial state, e.g. on plugin unload.
    fn cleanup(&mut self);
}
