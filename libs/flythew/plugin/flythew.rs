//! Fly the W plugin adapter
//!
//! Thin orchestration over the feed source, the win evaluator, the
//! celebration state machine, and the animation model. The adapter holds
//! no decision logic of its own beyond wiring and the poll throttle.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use tracing::{debug, info, warn};

use scorefeed::ScoreboardClient;

use crate::animation::{AnimationModel, Frame};
use crate::celebration::CelebrationState;
use crate::config::{CelebrationConfig, VegasMode};
use crate::domain::{evaluate, FinalScore, WinEvent};

use super::traits::{DisplayPlugin, ScoreSource};

const PLUGIN_NAME: &str = "fly_the_w";

/// Score used when a win is simulated via configuration.
const SIMULATED_SCORE: (u32, u32) = (7, 4);

/// Cubs win-celebration plugin
pub struct FlyTheWPlugin {
    config: CelebrationConfig,
    source: Arc<dyn ScoreSource>,
    state: CelebrationState,
    model: AnimationModel,
    width: usize,
    height: usize,
}

impl FlyTheWPlugin {
    /// Build a plugin for a `width` x `height` display over the given
    /// feed source. The configuration is normalized here; out-of-range
    /// values have already been warned about and replaced.
    pub fn new(
        width: usize,
        height: usize,
        config: CelebrationConfig,
        source: Arc<dyn ScoreSource>,
    ) -> Self {
        let config = config.normalized();
        let model = AnimationModel::new(width, height, &config);

        info!("Fly the W plugin initialized (display {}x{})", width, height);

        Self {
            config,
            source,
            state: CelebrationState::new(),
            model,
            width,
            height,
        }
    }

    /// Plugin wired to the live ESPN MLB scoreboard.
    pub fn with_live_feed(width: usize, height: usize, config: CelebrationConfig) -> Self {
        Self::new(width, height, config, Arc::new(ScoreboardClient::espn_mlb()))
    }

    /// Current configuration (read-only).
    pub fn config(&self) -> &CelebrationConfig {
        &self.config
    }

    /// Celebration state (read-only; all mutation stays inside the
    /// state machine's own transitions).
    pub fn state(&self) -> &CelebrationState {
        &self.state
    }

    /// Swap in a new configuration at runtime.
    ///
    /// Rebuilds the animation cache. Turning `simulate_win` off cancels
    /// an active celebration; turning it on takes effect on the next
    /// `update` call, which carries the host clock.
    pub fn apply_config(&mut self, new_config: CelebrationConfig) {
        let was_simulating = self.config.simulate_win;

        self.config = new_config.normalized();
        self.model = AnimationModel::new(self.width, self.height, &self.config);

        if was_simulating && !self.config.simulate_win {
            self.state.cancel_celebration();
            info!("simulation cancelled");
        }

        info!("configuration updated");
    }

    /// Status record for the host's introspection surface.
    pub fn info(&self, now: DateTime<Utc>) -> serde_json::Value {
        json!({
            "name": PLUGIN_NAME,
            "celebrating": self.state.is_celebrating(now),
            "win_expires_at": self.state.expires_at().map(|t| t.to_rfc3339()),
            "last_win_score": self.state.captured_score().map(FinalScore::summary),
            "last_update": self.state.last_poll_at().map(|t| t.to_rfc3339()),
        })
    }

    /// Force-start a celebration with a fixed score, bypassing the feed.
    fn trigger_simulation(&mut self, now: DateTime<Utc>) {
        let event = WinEvent::win(FinalScore {
            team_abbr: self.config.team_abbr.clone(),
            opponent_abbr: "SIM".to_string(),
            team_score: SIMULATED_SCORE.0,
            opponent_score: SIMULATED_SCORE.1,
        });
        self.state
            .on_poll_result(&event, now, self.config.celebration_window());

        info!(
            "simulated win activated, celebrating for {} hours",
            self.config.celebration_hours
        );
    }

    fn current_frame(&self, now: DateTime<Utc>) -> Frame {
        let elapsed = self.state.elapsed(now).unwrap_or_else(Duration::zero);
        self.model.frame_at(elapsed, self.state.captured_score())
    }
}

#[async_trait]
impl DisplayPlugin for FlyTheWPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    async fn update(&mut self, now: DateTime<Utc>) {
        if !self.config.enabled {
            return;
        }

        // Simulation mode skips the network entirely.
        if self.config.simulate_win {
            if !self.state.is_celebrating(now) {
                self.trigger_simulation(now);
            }
            return;
        }

        if !self.state.should_poll(now, self.config.update_interval()) {
            debug!("skipping update, still inside the poll interval");
            return;
        }

        match self.source.fetch_snapshots().await {
            Ok(snapshots) => {
                let event = evaluate(&snapshots, &self.config.team_abbr);
                self.state
                    .on_poll_result(&event, now, self.config.celebration_window());
            }
            // No new information; the next interval is the retry.
            Err(e) => warn!("scoreboard poll failed: {e}"),
        }

        self.state.mark_poll(now);
    }

    fn display(&mut self, now: DateTime<Utc>) -> Frame {
        if self.state.is_celebrating(now) {
            self.current_frame(now)
        } else {
            self.model.blank()
        }
    }

    fn has_live_content(&self, now: DateTime<Utc>) -> bool {
        self.state.is_celebrating(now)
    }

    fn vegas_mode(&self) -> VegasMode {
        self.config.vegas_mode
    }

    fn vegas_content(&self, now: DateTime<Utc>) -> Option<Frame> {
        if self.state.is_celebrating(now) {
            Some(self.current_frame(now))
        } else {
            None
        }
    }

    fn cleanup(&mut self) {
        self.state.cleanup();
        info!("Fly the W plugin cleaned up");
    }
}
