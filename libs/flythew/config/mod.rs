//! Plugin configuration
//!
//! Every key is optional and falls back to its default. Out-of-range
//! numeric values are replaced by the default with a logged warning
//! instead of failing startup; unknown keys are ignored.

use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// How the host's continuous-scroll ("vegas") mode treats this plugin's
/// content: pause the scroll for the display duration, or let the content
/// scroll through as a fixed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VegasMode {
    Static,
    Fixed,
}

/// Fly the W plugin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    /// Enable/disable the plugin entirely
    pub enabled: bool,
    /// Seconds the host shows this plugin per rotation slot
    pub display_duration_seconds: f64,
    /// Scoreboard poll interval in seconds
    pub update_interval_seconds: u64,
    /// Hours to celebrate after a detected win
    pub celebration_hours: f64,
    /// Target frames per second for the flag wave
    pub animation_fps: f64,
    /// Overlay the final score on the display
    pub show_score: bool,
    /// Overlay the win text on the display
    pub show_text: bool,
    /// Built-in font face used for overlays
    pub font_name: String,
    /// Font pixel height
    pub font_size: u32,
    /// Ask the host to preempt normal rotation while celebrating
    pub live_priority: bool,
    /// Vegas scroll behavior for celebration content
    pub vegas_mode: VegasMode,
    /// Force a celebration without hitting the network (testing aid)
    pub simulate_win: bool,
    /// Tracked team abbreviation in the feed
    pub team_abbr: String,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            display_duration_seconds: 30.0,
            update_interval_seconds: 300,
            celebration_hours: 1.0,
            animation_fps: 12.0,
            show_score: true,
            show_text: true,
            font_name: "4x6".to_string(),
            font_size: 6,
            live_priority: true,
            vegas_mode: VegasMode::Static,
            simulate_win: false,
            team_abbr: "CHC".to_string(),
        }
    }
}

impl CelebrationConfig {
    /// Load configuration from a YAML file and normalize it.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let config: CelebrationConfig = serde_yaml::from_str(&yaml_content)?;
        Ok(config.normalized())
    }

    /// Replace out-of-range values with their defaults.
    ///
    /// Bounds match the original plugin's validation: intervals and sizes
    /// must be positive, `celebration_hours` at most 24, `animation_fps`
    /// at most 60.
    pub fn normalized(mut self) -> Self {
        let defaults = Self::default();

        if self.display_duration_seconds <= 0.0 {
            warn!(
                "display_duration_seconds {} out of range, using {}",
                self.display_duration_seconds, defaults.display_duration_seconds
            );
            self.display_duration_seconds = defaults.display_duration_seconds;
        }
        if self.update_interval_seconds == 0 {
            warn!(
                "update_interval_seconds must be positive, using {}",
                defaults.update_interval_seconds
            );
            self.update_interval_seconds = defaults.update_interval_seconds;
        }
        if self.celebration_hours <= 0.0 || self.celebration_hours > 24.0 {
            warn!(
                "celebration_hours {} out of range (0, 24], using {}",
                self.celebration_hours, defaults.celebration_hours
            );
            self.celebration_hours = defaults.celebration_hours;
        }
        if self.animation_fps <= 0.0 || self.animation_fps > 60.0 {
            warn!(
                "animation_fps {} out of range (0, 60], using {}",
                self.animation_fps, defaults.animation_fps
            );
            self.animation_fps = defaults.animation_fps;
        }
        if self.font_size == 0 {
            warn!("font_size must be positive, using {}", defaults.font_size);
            self.font_size = defaults.font_size;
        }
        if self.team_abbr.trim().is_empty() {
            warn!("team_abbr is empty, using {}", defaults.team_abbr);
            self.team_abbr = defaults.team_abbr.clone();
        }

        self
    }

    /// Minimum gap between scoreboard polls.
    pub fn update_interval(&self) -> Duration {
        Duration::seconds(self.update_interval_seconds as i64)
    }

    /// Length of the celebration window after a detected win.
    pub fn celebration_window(&self) -> Duration {
        Duration::milliseconds((self.celebration_hours * 3_600_000.0) as i64)
    }
}
