//! # Fly the W
//!
//! Chicago Cubs win-celebration unit for an LED matrix display host.
//!
//! The unit polls the MLB scoreboard (throttled), detects a finished game
//! won by the Cubs, and then serves a waving-flag animation for a
//! configurable celebration window. The host owns the display loop and the
//! clock; every entry point takes `now` explicitly so the whole lifecycle
//! is deterministic under test.
//!
//! ## Layers
//!
//! - **config**: validated plugin configuration with safe fallbacks
//! - **domain**: pure win evaluation over scoreboard snapshots
//! - **celebration**: the `Idle`/`Celebrating` state machine with lazy expiry
//! - **animation**: deterministic flag-wave frame generation and overlays
//! - **plugin**: the host-facing adapter wiring the above together

pub mod animation;
pub mod celebration;
pub mod config;
pub mod domain;
pub mod logging;
pub mod plugin;

// Re-export the host-facing surface
pub use animation::{AnimationModel, Frame, RenderError, Rgb};
pub use celebration::{CelebrationPhase, CelebrationState};
pub use config::{CelebrationConfig, ConfigError, VegasMode};
pub use domain::{evaluate, FinalScore, WinEvent};
pub use logging::init_tracing;
pub use plugin::{DisplayPlugin, FlyTheWPlugin, ScoreSource};
