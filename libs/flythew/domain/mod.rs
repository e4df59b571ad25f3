//! Domain Layer
//!
//! Pure win-detection logic over scoreboard snapshots. No I/O, no clock,
//! no dependencies on the plugin or animation layers.

pub mod win;

pub use win::{evaluate, FinalScore, WinEvent};
