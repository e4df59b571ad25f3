//! Fly the W - Main Library
//!
//! Re-exports the workspace libraries:
//!
//! - **flythew**: the celebration unit (config, win detection, state
//!   machine, animation, host-facing plugin adapter)
//! - **scorefeed**: the ESPN MLB scoreboard client
//!
//! Binaries in `src/bin/` provide a one-shot feed probe and a terminal
//! simulator for the celebration display.

pub use flythew;
pub use scorefeed;
