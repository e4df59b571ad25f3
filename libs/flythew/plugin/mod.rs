//! Plugin Layer
//!
//! The host-facing surface: the [`DisplayPlugin`] capability trait, the
//! [`ScoreSource`] seam for the feed, and the concrete Fly the W adapter.

pub mod flythew;
pub mod traits;

pub use flythew::FlyTheWPlugin;
pub use traits::{DisplayPlugin, ScoreSource};
