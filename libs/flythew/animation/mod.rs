//! Animation Layer
//!
//! Deterministic frame generation for the celebration display. The flag
//! cycle is pre-rendered once at init; per-call work is a frame clone plus
//! overlay text, so the display loop can call into it at full frame rate
//! without touching the disk.

pub mod flag;
pub mod font;
pub mod frame;
pub mod model;

pub use flag::CYCLE_FRAMES;
pub use font::{Font, RenderError};
pub use frame::{Frame, Rgb};
pub use model::AnimationModel;
