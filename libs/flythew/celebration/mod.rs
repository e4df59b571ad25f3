//! Celebration lifecycle
//!
//! Owns the authoritative `Idle`/`Celebrating` state. All mutation goes
//! through [`CelebrationState`]'s transition methods; fields are private so
//! no other layer can bypass them.

pub mod state;

pub use state::{CelebrationPhase, CelebrationState};
