//! Shift module: run progression, quota gating and the working-day clock.
pub mod config;
pub mod events;
pub mod plugin;
pub mod progression;
pub mod systems;

pub use config::{ShiftRoster, ShiftSpec};
pub use events::{ShiftChangedEvent, ShiftFailedEvent, ShiftWonEvent};
pub use plugin::ShiftPlugin;
pub use progression::{ShiftPhase, ShiftProgression, ShiftVerdict};
