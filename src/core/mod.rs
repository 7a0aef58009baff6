//! Core module owning the scaled simulation clock.
pub mod plugin;

pub use plugin::{CorePlugin, SimulationClock};
