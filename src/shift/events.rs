//! Shift events exposed to the display layer.
use bevy::prelude::{Event, Message};

/// A new shift began (including the first one of a run).
#[derive(Event, Message, Debug, Clone)]
pub struct ShiftChangedEvent {
    pub index: usize,
    pub role: String,
}

/// The run ended below quota; a restart is required.
#[derive(Event, Message, Debug, Clone)]
pub struct ShiftFailedEvent {
    pub index: usize,
    pub tasks_completed: u32,
    pub money: f64,
}

/// Every shift on the ladder was cleared.
#[derive(Event, Message, Debug, Clone)]
pub struct ShiftWonEvent {
    pub money: f64,
}
