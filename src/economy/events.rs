//! Economy events published for display binding.
use bevy::prelude::{Event, Message};

/// Fired whenever the balance moves; carries the rate for HUD colouring.
#[derive(Event, Message, Debug, Clone)]
pub struct MoneyChangedEvent {
    pub money: f64,
    pub rate: f64,
}
