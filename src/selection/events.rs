//! Selection events published for highlight presentation.
use bevy::prelude::{Event, Message};

use crate::input::Hand;

/// The cursor landed on a new slot; `available` drives the highlight colour.
#[derive(Event, Message, Debug, Clone)]
pub struct SelectionChangedEvent {
    pub hand: Hand,
    pub index: usize,
    pub available: bool,
}

/// A select landed on a task that cannot be played: transient flash, no
/// state change.
#[derive(Event, Message, Debug, Clone)]
pub struct InvalidSelectionEvent {
    pub hand: Hand,
    pub index: usize,
}
