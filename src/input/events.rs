//! Hand-tagged events emitted by the input layer.
use bevy::prelude::{Event, Message};
use std::fmt;

/// Which joystick-and-button cluster produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn other(self) -> Hand {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Physical buttons on one hand's cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisButton {
    A,
    X,
    I,
    S,
    W,
}

impl AxisButton {
    pub fn label(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::X => "x",
            Self::I => "i",
            Self::S => "s",
            Self::W => "w",
        }
    }
}

/// Joystick flick along the task-browsing axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorDirection {
    Prev,
    Next,
}

#[derive(Event, Message, Debug, Clone)]
pub struct ButtonPressedEvent {
    pub hand: Hand,
    pub button: AxisButton,
}

#[derive(Event, Message, Debug, Clone)]
pub struct ButtonReleasedEvent {
    pub hand: Hand,
    pub button: AxisButton,
}

#[derive(Event, Message, Debug, Clone)]
pub struct CursorMovedEvent {
    pub hand: Hand,
    pub direction: CursorDirection,
}
