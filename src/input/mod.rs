//! Input module decoding the two-joystick device into hand-tagged events.
pub mod config;
pub mod events;
pub mod plugin;
pub mod systems;

pub use events::{
    AxisButton, ButtonPressedEvent, ButtonReleasedEvent, CursorDirection, CursorMovedEvent, Hand,
};
pub use plugin::InputPlugin;
