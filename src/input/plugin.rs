//! InputPlugin wiring the keyboard emulation and input events.
use bevy::prelude::*;

use super::{
    config::ControlsConfig,
    events::{ButtonPressedEvent, ButtonReleasedEvent, CursorMovedEvent},
    systems::emit_axis_events,
};

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ControlsConfig::load_or_default())
            .add_event::<ButtonPressedEvent>()
            .add_event::<ButtonReleasedEvent>()
            .add_event::<CursorMovedEvent>()
            .add_systems(Update, emit_axis_events);
    }
}
