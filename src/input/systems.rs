//! Keyboard emulation turning key presses into hand-tagged events.
use bevy::prelude::*;

use super::{
    config::ControlsConfig,
    events::{ButtonPressedEvent, ButtonReleasedEvent, CursorDirection, CursorMovedEvent, Hand},
};

/// Polls the keyboard map and emits the discrete events the core consumes.
///
/// Any other producer (the real cabinet driver, a test harness) can write the
/// same events; this system is just the desktop stand-in.
pub fn emit_axis_events(
    keyboard: Res<ButtonInput<KeyCode>>,
    controls: Res<ControlsConfig>,
    mut pressed: MessageWriter<ButtonPressedEvent>,
    mut released: MessageWriter<ButtonReleasedEvent>,
    mut moved: MessageWriter<CursorMovedEvent>,
) {
    for hand in [Hand::Left, Hand::Right] {
        let bindings = controls.hand(hand);

        for (button, key) in bindings.buttons {
            if keyboard.just_pressed(key) {
                pressed.write(ButtonPressedEvent { hand, button });
            }
            if keyboard.just_released(key) {
                released.write(ButtonReleasedEvent { hand, button });
            }
        }

        if keyboard.just_pressed(bindings.prev) {
            moved.write(CursorMovedEvent {
                hand,
                direction: CursorDirection::Prev,
            });
        }
        if keyboard.just_pressed(bindings.next) {
            moved.write(CursorMovedEvent {
                hand,
                direction: CursorDirection::Next,
            });
        }
    }
}
