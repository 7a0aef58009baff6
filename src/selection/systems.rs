//! Systems routing hand input into the selection cursors.
use bevy::prelude::*;

use crate::{
    input::{AxisButton, ButtonPressedEvent, CursorMovedEvent},
    tasks::{TaskBoard, TaskStateChangedEvent},
};

use super::{
    cursor::SelectionCursors,
    events::{InvalidSelectionEvent, SelectionChangedEvent},
};

/// Applies joystick flicks to the owning hand's cursor.
pub fn move_selection_cursors(
    mut moves: MessageReader<CursorMovedEvent>,
    mut cursors: ResMut<SelectionCursors>,
    board: Res<TaskBoard>,
    mut changes: MessageWriter<SelectionChangedEvent>,
) {
    for event in moves.read() {
        let Some(index) = cursors.move_cursor(event.hand, event.direction, board.len()) else {
            continue;
        };
        let available = board.get(index).is_some_and(|task| task.is_available());
        changes.write(SelectionChangedEvent {
            hand: event.hand,
            index,
            available,
        });
    }
}

/// Starts the indexed task on the A button, or flashes an invalid pick.
pub fn select_tasks(
    mut presses: MessageReader<ButtonPressedEvent>,
    mut cursors: ResMut<SelectionCursors>,
    mut board: ResMut<TaskBoard>,
    mut invalid: MessageWriter<InvalidSelectionEvent>,
    mut state_changes: MessageWriter<TaskStateChangedEvent>,
) {
    for press in presses.read() {
        if press.button != AxisButton::A {
            continue;
        }
        if !cursors.is_active(press.hand) {
            continue;
        }

        let index = cursors.hand(press.hand).index();
        let Some(task) = board.get_mut(index) else {
            continue;
        };

        if !task.play() {
            debug!(
                "{} hand selected {} while {}",
                press.hand,
                task.id(),
                task.state().label()
            );
            invalid.write(InvalidSelectionEvent {
                hand: press.hand,
                index,
            });
            continue;
        }

        cursors.begin_play(press.hand, task.id());
        info!("{} hand starts {} ({})", press.hand, task.id(), task.kind().label());
        state_changes.write(TaskStateChangedEvent {
            task: task.id(),
            state: task.state(),
        });
    }
}
