//! SelectionPlugin wiring the cursors and their input systems.
use bevy::prelude::*;

use crate::{input::systems::emit_axis_events, tasks::TaskBoard};

use super::{
    cursor::SelectionCursors,
    events::{InvalidSelectionEvent, SelectionChangedEvent},
    systems::{move_selection_cursors, select_tasks},
};

pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectionCursors>()
            .add_event::<SelectionChangedEvent>()
            .add_event::<InvalidSelectionEvent>()
            .add_systems(Startup, allocate_selection_cursors)
            .add_systems(
                Update,
                (
                    move_selection_cursors.after(emit_axis_events),
                    select_tasks.after(move_selection_cursors),
                ),
            );
    }
}

/// Sizes the fresh allocation to the board once it exists.
fn allocate_selection_cursors(board: Res<TaskBoard>, mut cursors: ResMut<SelectionCursors>) {
    cursors.reset(board.len());
}
