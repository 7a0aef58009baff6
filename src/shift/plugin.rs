//! ShiftPlugin wiring progression, the quota gate and run controls.
use bevy::prelude::*;

use crate::{core::plugin::update_simulation_clock, selection::systems::select_tasks};

use super::{
    config::ShiftRoster,
    events::{ShiftChangedEvent, ShiftFailedEvent, ShiftWonEvent},
    progression::ShiftProgression,
    systems::{advance_shift_clock, check_end_of_shift, handle_run_controls},
};

pub struct ShiftPlugin;

impl Plugin for ShiftPlugin {
    fn build(&self, app: &mut App) {
        let roster = ShiftRoster::load_or_default();
        info!(
            "Shift ladder configured: {} shifts, first role '{}'",
            roster.len(),
            roster.clamped(0).role
        );

        app.insert_resource(roster)
            .insert_resource(ShiftProgression::new())
            .add_event::<ShiftChangedEvent>()
            .add_event::<ShiftFailedEvent>()
            .add_event::<ShiftWonEvent>()
            .add_systems(
                Update,
                (
                    advance_shift_clock.after(update_simulation_clock),
                    check_end_of_shift.after(advance_shift_clock),
                    // Runs after selection so a starting press cannot leak
                    // into the new round's cursors on the same frame.
                    handle_run_controls.after(select_tasks),
                ),
            );
    }
}
