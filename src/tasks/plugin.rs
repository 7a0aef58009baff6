//! TaskPlugin wiring the board, the scheduler and its systems.
use bevy::prelude::*;

use crate::{core::plugin::update_simulation_clock, input::systems::emit_axis_events};

use super::{
    board::TaskBoard,
    events::{TaskCompletedEvent, TaskStateChangedEvent},
    scheduler::{SchedulerConfig, TaskScheduler},
    systems::{
        handle_task_completions, offer_ordinary_tasks, resolve_task_presses, trigger_focus_tasks,
    },
};

pub struct TaskPlugin;

impl Plugin for TaskPlugin {
    fn build(&self, app: &mut App) {
        let config = SchedulerConfig::load_or_default();
        info!(
            "Scheduler configured: offers every {:.1}s, focus every {:.1}s",
            config.offer_interval_seconds, config.focus_interval_seconds
        );

        app.insert_resource(TaskBoard::office())
            .insert_resource(TaskScheduler::new())
            .insert_resource(config)
            .add_event::<TaskCompletedEvent>()
            .add_event::<TaskStateChangedEvent>()
            .add_systems(
                Update,
                (
                    offer_ordinary_tasks.after(update_simulation_clock),
                    trigger_focus_tasks.after(offer_ordinary_tasks),
                    resolve_task_presses.after(emit_axis_events),
                    handle_task_completions.after(resolve_task_presses),
                ),
            );
    }
}
