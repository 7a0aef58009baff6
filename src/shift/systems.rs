//! Shift lifecycle systems: the working-day clock, the quota gate and the
//! run start/restart controls.
use bevy::prelude::*;

use crate::{
    core::SimulationClock,
    economy::RateAccumulator,
    input::{AxisButton, ButtonPressedEvent},
    selection::SelectionCursors,
    tasks::{
        systems::reset_round, SchedulerConfig, TaskBoard, TaskScheduler, TaskStateChangedEvent,
    },
};

use super::{
    config::ShiftRoster,
    events::{ShiftChangedEvent, ShiftFailedEvent, ShiftWonEvent},
    progression::{ShiftPhase, ShiftProgression, ShiftVerdict},
};

/// Accrues shift time from the simulation clock.
pub fn advance_shift_clock(clock: Res<SimulationClock>, mut progression: ResMut<ShiftProgression>) {
    progression.tick(clock.delta_seconds());
}

/// Rules on the shift once its duration has elapsed, and either rolls into
/// the next one or ends the run.
#[allow(clippy::too_many_arguments)]
pub fn check_end_of_shift(
    roster: Res<ShiftRoster>,
    config: Res<SchedulerConfig>,
    mut progression: ResMut<ShiftProgression>,
    mut ledger: ResMut<RateAccumulator>,
    mut scheduler: ResMut<TaskScheduler>,
    mut board: ResMut<TaskBoard>,
    mut cursors: ResMut<SelectionCursors>,
    mut state_changes: MessageWriter<TaskStateChangedEvent>,
    mut shift_changed: MessageWriter<ShiftChangedEvent>,
    mut shift_failed: MessageWriter<ShiftFailedEvent>,
    mut shift_won: MessageWriter<ShiftWonEvent>,
) {
    if progression.phase() != ShiftPhase::Running {
        return;
    }
    let spec = roster.clamped(progression.shift_index()).clone();
    let money = ledger.money();
    let Some(verdict) = progression.evaluate(&spec, money, roster.len()) else {
        return;
    };

    let mut changes = Vec::new();
    reset_round(&mut board, &mut scheduler, &mut cursors, &mut changes);

    match verdict {
        ShiftVerdict::Advanced => {
            // Modifiers do not carry across shifts; the balance does.
            ledger.stop();
            ledger.start();
            progression.start_next_shift();
            scheduler.start(&config);
            cursors.lift_suspension();
            let next = roster.clamped(progression.shift_index());
            info!(
                "Shift cleared as {}; promoted to {} with {:.2} on the books",
                spec.role, next.role, money
            );
            shift_changed.write(ShiftChangedEvent {
                index: progression.shift_index(),
                role: next.role.clone(),
            });
        }
        ShiftVerdict::Won => {
            ledger.stop();
            info!("Run won with {:.2} on the books", money);
            shift_won.write(ShiftWonEvent { money });
        }
        ShiftVerdict::Failed => {
            ledger.stop();
            warn!(
                "Shift failed: {}/{} tasks, {:.2}/{:.2} money",
                progression.tasks_completed(),
                spec.task_target,
                money,
                spec.money_target
            );
            shift_failed.write(ShiftFailedEvent {
                index: progression.shift_index(),
                tasks_completed: progression.tasks_completed(),
                money,
            });
        }
    }

    for (task, state) in changes {
        state_changes.write(TaskStateChangedEvent { task, state });
    }
}

/// Starts a run on A from the menu or game-over screen; W throws a running
/// run away (debug shortcut on the cabinet).
#[allow(clippy::too_many_arguments)]
pub fn handle_run_controls(
    mut presses: MessageReader<ButtonPressedEvent>,
    roster: Res<ShiftRoster>,
    config: Res<SchedulerConfig>,
    mut progression: ResMut<ShiftProgression>,
    mut ledger: ResMut<RateAccumulator>,
    mut scheduler: ResMut<TaskScheduler>,
    mut board: ResMut<TaskBoard>,
    mut cursors: ResMut<SelectionCursors>,
    mut state_changes: MessageWriter<TaskStateChangedEvent>,
    mut shift_changed: MessageWriter<ShiftChangedEvent>,
    mut shift_failed: MessageWriter<ShiftFailedEvent>,
) {
    for press in presses.read() {
        let mut changes = Vec::new();
        match (progression.phase(), press.button) {
            (ShiftPhase::Idle | ShiftPhase::Failed | ShiftPhase::Won, AxisButton::A) => {
                reset_round(&mut board, &mut scheduler, &mut cursors, &mut changes);
                progression.begin_run();
                ledger.reset();
                ledger.start();
                scheduler.start(&config);
                cursors.lift_suspension();
                let spec = roster.clamped(0);
                info!("Clocking in as {}", spec.role);
                shift_changed.write(ShiftChangedEvent {
                    index: 0,
                    role: spec.role.clone(),
                });
            }
            (ShiftPhase::Running, AxisButton::W) => {
                progression.abandon_run();
                let money = ledger.money();
                ledger.stop();
                reset_round(&mut board, &mut scheduler, &mut cursors, &mut changes);
                warn!("Run abandoned on the W button");
                shift_failed.write(ShiftFailedEvent {
                    index: progression.shift_index(),
                    tasks_completed: progression.tasks_completed(),
                    money,
                });
            }
            _ => {}
        }
        for (task, state) in changes {
            state_changes.write(TaskStateChangedEvent { task, state });
        }
    }
}
