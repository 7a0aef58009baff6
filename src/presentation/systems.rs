//! Systems binding core events to the console presenters.
use bevy::prelude::*;

use crate::{
    economy::MoneyChangedEvent,
    input::{ButtonPressedEvent, ButtonReleasedEvent},
    selection::{InvalidSelectionEvent, SelectionChangedEvent},
    shift::{
        ShiftChangedEvent, ShiftFailedEvent, ShiftPhase, ShiftProgression, ShiftRoster,
        ShiftWonEvent,
    },
    tasks::{TaskBoard, TaskState, TaskStateChangedEvent},
};

use super::{
    console::ConsolePresentation, registry::PresentationRegistry, subtitles::SubtitleLibrary,
};

/// Registers a console presenter for every task on the board.
pub fn register_office_presenters(
    board: Res<TaskBoard>,
    subtitles: Res<SubtitleLibrary>,
    mut registry: ResMut<PresentationRegistry>,
) {
    for task in board.iter() {
        let prompt = subtitles.line(task.kind().prompt_key()).to_string();
        registry.register(task.id(), Box::new(ConsolePresentation::new(prompt)));
    }
    info!("Registered {} console presenters", board.len());
}

/// Forwards state transitions to the per-task presenters.
pub fn apply_task_presentation(
    mut changes: MessageReader<TaskStateChangedEvent>,
    board: Res<TaskBoard>,
    registry: Res<PresentationRegistry>,
) {
    for event in changes.read() {
        let Some(task) = board.by_id(event.task) else {
            continue;
        };
        let Some(presenter) = registry.get(event.task) else {
            continue;
        };
        match event.state {
            TaskState::Available => presenter.show_available(task),
            TaskState::Playing => presenter.show_playing(task),
            TaskState::Complete => presenter.show_complete(task),
            TaskState::Dormant | TaskState::Paused => presenter.hide(task),
        }
    }
}

/// Highlight and invalid-pick feedback a real scene would animate.
pub fn echo_selection_feedback(
    mut selections: MessageReader<SelectionChangedEvent>,
    mut invalid: MessageReader<InvalidSelectionEvent>,
) {
    for event in selections.read() {
        debug!(
            "{} cursor on slot {} ({})",
            event.hand,
            event.index,
            if event.available { "green" } else { "red" }
        );
    }
    for event in invalid.read() {
        info!("{} hand flashes red on slot {}", event.hand, event.index);
    }
}

/// Day-panel announcements for shift transitions.
pub fn announce_shift_events(
    subtitles: Res<SubtitleLibrary>,
    mut changed: MessageReader<ShiftChangedEvent>,
    mut failed: MessageReader<ShiftFailedEvent>,
    mut won: MessageReader<ShiftWonEvent>,
) {
    for event in changed.read() {
        info!(
            "Shift {} as {}: {}",
            event.index + 1,
            event.role,
            subtitles.line("shift.start")
        );
    }
    for event in failed.read() {
        info!(
            "Game over on shift {} ({} tasks, {:.2} on the books): {}",
            event.index + 1,
            event.tasks_completed,
            event.money,
            subtitles.line("shift.failed")
        );
    }
    for event in won.read() {
        info!("{} Final balance {:.2}", subtitles.line("shift.won"), event.money);
    }
}

/// Balance readout for the overlay counter.
pub fn echo_money_changes(mut changes: MessageReader<MoneyChangedEvent>) {
    for event in changes.read() {
        debug!("Balance {:.2} at {:+.2}/s", event.money, event.rate);
    }
}

/// Wall-clock readout derived from shift progress.
pub fn echo_office_clock(
    progression: Res<ShiftProgression>,
    roster: Res<ShiftRoster>,
    mut last_label: Local<String>,
) {
    if progression.phase() != ShiftPhase::Running {
        return;
    }
    let spec = roster.clamped(progression.shift_index());
    let label = progression.clock_label(spec);
    if *last_label != label {
        debug!("Office clock reads {}", label);
        *last_label = label;
    }
}

/// Button LED feedback, as the cabinet would show it.
pub fn echo_button_leds(
    mut pressed: MessageReader<ButtonPressedEvent>,
    mut released: MessageReader<ButtonReleasedEvent>,
) {
    for event in pressed.read() {
        debug!("LED on: {} {}", event.hand, event.button.label());
    }
    for event in released.read() {
        debug!("LED off: {} {}", event.hand, event.button.label());
    }
}
