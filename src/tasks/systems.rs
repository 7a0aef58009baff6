//! Scheduler systems: offers, focus preemption, press resolution and
//! completion settling.
use bevy::prelude::*;

use crate::{
    core::SimulationClock,
    economy::{EconomyConfig, RateAccumulator},
    input::{AxisButton, ButtonPressedEvent, Hand},
    presentation::PresentationRegistry,
    selection::SelectionCursors,
    shift::ShiftProgression,
};

use super::{
    board::{TaskBoard, TaskId, TaskState},
    events::{TaskCompletedEvent, TaskOutcome, TaskStateChangedEvent},
    scheduler::{SchedulerConfig, TaskScheduler},
};

/// Offers a random dormant ordinary task on the offer interval.
pub fn offer_ordinary_tasks(
    clock: Res<SimulationClock>,
    config: Res<SchedulerConfig>,
    mut scheduler: ResMut<TaskScheduler>,
    mut board: ResMut<TaskBoard>,
    presenters: Res<PresentationRegistry>,
    mut state_changes: MessageWriter<TaskStateChangedEvent>,
) {
    if !scheduler.is_running() || !scheduler.tick_offer(clock.delta_seconds(), &config) {
        return;
    }

    let mut changes = Vec::new();
    if let Some(task) = offer_random_task(&mut board, &mut scheduler, &presenters, &mut changes) {
        debug!("Offering {}", task);
    }
    publish_changes(changes, &mut state_changes);
}

/// Preempts the floor with a focus task on the focus interval.
#[allow(clippy::too_many_arguments)]
pub fn trigger_focus_tasks(
    clock: Res<SimulationClock>,
    config: Res<SchedulerConfig>,
    economy: Res<EconomyConfig>,
    mut scheduler: ResMut<TaskScheduler>,
    mut board: ResMut<TaskBoard>,
    mut cursors: ResMut<SelectionCursors>,
    mut ledger: ResMut<RateAccumulator>,
    presenters: Res<PresentationRegistry>,
    mut state_changes: MessageWriter<TaskStateChangedEvent>,
) {
    if !scheduler.is_running() || !scheduler.tick_focus(clock.delta_seconds(), &config) {
        return;
    }

    let mut changes = Vec::new();
    if let Some(task) = preempt_with_focus(
        &mut board,
        &mut scheduler,
        &mut cursors,
        &mut ledger,
        &economy,
        &presenters,
        &mut changes,
    ) {
        info!("Focus task {} takes the floor", task);
    }
    publish_changes(changes, &mut state_changes);
}

/// Routes button presses into whichever task the hand is resolving.
pub fn resolve_task_presses(
    mut presses: MessageReader<ButtonPressedEvent>,
    mut board: ResMut<TaskBoard>,
    scheduler: Res<TaskScheduler>,
    cursors: Res<SelectionCursors>,
    mut completions: MessageWriter<TaskCompletedEvent>,
    mut state_changes: MessageWriter<TaskStateChangedEvent>,
) {
    for press in presses.read() {
        let Some(completed) = resolve_press(press.hand, press.button, &mut board, &scheduler, &cursors)
        else {
            continue;
        };
        state_changes.write(TaskStateChangedEvent {
            task: completed.task,
            state: TaskState::Complete,
        });
        completions.write(completed);
    }
}

/// Settles every completion: rewards, focus teardown, quota counting.
#[allow(clippy::too_many_arguments)]
pub fn handle_task_completions(
    mut completions: MessageReader<TaskCompletedEvent>,
    economy: Res<EconomyConfig>,
    mut scheduler: ResMut<TaskScheduler>,
    mut board: ResMut<TaskBoard>,
    mut cursors: ResMut<SelectionCursors>,
    mut shift: ResMut<ShiftProgression>,
    mut ledger: ResMut<RateAccumulator>,
    mut state_changes: MessageWriter<TaskStateChangedEvent>,
) {
    let mut changes = Vec::new();
    for event in completions.read() {
        info!(
            "{} ({}) completed: {:?}",
            event.task,
            event.kind.label(),
            event.outcome
        );
        settle_completion(
            event,
            &mut board,
            &mut scheduler,
            &mut cursors,
            &mut shift,
            &mut ledger,
            &economy,
            &mut changes,
        );
    }
    publish_changes(changes, &mut state_changes);
}

fn publish_changes(
    changes: Vec<(TaskId, TaskState)>,
    writer: &mut MessageWriter<TaskStateChangedEvent>,
) {
    for (task, state) in changes {
        writer.write(TaskStateChangedEvent { task, state });
    }
}

/// Uniform pick among dormant ordinary tasks with a registered presenter.
///
/// No eligible task means the tick is skipped, not an error. A task without
/// a presenter stays dormant: its round simply never starts.
pub(crate) fn offer_random_task(
    board: &mut TaskBoard,
    scheduler: &mut TaskScheduler,
    presenters: &PresentationRegistry,
    changes: &mut Vec<(TaskId, TaskState)>,
) -> Option<TaskId> {
    let mut candidates = Vec::new();
    for (index, task) in board.iter().enumerate() {
        if task.is_focus() || task.state() != TaskState::Dormant {
            continue;
        }
        if !presenters.contains(task.id()) {
            warn!("No presentation registered for {}; leaving it dormant", task.id());
            continue;
        }
        candidates.push(index);
    }

    let choice = scheduler.pick(&candidates)?;
    let task = board.get_mut(choice)?;
    if !task.show() {
        return None;
    }
    changes.push((task.id(), task.state()));
    Some(task.id())
}

/// Starts a focus task: pause the floor, freeze the cursors, then play.
///
/// Single-flight: a second trigger while one is active does nothing. The
/// focus drain stays on the ledger until the task completes.
pub(crate) fn preempt_with_focus(
    board: &mut TaskBoard,
    scheduler: &mut TaskScheduler,
    cursors: &mut SelectionCursors,
    ledger: &mut RateAccumulator,
    economy: &EconomyConfig,
    presenters: &PresentationRegistry,
    changes: &mut Vec<(TaskId, TaskState)>,
) -> Option<TaskId> {
    if scheduler.active_focus().is_some() {
        return None;
    }

    let mut candidates = Vec::new();
    for (index, task) in board.iter().enumerate() {
        if !task.is_focus() || !matches!(task.state(), TaskState::Dormant | TaskState::Complete) {
            continue;
        }
        if !presenters.contains(task.id()) {
            warn!("No presentation registered for {}; skipping the focus trigger", task.id());
            continue;
        }
        candidates.push(index);
    }

    let choice = scheduler.pick(&candidates)?;
    let focus_id = board.get(choice).map(|task| task.id())?;

    let mut paused = Vec::new();
    for task in board.iter_mut() {
        if !task.is_focus() && task.pause() {
            paused.push(task.id());
            changes.push((task.id(), task.state()));
        }
    }
    cursors.suspend();

    if let Some(task) = board.by_id_mut(focus_id) {
        task.show();
        task.play();
        changes.push((focus_id, task.state()));
    }
    scheduler.begin_focus(focus_id, paused);
    ledger.add_permanent_additive(-economy.focus_drain_rate);
    Some(focus_id)
}

/// Resolves one press against the hand's current task.
///
/// While a focus task holds the floor every press routes to it; otherwise a
/// hand only ever resolves the task it selected. X advances the minigame,
/// S abandons it.
pub(crate) fn resolve_press(
    hand: Hand,
    button: AxisButton,
    board: &mut TaskBoard,
    scheduler: &TaskScheduler,
    cursors: &SelectionCursors,
) -> Option<TaskCompletedEvent> {
    let target = scheduler
        .active_focus()
        .or_else(|| cursors.hand(hand).pending_task())?;
    let task = board.by_id_mut(target)?;
    if !task.is_playing() {
        return None;
    }

    let outcome = match button {
        AxisButton::X => task.advance_progress().then_some(TaskOutcome::Success),
        AxisButton::S => Some(TaskOutcome::Botched),
        _ => None,
    }?;

    let kind = task.kind();
    task.complete().then_some(TaskCompletedEvent {
        task: target,
        kind,
        outcome,
    })
}

/// Settles one completion.
///
/// Ordering contract: the reward or penalty lands on the ledger before any
/// paused task resumes or a cursor wakes up.
#[allow(clippy::too_many_arguments)]
pub(crate) fn settle_completion(
    event: &TaskCompletedEvent,
    board: &mut TaskBoard,
    scheduler: &mut TaskScheduler,
    cursors: &mut SelectionCursors,
    shift: &mut ShiftProgression,
    ledger: &mut RateAccumulator,
    economy: &EconomyConfig,
    changes: &mut Vec<(TaskId, TaskState)>,
) {
    match event.outcome {
        TaskOutcome::Success => ledger.add_multiplier(economy.reward_factor, economy.reward_seconds),
        TaskOutcome::Botched => ledger.add_additive(-economy.botch_rate, economy.botch_seconds),
    }

    if scheduler.active_focus() == Some(event.task) {
        ledger.remove_permanent_additive(-economy.focus_drain_rate);
        for id in scheduler.finish_focus() {
            if let Some(task) = board.by_id_mut(id) {
                if task.resume() {
                    changes.push((id, task.state()));
                }
            }
        }
        cursors.lift_suspension();
    }

    // Back to dormant: the task is eligible for a later offer again.
    if let Some(task) = board.by_id_mut(event.task) {
        task.reset();
        changes.push((event.task, TaskState::Dormant));
    }
    cursors.complete_task(event.task);
    shift.record_task_completed();
}

/// Tears a round down: every task dormant, scheduling cancelled, cursors
/// back to their fresh allocation.
pub(crate) fn reset_round(
    board: &mut TaskBoard,
    scheduler: &mut TaskScheduler,
    cursors: &mut SelectionCursors,
    changes: &mut Vec<(TaskId, TaskState)>,
) {
    for task in board.iter() {
        if task.state() != TaskState::Dormant {
            changes.push((task.id(), TaskState::Dormant));
        }
    }
    scheduler.reset(board);
    cursors.reset(board.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{presentation::TaskPresentation, shift::ShiftPhase, tasks::board::TaskRecord};

    struct NullPresentation;

    impl TaskPresentation for NullPresentation {
        fn show_available(&self, _task: &TaskRecord) {}
        fn show_playing(&self, _task: &TaskRecord) {}
        fn show_complete(&self, _task: &TaskRecord) {}
        fn hide(&self, _task: &TaskRecord) {}
    }

    struct Office {
        board: TaskBoard,
        scheduler: TaskScheduler,
        cursors: SelectionCursors,
        shift: ShiftProgression,
        ledger: RateAccumulator,
        economy: EconomyConfig,
        presenters: PresentationRegistry,
        changes: Vec<(TaskId, TaskState)>,
    }

    impl Office {
        fn new() -> Self {
            let board = TaskBoard::office();
            let mut presenters = PresentationRegistry::default();
            for task in board.iter() {
                presenters.register(task.id(), Box::new(NullPresentation));
            }
            let mut cursors = SelectionCursors::new(board.len());
            cursors.lift_suspension();
            let mut shift = ShiftProgression::new();
            shift.begin_run();
            let economy = EconomyConfig::default();
            let mut ledger = RateAccumulator::new(economy.base_rate);
            ledger.start();
            let mut scheduler = TaskScheduler::with_seed(11);
            scheduler.start(&SchedulerConfig::default());
            Self {
                board,
                scheduler,
                cursors,
                shift,
                ledger,
                economy,
                presenters,
                changes: Vec::new(),
            }
        }

        fn offer(&mut self) -> Option<TaskId> {
            offer_random_task(
                &mut self.board,
                &mut self.scheduler,
                &self.presenters,
                &mut self.changes,
            )
        }

        fn preempt(&mut self) -> Option<TaskId> {
            preempt_with_focus(
                &mut self.board,
                &mut self.scheduler,
                &mut self.cursors,
                &mut self.ledger,
                &self.economy,
                &self.presenters,
                &mut self.changes,
            )
        }

        fn settle(&mut self, event: &TaskCompletedEvent) {
            settle_completion(
                event,
                &mut self.board,
                &mut self.scheduler,
                &mut self.cursors,
                &mut self.shift,
                &mut self.ledger,
                &self.economy,
                &mut self.changes,
            );
        }

        fn start_playing(&mut self, index: usize, hand: Hand) -> TaskId {
            let task = self.board.get_mut(index).expect("task index");
            task.show();
            assert!(task.play());
            let id = task.id();
            self.cursors.begin_play(hand, id);
            id
        }

        fn completed(&self, id: TaskId, outcome: TaskOutcome) -> TaskCompletedEvent {
            let kind = self.board.by_id(id).expect("task id").kind();
            TaskCompletedEvent {
                task: id,
                kind,
                outcome,
            }
        }
    }

    #[test]
    fn offers_pick_only_dormant_ordinary_tasks() {
        let mut office = Office::new();
        office.start_playing(0, Hand::Left);

        for _ in 0..32 {
            if let Some(id) = office.offer() {
                let task = office.board.by_id(id).expect("offered task");
                assert!(!task.is_focus());
                assert!(task.is_available());
                // Make it ineligible for the next round of picks.
                if let Some(task) = office.board.by_id_mut(id) {
                    task.play();
                }
            }
        }

        // Everything ordinary is now busy: the tick is skipped silently.
        assert_eq!(office.offer(), None);
    }

    #[test]
    fn offers_skip_tasks_without_a_presenter() {
        let mut office = Office::new();
        for task in office.board.iter() {
            office.presenters.unregister(task.id());
        }
        assert_eq!(office.offer(), None);
        assert!(office
            .board
            .iter()
            .all(|task| task.state() == TaskState::Dormant));
    }

    #[test]
    fn focus_pauses_exactly_the_playing_floor() {
        let mut office = Office::new();
        let left = office.start_playing(0, Hand::Left);
        let right = office.start_playing(1, Hand::Right);
        let base_rate = office.ledger.effective_rate();

        let focus = office.preempt().expect("a focus task starts");
        let focus_task = office.board.by_id(focus).expect("focus task");
        assert!(focus_task.is_focus());
        assert!(focus_task.is_playing());

        for id in [left, right] {
            assert_eq!(
                office.board.by_id(id).map(|t| t.state()),
                Some(TaskState::Paused)
            );
        }
        // The untouched ordinary task was not paused.
        assert_eq!(
            office.board.get(2).map(|t| t.state()),
            Some(TaskState::Dormant)
        );
        assert!(office.cursors.is_suspended());
        // The drain is on the ledger until the boss is dealt with.
        assert!(office.ledger.effective_rate() < base_rate);
    }

    #[test]
    fn focus_triggers_are_single_flight() {
        let mut office = Office::new();
        assert!(office.preempt().is_some());
        assert_eq!(office.preempt(), None);
    }

    #[test]
    fn focus_completion_restores_the_floor() {
        let mut office = Office::new();
        let left = office.start_playing(0, Hand::Left);
        let focus = office.preempt().expect("a focus task starts");

        let event = office.completed(focus, TaskOutcome::Success);
        office.settle(&event);

        assert_eq!(
            office.board.by_id(left).map(|t| t.state()),
            Some(TaskState::Playing)
        );
        assert_eq!(
            office.board.by_id(focus).map(|t| t.state()),
            Some(TaskState::Dormant)
        );
        assert!(!office.cursors.is_suspended());
        assert_eq!(office.scheduler.active_focus(), None);

        // The reward multiplier replaced the drain on the ledger.
        assert_eq!(office.ledger.modifier_count(), 1);
        assert_eq!(
            office.ledger.effective_rate(),
            office.economy.base_rate * office.economy.reward_factor
        );
        assert_eq!(office.shift.tasks_completed(), 1);
    }

    #[test]
    fn focus_completion_keeps_a_busy_hand_disabled() {
        let mut office = Office::new();
        office.start_playing(0, Hand::Left);
        let focus = office.preempt().expect("a focus task starts");

        let event = office.completed(focus, TaskOutcome::Success);
        office.settle(&event);

        // The left hand still owns its own task; only the right hand woke.
        assert!(!office.cursors.is_active(Hand::Left));
        assert!(office.cursors.is_active(Hand::Right));
    }

    #[test]
    fn ordinary_completion_recycles_the_task() {
        let mut office = Office::new();
        let id = office.start_playing(2, Hand::Right);

        let event = office.completed(id, TaskOutcome::Success);
        office.settle(&event);

        assert_eq!(
            office.board.by_id(id).map(|t| t.state()),
            Some(TaskState::Dormant)
        );
        assert!(office.cursors.is_active(Hand::Right));
        assert_eq!(office.shift.tasks_completed(), 1);
        assert_eq!(
            office.ledger.effective_rate(),
            office.economy.base_rate * office.economy.reward_factor
        );
    }

    #[test]
    fn botched_completion_applies_the_penalty_rate() {
        let mut office = Office::new();
        let id = office.start_playing(2, Hand::Right);

        let event = office.completed(id, TaskOutcome::Botched);
        office.settle(&event);

        assert_eq!(
            office.ledger.effective_rate(),
            office.economy.base_rate - office.economy.botch_rate
        );
        assert_eq!(office.shift.tasks_completed(), 1);
    }

    #[test]
    fn presses_resolve_the_hand_owned_task() {
        let mut office = Office::new();
        let id = office.start_playing(0, Hand::Left);
        let presses = office.board.by_id(id).expect("task").kind().required_presses();

        for _ in 0..presses - 1 {
            let done = resolve_press(
                Hand::Left,
                AxisButton::X,
                &mut office.board,
                &office.scheduler,
                &office.cursors,
            );
            assert!(done.is_none());
        }

        let done = resolve_press(
            Hand::Left,
            AxisButton::X,
            &mut office.board,
            &office.scheduler,
            &office.cursors,
        )
        .expect("final press completes");
        assert_eq!(done.task, id);
        assert_eq!(done.outcome, TaskOutcome::Success);
        assert_eq!(
            office.board.by_id(id).map(|t| t.state()),
            Some(TaskState::Complete)
        );
    }

    #[test]
    fn the_idle_hand_cannot_resolve_anything() {
        let mut office = Office::new();
        office.start_playing(0, Hand::Left);

        let done = resolve_press(
            Hand::Right,
            AxisButton::X,
            &mut office.board,
            &office.scheduler,
            &office.cursors,
        );
        assert!(done.is_none());
    }

    #[test]
    fn either_hand_resolves_the_focus_task() {
        let mut office = Office::new();
        let focus = office.preempt().expect("a focus task starts");

        let done = resolve_press(
            Hand::Right,
            AxisButton::S,
            &mut office.board,
            &office.scheduler,
            &office.cursors,
        )
        .expect("abandoning completes the task");
        assert_eq!(done.task, focus);
        assert_eq!(done.outcome, TaskOutcome::Botched);
    }

    #[test]
    fn reset_round_leaves_nothing_armed() {
        let mut office = Office::new();
        office.start_playing(0, Hand::Left);
        let _ = office.preempt();

        let mut changes = Vec::new();
        reset_round(
            &mut office.board,
            &mut office.scheduler,
            &mut office.cursors,
            &mut changes,
        );

        assert!(office
            .board
            .iter()
            .all(|task| task.state() == TaskState::Dormant));
        assert!(!office.scheduler.is_running());
        assert_eq!(office.scheduler.active_focus(), None);
        assert!(office.cursors.is_suspended());
        // Each previously non-dormant task got a change notification.
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn completions_count_only_while_the_shift_runs() {
        let mut office = Office::new();
        let id = office.start_playing(0, Hand::Left);
        office.shift.abandon_run();
        assert_eq!(office.shift.phase(), ShiftPhase::Failed);

        let event = office.completed(id, TaskOutcome::Success);
        office.settle(&event);
        assert_eq!(office.shift.tasks_completed(), 0);
    }
}
