//! Task lifecycle events.
use bevy::prelude::{Event, Message};

use super::board::{TaskId, TaskKind, TaskState};

/// How a task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Success,
    Botched,
}

/// Fired once per completed task; the scheduler is the single consumer that
/// settles rewards, resume sets and the shift counter from it.
#[derive(Event, Message, Debug, Clone)]
pub struct TaskCompletedEvent {
    pub task: TaskId,
    pub kind: TaskKind,
    pub outcome: TaskOutcome,
}

/// Fired on every observable state transition for presentation binding.
#[derive(Event, Message, Debug, Clone)]
pub struct TaskStateChangedEvent {
    pub task: TaskId,
    pub state: TaskState,
}
