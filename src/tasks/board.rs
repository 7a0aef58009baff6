//! Task records and the board the scheduler and the cursors operate on.
use std::fmt;

use bevy::prelude::*;

/// Unique identifier for a task on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u32);

impl TaskId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TASK-{:04}", self.0)
    }
}

/// The office station a task plays out on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Fan,
    Computer,
    Phone,
    Boss,
}

impl TaskKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Fan => "fan",
            Self::Computer => "computer",
            Self::Phone => "phone",
            Self::Boss => "boss",
        }
    }

    /// Whether this station preempts ordinary play when it starts.
    pub fn is_focus(self) -> bool {
        matches!(self, Self::Boss)
    }

    /// Button presses needed to resolve the station's minigame.
    pub fn required_presses(self) -> u8 {
        match self {
            Self::Fan => 3,
            Self::Computer => 4,
            Self::Phone => 4,
            Self::Boss => 5,
        }
    }

    /// Prompt line shown when the station starts playing.
    pub fn prompt_key(self) -> &'static str {
        match self {
            Self::Fan => "task.fan",
            Self::Computer => "task.computer",
            Self::Phone => "task.phone",
            Self::Boss => "task.boss",
        }
    }
}

/// Lifecycle of a task within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Dormant,
    Available,
    Playing,
    Paused,
    Complete,
}

impl TaskState {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dormant => "dormant",
            Self::Available => "available",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Complete => "complete",
        }
    }
}

/// One task and its state machine.
///
/// Transition methods return whether the transition happened. Forbidden
/// transitions are defined no-ops, never errors: two hands racing for the
/// same task is expected play, and the loser's call simply reports `false`.
#[derive(Debug, Clone)]
pub struct TaskRecord {
    id: TaskId,
    kind: TaskKind,
    state: TaskState,
    progress: u8,
}

impl TaskRecord {
    pub fn new(id: TaskId, kind: TaskKind) -> Self {
        Self {
            id,
            kind,
            state: TaskState::Dormant,
            progress: 0,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn is_focus(&self) -> bool {
        self.kind.is_focus()
    }

    pub fn is_available(&self) -> bool {
        self.state == TaskState::Available
    }

    pub fn is_playing(&self) -> bool {
        self.state == TaskState::Playing
    }

    /// Presses remaining while the task plays.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Dormant/Complete -> Available; the task becomes selectable.
    pub fn show(&mut self) -> bool {
        match self.state {
            TaskState::Dormant | TaskState::Complete => {
                self.state = TaskState::Available;
                self.progress = 0;
                true
            }
            _ => false,
        }
    }

    /// Available -> Playing; arms the press counter.
    pub fn play(&mut self) -> bool {
        if self.state != TaskState::Available {
            return false;
        }
        self.state = TaskState::Playing;
        self.progress = self.kind.required_presses();
        true
    }

    /// Playing -> Paused. Progress is preserved: the player loses nothing
    /// but the pause itself.
    pub fn pause(&mut self) -> bool {
        if self.state != TaskState::Playing {
            return false;
        }
        self.state = TaskState::Paused;
        true
    }

    /// Paused -> Playing, picking up the preserved progress.
    pub fn resume(&mut self) -> bool {
        if self.state != TaskState::Paused {
            return false;
        }
        self.state = TaskState::Playing;
        true
    }

    /// Playing/Paused -> Complete. A second call before `reset` is ignored
    /// so a completion can never be double-counted.
    pub fn complete(&mut self) -> bool {
        match self.state {
            TaskState::Playing | TaskState::Paused => {
                self.state = TaskState::Complete;
                self.progress = 0;
                true
            }
            _ => false,
        }
    }

    /// Any state -> Dormant, clearing transient progress.
    pub fn reset(&mut self) {
        self.state = TaskState::Dormant;
        self.progress = 0;
    }

    /// Registers one resolving press; returns true when the task is done.
    pub fn advance_progress(&mut self) -> bool {
        if self.state != TaskState::Playing {
            return false;
        }
        self.progress = self.progress.saturating_sub(1);
        self.progress == 0
    }
}

/// The indexable list of tasks for the current round.
///
/// Selection cursors index into this list directly, which is why tasks are
/// created once at setup and never removed mid-round.
#[derive(Resource, Debug)]
pub struct TaskBoard {
    tasks: Vec<TaskRecord>,
}

impl TaskBoard {
    pub fn with_kinds(kinds: &[TaskKind]) -> Self {
        let tasks = kinds
            .iter()
            .enumerate()
            .map(|(index, kind)| TaskRecord::new(TaskId::new(index as u32 + 1), *kind))
            .collect();
        Self { tasks }
    }

    /// The default office: three ordinary stations and the boss.
    pub fn office() -> Self {
        Self::with_kinds(&[
            TaskKind::Fan,
            TaskKind::Computer,
            TaskKind::Phone,
            TaskKind::Boss,
        ])
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TaskRecord> {
        self.tasks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TaskRecord> {
        self.tasks.get_mut(index)
    }

    pub fn by_id(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    pub fn by_id_mut(&mut self, id: TaskId) -> Option<&mut TaskRecord> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskRecord> {
        self.tasks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut TaskRecord> {
        self.tasks.iter_mut()
    }
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::office()
    }
}
