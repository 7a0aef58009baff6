//! Task module: the board, the per-task state machine and the scheduler.
pub mod board;
pub mod events;
pub mod plugin;
pub mod scheduler;
pub mod systems;

pub use board::{TaskBoard, TaskId, TaskKind, TaskRecord, TaskState};
pub use events::{TaskCompletedEvent, TaskOutcome, TaskStateChangedEvent};
pub use plugin::TaskPlugin;
pub use scheduler::{SchedulerConfig, TaskScheduler};
