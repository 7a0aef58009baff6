//! Selection module: per-hand cursors over the task board.
pub mod cursor;
pub mod events;
pub mod plugin;
pub mod systems;

pub use cursor::{SelectionCursor, SelectionCursors};
pub use events::{InvalidSelectionEvent, SelectionChangedEvent};
pub use plugin::SelectionPlugin;
