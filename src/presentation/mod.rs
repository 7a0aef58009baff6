//! Presentation boundary: the visual layer the core talks to, kept behind
//! a trait so the game logic owns no rendering.
pub mod console;
pub mod plugin;
pub mod registry;
pub mod subtitles;
pub mod systems;

pub use console::ConsolePresentation;
pub use plugin::PresentationPlugin;
pub use registry::{PresentationRegistry, TaskPresentation};
pub use subtitles::SubtitleLibrary;
