//! Console presenter: logs what a real scene would animate.
use bevy::prelude::*;

use crate::tasks::TaskRecord;

use super::registry::TaskPresentation;

/// Stand-in presenter used by the headless build and the demo binary.
pub struct ConsolePresentation {
    prompt: String,
}

impl ConsolePresentation {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl TaskPresentation for ConsolePresentation {
    fn show_available(&self, task: &TaskRecord) {
        info!("[{}] {} blinks for attention", task.kind().label(), task.id());
    }

    fn show_playing(&self, task: &TaskRecord) {
        info!("[{}] {}", task.kind().label(), self.prompt);
    }

    fn show_complete(&self, task: &TaskRecord) {
        info!("[{}] {} settles down", task.kind().label(), task.id());
    }

    fn hide(&self, task: &TaskRecord) {
        debug!("[{}] {} goes quiet", task.kind().label(), task.id());
    }
}
