//! Per-task presentation objects and the registry the core consults.
use std::collections::HashMap;

use bevy::prelude::*;

use crate::tasks::{TaskId, TaskRecord};

/// What a task's visual stand-in must be able to do.
///
/// The core calls these on state transitions and otherwise knows nothing
/// about how a task looks. The visual layer reports back exclusively through
/// the task completion flow, never by mutating task state.
pub trait TaskPresentation: Send + Sync {
    fn show_available(&self, task: &TaskRecord);
    fn show_playing(&self, task: &TaskRecord);
    fn show_complete(&self, task: &TaskRecord);
    fn hide(&self, task: &TaskRecord);
}

/// Presenters keyed by task. A task without an entry is never offered: the
/// scheduler checks here first and leaves such tasks dormant with a warning.
#[derive(Resource, Default)]
pub struct PresentationRegistry {
    entries: HashMap<TaskId, Box<dyn TaskPresentation>>,
}

impl PresentationRegistry {
    pub fn register(&mut self, id: TaskId, presenter: Box<dyn TaskPresentation>) {
        self.entries.insert(id, presenter);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn unregister(&mut self, id: TaskId) {
        self.entries.remove(&id);
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: TaskId) -> Option<&dyn TaskPresentation> {
        self.entries.get(&id).map(Box::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskKind;

    struct NullPresentation;

    impl TaskPresentation for NullPresentation {
        fn show_available(&self, _task: &TaskRecord) {}
        fn show_playing(&self, _task: &TaskRecord) {}
        fn show_complete(&self, _task: &TaskRecord) {}
        fn hide(&self, _task: &TaskRecord) {}
    }

    #[test]
    fn registry_tracks_presenters_by_task() {
        let mut registry = PresentationRegistry::default();
        let id = TaskId::new(1);
        assert!(!registry.contains(id));

        registry.register(id, Box::new(NullPresentation));
        assert!(registry.contains(id));
        assert!(registry.get(id).is_some());

        let task = TaskRecord::new(id, TaskKind::Fan);
        if let Some(presenter) = registry.get(id) {
            presenter.show_available(&task);
        }

        registry.unregister(id);
        assert!(!registry.contains(id));
    }
}
