use bevy::prelude::*;

mod core;
mod economy;
mod input;
mod presentation;
mod selection;
mod shift;
mod tasks;

use crate::{
    core::CorePlugin, economy::EconomyPlugin, input::InputPlugin,
    presentation::PresentationPlugin, selection::SelectionPlugin, shift::ShiftPlugin,
    tasks::TaskPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            CorePlugin::default(),
            InputPlugin,
            EconomyPlugin,
            TaskPlugin,
            SelectionPlugin,
            ShiftPlugin,
            PresentationPlugin, // After the core plugins to observe their events
        ))
        .run();
}
