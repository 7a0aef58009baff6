//! PresentationPlugin wiring the console presenters and prompt library.
use bevy::prelude::*;

use super::{
    registry::PresentationRegistry,
    subtitles::SubtitleLibrary,
    systems::{
        announce_shift_events, apply_task_presentation, echo_button_leds, echo_money_changes,
        echo_office_clock, echo_selection_feedback, register_office_presenters,
    },
};

pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SubtitleLibrary::load_or_default())
            .init_resource::<PresentationRegistry>()
            .add_systems(Startup, register_office_presenters)
            .add_systems(
                Update,
                (
                    apply_task_presentation,
                    echo_selection_feedback,
                    announce_shift_events,
                    echo_money_changes,
                    echo_office_clock,
                    echo_button_leds,
                ),
            );
    }
}
