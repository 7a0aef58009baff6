//! Prompt lines for task stations, loaded from `assets/subtitles.json`.
use std::{collections::HashMap, fs, path::Path};

use bevy::prelude::*;

const SUBTITLES_PATH: &str = "assets/subtitles.json";
const FALLBACK_LINE: &str = "Back to work.";

/// Keyed prompt lines with a fallback for unknown keys.
///
/// A missing or malformed file and an unknown key are configuration
/// problems: logged, never fatal.
#[derive(Resource, Debug)]
pub struct SubtitleLibrary {
    lines: HashMap<String, String>,
}

impl SubtitleLibrary {
    pub fn load_or_default() -> Self {
        let path = Path::new(SUBTITLES_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                Ok(lines) => Self { lines },
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to built-in lines.",
                        SUBTITLES_PATH, err
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn line(&self, key: &str) -> &str {
        match self.lines.get(key) {
            Some(line) => line,
            None => {
                warn!("No subtitle line for key '{}'; using the fallback", key);
                FALLBACK_LINE
            }
        }
    }
}

impl Default for SubtitleLibrary {
    fn default() -> Self {
        let lines = [
            ("task.fan", "The fan is rattling itself off the desk."),
            ("task.computer", "The inbox is on fire again."),
            ("task.phone", "The phone will not stop ringing."),
            ("task.boss", "The boss wants a word. Now."),
            ("shift.start", "Clock in. Smile."),
            ("shift.failed", "Security will walk you out."),
            ("shift.won", "Corner office, here we come."),
        ]
        .into_iter()
        .map(|(key, line)| (key.to_string(), line.to_string()))
        .collect();
        Self { lines }
    }
}
