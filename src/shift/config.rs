use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/shifts.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawShiftsConfig {
    #[serde(default)]
    shift: Vec<RawShiftEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawShiftEntry {
    duration_seconds: f32,
    task_target: u32,
    money_target: f64,
    role: String,
    start_hour: f32,
    end_hour: f32,
}

impl Default for RawShiftEntry {
    fn default() -> Self {
        Self {
            duration_seconds: 120.0,
            task_target: 3,
            money_target: 80.0,
            role: "intern".to_string(),
            start_hour: 9.0,
            end_hour: 12.0,
        }
    }
}

/// One shift's duration, quota and clock range.
#[derive(Debug, Clone)]
pub struct ShiftSpec {
    pub duration_seconds: f32,
    pub task_target: u32,
    pub money_target: f64,
    pub role: String,
    pub start_hour: f32,
    pub end_hour: f32,
}

/// The ordered shift ladder for a run, from `config/shifts.toml`.
#[derive(Resource, Debug, Clone)]
pub struct ShiftRoster {
    shifts: Vec<ShiftSpec>,
}

impl ShiftRoster {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawShiftsConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn get(&self, index: usize) -> Option<&ShiftSpec> {
        self.shifts.get(index)
    }

    /// Resolves an index, clamping out-of-range requests with a warning
    /// instead of failing the session.
    pub fn clamped(&self, index: usize) -> &ShiftSpec {
        if let Some(spec) = self.shifts.get(index) {
            return spec;
        }
        warn!(
            "Shift index {} out of range (roster has {}); using the last shift",
            index,
            self.shifts.len()
        );
        &self.shifts[self.shifts.len() - 1]
    }
}

impl Default for ShiftRoster {
    fn default() -> Self {
        let shifts = vec![
            ShiftSpec {
                duration_seconds: 120.0,
                task_target: 3,
                money_target: 80.0,
                role: "intern".to_string(),
                start_hour: 9.0,
                end_hour: 12.0,
            },
            ShiftSpec {
                duration_seconds: 120.0,
                task_target: 4,
                money_target: 150.0,
                role: "team lead".to_string(),
                start_hour: 12.0,
                end_hour: 15.0,
            },
            ShiftSpec {
                duration_seconds: 120.0,
                task_target: 5,
                money_target: 220.0,
                role: "boss's right hand".to_string(),
                start_hour: 15.0,
                end_hour: 18.0,
            },
        ];
        Self { shifts }
    }
}

impl From<RawShiftsConfig> for ShiftRoster {
    fn from(value: RawShiftsConfig) -> Self {
        if value.shift.is_empty() {
            warn!("{} lists no shifts; using the default ladder", CONFIG_PATH);
            return Self::default();
        }

        let shifts = value
            .shift
            .into_iter()
            .map(|entry| {
                let start_hour = entry.start_hour.clamp(0.0, 24.0);
                let mut end_hour = entry.end_hour.clamp(0.0, 24.0);
                if end_hour <= start_hour {
                    end_hour = (start_hour + 1.0).min(24.0);
                }
                ShiftSpec {
                    duration_seconds: entry.duration_seconds.max(1.0),
                    task_target: entry.task_target,
                    money_target: entry.money_target.max(0.0),
                    role: entry.role,
                    start_hour,
                    end_hour,
                }
            })
            .collect();
        Self { shifts }
    }
}
