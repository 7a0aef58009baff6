//! Countdown-driven scheduling of task offers and focus preemption.
use std::{fs, path::Path};

use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Deserialize;

use super::board::{TaskBoard, TaskId};

const CONFIG_PATH: &str = "config/scheduler.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawSchedulerConfig {
    offer_interval_seconds: f32,
    focus_interval_seconds: f32,
}

impl Default for RawSchedulerConfig {
    fn default() -> Self {
        Self {
            offer_interval_seconds: 10.0,
            focus_interval_seconds: 30.0,
        }
    }
}

/// Scheduling intervals derived from `config/scheduler.toml`.
#[derive(Resource, Debug, Clone)]
pub struct SchedulerConfig {
    pub offer_interval_seconds: f32,
    pub focus_interval_seconds: f32,
}

impl SchedulerConfig {
    pub fn load_or_default() -> Self {
        let path = Path::new(CONFIG_PATH);
        match fs::read_to_string(path) {
            Ok(data) => match toml::from_str::<RawSchedulerConfig>(&data) {
                Ok(raw) => raw.into(),
                Err(err) => {
                    warn!(
                        "Failed to parse {} ({}). Falling back to defaults.",
                        CONFIG_PATH, err
                    );
                    RawSchedulerConfig::default().into()
                }
            },
            Err(_) => RawSchedulerConfig::default().into(),
        }
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        RawSchedulerConfig::default().into()
    }
}

impl From<RawSchedulerConfig> for SchedulerConfig {
    fn from(value: RawSchedulerConfig) -> Self {
        Self {
            offer_interval_seconds: value.offer_interval_seconds.max(0.1),
            focus_interval_seconds: value.focus_interval_seconds.max(0.1),
        }
    }
}

/// Decides when tasks become selectable and when the focus task preempts.
///
/// All timing state is countdowns fed from the simulation clock: there are
/// no wall-clock timers to cancel, so `reset` zeroes the state and nothing
/// stale can ever fire into a torn-down round.
#[derive(Resource, Debug)]
pub struct TaskScheduler {
    running: bool,
    offer_countdown: f32,
    focus_countdown: f32,
    active_focus: Option<TaskId>,
    paused_by_focus: Vec<TaskId>,
    rng: StdRng,
}

impl TaskScheduler {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            running: false,
            offer_countdown: 0.0,
            focus_countdown: 0.0,
            active_focus: None,
            paused_by_focus: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn active_focus(&self) -> Option<TaskId> {
        self.active_focus
    }

    /// Arms both countdowns and begins scheduling.
    pub fn start(&mut self, config: &SchedulerConfig) {
        self.running = true;
        self.offer_countdown = config.offer_interval_seconds;
        self.focus_countdown = config.focus_interval_seconds;
    }

    /// Cancels all pending scheduling and returns every task to Dormant.
    ///
    /// Called between shifts and on game-over; afterwards an elapsed
    /// countdown observes `running == false` and does nothing.
    pub fn reset(&mut self, board: &mut TaskBoard) {
        self.running = false;
        self.offer_countdown = 0.0;
        self.focus_countdown = 0.0;
        self.active_focus = None;
        self.paused_by_focus.clear();
        for task in board.iter_mut() {
            task.reset();
        }
    }

    /// Advances the offer countdown; true when it fires (and re-arms).
    pub fn tick_offer(&mut self, delta_seconds: f32, config: &SchedulerConfig) -> bool {
        if !self.running {
            return false;
        }
        self.offer_countdown -= delta_seconds;
        if self.offer_countdown > 0.0 {
            return false;
        }
        self.offer_countdown = config.offer_interval_seconds;
        true
    }

    /// Advances the focus countdown; true when it fires (and re-arms).
    pub fn tick_focus(&mut self, delta_seconds: f32, config: &SchedulerConfig) -> bool {
        if !self.running {
            return false;
        }
        self.focus_countdown -= delta_seconds;
        if self.focus_countdown > 0.0 {
            return false;
        }
        self.focus_countdown = config.focus_interval_seconds;
        true
    }

    /// Uniform pick among the candidate board indices.
    pub fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[self.rng.gen_range(0..candidates.len())])
    }

    /// Records the focus task now holding the floor and the ordinary tasks
    /// it paused.
    pub fn begin_focus(&mut self, task: TaskId, paused: Vec<TaskId>) {
        self.active_focus = Some(task);
        self.paused_by_focus = paused;
    }

    /// Clears the focus reference and hands back exactly the paused set.
    pub fn finish_focus(&mut self) -> Vec<TaskId> {
        self.active_focus = None;
        std::mem::take(&mut self.paused_by_focus)
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}
