//! Run progression: elapsed time, quota checks and the working-day clock.
use bevy::prelude::*;

use super::config::ShiftSpec;

/// Where the run currently stands.
///
/// `Advancing` is transient: the end-of-shift system observes it, notifies
/// collaborators and immediately rolls into `Running` for the next shift.
/// `Failed` and `Won` hold until an external restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftPhase {
    Idle,
    Running,
    Advancing,
    Failed,
    Won,
}

/// End-of-shift ruling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftVerdict {
    Advanced,
    Won,
    Failed,
}

/// Elapsed time and the per-shift task counter.
///
/// The counter is bumped only by the scheduler's completion handler, which
/// keeps a single point of truth for what counts toward the quota.
#[derive(Resource, Debug)]
pub struct ShiftProgression {
    phase: ShiftPhase,
    shift_index: usize,
    elapsed: f32,
    tasks_completed: u32,
}

impl ShiftProgression {
    pub fn new() -> Self {
        Self {
            phase: ShiftPhase::Idle,
            shift_index: 0,
            elapsed: 0.0,
            tasks_completed: 0,
        }
    }

    pub fn phase(&self) -> ShiftPhase {
        self.phase
    }

    pub fn shift_index(&self) -> usize {
        self.shift_index
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn tasks_completed(&self) -> u32 {
        self.tasks_completed
    }

    /// Starts (or restarts) a run from the first shift.
    pub fn begin_run(&mut self) -> bool {
        match self.phase {
            ShiftPhase::Idle | ShiftPhase::Failed | ShiftPhase::Won => {
                self.phase = ShiftPhase::Running;
                self.shift_index = 0;
                self.elapsed = 0.0;
                self.tasks_completed = 0;
                true
            }
            _ => false,
        }
    }

    /// Accrues elapsed shift time; only meaningful while running.
    pub fn tick(&mut self, delta_seconds: f32) {
        if self.phase == ShiftPhase::Running && delta_seconds > 0.0 {
            self.elapsed += delta_seconds;
        }
    }

    /// Counts a completed task toward the current quota.
    pub fn record_task_completed(&mut self) {
        if self.phase == ShiftPhase::Running {
            self.tasks_completed += 1;
        }
    }

    /// Maps elapsed/duration linearly onto the shift's hour range.
    pub fn time_of_day(&self, spec: &ShiftSpec) -> f32 {
        let fraction = (self.elapsed / spec.duration_seconds).clamp(0.0, 1.0);
        spec.start_hour + fraction * (spec.end_hour - spec.start_hour)
    }

    /// Wall-clock display, e.g. "10:45".
    pub fn clock_label(&self, spec: &ShiftSpec) -> String {
        let hours = self.time_of_day(spec);
        let whole = hours.floor();
        let minutes = ((hours - whole) * 60.0).floor();
        format!("{:02}:{:02}", whole as u32, minutes as u32)
    }

    /// Rules on the shift once its duration has elapsed.
    ///
    /// Returns None while the shift is still in progress (or the run is not
    /// running at all).
    pub fn evaluate(&mut self, spec: &ShiftSpec, money: f64, roster_len: usize) -> Option<ShiftVerdict> {
        if self.phase != ShiftPhase::Running || self.elapsed < spec.duration_seconds {
            return None;
        }

        let quota_met = self.tasks_completed >= spec.task_target && money >= spec.money_target;
        let verdict = if !quota_met {
            self.phase = ShiftPhase::Failed;
            ShiftVerdict::Failed
        } else if self.shift_index + 1 < roster_len {
            self.phase = ShiftPhase::Advancing;
            ShiftVerdict::Advanced
        } else {
            self.phase = ShiftPhase::Won;
            ShiftVerdict::Won
        };
        Some(verdict)
    }

    /// Rolls an `Advancing` shift into the next one.
    pub fn start_next_shift(&mut self) -> bool {
        if self.phase != ShiftPhase::Advancing {
            return false;
        }
        self.phase = ShiftPhase::Running;
        self.shift_index += 1;
        self.elapsed = 0.0;
        self.tasks_completed = 0;
        true
    }

    /// Throws the run away while it is running (debug give-up shortcut).
    pub fn abandon_run(&mut self) -> bool {
        if self.phase != ShiftPhase::Running {
            return false;
        }
        self.phase = ShiftPhase::Failed;
        true
    }
}

impl Default for ShiftProgression {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shift::config::ShiftRoster;

    fn first_spec() -> ShiftSpec {
        ShiftRoster::default().clamped(0).clone()
    }

    fn running() -> ShiftProgression {
        let mut progression = ShiftProgression::new();
        progression.begin_run();
        progression
    }

    #[test]
    fn ticks_accrue_only_while_running() {
        let mut progression = ShiftProgression::new();
        progression.tick(5.0);
        assert_eq!(progression.elapsed(), 0.0);

        progression.begin_run();
        progression.tick(5.0);
        assert_eq!(progression.elapsed(), 5.0);
    }

    #[test]
    fn quota_met_advances_to_the_next_shift() {
        let spec = first_spec();
        let mut progression = running();
        for _ in 0..spec.task_target {
            progression.record_task_completed();
        }
        progression.tick(spec.duration_seconds);

        let verdict = progression.evaluate(&spec, spec.money_target + 2.0, 3);
        assert_eq!(verdict, Some(ShiftVerdict::Advanced));
        assert!(progression.start_next_shift());
        assert_eq!(progression.phase(), ShiftPhase::Running);
        assert_eq!(progression.shift_index(), 1);
        assert_eq!(progression.elapsed(), 0.0);
        assert_eq!(progression.tasks_completed(), 0);
    }

    #[test]
    fn missing_money_fails_even_with_enough_tasks() {
        let spec = first_spec();
        let mut progression = running();
        for _ in 0..spec.task_target {
            progression.record_task_completed();
        }
        progression.tick(spec.duration_seconds);

        let verdict = progression.evaluate(&spec, spec.money_target - 2.0, 3);
        assert_eq!(verdict, Some(ShiftVerdict::Failed));
        assert_eq!(progression.phase(), ShiftPhase::Failed);
    }

    #[test]
    fn missing_tasks_fail_even_with_enough_money() {
        let spec = first_spec();
        let mut progression = running();
        progression.tick(spec.duration_seconds);

        let verdict = progression.evaluate(&spec, spec.money_target + 100.0, 3);
        assert_eq!(verdict, Some(ShiftVerdict::Failed));
    }

    #[test]
    fn last_shift_wins_the_run() {
        let spec = first_spec();
        let mut progression = running();
        for _ in 0..spec.task_target {
            progression.record_task_completed();
        }
        progression.tick(spec.duration_seconds);

        let verdict = progression.evaluate(&spec, spec.money_target, 1);
        assert_eq!(verdict, Some(ShiftVerdict::Won));
        assert_eq!(progression.phase(), ShiftPhase::Won);
        assert!(!progression.start_next_shift());
    }

    #[test]
    fn evaluate_waits_for_the_full_duration() {
        let spec = first_spec();
        let mut progression = running();
        progression.tick(spec.duration_seconds - 1.0);
        assert_eq!(progression.evaluate(&spec, 1_000.0, 3), None);
    }

    #[test]
    fn completions_outside_a_running_shift_do_not_count() {
        let mut progression = ShiftProgression::new();
        progression.record_task_completed();
        assert_eq!(progression.tasks_completed(), 0);
    }

    #[test]
    fn the_clock_tracks_the_hour_range() {
        let spec = first_spec();
        let mut progression = running();
        assert_eq!(progression.clock_label(&spec), "09:00");

        progression.tick(spec.duration_seconds / 2.0);
        assert_eq!(progression.time_of_day(&spec), 10.5);
        assert_eq!(progression.clock_label(&spec), "10:30");

        // Overtime pins the clock at the end of the range.
        progression.tick(spec.duration_seconds);
        assert_eq!(progression.clock_label(&spec), "12:00");
    }

    #[test]
    fn a_failed_run_restarts_from_the_first_shift() {
        let mut progression = running();
        assert!(progression.abandon_run());
        assert_eq!(progression.phase(), ShiftPhase::Failed);

        assert!(progression.begin_run());
        assert_eq!(progression.phase(), ShiftPhase::Running);
        assert_eq!(progression.shift_index(), 0);
    }
}
