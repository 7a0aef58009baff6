//! Money balance driven by a base rate and composable timed modifiers.
use bevy::prelude::*;

/// How a modifier folds into the effective rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Multiplicative,
    Additive,
}

#[derive(Debug, Clone)]
struct TimedModifier {
    kind: ModifierKind,
    magnitude: f64,
    expires_at: f64,
}

/// The session's money ledger.
///
/// An explicit resource owned by the shift context; collaborators receive it
/// through the ECS, never through a global. The effective rate is always
/// `base * product(multiplicative) + sum(additive)` and is recomputed
/// synchronously on every add, remove and sweep, so `tick` never reads a
/// stale value.
///
/// Expiry is deadline-based against the accumulator's own monotonic clock:
/// entries are swept once per tick, after accrual, which gives even a
/// zero-duration modifier one full tick of effect and makes expiry
/// deterministic under test.
#[derive(Resource, Debug)]
pub struct RateAccumulator {
    base_rate: f64,
    current_rate: f64,
    money: f64,
    elapsed: f64,
    running: bool,
    timed: Vec<TimedModifier>,
    permanent_additive: Vec<f64>,
}

impl RateAccumulator {
    pub fn new(base_rate: f64) -> Self {
        Self {
            base_rate,
            current_rate: base_rate,
            money: 0.0,
            elapsed: 0.0,
            running: false,
            timed: Vec::new(),
            permanent_additive: Vec::new(),
        }
    }

    pub fn money(&self) -> f64 {
        self.money
    }

    pub fn effective_rate(&self) -> f64 {
        self.current_rate
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn modifier_count(&self) -> usize {
        self.timed.len() + self.permanent_additive.len()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Halts accrual and clears every pending modifier.
    ///
    /// The economy never limps out of a halt: the shift layer either starts
    /// it again clean between shifts or resets it for a new run.
    pub fn stop(&mut self) {
        self.running = false;
        self.timed.clear();
        self.permanent_additive.clear();
        self.recompute_rate();
    }

    /// Stops and zeroes the balance and the monotonic clock for a new run.
    pub fn reset(&mut self) {
        self.stop();
        self.money = 0.0;
        self.elapsed = 0.0;
    }

    /// Accrues `effective_rate * delta_seconds` and sweeps expired entries.
    ///
    /// Returns the new balance when it changed, so the caller can publish a
    /// change notification without polling.
    pub fn tick(&mut self, delta_seconds: f64) -> Option<f64> {
        if !self.running || delta_seconds <= 0.0 {
            return None;
        }

        let before = self.money;
        self.money += self.current_rate * delta_seconds;
        self.elapsed += delta_seconds;
        self.sweep_expired();

        (self.money != before).then_some(self.money)
    }

    /// Multiplies the base rate by `factor` for `duration_seconds`.
    ///
    /// Concurrent multipliers compose as a product, not by replacement.
    pub fn add_multiplier(&mut self, factor: f64, duration_seconds: f64) {
        self.push_timed(ModifierKind::Multiplicative, factor, duration_seconds);
    }

    /// Adds `rate` (may be negative) on top of the multiplied base.
    pub fn add_additive(&mut self, rate: f64, duration_seconds: f64) {
        self.push_timed(ModifierKind::Additive, rate, duration_seconds);
    }

    /// Adds `rate` until it is explicitly removed.
    pub fn add_permanent_additive(&mut self, rate: f64) {
        self.permanent_additive.push(rate);
        self.recompute_rate();
    }

    /// Removes the first permanent modifier of the given magnitude.
    ///
    /// Removing a magnitude that was never added is tolerated; the caller
    /// may already have been torn down by a `stop`.
    pub fn remove_permanent_additive(&mut self, rate: f64) -> bool {
        match self.permanent_additive.iter().position(|&r| r == rate) {
            Some(index) => {
                self.permanent_additive.remove(index);
                self.recompute_rate();
                true
            }
            None => false,
        }
    }

    fn push_timed(&mut self, kind: ModifierKind, magnitude: f64, duration_seconds: f64) {
        // A non-positive duration still lands on the current tick boundary:
        // the sweep runs after accrual, so the modifier shapes at least one
        // tick before it disappears.
        self.timed.push(TimedModifier {
            kind,
            magnitude,
            expires_at: self.elapsed + duration_seconds.max(0.0),
        });
        self.recompute_rate();
    }

    fn sweep_expired(&mut self) {
        let before = self.timed.len();
        let elapsed = self.elapsed;
        self.timed.retain(|modifier| modifier.expires_at > elapsed);
        if self.timed.len() != before {
            self.recompute_rate();
        }
    }

    fn recompute_rate(&mut self) {
        let mut multiplier = 1.0;
        let mut additional = 0.0;
        for modifier in &self.timed {
            match modifier.kind {
                ModifierKind::Multiplicative => multiplier *= modifier.magnitude,
                ModifierKind::Additive => additional += modifier.magnitude,
            }
        }
        for rate in &self.permanent_additive {
            additional += rate;
        }
        self.current_rate = self.base_rate * multiplier + additional;
    }
}
