//! CorePlugin wires the scaled frame clock every gameplay system ticks from.
use bevy::prelude::*;
use std::time::Duration;

const DEFAULT_TIME_SCALE: f32 = 1.0;
const MIN_TIME_SCALE: f32 = 0.001;

/// Scaled simulation time derived from real frame deltas.
///
/// Shift progression, scheduling countdowns and the money accumulator all
/// read `delta_seconds` from here instead of `Time`, so a whole round can be
/// sped up or slowed down from a single knob.
#[derive(Resource, Debug)]
pub struct SimulationClock {
    time_scale: f32,
    scaled_delta: Duration,
    elapsed: Duration,
}

impl SimulationClock {
    pub fn new(time_scale: f32) -> Self {
        Self {
            time_scale: time_scale.max(MIN_TIME_SCALE),
            scaled_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    /// Sets the time-scale multiplier (clamped to a small positive minimum).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(MIN_TIME_SCALE);
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Scaled delta of the current frame, in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.scaled_delta.as_secs_f32()
    }

    /// Total scaled time elapsed since the clock was created.
    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Applies a real frame delta, storing the scaled duration.
    pub fn tick(&mut self, real_delta: Duration) {
        self.scaled_delta = real_delta.mul_f32(self.time_scale);
        self.elapsed += self.scaled_delta;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_SCALE)
    }
}

/// Registers the simulation clock and its update system.
#[derive(Debug, Clone, Copy)]
pub struct CorePlugin {
    time_scale: f32,
}

impl CorePlugin {
    pub const fn with_time_scale(time_scale: f32) -> Self {
        Self { time_scale }
    }
}

impl Default for CorePlugin {
    fn default() -> Self {
        Self::with_time_scale(DEFAULT_TIME_SCALE)
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimulationClock::new(self.time_scale))
            .add_systems(Startup, log_startup_time_scale)
            .add_systems(Update, update_simulation_clock);

        #[cfg(feature = "core_debug")]
        app.insert_resource(HeartbeatAccumulator::default())
            .add_systems(Update, log_clock_heartbeat.after(update_simulation_clock));
    }
}

pub fn update_simulation_clock(mut clock: ResMut<SimulationClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

fn log_startup_time_scale(clock: Res<SimulationClock>) {
    info!("Simulation clock running at {:.3}x", clock.time_scale());
}

#[cfg(feature = "core_debug")]
#[derive(Resource, Debug, Default)]
struct HeartbeatAccumulator {
    since_last: f32,
}

#[cfg(feature = "core_debug")]
fn log_clock_heartbeat(mut heartbeat: ResMut<HeartbeatAccumulator>, clock: Res<SimulationClock>) {
    heartbeat.since_last += clock.delta_seconds();
    if heartbeat.since_last >= 1.0 {
        heartbeat.since_last = 0.0;
        info!(
            target: "core_debug",
            "Sim elapsed: {:.2}s | scale: {:.3} | dt: {:.4}s",
            clock.elapsed().as_secs_f32(),
            clock.time_scale(),
            clock.delta_seconds(),
        );
    }
}
