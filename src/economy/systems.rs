//! Per-frame money accrual.
use bevy::prelude::*;

use crate::core::SimulationClock;

use super::{events::MoneyChangedEvent, rate::RateAccumulator};

/// Accrues money from the effective rate and publishes balance changes.
pub fn accrue_money(
    clock: Res<SimulationClock>,
    mut ledger: ResMut<RateAccumulator>,
    mut changes: MessageWriter<MoneyChangedEvent>,
) {
    if let Some(money) = ledger.tick(clock.delta_seconds() as f64) {
        changes.write(MoneyChangedEvent {
            money,
            rate: ledger.effective_rate(),
        });
    }
}
