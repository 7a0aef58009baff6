//! EconomyPlugin wiring the ledger and its accrual system.
use bevy::prelude::*;

use crate::core::plugin::update_simulation_clock;

use super::{
    config::EconomyConfig, events::MoneyChangedEvent, rate::RateAccumulator, systems::accrue_money,
};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        let config = EconomyConfig::load_or_default();
        info!(
            "Economy configured: base rate {:.2}/s, reward x{:.1} for {:.1}s",
            config.base_rate, config.reward_factor, config.reward_seconds
        );

        app.insert_resource(RateAccumulator::new(config.base_rate))
            .insert_resource(config)
            .add_event::<MoneyChangedEvent>()
            .add_systems(Update, accrue_money.after(update_simulation_clock));
    }
}
