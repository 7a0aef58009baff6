//! Economy module: the money ledger and its rate-modifier algebra.
pub mod config;
pub mod events;
pub mod plugin;
pub mod rate;
pub mod systems;

pub use config::EconomyConfig;
pub use events::MoneyChangedEvent;
pub use plugin::EconomyPlugin;
pub use rate::RateAccumulator;
