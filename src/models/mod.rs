mod settings;
mod stop;
mod train;

pub use settings::SimulationSettings;
pub use stop::Stop;
pub use train::Train;
