pub mod params;

pub use params::{ParametersBuilder, SimulationParameters};
