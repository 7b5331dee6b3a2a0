pub mod config;
pub mod dynamics;
pub mod error;
pub mod io;
pub mod physics;
pub mod sim;
pub mod vehicle;

pub use error::{Error, Result};
pub use sim::{simulate, FlightSummary, Trajectory};
pub use vehicle::{ParametersBuilder, SimulationParameters};

