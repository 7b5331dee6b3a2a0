pub mod event;
pub mod integrator;
pub mod runner;
pub mod summary;
pub mod trajectory;

pub use event::{find_apogee, ApogeeEstimate};
pub use integrator::euler_step;
pub use runner::simulate;
pub use summary::FlightSummary;
pub use trajectory::Trajectory;
