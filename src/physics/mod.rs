pub mod aerodynamics;
pub mod gravity;
pub mod propulsion;

pub use propulsion::{mass_and_thrust, Phase};
