pub mod state;

use crate::physics::{aerodynamics, gravity, propulsion};
use crate::vehicle::SimulationParameters;

// ---------------------------------------------------------------------------
// Equations of motion (1-D vertical point mass)
// ---------------------------------------------------------------------------

/// Net vertical acceleration at time `t` for the given velocity.
///
/// Forces modeled:
///   1. Thrust  — average motor thrust during the burn, zero after
///   2. Drag    — `Cd * A * v^2`, always subtracted
///   3. Gravity — uniform, `m * g`
pub fn acceleration(t: f64, velocity: f64, params: &SimulationParameters) -> f64 {
    let (mass, thrust) = propulsion::mass_and_thrust(t, params);

    let f_drag = aerodynamics::drag_force(velocity, params.drag_coefficient, params.cross_sectional_area);
    let f_gravity = gravity::gravity_force(mass, params.g);
    let f_net = thrust - f_drag - f_gravity;

    f_net / mass
}
