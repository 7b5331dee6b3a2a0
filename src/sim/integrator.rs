use crate::dynamics;
use crate::dynamics::state::TrajectoryState;
use crate::vehicle::SimulationParameters;

// ---------------------------------------------------------------------------
// Semi-implicit (symplectic) Euler step
// ---------------------------------------------------------------------------

/// Advance `state` by one step of `dt` starting at time `t`.
///
/// Velocity is updated first and the new velocity drives the height
/// update. The returned sample carries `t` (the time the forces were
/// evaluated at), the updated height and velocity, and the acceleration
/// used for the step.
pub fn euler_step(state: &TrajectoryState, t: f64, dt: f64, params: &SimulationParameters) -> TrajectoryState {
    let acceleration = dynamics::acceleration(t, state.velocity, params);
    let velocity = state.velocity + acceleration * dt;
    let height = state.height + velocity * dt;

    TrajectoryState {
        time: t,
        height,
        velocity,
        acceleration,
    }
}
