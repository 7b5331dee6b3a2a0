use log::{debug, info, trace};

use crate::dynamics::state::TrajectoryState;
use crate::physics::Phase;
use crate::vehicle::SimulationParameters;
use super::integrator::euler_step;
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Fixed-step flight simulation
// ---------------------------------------------------------------------------

/// Integrate the vertical flight from ignition to the horizon.
///
/// Produces `params.sample_count()` samples; sample `i` is evaluated at
/// `i * time_step`. Deterministic: identical parameters give a
/// bit-identical trajectory.
pub fn simulate(params: &SimulationParameters) -> Trajectory {
    let dt = params.time_step;
    let steps = params.sample_count();
    let mut trajectory = Trajectory::with_capacity(steps);

    info!(
        "simulating {} steps of {} s (thrust {} N for {} s, impulse {:.3} N·s, TWR {:.2})",
        steps,
        dt,
        params.average_thrust,
        params.burn_duration,
        params.total_impulse(),
        params.twr()
    );

    let mut state = TrajectoryState::launch();
    let mut phase = Phase::Powered;

    for i in 0..steps {
        let t = i as f64 * dt;

        let current = Phase::at(t, params);
        if current != phase {
            debug!("{:?} -> {:?} at t={:.3} s, h={:.2} m, v={:.2} m/s", phase, current, t, state.height, state.velocity);
            phase = current;
        }

        state = euler_step(&state, t, dt, params);
        trace!(
            "t={:.3} h={:.4} v={:.4} a={:.4}",
            state.time, state.height, state.velocity, state.acceleration
        );
        trajectory.push(state);
    }

    if let Some(last) = trajectory.last() {
        info!("simulation finished at t={:.2} s, h={:.2} m, v={:.2} m/s", last.time, last.height, last.velocity);
    }

    trajectory
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
