use crate::vehicle::SimulationParameters;

// ---------------------------------------------------------------------------
// Flight phase
// ---------------------------------------------------------------------------

/// Flight phase, derived from elapsed time on every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Powered,
    Coasting,
}

impl Phase {
    /// Powered up to and including burnout, coasting afterwards.
    pub fn at(t: f64, params: &SimulationParameters) -> Phase {
        if t <= params.burn_duration {
            Phase::Powered
        } else {
            Phase::Coasting
        }
    }
}

// ---------------------------------------------------------------------------
// Mass and thrust lookup
// ---------------------------------------------------------------------------

/// Vehicle mass (kg) and thrust (N) at elapsed flight time `t`.
///
/// During the burn the mass falls linearly from `mass_before_burn` to
/// `mass_after_burn` and the motor delivers its average thrust. After
/// burnout the mass stays at `mass_after_burn` with no thrust.
pub fn mass_and_thrust(t: f64, params: &SimulationParameters) -> (f64, f64) {
    match Phase::at(t, params) {
        Phase::Powered => (burn_mass(t, params), params.average_thrust),
        Phase::Coasting => (params.mass_after_burn, 0.0),
    }
}

fn burn_mass(t: f64, params: &SimulationParameters) -> f64 {
    let frac = (t / params.burn_duration).clamp(0.0, 1.0);
    params.mass_before_burn + (params.mass_after_burn - params.mass_before_burn) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn full_mass_at_ignition() {
        let p = SimulationParameters::default();
        let (m, f) = mass_and_thrust(0.0, &p);
        assert_relative_eq!(m, p.mass_before_burn);
        assert_relative_eq!(f, p.average_thrust);
    }

    #[test]
    fn burnout_mass_at_end_of_burn() {
        let p = SimulationParameters::default();
        let (m, f) = mass_and_thrust(p.burn_duration, &p);
        assert_relative_eq!(m, p.mass_after_burn, epsilon = 1e-12);
        assert_relative_eq!(f, p.average_thrust);
    }

    #[test]
    fn mid_burn_mass_is_interpolated() {
        let p = SimulationParameters::default();
        let (m, _) = mass_and_thrust(p.burn_duration / 2.0, &p);
        assert_relative_eq!(m, 0.0518, epsilon = 1e-12);
    }

    #[test]
    fn mass_never_increases_during_burn() {
        let p = SimulationParameters::default();
        let mut prev = f64::INFINITY;
        for i in 0..=100 {
            let t = p.burn_duration * i as f64 / 100.0;
            let (m, _) = mass_and_thrust(t, &p);
            assert!(m <= prev, "mass rose to {} at t={}", m, t);
            prev = m;
        }
    }

    #[test]
    fn coast_has_no_thrust_and_fixed_mass() {
        let p = SimulationParameters::default();
        for t in [p.burn_duration + 1e-9, 1.0, 3.5, p.horizon, 100.0] {
            assert_eq!(Phase::at(t, &p), Phase::Coasting);
            let (m, f) = mass_and_thrust(t, &p);
            assert_eq!(f, 0.0);
            assert_eq!(m, p.mass_after_burn);
        }
    }
}
