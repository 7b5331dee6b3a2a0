use log::warn;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::sim::event::{EJECTION_COAST_CORRECTION, EJECTION_DELAY};

/// Upper bound on the number of samples a single run may record.
pub const MAX_SAMPLES: usize = 10_000_000;

// ---------------------------------------------------------------------------
// Simulation parameters (vehicle, motor, environment, integration)
// ---------------------------------------------------------------------------

/// Complete, validated input of one simulation run.
///
/// Build it with [`ParametersBuilder`] or load it with
/// [`crate::config::load_parameters`]; both validate before handing it out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationParameters {
    pub g: f64,                         // m/s^2
    pub cross_sectional_area: f64,      // m^2
    pub drag_coefficient: f64,          // dimensionless
    pub mass_before_burn: f64,          // kg
    pub mass_during_burn: f64,          // kg, mid-burn reference only
    pub mass_after_burn: f64,           // kg
    pub burn_duration: f64,             // s
    pub average_thrust: f64,            // N
    pub time_step: f64,                 // s
    pub horizon: f64,                   // s
    pub ejection_delay: f64,            // s after burnout
    pub ejection_coast_correction: f64, // m
}

impl Default for SimulationParameters {
    /// Nominal single-stage model rocket on a small black-powder motor.
    fn default() -> Self {
        Self {
            g: 9.81,
            cross_sectional_area: 4.67e-4,
            drag_coefficient: 1.03,
            mass_before_burn: 0.0548,
            mass_during_burn: 0.0518,
            mass_after_burn: 0.0488,
            burn_duration: 0.888,
            average_thrust: 4.635_247_748,
            time_step: 0.05,
            horizon: 6.0,
            ejection_delay: EJECTION_DELAY,
            ejection_coast_correction: EJECTION_COAST_CORRECTION,
        }
    }
}

impl SimulationParameters {
    /// Check every invariant of the parameter set.
    pub fn validate(&self) -> Result<()> {
        positive("g", self.g)?;
        positive("cross_sectional_area", self.cross_sectional_area)?;
        positive("drag_coefficient", self.drag_coefficient)?;
        positive("mass_before_burn", self.mass_before_burn)?;
        positive("mass_during_burn", self.mass_during_burn)?;
        positive("mass_after_burn", self.mass_after_burn)?;
        positive("burn_duration", self.burn_duration)?;
        non_negative("average_thrust", self.average_thrust)?;
        positive("time_step", self.time_step)?;
        positive("horizon", self.horizon)?;
        non_negative("ejection_delay", self.ejection_delay)?;
        finite("ejection_coast_correction", self.ejection_coast_correction)?;

        if self.mass_before_burn < self.mass_after_burn {
            return Err(Error::invalid(
                "mass_after_burn",
                format!(
                    "mass after burn ({} kg) exceeds mass before burn ({} kg)",
                    self.mass_after_burn, self.mass_before_burn
                ),
            ));
        }
        if self.horizon <= self.burn_duration {
            return Err(Error::invalid(
                "horizon",
                format!(
                    "horizon ({} s) must extend past the burn ({} s)",
                    self.horizon, self.burn_duration
                ),
            ));
        }
        if self.checked_sample_count().is_none() {
            return Err(Error::invalid(
                "time_step",
                format!(
                    "time step {} s over a {} s horizon exceeds {} samples",
                    self.time_step, self.horizon, MAX_SAMPLES
                ),
            ));
        }

        if self.mass_during_burn > self.mass_before_burn
            || self.mass_during_burn < self.mass_after_burn
        {
            warn!(
                "mid-burn mass {} kg lies outside the burn mass range [{}, {}] kg",
                self.mass_during_burn, self.mass_after_burn, self.mass_before_burn
            );
        }

        Ok(())
    }

    /// Number of samples produced by a run: `floor(horizon / time_step) + 1`,
    /// capped at [`MAX_SAMPLES`].
    pub fn sample_count(&self) -> usize {
        self.checked_sample_count().unwrap_or(MAX_SAMPLES)
    }

    /// `floor(horizon / time_step) + 1`, or `None` when it is not finite or
    /// exceeds [`MAX_SAMPLES`].
    pub fn checked_sample_count(&self) -> Option<usize> {
        // Absorb the rounding of e.g. 6.0 / 0.05 landing just under 120.
        let steps = (self.horizon / self.time_step + 1e-9).floor();
        if !steps.is_finite() || steps < 0.0 || steps >= MAX_SAMPLES as f64 {
            return None;
        }
        (steps as usize).checked_add(1)
    }

    /// Moment the ejection charge is assumed to fire.
    pub fn ejection_time(&self) -> f64 {
        self.burn_duration + self.ejection_delay
    }

    /// Thrust-to-weight ratio at ignition.
    pub fn twr(&self) -> f64 {
        self.average_thrust / (self.mass_before_burn * self.g)
    }

    /// Total impulse delivered by the average-thrust approximation, N·s.
    pub fn total_impulse(&self) -> f64 {
        self.average_thrust * self.burn_duration
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("must be finite, got {value}")))
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(field, format!("must not be negative, got {value}")))
    }
}

// ---------------------------------------------------------------------------
// Parameters builder
// ---------------------------------------------------------------------------

/// Fluent builder starting from the nominal defaults.
#[derive(Debug, Clone, Default)]
pub struct ParametersBuilder {
    params: SimulationParameters,
}

impl ParametersBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing parameter set, e.g. one loaded from a file.
    pub fn from_parameters(params: SimulationParameters) -> Self {
        Self { params }
    }

    pub fn g(mut self, v: f64) -> Self { self.params.g = v; self }
    pub fn cross_sectional_area(mut self, v: f64) -> Self { self.params.cross_sectional_area = v; self }
    pub fn drag_coefficient(mut self, v: f64) -> Self { self.params.drag_coefficient = v; self }
    pub fn mass_before_burn(mut self, v: f64) -> Self { self.params.mass_before_burn = v; self }
    pub fn mass_during_burn(mut self, v: f64) -> Self { self.params.mass_during_burn = v; self }
    pub fn mass_after_burn(mut self, v: f64) -> Self { self.params.mass_after_burn = v; self }
    pub fn burn_duration(mut self, v: f64) -> Self { self.params.burn_duration = v; self }
    pub fn average_thrust(mut self, v: f64) -> Self { self.params.average_thrust = v; self }
    pub fn time_step(mut self, v: f64) -> Self { self.params.time_step = v; self }
    pub fn horizon(mut self, v: f64) -> Self { self.params.horizon = v; self }
    pub fn ejection_delay(mut self, v: f64) -> Self { self.params.ejection_delay = v; self }
    pub fn ejection_coast_correction(mut self, v: f64) -> Self { self.params.ejection_coast_correction = v; self }

    pub fn build(self) -> Result<SimulationParameters> {
        self.params.validate()?;
        Ok(self.params)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
