use log::info;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::vehicle::SimulationParameters;
use super::event::{estimate_max_height, find_apogee, ApogeeEstimate};
use super::trajectory::{max_with_index, Trajectory};

/// Summary statistics computed from a completed trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlightSummary {
    pub max_height: f64,       // m
    pub max_velocity: f64,     // m/s
    pub max_acceleration: f64, // m/s^2
    pub apogee_index: usize,
    pub apogee_time: f64,      // s
    pub estimate: ApogeeEstimate,
}

impl FlightSummary {
    /// Extract the summary, failing if the rocket never starts descending
    /// within the simulated horizon.
    pub fn from_trajectory(trajectory: &Trajectory, params: &SimulationParameters) -> Result<Self> {
        let no_apogee = || Error::NoApogeeDetected { horizon: params.horizon };
        let k = find_apogee(trajectory).ok_or_else(no_apogee)?;

        let (max_height, estimate) = estimate_max_height(
            trajectory,
            k,
            params.ejection_time(),
            params.ejection_coast_correction,
        )
        .ok_or_else(no_apogee)?;

        // find_apogee returned an index, so neither series is empty.
        let max_velocity = max_with_index(trajectory.velocity()).map_or(0.0, |(_, v)| v);
        let max_acceleration = max_with_index(trajectory.acceleration()).map_or(0.0, |(_, a)| a);

        let summary = FlightSummary {
            max_height,
            max_velocity,
            max_acceleration,
            apogee_index: k,
            apogee_time: trajectory.time()[k],
            estimate,
        };
        info!(
            "apogee {:.2} m ({:?}), max velocity {:.2} m/s, max acceleration {:.2} m/s^2",
            summary.max_height, summary.estimate, summary.max_velocity, summary.max_acceleration
        );
        Ok(summary)
    }
}
