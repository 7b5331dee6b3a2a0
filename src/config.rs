//! TOML configuration for a simulation run.
//!
//! Every section and key is optional; anything left out keeps the nominal
//! value from [`SimulationParameters::default`]. Unknown keys are rejected
//! so that typos do not silently fall back to defaults.
//!
//! ```toml
//! [environment]
//! g = 9.81
//!
//! [airframe]
//! cross_sectional_area = 4.67e-4
//! drag_coefficient = 1.03
//!
//! [motor]
//! mass_before_burn = 0.0548
//! mass_during_burn = 0.0518
//! mass_after_burn = 0.0488
//! burn_duration = 0.888
//! average_thrust = 4.635247748
//!
//! [simulation]
//! time_step = 0.05
//! horizon = 6.0
//!
//! [recovery]
//! ejection_delay = 4.0
//! ejection_coast_correction = 2.0
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::Result;
use crate::vehicle::SimulationParameters;

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub environment: EnvironmentConfig,
    pub airframe: AirframeConfig,
    pub motor: MotorConfig,
    pub simulation: SimulationConfig,
    pub recovery: RecoveryConfig,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    pub g: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AirframeConfig {
    pub cross_sectional_area: Option<f64>,
    pub drag_coefficient: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct MotorConfig {
    pub mass_before_burn: Option<f64>,
    pub mass_during_burn: Option<f64>,
    pub mass_after_burn: Option<f64>,
    pub burn_duration: Option<f64>,
    pub average_thrust: Option<f64>,
}

/// Integration step and stop time.
#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub time_step: Option<f64>,
    pub horizon: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RecoveryConfig {
    pub ejection_delay: Option<f64>,
    pub ejection_coast_correction: Option<f64>,
}

impl ConfigFile {
    /// Overlay the configured values on the nominal parameters. The result
    /// is not validated yet.
    pub fn into_parameters(self) -> SimulationParameters {
        let mut p = SimulationParameters::default();

        set(&mut p.g, self.environment.g);

        set(&mut p.cross_sectional_area, self.airframe.cross_sectional_area);
        set(&mut p.drag_coefficient, self.airframe.drag_coefficient);

        set(&mut p.mass_before_burn, self.motor.mass_before_burn);
        set(&mut p.mass_during_burn, self.motor.mass_during_burn);
        set(&mut p.mass_after_burn, self.motor.mass_after_burn);
        set(&mut p.burn_duration, self.motor.burn_duration);
        set(&mut p.average_thrust, self.motor.average_thrust);

        set(&mut p.time_step, self.simulation.time_step);
        set(&mut p.horizon, self.simulation.horizon);

        set(&mut p.ejection_delay, self.recovery.ejection_delay);
        set(&mut p.ejection_coast_correction, self.recovery.ejection_coast_correction);

        p
    }
}

fn set(slot: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Parse a TOML document into validated parameters.
pub fn parse_parameters(text: &str) -> Result<SimulationParameters> {
    let file: ConfigFile = toml::from_str(text)?;
    let params = file.into_parameters();
    params.validate()?;
    Ok(params)
}

/// Load and validate parameters from a TOML file.
pub fn load_parameters(path: impl AsRef<Path>) -> Result<SimulationParameters> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let params = parse_parameters(&text)?;
    info!("loaded parameters from {}", path.display());
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(parse_parameters("").unwrap(), SimulationParameters::default());
    }

    #[test]
    fn sections_override_defaults() {
        let p = parse_parameters(
            r#"
            [motor]
            average_thrust = 6.0
            burn_duration = 0.7

            [simulation]
            time_step = 0.01
            "#,
        )
        .unwrap();
        assert_eq!(p.average_thrust, 6.0);
        assert_eq!(p.burn_duration, 0.7);
        assert_eq!(p.time_step, 0.01);
        assert_eq!(p.horizon, 6.0);
        assert_eq!(p.mass_before_burn, 0.0548);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = parse_parameters("[motor]\nthrust = 5.0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = parse_parameters("[simulation]\nhorizon = 0.5\n").unwrap_err();
        assert!(matches!(err, Error::InvalidParameters { field: "horizon", .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[environment]\ng = 3.71").unwrap();
        let p = load_parameters(file.path()).unwrap();
        assert_eq!(p.g, 3.71);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_parameters("/nonexistent/rocket.toml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
