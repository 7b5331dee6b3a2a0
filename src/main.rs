use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use rocket_apogee::config;
use rocket_apogee::io::{csv, json, report};
use rocket_apogee::sim::{self, FlightSummary};
use rocket_apogee::vehicle::{ParametersBuilder, SimulationParameters};

/// Simulate the vertical flight of a single-stage model rocket and estimate
/// its apogee.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// TOML parameter file; omitted values keep the nominal defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Average motor thrust, N
    #[arg(long)]
    thrust: Option<f64>,

    /// Burn duration, s
    #[arg(long)]
    burn_duration: Option<f64>,

    /// Mass at ignition, kg
    #[arg(long)]
    mass_before: Option<f64>,

    /// Mass at burnout, kg
    #[arg(long)]
    mass_after: Option<f64>,

    /// Drag coefficient
    #[arg(long)]
    drag_coefficient: Option<f64>,

    /// Cross-sectional area, m^2
    #[arg(long)]
    area: Option<f64>,

    /// Gravitational acceleration, m/s^2
    #[arg(long)]
    gravity: Option<f64>,

    /// Integration step, s
    #[arg(long)]
    time_step: Option<f64>,

    /// Simulation stop time, s
    #[arg(long)]
    horizon: Option<f64>,

    /// Ejection charge delay after burnout, s
    #[arg(long)]
    ejection_delay: Option<f64>,

    /// Write the trajectory to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the summary to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Args {
    fn parameters(&self) -> Result<SimulationParameters> {
        let base = match &self.config {
            Some(path) => config::load_parameters(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimulationParameters::default(),
        };

        let mut builder = ParametersBuilder::from_parameters(base);
        if let Some(v) = self.thrust { builder = builder.average_thrust(v); }
        if let Some(v) = self.burn_duration { builder = builder.burn_duration(v); }
        if let Some(v) = self.mass_before { builder = builder.mass_before_burn(v); }
        if let Some(v) = self.mass_after { builder = builder.mass_after_burn(v); }
        if let Some(v) = self.drag_coefficient { builder = builder.drag_coefficient(v); }
        if let Some(v) = self.area { builder = builder.cross_sectional_area(v); }
        if let Some(v) = self.gravity { builder = builder.g(v); }
        if let Some(v) = self.time_step { builder = builder.time_step(v); }
        if let Some(v) = self.horizon { builder = builder.horizon(v); }
        if let Some(v) = self.ejection_delay { builder = builder.ejection_delay(v); }

        Ok(builder.build()?)
    }
}

fn main() -> Result<()> {
    // Default log level to "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let params = args.parameters().context("invalid simulation parameters")?;

    let trajectory = sim::simulate(&params);

    // The trajectory is exported even when no apogee can be extracted.
    if let Some(path) = &args.csv {
        if let Err(e) = csv::write_trajectory_file(path, &trajectory) {
            error!("failed to export trajectory to {}: {}", path.display(), e);
        }
    }

    let summary = FlightSummary::from_trajectory(&trajectory, &params)?;
    report::print_report(&summary)?;

    if let Some(path) = &args.json {
        if let Err(e) = json::write_summary_file(path, &params, &summary) {
            error!("failed to export summary to {}: {}", path.display(), e);
        }
    }

    info!("done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parameters_from(argv: &[&str]) -> Result<SimulationParameters> {
        let args = Args::try_parse_from(std::iter::once("rocket-apogee").chain(argv.iter().copied()))?;
        args.parameters()
    }

    #[test]
    fn overrides_win_over_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[environment]\ng = 3.71\n\n[motor]\naverage_thrust = 5.0\n\n[simulation]\nhorizon = 7.0").unwrap();
        let path = file.path().to_str().unwrap();

        let p = parameters_from(&["--config", path, "--thrust", "6", "--horizon", "8"]).unwrap();
        assert_eq!(p.average_thrust, 6.0);
        assert_eq!(p.horizon, 8.0);
        // Values without an override keep the file's setting.
        assert_eq!(p.g, 3.71);
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let p = parameters_from(&["--thrust", "6", "--ejection-delay", "3"]).unwrap();
        assert_eq!(p.average_thrust, 6.0);
        assert_eq!(p.ejection_delay, 3.0);

        let expected = SimulationParameters {
            average_thrust: 6.0,
            ejection_delay: 3.0,
            ..SimulationParameters::default()
        };
        assert_eq!(p, expected);
    }

    #[test]
    fn no_arguments_give_defaults() {
        assert_eq!(parameters_from(&[]).unwrap(), SimulationParameters::default());
    }

    #[test]
    fn override_breaking_an_invariant_is_rejected() {
        let err = parameters_from(&["--horizon", "0.5"]).unwrap_err();
        match err.downcast_ref::<rocket_apogee::Error>() {
            Some(rocket_apogee::Error::InvalidParameters { field, .. }) => assert_eq!(*field, "horizon"),
            other => panic!("expected InvalidParameters, got {:?}", other),
        }
    }
}
