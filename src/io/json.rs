use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::sim::FlightSummary;
use crate::vehicle::SimulationParameters;

#[derive(Serialize)]
struct SummaryDocument<'a> {
    parameters: &'a SimulationParameters,
    summary: &'a FlightSummary,
}

/// Write flight summary, with the parameters that produced it, as JSON.
pub fn write_summary<W: Write>(
    writer: W,
    params: &SimulationParameters,
    summary: &FlightSummary,
) -> Result<()> {
    let doc = SummaryDocument { parameters: params, summary };
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file(
    path: impl AsRef<Path>,
    params: &SimulationParameters,
    summary: &FlightSummary,
) -> Result<()> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, params, summary)?;
    writeln!(file)?;
    info!("wrote summary to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ApogeeEstimate;

    #[test]
    fn json_output_is_valid() {
        let summary = FlightSummary {
            max_height: 108.35,
            max_velocity: 60.77,
            max_acceleration: 75.33,
            apogee_index: 87,
            apogee_time: 4.35,
            estimate: ApogeeEstimate::CoastCorrected,
        };

        let mut buf = Vec::new();
        write_summary(&mut buf, &SimulationParameters::default(), &summary).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["summary"]["max_height"], 108.35);
        assert_eq!(value["summary"]["estimate"], "coast_corrected");
        assert_eq!(value["parameters"]["burn_duration"], 0.888);
    }
}
