use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::sim::Trajectory;

const HEADER: [&str; 4] = ["time", "height", "velocity", "acceleration"];

/// Write trajectory data to CSV format.
///
/// Columns: time (s), height (m), velocity (m/s), acceleration (m/s^2)
pub fn write_trajectory<W: Write>(writer: W, trajectory: &Trajectory) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;
    for s in trajectory.iter() {
        wtr.serialize(s)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, trajectory: &Trajectory) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_trajectory(file, trajectory)?;
    info!("wrote {} samples to {}", trajectory.len(), path.display());
    Ok(())
}
