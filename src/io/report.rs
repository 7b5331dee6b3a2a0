use std::io::{self, Write};

use crate::sim::FlightSummary;

/// Write the three headline numbers, two decimals each.
pub fn write_report<W: Write>(writer: &mut W, summary: &FlightSummary) -> io::Result<()> {
    writeln!(writer, "Maximum height is {:.2} m", summary.max_height)?;
    writeln!(writer, "Maximum velocity is {:.2} m/s", summary.max_velocity)?;
    writeln!(writer, "Maximum acceleration is {:.2} m/s^2", summary.max_acceleration)?;
    Ok(())
}

pub fn print_report(summary: &FlightSummary) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, summary)
}
