use log::debug;
use serde::Serialize;

use super::trajectory::{max_with_index, Trajectory};

// ---------------------------------------------------------------------------
// Recovery timing
// ---------------------------------------------------------------------------

/// Delay between burnout and the ejection charge firing, s.
pub const EJECTION_DELAY: f64 = 4.0;

/// Height added to the apogee sample when the rocket is still climbing at
/// ejection, m.
pub const EJECTION_COAST_CORRECTION: f64 = 2.0;

// ---------------------------------------------------------------------------
// Apogee detection
// ---------------------------------------------------------------------------

/// Index of the first sample whose velocity is negative.
pub fn find_apogee(trajectory: &Trajectory) -> Option<usize> {
    for (i, &v) in trajectory.velocity().iter().enumerate() {
        if v < 0.0 {
            return Some(i);
        }
    }
    None
}

/// How the maximum height was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApogeeEstimate {
    /// Already descending when the charge fired: the highest recorded sample.
    Descending,
    /// Still climbing when the charge fired: apogee sample plus the coast
    /// correction.
    CoastCorrected,
}

/// Maximum height given the apogee sample `k` and the ejection time.
///
/// `None` when `k` is not an index into `trajectory`.
pub fn estimate_max_height(
    trajectory: &Trajectory,
    k: usize,
    ejection_time: f64,
    coast_correction: f64,
) -> Option<(f64, ApogeeEstimate)> {
    let t_k = *trajectory.time().get(k)?;
    let h_k = *trajectory.height().get(k)?;

    if t_k >= ejection_time {
        let max = max_with_index(trajectory.height()).map_or(h_k, |(_, h)| h);
        debug!("apogee at t={:.3} s is past ejection ({:.3} s), using peak height", t_k, ejection_time);
        Some((max, ApogeeEstimate::Descending))
    } else {
        debug!(
            "apogee at t={:.3} s precedes ejection ({:.3} s), adding {} m coast",
            t_k, ejection_time, coast_correction
        );
        Some((h_k + coast_correction, ApogeeEstimate::CoastCorrected))
    }
}
