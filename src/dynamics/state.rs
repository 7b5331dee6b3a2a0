use serde::Serialize;

// ---------------------------------------------------------------------------
// 1-D vertical state: time, height, velocity, acceleration
// ---------------------------------------------------------------------------

/// One sample of the vertical flight. Up is positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrajectoryState {
    pub time: f64,         // s
    pub height: f64,       // m above the pad
    pub velocity: f64,     // m/s
    pub acceleration: f64, // m/s^2, as used for the step that produced this sample
}

impl TrajectoryState {
    /// Vehicle on the pad at ignition.
    pub fn launch() -> Self {
        Self::default()
    }
}
