use serde::Serialize;

use crate::dynamics::state::TrajectoryState;

// ---------------------------------------------------------------------------
// Trajectory: four index-aligned series
// ---------------------------------------------------------------------------

/// Recorded flight, one entry per integration step.
///
/// Sample `i` of every series describes the same instant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trajectory {
    time: Vec<f64>,
    height: Vec<f64>,
    velocity: Vec<f64>,
    acceleration: Vec<f64>,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            time: Vec::with_capacity(capacity),
            height: Vec::with_capacity(capacity),
            velocity: Vec::with_capacity(capacity),
            acceleration: Vec::with_capacity(capacity),
        }
    }

    /// Build a trajectory from already aligned samples.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = TrajectoryState>,
    {
        let samples = samples.into_iter();
        let mut trajectory = Self::with_capacity(samples.size_hint().0);
        for s in samples {
            trajectory.push(s);
        }
        trajectory
    }

    pub fn push(&mut self, sample: TrajectoryState) {
        self.time.push(sample.time);
        self.height.push(sample.height);
        self.velocity.push(sample.velocity);
        self.acceleration.push(sample.acceleration);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn height(&self) -> &[f64] {
        &self.height
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn acceleration(&self) -> &[f64] {
        &self.acceleration
    }

    pub fn sample(&self, i: usize) -> Option<TrajectoryState> {
        Some(TrajectoryState {
            time: *self.time.get(i)?,
            height: self.height[i],
            velocity: self.velocity[i],
            acceleration: self.acceleration[i],
        })
    }

    pub fn last(&self) -> Option<TrajectoryState> {
        self.len().checked_sub(1).and_then(|i| self.sample(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = TrajectoryState> + '_ {
        (0..self.len()).filter_map(move |i| self.sample(i))
    }
}

/// Largest value of a series with its index; `None` for an empty series.
pub fn max_with_index(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(time: f64, height: f64, velocity: f64) -> TrajectoryState {
        TrajectoryState { time, height, velocity, acceleration: -9.81 }
    }

    #[test]
    fn series_stay_aligned() {
        let traj = Trajectory::from_samples(vec![sample(0.0, 1.0, 5.0), sample(0.1, 1.5, 4.0)]);
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.time().len(), traj.height().len());
        assert_eq!(traj.velocity().len(), traj.acceleration().len());
        assert_eq!(traj.sample(1), Some(sample(0.1, 1.5, 4.0)));
        assert_eq!(traj.sample(2), None);
        assert_eq!(traj.last(), Some(sample(0.1, 1.5, 4.0)));
    }

    #[test]
    fn max_keeps_first_occurrence() {
        assert_eq!(max_with_index(&[1.0, 3.0, 3.0, 2.0]), Some((1, 3.0)));
        assert_eq!(max_with_index(&[-4.0, -2.0]), Some((1, -2.0)));
        assert_eq!(max_with_index(&[]), None);
    }
}
