//! Splines played back to back with cumulative end times

use super::Spline;
use crate::error::{Result, SplineAnimError};

/// Ordered splines and the time at which each one ends
///
/// End times are the running sum of the member durations, so they never
/// decrease and the last one is the total duration.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSequence {
    splines: Vec<Spline>,
    end_times: Vec<f64>,
}

impl SplineSequence {
    /// Build a sequence from at least one spline
    pub fn new(splines: Vec<Spline>) -> Result<Self> {
        if splines.is_empty() {
            return Err(SplineAnimError::EmptySequence);
        }

        let end_times = splines
            .iter()
            .scan(0.0, |elapsed, spline| {
                *elapsed += spline.ani_time();
                Some(*elapsed)
            })
            .collect();

        Ok(Self { splines, end_times })
    }

    /// Sequence holding a single spline
    pub fn single(spline: Spline) -> Self {
        Self {
            end_times: vec![spline.ani_time()],
            splines: vec![spline],
        }
    }

    /// Sum of all member durations
    pub fn total_duration(&self) -> f64 {
        self.end_times.last().copied().unwrap_or(0.0)
    }

    /// Member splines in playback order
    pub fn splines(&self) -> &[Spline] {
        &self.splines
    }

    /// Cumulative end time of each member
    pub fn end_times(&self) -> &[f64] {
        &self.end_times
    }

    /// Number of member splines
    pub fn len(&self) -> usize {
        self.splines.len()
    }

    /// Always false; construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.splines.is_empty()
    }

    /// Spline at `index` with its `(start, end)` times
    pub fn get(&self, index: usize) -> Option<(&Spline, f64, f64)> {
        let spline = self.splines.get(index)?;
        let end = self.end_times[index];
        let start = if index == 0 {
            0.0
        } else {
            self.end_times[index - 1]
        };
        Some((spline, start, end))
    }

    /// Index of the spline active at `time`
    ///
    /// A time exactly on a boundary belongs to the spline that starts there.
    /// Returns `None` once `time` reaches the total duration.
    pub fn index_at(&self, time: f64) -> Option<usize> {
        let index = self.end_times.partition_point(|&end| end <= time);
        (index < self.splines.len()).then_some(index)
    }
}
