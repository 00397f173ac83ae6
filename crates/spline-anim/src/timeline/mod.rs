//! Timeline sequencing of splines and orientations
//!
//! A [`Timeline`] maps global animation time onto the active spline of a
//! [`SplineSequence`] and the blended orientation of a [`RotationSequence`].
//! Its cursor is an explicit [`TimelineState`]: the active segment index and
//! its start and end times, or [`TimelineState::Finished`].
//!
//! Position is evaluated per segment: time is remapped from the segment's
//! `[start, end)` onto the spline parameter. Orientation is blended over the
//! whole animation: time is remapped from `[0, total)` onto the rotation
//! chain.
//!
//! # Example
//!
//! ```
//! use spline_anim::math::{Quaternion, RotationSequence, Vector3};
//! use spline_anim::spline::{Spline, SplineSequence};
//! use spline_anim::timeline::{FrameClock, Timeline, play};
//!
//! let spline = Spline::catmull_rom(
//!     2.0,
//!     vec![Vector3::ZERO, Vector3::X, Vector3::ONE, Vector3::Y],
//! )
//! .unwrap();
//! let rotations = RotationSequence::new(vec![Quaternion::IDENTITY]).unwrap();
//! let mut timeline = Timeline::new(SplineSequence::single(spline), rotations);
//!
//! let mut frames = Vec::new();
//! let summary = play(&mut timeline, FrameClock::new(30.0, 2.0).unwrap(), &mut frames);
//! assert!(summary.finished);
//! assert_eq!(frames.len(), 60);
//! ```

mod clock;
mod pose;
mod sink;

pub use clock::{FrameClock, MAX_FRAME_RATE, Tick};
pub use pose::Pose;
pub use sink::{PlaybackSummary, PoseSink, play};

use crate::math::RotationSequence;
use crate::spline::{Spline, SplineSequence};

/// Cursor of a [`Timeline`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineState {
    /// A spline is playing
    Active {
        /// Index of the spline in the sequence
        index: usize,
        /// Global time at which the spline starts
        start: f64,
        /// Global time at which the spline ends
        end: f64,
    },
    /// Every spline has played; no further poses are produced
    Finished,
}

impl TimelineState {
    /// Whether a spline is playing
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Sequencer turning global animation time into poses
#[derive(Debug, Clone)]
pub struct Timeline {
    sequence: SplineSequence,
    rotations: RotationSequence,
    state: TimelineState,
    last_time: f64,
}

impl Timeline {
    /// Create a timeline positioned at the start of its first spline
    pub fn new(sequence: SplineSequence, rotations: RotationSequence) -> Self {
        let state = Self::state_for(&sequence, 0);
        Self {
            sequence,
            rotations,
            state,
            last_time: 0.0,
        }
    }

    fn state_for(sequence: &SplineSequence, index: usize) -> TimelineState {
        sequence
            .get(index)
            .map_or(TimelineState::Finished, |(_, start, end)| {
                TimelineState::Active { index, start, end }
            })
    }

    /// Splines played by this timeline
    pub fn sequence(&self) -> &SplineSequence {
        &self.sequence
    }

    /// Orientation keyframes blended over the whole timeline
    pub fn rotations(&self) -> &RotationSequence {
        &self.rotations
    }

    /// Current cursor
    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// Whether every spline has played
    pub fn is_finished(&self) -> bool {
        self.state == TimelineState::Finished
    }

    /// Index of the active spline
    pub fn segment_index(&self) -> Option<usize> {
        match self.state {
            TimelineState::Active { index, .. } => Some(index),
            TimelineState::Finished => None,
        }
    }

    /// `(start, end)` times of the active spline
    pub fn segment_bounds(&self) -> Option<(f64, f64)> {
        match self.state {
            TimelineState::Active { start, end, .. } => Some((start, end)),
            TimelineState::Finished => None,
        }
    }

    /// Sum of all spline durations
    pub fn total_duration(&self) -> f64 {
        self.sequence.total_duration()
    }

    /// Step the cursor to the next spline, or to `Finished` after the last
    pub fn advance(&mut self) -> TimelineState {
        self.state = match self.state {
            TimelineState::Active { index, .. } => {
                let next = Self::state_for(&self.sequence, index + 1);
                match next {
                    TimelineState::Active { index, start, end } => {
                        log::debug!("Timeline entering segment {index} ({start:.3}s..{end:.3}s)");
                    }
                    TimelineState::Finished => {
                        log::debug!("Timeline finished after {:.3}s", self.total_duration());
                    }
                }
                next
            }
            TimelineState::Finished => TimelineState::Finished,
        };
        self.state
    }

    /// Place the cursor on the spline active at `time`
    ///
    /// Negative times are clamped to zero; times at or past the total
    /// duration finish the timeline.
    pub fn seek(&mut self, time: f64) -> TimelineState {
        let time = time.max(0.0);
        self.state = match self.sequence.index_at(time) {
            Some(index) => Self::state_for(&self.sequence, index),
            None => TimelineState::Finished,
        };
        self.last_time = time;
        self.state
    }

    /// Return to the start of the first spline
    pub fn reset(&mut self) {
        self.state = Self::state_for(&self.sequence, 0);
        self.last_time = 0.0;
    }

    /// Advance to global `time` and return the pose there
    ///
    /// Boundaries crossed since the previous call are stepped over one at a
    /// time, so a time exactly on a boundary advances exactly once. Returns
    /// `None` once the timeline has finished. Time running backwards
    /// re-seeks the cursor.
    pub fn update(&mut self, time: f64) -> Option<Pose> {
        let time = time.max(0.0);
        if time < self.last_time {
            log::warn!(
                "Timeline time went backwards ({:.3}s -> {:.3}s); seeking",
                self.last_time,
                time
            );
            self.seek(time);
        }
        self.last_time = time;

        loop {
            let state = self.state;
            match state {
                TimelineState::Active { end, .. } if time >= end => {
                    self.advance();
                }
                TimelineState::Active { index, start, end } => {
                    let spline = self.sequence.get(index).map(|(spline, _, _)| spline)?;
                    return Some(self.pose_in(spline, start, end, time));
                }
                TimelineState::Finished => return None,
            }
        }
    }

    /// Advance to the time of a clock tick
    pub fn tick(&mut self, tick: &Tick) -> Option<Pose> {
        log::trace!(
            "Tick {} at {:.4}s (dt {:.4}s)",
            tick.frame,
            tick.elapsed,
            tick.delta
        );
        self.update(tick.elapsed)
    }

    /// Pose at global `time` without moving the cursor
    ///
    /// Times are clamped to `[0, total]`; the end of the timeline yields the
    /// final pose.
    pub fn sample(&self, time: f64) -> Pose {
        let time = time.max(0.0);
        if let Some((spline, start, end)) = self
            .sequence
            .index_at(time)
            .and_then(|index| self.sequence.get(index))
        {
            return self.pose_in(spline, start, end, time);
        }

        let position = self
            .sequence
            .splines()
            .last()
            .map_or_else(Default::default, Spline::last_point);
        Pose::new(position, self.rotations.at(1.0))
    }

    fn pose_in(&self, spline: &Spline, start: f64, end: f64, time: f64) -> Pose {
        let local = (time - start) / (end - start);
        let global = time / self.total_duration();
        Pose::new(spline.position_at(local), self.rotations.at(global))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Quaternion, Vector3};
    use pretty_assertions::assert_eq;
    use std::f64::consts::FRAC_PI_2;

    fn spline(ani_time: f64, offset: f64) -> Spline {
        let points = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
            .iter()
            .map(|[x, y]| Vector3::new(x + offset, *y, 0.0))
            .collect();
        Spline::catmull_rom(ani_time, points).unwrap()
    }

    fn timeline(durations: &[f64]) -> Timeline {
        let splines = durations
            .iter()
            .enumerate()
            .map(|(i, d)| spline(*d, i as f64 * 10.0))
            .collect();
        Timeline::new(
            SplineSequence::new(splines).unwrap(),
            RotationSequence::new(vec![
                Quaternion::IDENTITY,
                Quaternion::from_angle_axis(FRAC_PI_2, Vector3::Z),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_initial_state() {
        let timeline = timeline(&[1.0, 2.0]);
        assert_eq!(
            timeline.state(),
            TimelineState::Active { index: 0, start: 0.0, end: 1.0 }
        );
        assert_eq!(timeline.segment_index(), Some(0));
        assert_eq!(timeline.segment_bounds(), Some((0.0, 1.0)));
        assert_eq!(timeline.total_duration(), 3.0);
    }

    #[test]
    fn test_boundary_advances_exactly_once() {
        let mut timeline = timeline(&[1.0, 2.0, 0.5]);

        timeline.update(0.5).unwrap();
        assert_eq!(timeline.segment_index(), Some(0));

        let pose = timeline.update(1.0).unwrap();
        assert_eq!(
            timeline.state(),
            TimelineState::Active { index: 1, start: 1.0, end: 3.0 }
        );
        // start of the second spline
        assert_eq!(pose.position, Vector3::new(10.0, 0.0, 0.0));

        timeline.update(1.0).unwrap();
        assert_eq!(timeline.segment_index(), Some(1));
    }

    #[test]
    fn test_large_step_crosses_several_segments() {
        let mut timeline = timeline(&[1.0, 1.0, 1.0]);
        timeline.update(2.25).unwrap();
        assert_eq!(
            timeline.state(),
            TimelineState::Active { index: 2, start: 2.0, end: 3.0 }
        );
    }

    #[test]
    fn test_segment_durations_sum_to_total() {
        let durations = [0.75, 2.0, 1.25];
        let mut timeline = timeline(&durations);
        let mut covered = 0.0;

        while let Some((start, end)) = timeline.segment_bounds() {
            covered += end - start;
            timeline.advance();
        }

        assert_eq!(covered, durations.iter().sum::<f64>());
        assert_eq!(covered, timeline.total_duration());
        assert!(timeline.is_finished());
    }

    #[test]
    fn test_finishes_at_total_duration() {
        let mut timeline = timeline(&[1.0, 2.0]);
        assert!(timeline.update(2.999).is_some());
        assert_eq!(timeline.update(3.0), None);
        assert_eq!(timeline.state(), TimelineState::Finished);
        assert_eq!(timeline.update(10.0), None);
        assert_eq!(timeline.advance(), TimelineState::Finished);
    }

    #[test]
    fn test_negative_time_clamps_to_start() {
        let mut timeline = timeline(&[1.0]);
        let pose = timeline.update(-5.0).unwrap();
        assert_eq!(pose.position, Vector3::ZERO);
        assert_eq!(pose.orientation, Quaternion::IDENTITY);
    }

    #[test]
    fn test_backwards_time_reseeks() {
        let mut timeline = timeline(&[1.0, 2.0]);
        assert!(timeline.update(2.5).is_some());
        assert_eq!(timeline.segment_index(), Some(1));

        assert!(timeline.update(0.5).is_some());
        assert_eq!(timeline.segment_index(), Some(0));

        assert_eq!(timeline.update(3.5), None);
        assert!(timeline.update(0.0).is_some());
        assert_eq!(timeline.segment_index(), Some(0));
    }

    #[test]
    fn test_seek_and_reset() {
        let mut timeline = timeline(&[1.0, 2.0]);
        assert_eq!(
            timeline.seek(1.5),
            TimelineState::Active { index: 1, start: 1.0, end: 3.0 }
        );
        assert_eq!(timeline.seek(3.0), TimelineState::Finished);

        timeline.reset();
        assert_eq!(timeline.segment_index(), Some(0));
        assert!(timeline.update(0.1).is_some());
    }

    #[test]
    fn test_orientation_spans_whole_timeline() {
        let mut timeline = timeline(&[1.0, 3.0]);
        let quarter_turn = Quaternion::from_angle_axis(FRAC_PI_2, Vector3::Z);

        // halfway through the total, not through the first segment
        let pose = timeline.update(2.0).unwrap();
        let expected = Quaternion::IDENTITY.slerp(quarter_turn, 0.5);
        assert_eq!(pose.orientation, expected);

        let end = timeline.sample(4.0);
        assert_eq!(end.orientation, quarter_turn);
    }

    #[test]
    fn test_sample_does_not_move_cursor() {
        let timeline = timeline(&[1.0, 2.0]);
        let pose = timeline.sample(1.0);
        assert_eq!(pose.position, Vector3::new(10.0, 0.0, 0.0));
        assert_eq!(timeline.segment_index(), Some(0));

        assert_eq!(timeline.sample(-1.0).position, Vector3::ZERO);
        assert_eq!(timeline.sample(99.0).position, Vector3::new(10.0, 1.0, 0.0));
    }

    #[test]
    fn test_tick_matches_update() {
        let mut ticked = timeline(&[1.0, 2.0]);
        let mut updated = ticked.clone();

        for tick in FrameClock::new(8.0, 3.0).unwrap() {
            assert_eq!(ticked.tick(&tick), updated.update(tick.elapsed));
            assert_eq!(ticked.state(), updated.state());
        }
        assert!(ticked.is_finished());
    }
}
