//! Render sinks and the playback driver

use super::{FrameClock, Pose, Tick, Timeline};

/// Consumer of the poses a timeline produces, one per frame
pub trait PoseSink {
    /// Present the pose computed for `tick`
    fn present(&mut self, tick: &Tick, pose: &Pose);

    /// Called once after the last frame
    fn finish(&mut self) {}
}

/// Records every presented frame
impl PoseSink for Vec<(Tick, Pose)> {
    fn present(&mut self, tick: &Tick, pose: &Pose) {
        self.push((*tick, *pose));
    }
}

impl<S: PoseSink + ?Sized> PoseSink for &mut S {
    fn present(&mut self, tick: &Tick, pose: &Pose) {
        (**self).present(tick, pose);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

/// Outcome of [`play`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackSummary {
    /// Frames handed to the sink
    pub frames_presented: u64,
    /// Whether the timeline reached its end
    pub finished: bool,
}

/// Drive `timeline` with every tick of `clock`, presenting each pose
///
/// Stops as soon as the timeline finishes or the clock runs out, whichever
/// comes first. The sink's [`PoseSink::finish`] is always called.
pub fn play<S>(timeline: &mut Timeline, clock: FrameClock, sink: &mut S) -> PlaybackSummary
where
    S: PoseSink + ?Sized,
{
    let mut summary = PlaybackSummary::default();

    for tick in clock {
        let Some(pose) = timeline.tick(&tick) else {
            break;
        };
        sink.present(&tick, &pose);
        summary.frames_presented += 1;
    }

    summary.finished = timeline.is_finished();
    sink.finish();

    log::debug!(
        "Playback presented {} frames (finished: {})",
        summary.frames_presented,
        summary.finished
    );

    summary
}
