//! Deterministic fixed-rate frame clock

use crate::error::{Result, SplineAnimError};

/// Highest accepted frame rate, exclusive
pub const MAX_FRAME_RATE: f64 = 1000.0;

/// One frame delivered by a [`FrameClock`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Zero-based frame index
    pub frame: u64,
    /// Animation time of this frame in seconds
    pub elapsed: f64,
    /// Seconds since the previous frame
    pub delta: f64,
}

/// Fixed-rate clock yielding one [`Tick`] per frame
///
/// Frame `n` lands at `n / frame_rate` seconds. The first tick reports a
/// delta of one frame interval, later ticks the distance to the previous
/// one. The tick that reaches `run_time` is still delivered and ends the
/// clock.
///
/// ```
/// use spline_anim::timeline::FrameClock;
///
/// let ticks: Vec<_> = FrameClock::new(4.0, 1.0).unwrap().collect();
/// assert_eq!(ticks.len(), 5);
/// assert_eq!(ticks[4].elapsed, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_rate: f64,
    run_time: f64,
    frame: u64,
    previous: Option<f64>,
    stopped: bool,
}

impl FrameClock {
    /// Create a clock running at `frame_rate` frames per second for
    /// `run_time` seconds
    pub fn new(frame_rate: f64, run_time: f64) -> Result<Self> {
        let rate_ok = frame_rate.is_finite() && frame_rate > 0.0 && frame_rate < MAX_FRAME_RATE;
        let time_ok = run_time.is_finite() && run_time > 0.0;
        if !rate_ok || !time_ok {
            return Err(SplineAnimError::InvalidClock {
                frame_rate,
                run_time,
            });
        }

        Ok(Self {
            frame_rate,
            run_time,
            frame: 0,
            previous: None,
            stopped: false,
        })
    }

    /// Frames per second
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Seconds after which the clock stops
    pub fn run_time(&self) -> f64 {
        self.run_time
    }

    /// Nominal seconds between frames
    pub fn interval(&self) -> f64 {
        1.0 / self.frame_rate
    }
}

impl Iterator for FrameClock {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.stopped {
            return None;
        }

        let elapsed = self.frame as f64 / self.frame_rate;
        let delta = self
            .previous
            .map_or_else(|| self.interval(), |previous| elapsed - previous);

        let tick = Tick {
            frame: self.frame,
            elapsed,
            delta,
        };

        self.previous = Some(elapsed);
        self.frame += 1;
        if elapsed >= self.run_time {
            self.stopped = true;
        }

        Some(tick)
    }
}

impl std::iter::FusedIterator for FrameClock {}
