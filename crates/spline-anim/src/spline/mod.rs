//! Cubic spline evaluation over an ordered list of control points
//!
//! A [`Spline`] owns its control points and a duration, and evaluates
//! positions over the whole-spline parameter `t` in `[0, 1)`:
//!
//! 1. `t` is mapped onto the real segment index range of its [`SplineKind`]
//! 2. the integer part selects the segment, the fraction is the local `t'`
//! 3. the four governing control points are weighted by `U * M`
//!
//! Evaluation is pure; splines are never mutated after construction and can
//! be shared freely between readers.
//!
//! # Example
//!
//! ```
//! use spline_anim::math::Vector3;
//! use spline_anim::spline::Spline;
//!
//! let spline = Spline::catmull_rom(
//!     4.0,
//!     vec![
//!         Vector3::new(0.0, 0.0, 0.0),
//!         Vector3::new(1.0, 0.0, 0.0),
//!         Vector3::new(1.0, 1.0, 0.0),
//!         Vector3::new(0.0, 1.0, 0.0),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(spline.position_at(0.0), Vector3::new(0.0, 0.0, 0.0));
//! assert_eq!(spline.position_at(1.0), Vector3::new(0.0, 1.0, 0.0));
//! ```

mod kind;
mod sequence;

pub use kind::SplineKind;
pub use sequence::SplineSequence;

use crate::error::{Result, SplineAnimError};
use crate::math::Vector3;

/// A cubic spline of a fixed geometry with an animation duration
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    kind: SplineKind,
    ani_time: f64,
    points: Vec<Vector3>,
}

impl Spline {
    /// Create a spline from its geometry, duration in seconds and control points
    ///
    /// At least one control point is required. With fewer than
    /// [`SplineKind::MIN_POINTS`] points no segment exists and evaluation
    /// degrades to the endpoints.
    pub fn new(kind: SplineKind, ani_time: f64, points: Vec<Vector3>) -> Result<Self> {
        if !ani_time.is_finite() || ani_time <= 0.0 {
            return Err(SplineAnimError::InvalidAnimationTime(ani_time));
        }
        if points.is_empty() {
            return Err(SplineAnimError::EmptyControlPoints);
        }

        Ok(Self {
            kind,
            ani_time,
            points,
        })
    }

    /// Create a Catmull-Rom spline
    pub fn catmull_rom(ani_time: f64, points: Vec<Vector3>) -> Result<Self> {
        Self::new(SplineKind::CatmullRom, ani_time, points)
    }

    /// Create a uniform B-spline
    pub fn uniform_b(ani_time: f64, points: Vec<Vector3>) -> Result<Self> {
        Self::new(SplineKind::UniformB, ani_time, points)
    }

    /// Spline geometry
    pub fn kind(&self) -> SplineKind {
        self.kind
    }

    /// Duration of the spline in seconds
    pub fn ani_time(&self) -> f64 {
        self.ani_time
    }

    /// Control points in order
    pub fn control_points(&self) -> &[Vector3] {
        &self.points
    }

    /// Number of evaluable segments
    pub fn segment_count(&self) -> usize {
        self.kind.segment_count(self.points.len())
    }

    /// First control point
    pub fn first_point(&self) -> Vector3 {
        self.points.first().copied().unwrap_or_default()
    }

    /// Last control point
    pub fn last_point(&self) -> Vector3 {
        self.points.last().copied().unwrap_or_default()
    }

    /// Segment index and local parameter for whole-spline parameter `t`
    ///
    /// Returns `None` when `t` is outside `[0, 1)` or the spline has no
    /// segments.
    pub fn segment_at(&self, t: f64) -> Option<(usize, f64)> {
        let count = self.segment_count();
        if count == 0 || !(0.0..1.0).contains(&t) {
            return None;
        }

        let (start, _) = self.kind.index_offsets();
        let scaled = t * count as f64;
        let offset = (scaled.floor() as usize).min(count - 1);
        let local = scaled - offset as f64;
        let index = usize::try_from(start + offset as isize).ok()?;

        Some((index, local))
    }

    /// Position at whole-spline parameter `t`
    ///
    /// `t < 0` yields the first control point and `t >= 1` the last.
    pub fn position_at(&self, t: f64) -> Vector3 {
        if t >= 1.0 {
            return self.last_point();
        }

        let Some((index, local)) = self.segment_at(t) else {
            return self.first_point();
        };
        let Some([p1, p2, p3, p4]) = self.kind.control_point_window(&self.points, index) else {
            return self.first_point();
        };

        log::trace!(
            "{} segment {} at local t {:.4} (t = {:.4})",
            self.kind,
            index,
            local,
            t
        );

        let w = self.kind.weights(local);
        p1 * w.x + p2 * w.y + p3 * w.z + p4 * w.w
    }

    /// `count` positions evenly spaced over `[0, 1]`
    ///
    /// The last sample is the clamped endpoint.
    pub fn sample(&self, count: usize) -> Vec<Vector3> {
        match count {
            0 => Vec::new(),
            1 => vec![self.first_point()],
            _ => {
                let step = 1.0 / (count - 1) as f64;
                (0..count)
                    .map(|i| self.position_at(i as f64 * step))
                    .collect()
            }
        }
    }
}
