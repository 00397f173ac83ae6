//! Keyframed orientation blending across a whole animation

use super::Quaternion;
use crate::error::{Result, SplineAnimError};

/// Spherical interpolation through a chain of keyframes
///
/// Keyframes are treated as uniformly spaced over `[0, 1)`. `t < 0` yields the
/// first keyframe and `t >= 1` the last; nothing is extrapolated. Returns
/// `None` only for an empty chain.
pub fn slerp_chain(t: f64, keyframes: &[Quaternion]) -> Option<Quaternion> {
    match keyframes {
        [] => None,
        [only] => Some(*only),
        [first, .., last] => {
            if t < 0.0 {
                return Some(*first);
            }
            if t >= 1.0 {
                return Some(*last);
            }

            let last_segment = keyframes.len() - 2;
            let scaled = t * (keyframes.len() - 1) as f64;
            let index = (scaled.floor() as usize).min(last_segment);
            let local = scaled - index as f64;

            Some(keyframes[index].slerp(keyframes[index + 1], local))
        }
    }
}

/// Ordered orientation keyframes spanning the entire animation
///
/// Independent of spline segmentation: one rotation per control point, blended
/// over the normalized time of the whole sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RotationSequence {
    keyframes: Vec<Quaternion>,
}

impl RotationSequence {
    /// Create a sequence from at least one keyframe
    pub fn new(keyframes: Vec<Quaternion>) -> Result<Self> {
        if keyframes.is_empty() {
            return Err(SplineAnimError::EmptyRotationSequence);
        }
        Ok(Self { keyframes })
    }

    /// Orientation at normalized animation time `t`
    pub fn at(&self, t: f64) -> Quaternion {
        slerp_chain(t, &self.keyframes).unwrap_or(Quaternion::IDENTITY)
    }

    /// The keyframes in order
    pub fn keyframes(&self) -> &[Quaternion] {
        &self.keyframes
    }

    /// Number of keyframes
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Always false; construction rejects empty sequences
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }
}
