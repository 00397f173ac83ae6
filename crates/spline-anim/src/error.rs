//! Error handling for spline animation loading and evaluation

use std::io;
use thiserror::Error;

/// Errors that can occur when loading or evaluating an animation
#[derive(Debug, Error)]
pub enum SplineAnimError {
    /// An I/O error occurred while reading a spec file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line of the spec file could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the source text
        line: usize,
        /// Description of what was wrong with the line
        message: String,
    },

    /// Input ended while another record was still expected
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// The record that was expected next
        expected: String,
    },

    /// The spec declared a spline group count other than one
    #[error("Unsupported spline group count: {0} (exactly 1 is supported)")]
    UnsupportedGroupCount(usize),

    /// Animation duration was not a finite positive number
    #[error("Invalid animation time: {0} (must be finite and greater than zero)")]
    InvalidAnimationTime(f64),

    /// A spline was constructed without any control points
    #[error("Spline requires at least one control point")]
    EmptyControlPoints,

    /// A rotation sequence was constructed without any keyframes
    #[error("Rotation sequence requires at least one keyframe")]
    EmptyRotationSequence,

    /// A spline sequence was constructed without any splines
    #[error("Spline sequence requires at least one spline")]
    EmptySequence,

    /// Reciprocal, division or checked normalization of the zero quaternion
    #[error("Division by zero: the zero quaternion has no reciprocal")]
    ZeroQuaternion,

    /// Frame clock parameters out of range
    #[error("Invalid clock: frame rate {frame_rate} must be in (0, 1000) and run time {run_time} must be positive")]
    InvalidClock {
        /// Frames per second requested
        frame_rate: f64,
        /// Run time requested, in seconds
        run_time: f64,
    },
}

impl SplineAnimError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn eof(expected: impl Into<String>) -> Self {
        Self::UnexpectedEof {
            expected: expected.into(),
        }
    }
}

/// Type alias for Results from spline animation operations
pub type Result<T> = std::result::Result<T, SplineAnimError>;
