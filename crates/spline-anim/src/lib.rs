#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod loader;
pub mod math;
pub mod spline;
pub mod timeline;

// Re-export common types
pub use error::{Result, SplineAnimError};
pub use loader::{AngleUnit, ControlPoint, SplineSpec, SplineSpecParser};
pub use math::{Quaternion, RotationSequence, Vector3};
pub use spline::{Spline, SplineKind, SplineSequence};
pub use timeline::{FrameClock, PlaybackSummary, Pose, PoseSink, Tick, Timeline, TimelineState, play};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
