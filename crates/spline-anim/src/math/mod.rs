//! Vector and quaternion algebra
//!
//! Positions use [`glam::DVec3`] directly under the name [`Vector3`]; the
//! quaternion type is local because its interpolation rules (exact midpoint
//! shortcut, degenerate-angle fallback, checked reciprocal) differ from
//! [`glam::DQuat`]. Conversions to and from glam types are provided for
//! renderers.

mod quaternion;
mod rotation;

pub use quaternion::Quaternion;
pub use rotation::{RotationSequence, slerp_chain};

/// Three-component position vector
pub type Vector3 = glam::DVec3;
