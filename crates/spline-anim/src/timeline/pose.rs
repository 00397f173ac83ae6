//! Per-frame output of a timeline

use glam::DMat4;

use crate::math::{Quaternion, Vector3};

/// Position and orientation of the animated body at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    /// Position on the path
    pub position: Vector3,
    /// Blended orientation
    pub orientation: Quaternion,
}

impl Pose {
    /// Create a pose
    pub const fn new(position: Vector3, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Rigid transform: rotation from the orientation, translation from the
    /// position
    pub fn to_matrix(&self) -> DMat4 {
        let mut matrix = self.orientation.to_rotation_matrix4();
        matrix.w_axis = self.position.extend(1.0);
        matrix
    }

    /// Map a point from body space into world space
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        self.orientation.rotate(point) + self.position
    }
}
