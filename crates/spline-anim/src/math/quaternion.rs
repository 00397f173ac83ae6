//! Quaternion algebra for keyframe orientations

use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::{DMat3, DMat4, DQuat};

use super::Vector3;
use crate::error::{Result, SplineAnimError};

/// Quaternion with scalar part `s` and vector part `v`
///
/// Represents a rotation when normalized. Addition, subtraction and scaling
/// are defined for unnormalized values as well, which is what the
/// interpolation formulas rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// Scalar part
    pub s: f64,
    /// Vector part
    pub v: Vector3,
}

impl Quaternion {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self {
        s: 1.0,
        v: Vector3::ZERO,
    };

    /// The zero quaternion; has no reciprocal
    pub const ZERO: Self = Self {
        s: 0.0,
        v: Vector3::ZERO,
    };

    /// Create a quaternion from its four components
    pub const fn new(s: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            s,
            v: Vector3::new(x, y, z),
        }
    }

    /// Create a quaternion from a scalar and a vector part
    pub const fn from_scalar_vector(s: f64, v: Vector3) -> Self {
        Self { s, v }
    }

    /// Rotation of `theta` radians about `axis`
    ///
    /// The axis is used as given and must already be unit length.
    pub fn from_angle_axis(theta: f64, axis: Vector3) -> Self {
        let half = theta * 0.5;
        Self {
            s: half.cos(),
            v: axis * half.sin(),
        }
    }

    /// Rotation from Euler angles in radians
    ///
    /// Roll turns about X, pitch about Y and yaw about Z; roll is applied
    /// first, so the result equals `yaw * pitch * roll` as axis rotations.
    pub fn from_euler_angles(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sr, cr) = (roll * 0.5).sin_cos();
        let (sp, cp) = (pitch * 0.5).sin_cos();
        let (sy, cy) = (yaw * 0.5).sin_cos();

        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }

    /// Rotation from Euler angles given in degrees
    pub fn from_euler_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::from_euler_angles(roll.to_radians(), pitch.to_radians(), yaw.to_radians())
    }

    /// X component of the vector part
    pub fn x(&self) -> f64 {
        self.v.x
    }

    /// Y component of the vector part
    pub fn y(&self) -> f64 {
        self.v.y
    }

    /// Z component of the vector part
    pub fn z(&self) -> f64 {
        self.v.z
    }

    /// Four-dimensional dot product
    pub fn dot(&self, other: Self) -> f64 {
        self.s * other.s + self.v.dot(other.v)
    }

    /// Negate the vector part
    pub fn conjugate(&self) -> Self {
        Self {
            s: self.s,
            v: -self.v,
        }
    }

    /// Sum of the squared components
    pub fn norm_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Length of the quaternion
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Conjugate divided by the squared norm
    pub fn reciprocal(&self) -> Result<Self> {
        let norm_squared = self.norm_squared();
        if norm_squared == 0.0 {
            return Err(SplineAnimError::ZeroQuaternion);
        }
        Ok(self.conjugate() / norm_squared)
    }

    /// `self * other.reciprocal()`
    pub fn checked_div(&self, other: Self) -> Result<Self> {
        Ok(*self * other.reciprocal()?)
    }

    /// Scale to unit length
    ///
    /// The zero quaternion normalizes to the identity; use
    /// [`Quaternion::try_normalize`] to treat it as an error instead.
    pub fn normalize(&self) -> Self {
        self.try_normalize().unwrap_or(Self::IDENTITY)
    }

    /// Scale to unit length, failing for the zero quaternion
    pub fn try_normalize(&self) -> Result<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(SplineAnimError::ZeroQuaternion);
        }
        Ok(*self / norm)
    }

    /// 3x3 rotation matrix
    ///
    /// Only orthonormal when `self` is normalized.
    pub fn to_rotation_matrix3(&self) -> DMat3 {
        let (s, x, y, z) = (self.s, self.v.x, self.v.y, self.v.z);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let sx = s * x;
        let sy = s * y;
        let sz = s * z;

        // glam matrices are column-major
        DMat3::from_cols(
            Vector3::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy + sz), 2.0 * (xz - sy)),
            Vector3::new(2.0 * (xy - sz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + sx)),
            Vector3::new(2.0 * (xz + sy), 2.0 * (yz - sx), 1.0 - 2.0 * (xx + yy)),
        )
    }

    /// 4x4 homogeneous rotation matrix with zero translation
    pub fn to_rotation_matrix4(&self) -> DMat4 {
        DMat4::from_mat3(self.to_rotation_matrix3())
    }

    /// Rotate a vector by this (normalized) quaternion
    pub fn rotate(&self, vector: Vector3) -> Vector3 {
        self.to_rotation_matrix3() * vector
    }

    /// Spherical linear interpolation towards `other`
    ///
    /// Takes the shorter arc by flipping `other` when the dot product is
    /// negative. `t == 0.5` is answered by the normalized sum. When the
    /// quaternions coincide the angle's sine is zero and `self` is returned.
    #[allow(clippy::float_cmp)]
    pub fn slerp(&self, other: Self, t: f64) -> Self {
        let (other, dot) = {
            let dot = self.dot(other);
            if dot < 0.0 { (-other, -dot) } else { (other, dot) }
        };

        if t == 0.5 {
            return (*self + other).normalize();
        }

        // rounding can push a unit dot product just past 1
        let angle = dot.min(1.0).acos();
        let sin_angle = angle.sin();
        if sin_angle == 0.0 {
            return *self;
        }

        let a = ((1.0 - t) * angle).sin() / sin_angle;
        let b = (t * angle).sin() / sin_angle;
        (*self * a + other * b).normalize()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            s: self.s + other.s,
            v: self.v + other.v,
        }
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            s: self.s - other.s,
            v: self.v - other.v,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            s: -self.s,
            v: -self.v,
        }
    }
}

/// Hamilton product
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            s: self.s * other.s - self.v.dot(other.v),
            v: other.v * self.s + self.v * other.s + self.v.cross(other.v),
        }
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self {
            s: self.s * k,
            v: self.v * k,
        }
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;

    fn div(self, k: f64) -> Self {
        Self {
            s: self.s / k,
            v: self.v / k,
        }
    }
}

impl From<Quaternion> for DQuat {
    fn from(q: Quaternion) -> Self {
        Self::from_xyzw(q.v.x, q.v.y, q.v.z, q.s)
    }
}

impl From<DQuat> for Quaternion {
    fn from(q: DQuat) -> Self {
        Self::new(q.w, q.x, q.y, q.z)
    }
}
