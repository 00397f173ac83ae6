//! Keyframe spec loading
//!
//! A spec file lists control points, each a position and an Euler rotation,
//! together with the time the animation takes to traverse them. Loading a
//! spec builds every [`SplineKind`] from the same positions so callers can
//! pick or compare geometries without reparsing.
//!
//! # Example
//!
//! ```
//! use spline_anim::loader::SplineSpec;
//! use spline_anim::spline::SplineKind;
//!
//! let spec = SplineSpec::parse(
//!     "1\n4\n4.0\n\
//!      0, 0, 0\n0, 0, 0\n\
//!      1, 0, 0\n0, 0, 0\n\
//!      1, 1, 0\n0, 0, 0\n\
//!      0, 1, 0\n0, 0, 0\n",
//! )
//! .unwrap();
//!
//! let spline = spec.spline(SplineKind::CatmullRom).unwrap();
//! assert_eq!(spline.segment_count(), 3);
//! ```

mod parser;

pub use parser::SplineSpecParser;

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::math::{Quaternion, RotationSequence, Vector3};
use crate::spline::{Spline, SplineKind, SplineSequence};
use crate::timeline::Timeline;

/// Unit of the Euler angles in rotation records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    /// Angles in radians
    #[default]
    Radians,
    /// Angles in degrees
    Degrees,
}

impl AngleUnit {
    /// Rotation quaternion for Euler angles given in this unit
    pub fn rotation(self, roll: f64, pitch: f64, yaw: f64) -> Quaternion {
        match self {
            Self::Radians => Quaternion::from_euler_angles(roll, pitch, yaw),
            Self::Degrees => Quaternion::from_euler_degrees(roll, pitch, yaw),
        }
    }
}

/// One keyframe record: a position and the orientation held there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position of the keyframe
    pub position: Vector3,
    /// Orientation at the keyframe
    pub rotation: Quaternion,
}

/// A loaded spec: keyframes, duration and one spline per geometry
#[derive(Debug, Clone, PartialEq)]
pub struct SplineSpec {
    control_points: Vec<ControlPoint>,
    animation_time: f64,
    splines: Vec<Spline>,
}

impl SplineSpec {
    /// Build a spec from keyframes and the total animation time
    ///
    /// Fails when there are no keyframes or the time is not a finite
    /// positive number.
    pub fn new(control_points: Vec<ControlPoint>, animation_time: f64) -> Result<Self> {
        let positions: Vec<Vector3> = control_points.iter().map(|p| p.position).collect();
        let splines = SplineKind::ALL
            .into_iter()
            .map(|kind| Spline::new(kind, animation_time, positions.clone()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            control_points,
            animation_time,
            splines,
        })
    }

    /// Parse a spec held in memory, reading rotations as radians
    pub fn parse(text: &str) -> Result<Self> {
        SplineSpecParser::new().parse_str(text)
    }

    /// Load a spec file from disk, reading rotations as radians
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with(path, SplineSpecParser::new())
    }

    /// Load a spec file from disk with the given parser settings
    pub fn load_with<P: AsRef<Path>>(path: P, parser: SplineSpecParser) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading spline spec from {}", path.display());
        let text = fs::read_to_string(path)?;
        parser.parse_str(&text)
    }

    /// Keyframes in file order
    pub fn control_points(&self) -> &[ControlPoint] {
        &self.control_points
    }

    /// Total animation time in seconds
    pub fn animation_time(&self) -> f64 {
        self.animation_time
    }

    /// Keyframe positions in file order
    pub fn positions(&self) -> Vec<Vector3> {
        self.control_points.iter().map(|p| p.position).collect()
    }

    /// Keyframe orientations in file order
    pub fn rotations(&self) -> Vec<Quaternion> {
        self.control_points.iter().map(|p| p.rotation).collect()
    }

    /// Orientation keyframes spread uniformly over the animation
    pub fn rotation_sequence(&self) -> Result<RotationSequence> {
        RotationSequence::new(self.rotations())
    }

    /// One spline per [`SplineKind`], in [`SplineKind::ALL`] order
    pub fn splines(&self) -> &[Spline] {
        &self.splines
    }

    /// The spline built with geometry `kind`
    pub fn spline(&self, kind: SplineKind) -> Option<&Spline> {
        self.splines.iter().find(|spline| spline.kind() == kind)
    }

    /// Timeline playing the `kind` spline with the spec's rotations
    pub fn timeline(&self, kind: SplineKind) -> Result<Timeline> {
        let spline = match self.spline(kind) {
            Some(spline) => spline.clone(),
            None => Spline::new(kind, self.animation_time, self.positions())?,
        };
        Ok(Timeline::new(
            SplineSequence::single(spline),
            self.rotation_sequence()?,
        ))
    }
}
