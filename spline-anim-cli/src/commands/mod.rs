//! Command implementations

pub mod info;
pub mod play;
pub mod sample;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

use spline_anim::{AngleUnit, Pose, Quaternion, SplineSpec, SplineSpecParser, Vector3};

use crate::utils::{build_table, format_quaternion, format_seconds, format_vector};

/// Spec file selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct SpecArgs {
    /// Path to the spec file
    pub file: PathBuf,

    /// Read rotations in degrees instead of radians
    #[arg(long)]
    pub degrees: bool,
}

impl SpecArgs {
    /// Unit selected for rotation records
    pub fn angle_unit(&self) -> AngleUnit {
        if self.degrees {
            AngleUnit::Degrees
        } else {
            AngleUnit::Radians
        }
    }

    /// Load and parse the spec file
    pub fn load(&self) -> Result<SplineSpec> {
        let parser = SplineSpecParser::with_angle_unit(self.angle_unit());
        SplineSpec::load_with(&self.file, parser)
            .with_context(|| format!("Failed to load spec file: {}", self.file.display()))
    }
}

/// Output format for pose listings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable table
    #[default]
    Table,
    /// JSON document
    Json,
}

/// One pose in command output
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PoseRecord {
    /// Sample or frame index
    pub index: u64,
    /// Animation time in seconds
    pub time: f64,
    /// Position on the path
    pub position: Vector3,
    /// Blended orientation
    pub orientation: Quaternion,
}

impl PoseRecord {
    pub fn new(index: u64, time: f64, pose: &Pose) -> Self {
        Self {
            index,
            time,
            position: pose.position,
            orientation: pose.orientation,
        }
    }
}

/// Print pose records as a table
pub fn print_pose_table(index_header: &str, records: &[PoseRecord]) {
    let rows = records.iter().map(|record| {
        [
            record.index.to_string(),
            format_seconds(record.time),
            format_vector(record.position),
            format_quaternion(record.orientation),
        ]
    });
    build_table([index_header, "Time", "Position", "Orientation"], rows).printstd();
}
