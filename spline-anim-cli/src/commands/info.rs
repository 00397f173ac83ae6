//! Spec file summary

use anyhow::Result;
use clap::Args;
use console::style;

use spline_anim::SplineKind;

use super::SpecArgs;
use crate::utils::{build_table, format_quaternion, format_seconds, format_vector};

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub spec: SpecArgs,
}

pub fn execute(args: &InfoArgs) -> Result<()> {
    let spec = args.spec.load()?;
    let point_count = spec.control_points().len();

    println!("Spline spec: {}", style(args.spec.file.display()).cyan());
    println!("  Control points: {point_count}");
    println!("  Animation time: {}", format_seconds(spec.animation_time()));
    println!("  Rotation unit:  {:?}", args.spec.angle_unit());
    println!();

    println!("Segments:");
    for spline in spec.splines() {
        println!(
            "  {:<12} {}",
            spline.kind().name(),
            style(spline.segment_count()).yellow()
        );
    }
    if point_count < SplineKind::MIN_POINTS {
        println!(
            "  {}",
            style(format!(
                "fewer than {} control points: splines only reach their endpoints",
                SplineKind::MIN_POINTS
            ))
            .yellow()
        );
    }
    println!();

    println!("Keyframes:");
    let rows = spec.control_points().iter().enumerate().map(|(index, point)| {
        [
            index.to_string(),
            format_vector(point.position),
            format_quaternion(point.rotation),
        ]
    });
    build_table(["#", "Position", "Rotation"], rows).printstd();

    Ok(())
}
