//! Pose sampling at evenly spaced times

use anyhow::{Context, Result};
use clap::Args;

use spline_anim::SplineKind;

use super::{OutputFormat, PoseRecord, SpecArgs, print_pose_table};

#[derive(Args, Debug)]
pub struct SampleArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Spline geometry to evaluate
    #[arg(long, default_value_t = SplineKind::CatmullRom)]
    pub kind: SplineKind,

    /// Number of samples, including both ends
    #[arg(short = 'n', long, default_value_t = 11)]
    pub samples: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// `count` times evenly spaced over `[0, total]`
pub fn sample_times(total: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = total / (count - 1) as f64;
            (0..count).map(|i| i as f64 * step).collect()
        }
    }
}

pub fn execute(args: &SampleArgs) -> Result<()> {
    if args.samples == 0 {
        anyhow::bail!("--samples must be at least 1");
    }

    let spec = args.spec.load()?;
    let timeline = spec
        .timeline(args.kind)
        .context("Failed to build timeline")?;

    log::info!(
        "Sampling {} spline {} times over {:.3}s",
        args.kind,
        args.samples,
        timeline.total_duration()
    );

    let records: Vec<PoseRecord> = sample_times(timeline.total_duration(), args.samples)
        .into_iter()
        .zip(0u64..)
        .map(|(time, index)| PoseRecord::new(index, time, &timeline.sample(time)))
        .collect();

    match args.format {
        OutputFormat::Table => print_pose_table("#", &records),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }

    Ok(())
}
