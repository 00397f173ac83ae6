//! Fixed-rate playback through a console sink

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde_json::json;

use spline_anim::{FrameClock, Pose, PoseSink, SplineKind, Tick, play};

use super::{OutputFormat, PoseRecord, SpecArgs};
use crate::utils::{format_quaternion, format_seconds, format_vector};

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub spec: SpecArgs,

    /// Spline geometry to play
    #[arg(long, default_value_t = SplineKind::CatmullRom)]
    pub kind: SplineKind,

    /// Frames per second
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    /// Seconds to run the clock for (defaults to the animation time)
    #[arg(long)]
    pub duration: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Prints one line per presented frame
struct ConsoleSink {
    header_printed: bool,
}

impl ConsoleSink {
    fn new() -> Self {
        Self {
            header_printed: false,
        }
    }
}

impl PoseSink for ConsoleSink {
    fn present(&mut self, tick: &Tick, pose: &Pose) {
        if !self.header_printed {
            println!(
                "{:>6}  {:>9}  {:>9}  {:<30}  {}",
                style("Frame").bold(),
                style("Time").bold(),
                style("Delta").bold(),
                style("Position").bold(),
                style("Orientation").bold()
            );
            self.header_printed = true;
        }

        println!(
            "{:>6}  {:>9}  {:>9}  {:<30}  {}",
            tick.frame,
            format_seconds(tick.elapsed),
            format_seconds(tick.delta),
            format_vector(pose.position),
            format_quaternion(pose.orientation)
        );
    }

    fn finish(&mut self) {
        if !self.header_printed {
            println!("No frames presented");
        }
    }
}

pub fn execute(args: &PlayArgs) -> Result<()> {
    let spec = args.spec.load()?;
    let mut timeline = spec
        .timeline(args.kind)
        .context("Failed to build timeline")?;

    let run_time = args.duration.unwrap_or_else(|| timeline.total_duration());
    let clock = FrameClock::new(args.fps, run_time).context("Invalid clock settings")?;

    log::info!(
        "Playing {} spline at {} fps for {:.3}s",
        args.kind,
        args.fps,
        run_time
    );

    match args.format {
        OutputFormat::Table => {
            let mut sink = ConsoleSink::new();
            let summary = play(&mut timeline, clock, &mut sink);

            println!();
            let outcome = if summary.finished {
                style("animation finished").green()
            } else {
                style("clock stopped first").yellow()
            };
            println!("Presented {} frames, {}", summary.frames_presented, outcome);
        }
        OutputFormat::Json => {
            let mut frames: Vec<(Tick, Pose)> = Vec::new();
            let summary = play(&mut timeline, clock, &mut frames);

            let records: Vec<PoseRecord> = frames
                .iter()
                .map(|(tick, pose)| PoseRecord::new(tick.frame, tick.elapsed, pose))
                .collect();
            let document = json!({
                "kind": args.kind,
                "frame_rate": args.fps,
                "frames_presented": summary.frames_presented,
                "finished": summary.finished,
                "frames": records,
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
    }

    Ok(())
}
