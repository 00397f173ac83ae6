//! Root CLI structure for spline-anim

use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands::info::InfoArgs;
use crate::commands::play::PlayArgs;
use crate::commands::sample::SampleArgs;

#[derive(Parser)]
#[command(name = "spline-anim")]
#[command(about = "Inspect, sample and play keyframed spline animations", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Log level forced by `-v`/`-q`, or `None` to keep the environment filter
    pub const fn log_level(&self) -> Option<LevelFilter> {
        match (self.verbose, self.quiet) {
            (0, false) => None,
            (0, true) => Some(LevelFilter::Error),
            (1, _) => Some(LevelFilter::Info),
            (2, _) => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display information about a spec file
    Info(InfoArgs),

    /// Sample poses at evenly spaced times
    Sample(SampleArgs),

    /// Play the animation on a fixed-rate clock and print every frame
    Play(PlayArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use test_case::test_case;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test_case(&[], None ; "default")]
    #[test_case(&["-q"], Some(LevelFilter::Error) ; "quiet")]
    #[test_case(&["-v"], Some(LevelFilter::Info) ; "verbose")]
    #[test_case(&["-vv"], Some(LevelFilter::Debug) ; "very verbose")]
    #[test_case(&["-vvvv"], Some(LevelFilter::Trace) ; "trace")]
    #[test_case(&["-q", "-v"], Some(LevelFilter::Info) ; "verbose wins over quiet")]
    fn test_log_level(flags: &[&str], expected: Option<LevelFilter>) {
        let args = ["spline-anim"]
            .into_iter()
            .chain(flags.iter().copied())
            .chain(["completions", "bash"]);
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log_level(), expected);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["spline-anim", "completions", "zsh", "-v"]).unwrap();
        assert_eq!(cli.log_level(), Some(LevelFilter::Info));
        assert!(matches!(cli.command, Commands::Completions { .. }));
    }
}
