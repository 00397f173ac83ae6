//! spline-anim CLI library
//!
//! Command definitions and output helpers for the `spline-anim` binary.

pub mod cli;
pub mod commands;
pub mod utils;
