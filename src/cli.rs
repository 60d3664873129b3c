//! Command-line argument parsing
//!
//! Supports:
//! - Initial window size
//! - Alternate config file
//! - Headless replay of a scripted event sequence

use clap::Parser;
use std::path::PathBuf;

/// Adaptive page layout demo
#[derive(Parser, Debug)]
#[command(name = "strata", version, about = "Adaptive page layout coordinator")]
pub struct CliArgs {
    /// Initial window width in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, value_name = "PX", default_value_t = 800)]
    pub height: u32,

    /// Read layout config from this file instead of the default location
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Replay a YAML event script headlessly and print one JSON snapshot per step
    #[arg(long, value_name = "SCRIPT")]
    pub replay: Option<PathBuf>,
}
