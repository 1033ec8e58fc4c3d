/// Compass snapshot editor CLI

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use compass_patch::{CompassPatcher, Orientation, PatchOptions};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: modify_compass <input.json> <output.json> <azimuth> <elevation> <bank>";

/// Number of positional arguments the tool takes.
const ARG_COUNT: usize = 5;

/// Overwrite the compass orientation of a JSON snapshot.
///
/// Every argument is positional, so values such as `-.5` or `--help` are
/// taken as operands rather than flags.
#[derive(Parser, Debug)]
#[command(name = "modify_compass")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Snapshot to read
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    input: PathBuf,

    /// Where to write the patched snapshot
    #[arg(value_name = "OUTPUT", allow_hyphen_values = true)]
    output: PathBuf,

    /// Azimuth (heading) in degrees
    #[arg(allow_hyphen_values = true)]
    azimuth: String,

    /// Elevation (pitch) in degrees
    #[arg(allow_hyphen_values = true)]
    elevation: String,

    /// Bank (roll) in degrees
    #[arg(allow_hyphen_values = true)]
    bank: String,
}

fn usage_exit() -> ! {
    println!("{USAGE}");
    process::exit(1);
}

fn main() -> anyhow::Result<()> {
    if env::args_os().skip(1).len() != ARG_COUNT {
        usage_exit();
    }
    let Ok(args) = Args::try_parse() else {
        usage_exit();
    };

    // Diagnostics only; RUST_LOG=info shows the previous orientation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Angles are checked before any file is touched
    let orientation = Orientation::parse(&args.azimuth, &args.elevation, &args.bank)?;

    let options = PatchOptions::new(&args.input, &args.output, orientation);
    let report = CompassPatcher::new(options)
        .patch()
        .with_context(|| format!("failed to patch compass in {}", args.input.display()))?;

    println!("Updated compass: {}", report.applied);
    Ok(())
}
