//! Ergoscope quality gate.
//!
//! All automated checks run through this single entry point.
//!
//! # Commands
//!
//! - `cargo xtask check` - Run all quality checks, report failures
//! - `cargo xtask ci` - Full CI suite, exits non-zero on any failure
//!
//! # Checks
//!
//! 1. Formatting - `rustfmt` clean
//! 2. Clippy - zero warnings, all targets and features
//! 3. Tests - default features and the `serde` feature
//! 4. Documentation - zero rustdoc warnings
//! 5. Safety - zero `unwrap`/`expect` outside test code in library crates

mod check;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Ergoscope quality gate
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Quality checks for the Ergoscope workspace", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all quality checks across the workspace
    Check {
        /// Exit non-zero if any check fails
        #[arg(long)]
        ci: bool,
    },

    /// Run the full CI suite
    Ci,

    /// Only scan library sources for unwrap/expect
    Safety,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { ci } => check::run(ci),
        Commands::Ci => check::run(true),
        Commands::Safety => check::safety_only(),
    }
}
