//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

use crate::ui::{OutputMode, ReportFormat};

/// Compare one or more Python distributions to a reference distribution.
#[derive(Debug, Parser)]
#[command(name = "pycomp")]
#[command(author, version, long_about = None)]
#[command(after_help = "e.g.: pycomp /opt/python ~/python /usr/lib")]
pub struct Cli {
    /// Reference distribution followed by the distributions to compare
    #[arg(
        value_name = "DIST",
        num_args = 2..,
        required_unless_present = "list_locations"
    )]
    pub dists: Vec<String>,

    /// Compare only these locations (comma-separated)
    #[arg(long, value_delimiter = ',', env = "PYCOMP_ONLY")]
    pub only: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human, env = "PYCOMP_FORMAT")]
    pub format: ReportFormat,

    /// List every location, including those without differences
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print the location catalog and exit
    #[arg(long)]
    pub list_locations: bool,
}

impl Cli {
    /// Output mode selected by `--quiet` / `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}
