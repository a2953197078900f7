//! Compare command implementation.
//!
//! Expands the path arguments, runs the reference against every candidate
//! and renders the aggregate result.

use std::io::Write;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::cli::args::Cli;
use crate::cli::expand::expand_path;
use crate::compare::compare_all_with;
use crate::error::Result;
use crate::ui::{
    should_use_colors, HumanFormatter, JsonFormatter, OutputMode, PairProgressBar, PycompTheme,
    ReportFormat, ReportFormatter,
};

use super::dispatcher::{Command, CommandResult};

/// The compare command implementation.
pub struct CompareCommand {
    dists: Vec<PathBuf>,
    only: Vec<String>,
    format: ReportFormat,
    mode: OutputMode,
    colors: bool,
}

impl CompareCommand {
    /// Create a compare command over already-expanded roots.
    pub fn new(dists: Vec<PathBuf>, format: ReportFormat, mode: OutputMode) -> Self {
        Self {
            dists,
            only: Vec::new(),
            format,
            mode,
            colors: false,
        }
    }

    /// Build the command from parsed arguments, expanding each path.
    pub fn from_cli(cli: &Cli) -> Self {
        let dists = cli.dists.iter().map(|d| expand_path(d)).collect();
        let mut cmd = Self::new(dists, cli.format, cli.output_mode()).with_only(cli.only.clone());
        cmd.colors = !cli.no_color && should_use_colors();
        cmd
    }

    /// Restrict the comparison to the named locations.
    pub fn with_only(mut self, only: Vec<String>) -> Self {
        self.only = only;
        self
    }
}

impl Command for CompareCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let catalog = Catalog::standard().only(&self.only)?;
        let theme = PycompTheme::for_colors(self.colors);

        let progress = if self.mode.shows_progress() {
            PairProgressBar::new(self.dists.len().saturating_sub(1), theme.clone())
        } else {
            PairProgressBar::hidden()
        };

        let result = compare_all_with(&catalog, &self.dists, |pair| progress.start_pair(&pair));
        progress.finish();
        let result = result?;

        match self.format {
            ReportFormat::Human => HumanFormatter::new(theme, self.mode).format(&result, out)?,
            ReportFormat::Json => JsonFormatter::new().format(&result, out)?,
        }
        out.flush()?;

        Ok(CommandResult::success())
    }
}
