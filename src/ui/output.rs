//! Output verbosity and report format.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// List every location, including those without differences.
    Verbose,
    /// Progress notices plus differing locations.
    #[default]
    Normal,
    /// Report only, no progress notices.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-pair progress.
    pub fn shows_progress(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode lists locations that have no differences.
    pub fn shows_unchanged(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Report rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}
