//! Per-pair progress display.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::compare::PairProgress;

use super::theme::PycompTheme;

/// Progress bar over the candidate comparisons, drawn on stderr.
///
/// The bar stays invisible when stderr is not a terminal.
pub struct PairProgressBar {
    bar: ProgressBar,
    theme: PycompTheme,
}

impl PairProgressBar {
    /// Create a bar for `total` candidates.
    pub fn new(total: usize, theme: PycompTheme) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        if let Ok(style) = ProgressStyle::default_bar().template("{pos}/{len} {wide_msg}") {
            bar.set_style(style);
        }
        Self { bar, theme }
    }

    /// Create a bar that never draws (for quiet mode).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme: PycompTheme::plain(),
        }
    }

    /// Record that a pair is about to be compared.
    pub fn start_pair(&self, pair: &PairProgress<'_>) {
        tracing::info!(
            reference = %pair.reference.display(),
            candidate = %pair.candidate.display(),
            index = pair.index,
            "Comparing distributions"
        );
        self.bar.set_position(pair.index as u64);
        self.bar.set_message(
            self.theme
                .dim
                .apply_to(format!(
                    "{} vs {}",
                    pair.reference.display(),
                    pair.candidate.display()
                ))
                .to_string(),
        );
    }

    /// Clear the bar once all pairs are done.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
