//! Visual theme and styling.

use console::Style;

/// Report styling.
#[derive(Debug, Clone)]
pub struct PycompTheme {
    /// Style for `ref vs cand` banners (bold).
    pub banner: Style,
    /// Style for separator rules (dim).
    pub rule: Style,
    /// Style for location headers (magenta bold).
    pub location: Style,
    /// Style for names only in the reference (green).
    pub reference: Style,
    /// Style for names only in the candidate (yellow).
    pub candidate: Style,
    /// Style for guessed package names (bold).
    pub guess: Style,
    /// Style for progress notices (dim).
    pub dim: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for PycompTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl PycompTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            banner: Style::new().bold(),
            rule: Style::new().dim(),
            location: Style::new().magenta().bold(),
            reference: Style::new().green(),
            candidate: Style::new().yellow(),
            guess: Style::new().bold(),
            dim: Style::new().dim(),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            banner: Style::new(),
            rule: Style::new(),
            location: Style::new(),
            reference: Style::new(),
            candidate: Style::new(),
            guess: Style::new(),
            dim: Style::new(),
            error: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
