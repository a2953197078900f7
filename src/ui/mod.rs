//! Terminal presentation of comparison results.
//!
//! This module provides:
//! - [`OutputMode`] and [`ReportFormat`] for verbosity and format selection
//! - [`PycompTheme`] for colored or plain styling
//! - [`HumanFormatter`] and [`JsonFormatter`] for rendering results
//! - [`PairProgressBar`] for per-pair progress on stderr
//!
//! # Example
//!
//! ```
//! use pycomp::ui::{should_use_colors, PycompTheme};
//!
//! let theme = PycompTheme::for_colors(should_use_colors());
//! println!("{}", theme.format_error("nothing to compare"));
//! ```

pub mod output;
pub mod progress;
pub mod report;
pub mod theme;

pub use output::{OutputMode, ReportFormat};
pub use progress::PairProgressBar;
pub use report::{HumanFormatter, JsonFormatter, ReportFormatter};
pub use theme::{should_use_colors, PycompTheme};
