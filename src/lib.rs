//! pycomp - Compare Python distribution trees.
//!
//! pycomp compares the layout of a reference Python distribution against
//! one or more candidate distributions, reports the files and packages
//! present on only one side, and guesses the package names that are
//! missing from each.
//!
//! # Modules
//!
//! - [`catalog`] - The fixed list of sub-locations and how to resolve them
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compare`] - Pairwise comparison, package guessing and aggregation
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Report rendering, theme and progress display
//!
//! # Example
//!
//! ```
//! use pycomp::compare::guess_package;
//!
//! assert_eq!(guess_package("numpy-1.21.0.tar.gz"), "numpy");
//! assert_eq!(guess_package("requests.py"), "requests");
//! ```
//!
//! For filesystem-backed comparisons, see the integration tests.

pub mod catalog;
pub mod cli;
pub mod compare;
pub mod error;
pub mod ui;

pub use error::{PycompError, Result};
