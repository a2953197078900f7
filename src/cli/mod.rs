//! Command-line interface for pycomp.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`expand`] - Environment and home-directory expansion of path arguments

pub mod args;
pub mod commands;
pub mod expand;

pub use args::Cli;
pub use commands::{Command, CommandDispatcher, CommandResult, CompareCommand, LocationsCommand};
pub use expand::expand_path;
