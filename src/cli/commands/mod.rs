//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes the
//! parsed CLI to either the compare command or the catalog listing.

pub mod compare;
pub mod dispatcher;
pub mod locations;

pub use compare::CompareCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use locations::LocationsCommand;
