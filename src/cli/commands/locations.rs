//! Locations command implementation.
//!
//! `pycomp --list-locations` prints the catalog the compare command uses.

use std::io::Write;

use crate::catalog::{Catalog, LocationKind};
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The locations command implementation.
pub struct LocationsCommand {
    only: Vec<String>,
}

impl LocationsCommand {
    /// Create a new locations command, optionally narrowed by name.
    pub fn new(only: Vec<String>) -> Self {
        Self { only }
    }
}

impl Command for LocationsCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let catalog = Catalog::standard().only(&self.only)?;
        let width = catalog.iter().map(|l| l.name.len()).max().unwrap_or(0);

        for location in catalog.iter() {
            let kind = match location.kind {
                LocationKind::FilePattern => "files",
                LocationKind::DirectoryListing => "dirs",
            };
            writeln!(
                out,
                "{:width$}  {:5}  {}",
                location.name,
                kind,
                location.pattern(),
                width = width
            )?;
        }

        Ok(CommandResult::success())
    }
}
