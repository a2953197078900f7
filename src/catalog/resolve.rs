//! Location resolution against a distribution root.

use std::collections::BTreeSet;
use std::path::Path;

use super::glob::{expand, list_names};
use super::{Location, LocationKind};
use crate::error::Result;

/// Resolve `location` under `root` into its set of base names.
pub fn resolve(root: &Path, location: &Location) -> Result<BTreeSet<String>> {
    let names: BTreeSet<String> = match location.kind {
        LocationKind::FilePattern => expand(root, location.segments)?
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect(),
        LocationKind::DirectoryListing => {
            let matches = expand(root, location.segments)?;
            match matches.first() {
                None => BTreeSet::new(),
                Some(dir) => {
                    if matches.len() > 1 {
                        tracing::debug!(
                            location = location.name,
                            matches = matches.len(),
                            chosen = %dir.display(),
                            "Ambiguous directory listing, using first match"
                        );
                    }
                    list_names(dir)?
                        .into_iter()
                        .filter(|name| dir.join(name).is_dir())
                        .collect()
                }
            }
        }
    };

    tracing::debug!(
        location = location.name,
        root = %root.display(),
        count = names.len(),
        "Resolved location"
    );

    Ok(names)
}
