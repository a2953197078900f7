//! Pairwise distribution comparison.

use std::collections::BTreeSet;
use std::path::Path;

use super::guess::{guess_package, RUNTIME_NAME};
use super::result::{ComparisonResult, LocationDiff, Side};
use crate::catalog::{resolve, Catalog};
use crate::error::{PycompError, Result};

/// Fail with `RootNotFound` unless `root` is a directory.
pub fn ensure_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(PycompError::RootNotFound {
            path: root.to_path_buf(),
        })
    }
}

/// Compare `reference` against `candidate` over the standard catalog.
pub fn compare(reference: &Path, candidate: &Path) -> Result<ComparisonResult> {
    compare_with(&Catalog::standard(), reference, candidate)
}

/// Compare `reference` against `candidate` over `catalog`.
///
/// Both roots are checked before any location is resolved.
pub fn compare_with(
    catalog: &Catalog,
    reference: &Path,
    candidate: &Path,
) -> Result<ComparisonResult> {
    ensure_root(reference)?;
    ensure_root(candidate)?;

    let mut locations = Vec::with_capacity(catalog.len());
    let mut missing_from_reference = BTreeSet::new();
    let mut missing_from_candidate = BTreeSet::new();

    for location in catalog.iter() {
        let ref_names = resolve(reference, location)?;
        let cand_names = resolve(candidate, location)?;

        let reference_only: Vec<String> = ref_names.difference(&cand_names).cloned().collect();
        let candidate_only: Vec<String> = cand_names.difference(&ref_names).cloned().collect();

        missing_from_candidate.extend(guesses(&reference_only));
        missing_from_reference.extend(guesses(&candidate_only));

        locations.push(LocationDiff {
            location: location.name,
            reference_only,
            candidate_only,
        });
    }

    missing_from_reference.remove(RUNTIME_NAME);
    missing_from_candidate.remove(RUNTIME_NAME);

    let result = ComparisonResult::new(
        reference.to_path_buf(),
        candidate.to_path_buf(),
        locations,
        missing_from_reference,
        missing_from_candidate,
    );

    tracing::info!(
        reference = %reference.display(),
        candidate = %candidate.display(),
        reference_only = result.unique_count(Side::Reference),
        candidate_only = result.unique_count(Side::Candidate),
        "Compared distributions"
    );

    Ok(result)
}

fn guesses(names: &[String]) -> impl Iterator<Item = String> + '_ {
    names.iter().map(|n| guess_package(n).to_string())
}
