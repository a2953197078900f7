//! Comparing one reference against many candidates.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::comparator::compare_with;
use super::result::{AggregateResult, Side};
use crate::catalog::Catalog;
use crate::error::{PycompError, Result};

/// Progress notification for one pair, sent before it is compared.
#[derive(Debug, Clone, Copy)]
pub struct PairProgress<'a> {
    pub reference: &'a Path,
    pub candidate: &'a Path,
    /// Zero-based index of this candidate.
    pub index: usize,
    /// Number of candidates.
    pub total: usize,
}

/// Compare the first root against every other root over the standard catalog.
pub fn compare_all<P: AsRef<Path>>(roots: &[P]) -> Result<AggregateResult> {
    compare_all_with(&Catalog::standard(), roots, |_| {})
}

/// Compare the first root against every other root.
///
/// `on_pair` is invoked before each comparison. The first failing pair
/// aborts the run.
pub fn compare_all_with<P, F>(
    catalog: &Catalog,
    roots: &[P],
    mut on_pair: F,
) -> Result<AggregateResult>
where
    P: AsRef<Path>,
    F: FnMut(PairProgress<'_>),
{
    let (reference, candidates) = match roots {
        [reference, candidates @ ..] if !candidates.is_empty() => (reference.as_ref(), candidates),
        _ => {
            return Err(PycompError::InvalidArgument {
                message: "Two or more directory paths required to compare".to_string(),
            })
        }
    };

    let mut comparisons = Vec::with_capacity(candidates.len());
    let mut ref_missing = BTreeSet::new();

    for (index, candidate) in candidates.iter().enumerate() {
        let candidate = candidate.as_ref();
        on_pair(PairProgress {
            reference,
            candidate,
            index,
            total: candidates.len(),
        });

        let result = compare_with(catalog, reference, candidate)?;
        ref_missing.extend(result.missing_from(Side::Reference).iter().cloned());
        comparisons.push(result);
    }

    Ok(AggregateResult::new(
        PathBuf::from(reference),
        comparisons,
        ref_missing,
    ))
}
