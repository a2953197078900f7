//! Comparison result types.
//!
//! Results are built once by the comparator and are read-only afterwards.
//! Each [`ComparisonResult`] stores one [`LocationDiff`] per catalog
//! location plus a guess set per side; root-keyed lookups are layered on
//! top for callers that think in terms of `diff[root][location]`.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// One side of a pairwise comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Reference,
    Candidate,
}

/// Names unique to each side for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationDiff {
    /// Catalog location name.
    pub location: &'static str,
    /// Sorted names under the reference root only.
    pub reference_only: Vec<String>,
    /// Sorted names under the candidate root only.
    pub candidate_only: Vec<String>,
}

impl LocationDiff {
    /// Names present only on `side`.
    pub fn only_in(&self, side: Side) -> &[String] {
        match side {
            Side::Reference => &self.reference_only,
            Side::Candidate => &self.candidate_only,
        }
    }

    /// Check if both sides agree on this location.
    pub fn is_empty(&self) -> bool {
        self.reference_only.is_empty() && self.candidate_only.is_empty()
    }
}

/// Outcome of comparing one candidate against the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    reference: PathBuf,
    candidate: PathBuf,
    locations: Vec<LocationDiff>,
    missing_from_reference: BTreeSet<String>,
    missing_from_candidate: BTreeSet<String>,
}

impl ComparisonResult {
    pub(crate) fn new(
        reference: PathBuf,
        candidate: PathBuf,
        locations: Vec<LocationDiff>,
        missing_from_reference: BTreeSet<String>,
        missing_from_candidate: BTreeSet<String>,
    ) -> Self {
        Self {
            reference,
            candidate,
            locations,
            missing_from_reference,
            missing_from_candidate,
        }
    }

    /// The reference root.
    pub fn reference(&self) -> &Path {
        &self.reference
    }

    /// The candidate root.
    pub fn candidate(&self) -> &Path {
        &self.candidate
    }

    /// The root on `side`.
    pub fn root(&self, side: Side) -> &Path {
        match side {
            Side::Reference => &self.reference,
            Side::Candidate => &self.candidate,
        }
    }

    /// Which side `root` is, checking the reference first.
    pub fn side_of(&self, root: &Path) -> Option<Side> {
        if root == self.reference {
            Some(Side::Reference)
        } else if root == self.candidate {
            Some(Side::Candidate)
        } else {
            None
        }
    }

    /// Per-location diffs in catalog order.
    pub fn locations(&self) -> &[LocationDiff] {
        &self.locations
    }

    /// The diff for a single location.
    pub fn location(&self, name: &str) -> Option<&LocationDiff> {
        self.locations.iter().find(|d| d.location == name)
    }

    /// Names under `root`'s `location` that the other root lacks.
    pub fn diff(&self, root: &Path, location: &str) -> Option<&[String]> {
        let side = self.side_of(root)?;
        self.location(location).map(|d| d.only_in(side))
    }

    /// Guessed package names missing from `side`.
    pub fn missing_from(&self, side: Side) -> &BTreeSet<String> {
        match side {
            Side::Reference => &self.missing_from_reference,
            Side::Candidate => &self.missing_from_candidate,
        }
    }

    /// Guessed package names missing from `root`.
    pub fn missing_guess(&self, root: &Path) -> Option<&BTreeSet<String>> {
        self.side_of(root).map(|side| self.missing_from(side))
    }

    /// Check if the two roots agree on every location.
    pub fn is_identical(&self) -> bool {
        self.locations.iter().all(LocationDiff::is_empty)
    }

    /// Total number of names unique to `side` across all locations.
    pub fn unique_count(&self, side: Side) -> usize {
        self.locations.iter().map(|d| d.only_in(side).len()).sum()
    }
}

/// Results of comparing one reference against several candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    reference: PathBuf,
    comparisons: Vec<ComparisonResult>,
    ref_missing: BTreeSet<String>,
}

impl AggregateResult {
    pub(crate) fn new(
        reference: PathBuf,
        comparisons: Vec<ComparisonResult>,
        ref_missing: BTreeSet<String>,
    ) -> Self {
        Self {
            reference,
            comparisons,
            ref_missing,
        }
    }

    /// The reference root.
    pub fn reference(&self) -> &Path {
        &self.reference
    }

    /// Pairwise results in candidate input order.
    pub fn comparisons(&self) -> &[ComparisonResult] {
        &self.comparisons
    }

    /// The result for the `(reference, candidate)` pair.
    pub fn get(&self, reference: &Path, candidate: &Path) -> Option<&ComparisonResult> {
        self.comparisons
            .iter()
            .find(|r| r.reference() == reference && r.candidate() == candidate)
    }

    /// Union of the package names every candidate has but the reference lacks.
    pub fn ref_missing(&self) -> &BTreeSet<String> {
        &self.ref_missing
    }
}
