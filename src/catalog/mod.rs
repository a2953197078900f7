//! The location catalog.
//!
//! A [`Catalog`] is an ordered list of [`Location`] records naming the
//! sub-locations every Python distribution tree is expected to have. The
//! comparator treats the catalog as plain data, so narrowing or extending
//! it never touches the diff logic.
//!
//! # Example
//!
//! ```
//! use pycomp::catalog::{Catalog, LocationKind};
//!
//! let catalog = Catalog::standard();
//! let names: Vec<_> = catalog.iter().map(|l| l.name).collect();
//! assert_eq!(names, ["conda", "bin", "psl_mod", "psl_pkg", "site_mod", "site_pkg"]);
//! assert_eq!(catalog.get("site_pkg").unwrap().kind, LocationKind::DirectoryListing);
//! ```

pub mod glob;
mod resolve;

pub use resolve::resolve;

use crate::error::{PycompError, Result};

/// How a location is turned into a set of names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationKind {
    /// Every glob match of the full segment list, by base name.
    FilePattern,
    /// Immediate subdirectories of the first directory the segments match.
    DirectoryListing,
}

/// A named sub-location within a distribution root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Short identifier used in reports and `--only`.
    pub name: &'static str,
    /// Relative path segments, literal or glob.
    pub segments: &'static [&'static str],
    /// Resolution strategy.
    pub kind: LocationKind,
}

impl Location {
    /// Render the segments as a relative path pattern.
    pub fn pattern(&self) -> String {
        let mut pattern = self.segments.join("/");
        if self.kind == LocationKind::DirectoryListing {
            pattern.push_str("/*/");
        }
        pattern
    }
}

/// The standard locations of a Python distribution.
pub const STANDARD_LOCATIONS: &[Location] = &[
    Location {
        name: "conda",
        segments: &["pkgs", "*"],
        kind: LocationKind::FilePattern,
    },
    Location {
        name: "bin",
        segments: &["bin", "*"],
        kind: LocationKind::FilePattern,
    },
    Location {
        name: "psl_mod",
        segments: &["lib", "python?.?", "*.py"],
        kind: LocationKind::FilePattern,
    },
    Location {
        name: "psl_pkg",
        segments: &["lib", "python?.?"],
        kind: LocationKind::DirectoryListing,
    },
    Location {
        name: "site_mod",
        segments: &["lib", "python?.?", "site-packages", "*.py"],
        kind: LocationKind::FilePattern,
    },
    Location {
        name: "site_pkg",
        segments: &["lib", "python?.?", "site-packages"],
        kind: LocationKind::DirectoryListing,
    },
];

/// An ordered, read-only set of locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The standard Python distribution catalog.
    pub fn standard() -> Self {
        Self::new(STANDARD_LOCATIONS.to_vec())
    }

    /// Build a catalog from explicit locations.
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Iterate locations in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    /// Look up a location by name.
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if the catalog has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Keep only the named locations, preserving catalog order.
    ///
    /// An empty `names` slice keeps everything. Unknown names are rejected.
    pub fn only(&self, names: &[String]) -> Result<Self> {
        if names.is_empty() {
            return Ok(self.clone());
        }

        if let Some(unknown) = names.iter().find(|n| self.get(n).is_none()) {
            let known: Vec<_> = self.iter().map(|l| l.name).collect();
            return Err(PycompError::InvalidArgument {
                message: format!(
                    "unknown location '{}' (expected one of: {})",
                    unknown,
                    known.join(", ")
                ),
            });
        }

        Ok(Self::new(
            self.locations
                .iter()
                .filter(|l| names.iter().any(|n| n == l.name))
                .copied()
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_order() {
        let names: Vec<_> = Catalog::standard().iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            vec!["conda", "bin", "psl_mod", "psl_pkg", "site_mod", "site_pkg"]
        );
    }

    #[test]
    fn location_names_are_unique() {
        let catalog = Catalog::standard();
        for loc in catalog.iter() {
            assert_eq!(catalog.iter().filter(|l| l.name == loc.name).count(), 1);
        }
    }

    #[test]
    fn pattern_rendering() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.get("psl_mod").unwrap().pattern(), "lib/python?.?/*.py");
        assert_eq!(
            catalog.get("site_pkg").unwrap().pattern(),
            "lib/python?.?/site-packages/*/"
        );
    }

    #[test]
    fn only_preserves_catalog_order() {
        let catalog = Catalog::standard()
            .only(&["site_pkg".to_string(), "bin".to_string()])
            .unwrap();
        let names: Vec<_> = catalog.iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["bin", "site_pkg"]);
    }

    #[test]
    fn only_empty_keeps_all() {
        let catalog = Catalog::standard().only(&[]).unwrap();
        assert_eq!(catalog.len(), STANDARD_LOCATIONS.len());
    }

    #[test]
    fn only_rejects_unknown_name() {
        let err = Catalog::standard()
            .only(&["sbin".to_string()])
            .unwrap_err();
        assert!(matches!(err, PycompError::InvalidArgument { .. }));
        assert!(err.to_string().contains("sbin"));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.get("bin").is_none());
    }
}
