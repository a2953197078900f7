//! The comparison engine.
//!
//! - [`guess_package`] derives a package name from a file name
//! - [`compare`] / [`compare_with`] diff one candidate against the reference
//! - [`compare_all`] / [`compare_all_with`] run the reference against many candidates
//!
//! # Example
//!
//! ```no_run
//! use pycomp::compare::compare_all;
//!
//! let result = compare_all(&["/opt/python", "/usr/local"]).unwrap();
//! for name in result.ref_missing() {
//!     println!("{}", name);
//! }
//! ```

pub mod aggregate;
pub mod comparator;
pub mod guess;
pub mod result;

pub use aggregate::{compare_all, compare_all_with, PairProgress};
pub use comparator::{compare, compare_with, ensure_root};
pub use guess::{guess_package, RUNTIME_NAME};
pub use result::{AggregateResult, ComparisonResult, LocationDiff, Side};
