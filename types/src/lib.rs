//! Spherical Haversine types and primitives: great-circle distance,
//! bearing and destination point over decimal-degrees coordinates,
//! with conversions between the DD and DMS notations.
//!
//! ```
//! use haversine_types::{DdPoint, Haversine, UnitOfDistance};
//!
//! let haversine = Haversine::new(UnitOfDistance::Kilometre);
//! let a = DdPoint::new(55.7488, -12.5191).unwrap();
//! let b = DdPoint::new(-12.5191, 55.7488).unwrap();
//!
//! let distance = haversine.get_distance(a, b);
//! assert_eq!((distance * 1e4).round() / 1e4, 9863.9633);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
// use `Box` without fear
#![warn(box_pointers)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(indirect_structural_match)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(pointer_structural_match)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{to_degrees, to_radians};
pub use bearing::SphereBearing;
pub use coord::{DdPoint, DmsCoordinate, DmsPoint};
pub use errors::{OutOfRange, ParseDmsError};
pub use haversine::{Haversine, SortDirection, UnitOfDistance};

mod angle;
mod bearing;
mod coord;
mod errors;
mod haversine;
mod utils;
