//! Containment engine for GeoMaster.
//!
//! Decides whether an inner shape fits entirely inside an outer shape
//! using closed-form extremal conditions: radius against radius, the
//! rectangle diagonal against the circle diameter, the circle diameter
//! against both rectangle sides, and rectangle sides compared in the
//! axis-aligned and 90°-rotated orientations.
//!
//! Only circles and rectangles are modelled. Any pair involving another
//! shape fails with
//! [`UnsupportedContainmentPair`](geomaster_core::UnsupportedContainmentPair)
//! rather than answering `false`.
//!
//! Comparisons are exact and inclusive: a shape touching the boundary is
//! contained.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod fit;

pub use engine::{fit, is_contained};
pub use fit::{Fit, Orientation, Rule};
