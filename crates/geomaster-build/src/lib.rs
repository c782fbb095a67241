//! Shape construction for GeoMaster.
//!
//! Turns a type tag plus an untyped [`PropertyBag`](geomaster_core::PropertyBag)
//! into a validated [`ShapeKind`](geomaster_core::ShapeKind), or a
//! [`ConstructionError`](geomaster_core::ConstructionError) naming exactly
//! what was wrong: an unknown tag, a missing property, or a bad dimension.
//!
//! The free functions use the default [`Vocabulary::Bilingual`]; use a
//! [`ShapeBuilder`] to restrict input to English tags and keys.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod vocabulary;

pub use builder::{build_circle, build_rectangle, build_sphere, construct_shape, ShapeBuilder};
pub use vocabulary::{Property, Vocabulary};
