//! Metric engine for GeoMaster.
//!
//! Metrics are dispatched by what a shape can compute, not by what it
//! is: [`Planar`] shapes have area and perimeter, [`Solid`] shapes have
//! volume and surface area. A [`ShapeKind`](geomaster_core::ShapeKind)
//! is projected onto the capability a metric requires; if the projection
//! is empty the call fails with
//! [`UnsupportedOperation`](geomaster_core::UnsupportedOperation).
//!
//! Results are raw `f64` values. Nothing here rounds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod capability;
pub mod engine;

#[cfg(test)]
pub(crate) mod compliance;

pub use capability::{as_planar, as_solid, Planar, Solid};
pub use engine::{area, compute_metric, perimeter, supported_metrics, surface_area, volume};
