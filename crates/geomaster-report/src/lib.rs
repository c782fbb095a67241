//! Boundary layer for GeoMaster.
//!
//! Everything the engines leave to their transport collaborator lives
//! here: parsing JSON request documents into property bags, rounding
//! results for display, rendering results and problems as JSON, and
//! mapping each error kind onto a status code. No I/O is performed; an
//! HTTP layer calls [`Calculator`] with a body and writes back the
//! [`Response`].
//!
//! Structured `tracing` events are emitted for handled and rejected
//! requests. No subscriber is installed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod request;
pub mod result;
pub mod status;

pub use calculator::{Calculator, Response};
pub use config::{ConfigError, ReportConfig};
pub use error::GeoError;
pub use request::{ContainmentRequest, ShapeRequest};
pub use result::{round_to, CalculationResult, ContainmentVerdict};
pub use status::{Problem, Status};
