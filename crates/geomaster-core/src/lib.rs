//! Core types for the GeoMaster geometry toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the GeoMaster workspace:
//! the closed shape model, metric and capability tags, untyped property
//! bags, and the error taxonomy shared by every engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod capability;
pub mod error;
pub mod property;
pub mod shape;

pub use capability::{Capability, Metric};
pub use error::{
    ConstructionError, ErrorKind, ParseMetricError, UnsupportedContainmentPair, UnsupportedOperation,
};
pub use property::{PropertyBag, PropertyValue};
pub use shape::{Circle, Dimension, Dimensions, Rectangle, ShapeKind, ShapeType, Sphere};
