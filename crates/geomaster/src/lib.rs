//! GeoMaster: shape metrics and containment checks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all GeoMaster sub-crates. For most users, adding `geomaster` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use geomaster::prelude::*;
//!
//! let props: PropertyBag = [("largura", 10.0), ("altura", 4.0)].into_iter().collect();
//! let outer = construct_shape("retangulo", &props).unwrap();
//! let inner = construct_shape("circle", &PropertyBag::new().with("radius", 2.0)).unwrap();
//!
//! assert_eq!(compute_metric(&outer, Metric::Area), Ok(40.0));
//! assert!(compute_metric(&outer, Metric::Volume).is_err());
//! assert_eq!(is_contained(&outer, &inner), Ok(true));
//!
//! // The same queries as JSON documents.
//! let calc = Calculator::default();
//! let response = calc.handle_metric_json(
//!     "perimeter",
//!     r#"{"shapeType": "rectangle", "properties": {"width": 10, "height": 4}}"#,
//! );
//! assert_eq!(response.status, Status::Ok);
//! assert_eq!(response.body["result"], 28.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `geomaster-core` | Shapes, metrics, property bags, errors |
//! | [`build`] | `geomaster-build` | Construction from property bags |
//! | [`metric`] | `geomaster-metric` | Area, perimeter, volume, surface area |
//! | [`contain`] | `geomaster-contain` | Containment rules and verdicts |
//! | [`report`] | `geomaster-report` | JSON requests, rendering, status codes |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Shape model, metric tags, and error taxonomy (`geomaster-core`).
pub use geomaster_core as types;

/// Shape construction from untyped properties (`geomaster-build`).
///
/// [`build::construct_shape`] accepts English and Portuguese tags and keys;
/// use [`build::ShapeBuilder`] to restrict the vocabulary.
pub use geomaster_build as build;

/// Capability-gated metrics (`geomaster-metric`).
pub use geomaster_metric as metric;

/// Containment between circles and rectangles (`geomaster-contain`).
pub use geomaster_contain as contain;

/// Request parsing and response rendering (`geomaster-report`).
///
/// [`report::Calculator`] is the entry point for a transport layer.
pub use geomaster_report as report;

pub use geomaster_build::construct_shape;
pub use geomaster_contain::is_contained;
pub use geomaster_metric::compute_metric;

/// Common imports for typical GeoMaster usage.
///
/// ```rust
/// use geomaster::prelude::*;
/// ```
pub mod prelude {
    // Shapes
    pub use geomaster_core::{
        Capability, Circle, Metric, PropertyBag, PropertyValue, Rectangle, ShapeKind, ShapeType,
        Sphere,
    };

    // Errors
    pub use geomaster_core::{ConstructionError, UnsupportedContainmentPair, UnsupportedOperation};

    // Engines
    pub use geomaster_build::construct_shape;
    pub use geomaster_contain::{fit, is_contained, Fit};
    pub use geomaster_metric::{compute_metric, supported_metrics};

    // Boundary
    pub use geomaster_report::{Calculator, GeoError, ReportConfig, Status};
}
