//! Error types for the GeoMaster toolkit.
//!
//! Organized by the stage that raises them: construction (turning an
//! untyped property bag into a shape), metric dispatch, and containment.
//! Every failure is local to a single call; nothing is mutated before an
//! error is returned, so there is never partial state to roll back.

use std::error::Error;
use std::fmt;

use crate::capability::Metric;
use crate::shape::ShapeType;

/// The five failure kinds a caller must be able to tell apart.
///
/// Boundary layers map each kind to a distinct externally-visible
/// signal, so kinds are never merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The shape type tag is not recognized.
    UnsupportedShapeType,
    /// A required numeric property is absent or not numeric.
    MissingProperty,
    /// A required numeric property is present but not a positive finite number.
    InvalidDimension,
    /// A metric was requested for a shape lacking the required capability.
    UnsupportedOperation,
    /// Containment was requested for a pair the engine does not model.
    UnsupportedContainmentPair,
}

impl ErrorKind {
    /// Stable identifier used in rendered problem reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::UnsupportedShapeType => "unsupported_shape_type",
            Self::MissingProperty => "missing_property",
            Self::InvalidDimension => "invalid_dimension",
            Self::UnsupportedOperation => "unsupported_operation",
            Self::UnsupportedContainmentPair => "unsupported_containment_pair",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from shape construction.
///
/// Returned by the shape constructors (`Circle::new`, ...) and by the
/// property-bag builders in `geomaster-build`.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstructionError {
    /// The type tag does not name a known shape.
    UnsupportedShapeType {
        /// The tag as supplied by the caller.
        tag: String,
    },
    /// A required property is absent or not a number.
    MissingProperty {
        /// Canonical name of the property.
        property: &'static str,
    },
    /// A required property is not positive, is NaN, or exceeds the
    /// shape's bound.
    InvalidDimension {
        /// Canonical name of the property.
        property: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl ConstructionError {
    /// The failure kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedShapeType { .. } => ErrorKind::UnsupportedShapeType,
            Self::MissingProperty { .. } => ErrorKind::MissingProperty,
            Self::InvalidDimension { .. } => ErrorKind::InvalidDimension,
        }
    }
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedShapeType { tag } => {
                write!(f, "shape type '{tag}' is not supported")
            }
            Self::MissingProperty { property } => {
                write!(f, "property '{property}' is required and must be a number")
            }
            Self::InvalidDimension { property, value } if *value > 0.0 => write!(
                f,
                "property '{property}' is too large for a finite result, got {value}"
            ),
            Self::InvalidDimension { property, value } => {
                write!(f, "property '{property}' must be greater than zero, got {value}")
            }
        }
    }
}

impl Error for ConstructionError {}

/// A metric was requested for a shape that lacks the capability for it.
///
/// For example, the volume of a rectangle or the perimeter of a sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedOperation {
    /// The requested metric.
    pub metric: Metric,
    /// The shape it was requested for.
    pub shape: ShapeType,
}

impl UnsupportedOperation {
    /// Always [`ErrorKind::UnsupportedOperation`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::UnsupportedOperation
    }
}

impl fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shape '{}' does not support {} (requires {} capability)",
            self.shape,
            self.metric,
            self.metric.required_capability()
        )
    }
}

impl Error for UnsupportedOperation {}

/// Containment was requested for a pair outside {circle, rectangle}².
///
/// Distinct from a `false` verdict: the engine has no rule for the pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedContainmentPair {
    /// Type of the enclosing shape.
    pub outer: ShapeType,
    /// Type of the enclosed shape.
    pub inner: ShapeType,
}

impl UnsupportedContainmentPair {
    /// Always [`ErrorKind::UnsupportedContainmentPair`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::UnsupportedContainmentPair
    }
}

impl fmt::Display for UnsupportedContainmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "containment of '{}' inside '{}' is not supported",
            self.inner, self.outer
        )
    }
}

impl Error for UnsupportedContainmentPair {}

/// A metric name could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMetricError {
    /// The name as supplied by the caller.
    pub name: String,
}

impl fmt::Display for ParseMetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric '{}'", self.name)
    }
}

impl Error for ParseMetricError {}
