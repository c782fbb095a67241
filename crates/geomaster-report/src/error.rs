//! The combined error type seen at the boundary.

use std::error::Error;
use std::fmt;

use geomaster_core::error::ErrorKind;
use geomaster_core::{
    ConstructionError, ParseMetricError, UnsupportedContainmentPair, UnsupportedOperation,
};

/// Any failure while serving a single request.
#[derive(Clone, Debug, PartialEq)]
pub enum GeoError {
    /// The shape could not be constructed.
    Construction(ConstructionError),
    /// The metric is not defined for the shape.
    Operation(UnsupportedOperation),
    /// The containment pair is not modelled.
    Containment(UnsupportedContainmentPair),
    /// The metric name in the route is unknown.
    UnknownMetric(ParseMetricError),
    /// The request body is not a valid request document.
    MalformedRequest {
        /// Parser message.
        reason: String,
    },
}

impl GeoError {
    /// The engine error kind, or `None` for transport-level failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Construction(e) => Some(e.kind()),
            Self::Operation(e) => Some(e.kind()),
            Self::Containment(e) => Some(e.kind()),
            Self::UnknownMetric(_) | Self::MalformedRequest { .. } => None,
        }
    }
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Construction(e) => write!(f, "{e}"),
            Self::Operation(e) => write!(f, "{e}"),
            Self::Containment(e) => write!(f, "{e}"),
            Self::UnknownMetric(e) => write!(f, "{e}"),
            Self::MalformedRequest { reason } => write!(f, "malformed request: {reason}"),
        }
    }
}

impl Error for GeoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Construction(e) => Some(e),
            Self::Operation(e) => Some(e),
            Self::Containment(e) => Some(e),
            Self::UnknownMetric(e) => Some(e),
            Self::MalformedRequest { .. } => None,
        }
    }
}

impl From<ConstructionError> for GeoError {
    fn from(e: ConstructionError) -> Self {
        Self::Construction(e)
    }
}

impl From<UnsupportedOperation> for GeoError {
    fn from(e: UnsupportedOperation) -> Self {
        Self::Operation(e)
    }
}

impl From<UnsupportedContainmentPair> for GeoError {
    fn from(e: UnsupportedContainmentPair) -> Self {
        Self::Containment(e)
    }
}

impl From<ParseMetricError> for GeoError {
    fn from(e: ParseMetricError) -> Self {
        Self::UnknownMetric(e)
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedRequest {
            reason: e.to_string(),
        }
    }
}
