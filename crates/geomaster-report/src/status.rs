//! Status codes and problem reports.
//!
//! [`Status`] is a `repr(u16)` enum of the HTTP-style codes a response
//! can carry. Client input errors (bad tag, missing or invalid
//! dimension, malformed body, unknown metric) map to 400; requests that
//! are well-formed but ask for something the shapes cannot do map to 422.

use serde::Serialize;

use geomaster_core::error::ErrorKind;

use crate::error::GeoError;

/// Status code attached to every response. Values are stable.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Success.
    Ok = 200,
    /// The input could not be turned into shapes.
    BadRequest = 400,
    /// The shapes are valid but the operation is not defined for them.
    UnprocessableEntity = 422,
}

impl Status {
    /// Numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Problem title for this status.
    pub fn title(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Invalid input data",
            Self::UnprocessableEntity => "Operation not supported",
        }
    }

    /// Whether this is a success status.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<ErrorKind> for Status {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::UnsupportedShapeType
            | ErrorKind::MissingProperty
            | ErrorKind::InvalidDimension => Status::BadRequest,
            ErrorKind::UnsupportedOperation | ErrorKind::UnsupportedContainmentPair => {
                Status::UnprocessableEntity
            }
        }
    }
}

impl From<&GeoError> for Status {
    fn from(e: &GeoError) -> Self {
        match e.kind() {
            Some(kind) => Status::from(kind),
            None => Status::BadRequest,
        }
    }
}

/// Problem report rendered for failed requests.
///
/// Field layout follows RFC 7807 (`title`, `detail`, `status`), plus the
/// machine-readable `kind` of the underlying error when there is one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Problem {
    /// Short, status-level summary.
    pub title: &'static str,
    /// What exactly went wrong.
    pub detail: String,
    /// Numeric status code.
    pub status: u16,
    /// Error kind identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl Problem {
    /// Build the problem report for `error`, appending `hint` to the detail.
    pub fn new(error: &GeoError, hint: Option<String>) -> Self {
        let status = Status::from(error);
        let detail = match hint {
            Some(hint) => format!("{error}. {hint}"),
            None => error.to_string(),
        };
        Self {
            title: status.title(),
            detail,
            status: status.code(),
            kind: error.kind().map(ErrorKind::name),
        }
    }
}

impl From<&GeoError> for Problem {
    fn from(e: &GeoError) -> Self {
        Problem::new(e, None)
    }
}
