//! Interpretation of vendor status codes embedded in response bodies.
//!
//! FortiOS echoes its own application-level status code inside the JSON
//! response body (the `http_status` field), which may carry a different
//! meaning than the transport-level HTTP status. This module turns a raw
//! response body into a structured outcome, independent of the HTTP verb
//! that produced it.

use crate::error::{Error, Result};
use serde::Deserialize;

/// Categorized appliance rejection, decoded from the vendor status code.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorErrorKind {
    /// 400 - request format was not valid
    #[error("400 invalid request format")]
    InvalidRequestFormat,

    /// 403 - the API key lacks permission for the resource
    #[error("403 permission denied")]
    PermissionDenied,

    /// 404 - the resource does not exist
    #[error("404 non-existent resource")]
    ResourceNotFound,

    /// 405 - the method is not supported for the resource
    #[error("405 unsupported method")]
    UnsupportedMethod,

    /// 424 - another object depends on the one being changed
    #[error("424 dependency error")]
    DependencyError,

    /// 500 - the appliance failed internally
    #[error("500 internal server error")]
    InternalServerError,

    /// Any vendor status code outside the documented set
    #[error("{0} unknown error")]
    Unknown(i64),
}

impl VendorErrorKind {
    /// Returns the vendor status code for this rejection.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::InvalidRequestFormat => 400,
            Self::PermissionDenied => 403,
            Self::ResourceNotFound => 404,
            Self::UnsupportedMethod => 405,
            Self::DependencyError => 424,
            Self::InternalServerError => 500,
            Self::Unknown(code) => *code,
        }
    }
}

/// Vendor status code indicating success.
pub const VENDOR_STATUS_OK: i64 = 200;

/// Classify a vendor status code.
///
/// # Errors
///
/// Returns the categorized [`VendorErrorKind`] for any code other than 200.
pub const fn classify(code: i64) -> std::result::Result<(), VendorErrorKind> {
    match code {
        VENDOR_STATUS_OK => Ok(()),
        400 => Err(VendorErrorKind::InvalidRequestFormat),
        403 => Err(VendorErrorKind::PermissionDenied),
        404 => Err(VendorErrorKind::ResourceNotFound),
        405 => Err(VendorErrorKind::UnsupportedMethod),
        424 => Err(VendorErrorKind::DependencyError),
        500 => Err(VendorErrorKind::InternalServerError),
        other => Err(VendorErrorKind::Unknown(other)),
    }
}

/// Minimal shape every mutating-verb response body must carry.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    http_status: i64,
}

/// Interpret a raw response body as a request outcome.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] when the body cannot be parsed as
/// JSON carrying an `http_status` field, and [`Error::Vendor`] when the
/// embedded status code signals a failure.
pub fn interpret(body: &str) -> Result<()> {
    let envelope: StatusEnvelope = serde_json::from_str(body)
        .map_err(|e| Error::MalformedResponse(format!("cannot decode response body: {e}")))?;
    classify(envelope.http_status).map_err(Error::Vendor)
}
