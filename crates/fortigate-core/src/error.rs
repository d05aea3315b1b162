//! Error types for FortiGate API operations.
//!
//! The taxonomy distinguishes transport failures (the exchange never
//! completed), malformed responses (the exchange completed but the body is
//! not the expected JSON shape), vendor rejections (the appliance answered
//! with an application-level error code), and data-integrity violations in
//! fetched configuration.

use crate::response::VendorErrorKind;
use thiserror::Error;

/// Main error type for FortiGate API operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Request timed out before the appliance answered
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Could not connect to the appliance
    #[error("Appliance unreachable: {0}")]
    Unreachable(String),

    /// HTTP exchange failed for another transport-level reason
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Response body was not parseable as the expected JSON shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The appliance rejected the request with a vendor status code
    #[error("Appliance rejected request: {0}")]
    Vendor(#[from] VendorErrorKind),

    /// Fetched configuration violated an appliance invariant
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Endpoint URL could not be constructed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Local filesystem operation failed
    #[error("I/O error: {0}")]
    Io(String),
}

/// Specialized result type for FortiGate API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "TIMEOUT",
            Self::Unreachable(_) => "UNREACHABLE",
            Self::Http(_) => "HTTP_ERROR",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::Vendor(_) => "VENDOR_ERROR",
            Self::DataIntegrity(_) => "DATA_INTEGRITY",
            Self::Config(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::Io(_) => "IO_ERROR",
        }
    }

    /// Returns true if the exchange itself never completed.
    ///
    /// Transport failures are fatal when they occur while fetching state,
    /// since no plan can be built from a response that never arrived.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Unreachable(_) | Self::Http(_))
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Unreachable(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
